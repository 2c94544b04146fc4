//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Broadcasts each normalized InputEvent to the registered consumers.
//
// Architecture:
// ```text
//   window callback ──► InputEvent ──► dispatch()
//                                        ├─► [Ui]      handle_input()
//                                        ├─► [Camera]  handle_input()
//                                        └─► [App]     handle_input()
// ```
//
// Order is fixed (Ui → Camera → App). Empty slots are skipped. Delivery
// is synchronous: `dispatch()` returns after every consumer has seen the
// event. There is no queue; events are not retained.
//
// Consumers are shared with the application loop through
// `Rc<RefCell<_>>`, since everything runs on the window thread.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== External Crates =====================================================

use log::{trace, warn};

//=== Internal Imports ====================================================

use super::event::InputEvent;

//=== InputHandler ========================================================

/// Consumer of normalized input events.
///
/// Implementations must not block; they run inline on the window thread.
pub trait InputHandler {
    fn handle_input(&mut self, event: &InputEvent);
}

/// Closures can be registered directly.
impl<F> InputHandler for F
where
    F: FnMut(&InputEvent),
{
    fn handle_input(&mut self, event: &InputEvent) {
        self(event)
    }
}

/// Handle stored in a dispatcher slot.
pub type SharedHandler = Rc<RefCell<dyn InputHandler>>;

//=== HandlerSlot =========================================================

/// Registration slot. Slots receive events in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerSlot {
    /// Immediate-mode UI layer.
    Ui,

    /// Interactive camera controller.
    Camera,

    /// Application-level handlers (shortcuts, close requests).
    App,
}

impl HandlerSlot {
    /// Delivery order for a single event.
    pub const DISPATCH_ORDER: [HandlerSlot; 3] = [Self::Ui, Self::Camera, Self::App];

    const fn index(self) -> usize {
        match self {
            Self::Ui => 0,
            Self::Camera => 1,
            Self::App => 2,
        }
    }
}

//=== InputDispatcher =====================================================

/// Fixed-order, synchronous fan-out of input events.
#[derive(Default)]
pub struct InputDispatcher {
    slots: [Option<SharedHandler>; 3],
    dispatched: u64,
}

impl InputDispatcher {
    //--- Construction -----------------------------------------------------

    /// Creates a dispatcher with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Installs `handler` in `slot`, returning the handler it replaced.
    pub fn register(&mut self, slot: HandlerSlot, handler: SharedHandler) -> Option<SharedHandler> {
        trace!(target: "input", "Registering {:?} handler", slot);
        self.slots[slot.index()].replace(handler)
    }

    /// Empties `slot`, returning the handler it held.
    pub fn unregister(&mut self, slot: HandlerSlot) -> Option<SharedHandler> {
        self.slots[slot.index()].take()
    }

    pub fn is_registered(&self, slot: HandlerSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers `event` to every registered consumer in [`HandlerSlot::DISPATCH_ORDER`].
    ///
    /// A consumer that is already borrowed (re-entrant dispatch from inside
    /// a handler) is skipped with a warning so the remaining consumers
    /// still receive the event.
    pub fn dispatch(&mut self, event: &InputEvent) {
        trace!(target: "input", "Dispatching {:?}", event);
        self.dispatched += 1;

        for slot in HandlerSlot::DISPATCH_ORDER {
            let Some(handler) = &self.slots[slot.index()] else {
                continue;
            };

            match handler.try_borrow_mut() {
                Ok(mut handler) => handler.handle_input(event),
                Err(_) => warn!(
                    target: "input",
                    "{:?} handler busy, skipping {:?} event",
                    slot,
                    event.kind()
                ),
            }
        }
    }

    /// Number of events dispatched since construction.
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{ButtonAction, CursorPos, InputKind, Modifiers};

    //--- Test Helpers -----------------------------------------------------

    type Log = Rc<RefCell<Vec<(&'static str, InputKind)>>>;

    /// Consumer that appends `(name, kind)` to a shared log.
    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl InputHandler for Recorder {
        fn handle_input(&mut self, event: &InputEvent) {
            self.log.borrow_mut().push((self.name, event.kind()));
        }
    }

    fn recorder(name: &'static str, log: &Log) -> SharedHandler {
        Rc::new(RefCell::new(Recorder { name, log: log.clone() }))
    }

    fn key_press(key: i32) -> InputEvent {
        InputEvent::key(CursorPos::default(), key, ButtonAction::Press, Modifiers::NONE)
    }

    fn names(log: &Log) -> Vec<&'static str> {
        log.borrow().iter().map(|(name, _)| *name).collect()
    }

    //=====================================================================
    // Ordering Tests
    //=====================================================================

    #[test]
    fn dispatch_follows_fixed_order() {
        let log = Log::default();
        let mut dispatcher = InputDispatcher::new();

        // Registered out of order on purpose
        dispatcher.register(HandlerSlot::App, recorder("app", &log));
        dispatcher.register(HandlerSlot::Camera, recorder("camera", &log));
        dispatcher.register(HandlerSlot::Ui, recorder("ui", &log));

        dispatcher.dispatch(&key_press(65));

        assert_eq!(names(&log), vec!["ui", "camera", "app"]);
    }

    #[test]
    fn empty_slots_are_skipped() {
        let log = Log::default();
        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(HandlerSlot::Ui, recorder("ui", &log));
        dispatcher.register(HandlerSlot::App, recorder("app", &log));

        dispatcher.dispatch(&key_press(65));

        assert_eq!(names(&log), vec!["ui", "app"]);
    }

    #[test]
    fn dispatch_without_handlers_is_noop() {
        let mut dispatcher = InputDispatcher::new();
        dispatcher.dispatch(&key_press(65));
        assert_eq!(dispatcher.dispatched_count(), 1);
    }

    #[test]
    fn each_event_reaches_all_consumers_before_next() {
        let log = Log::default();
        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(HandlerSlot::Ui, recorder("ui", &log));
        dispatcher.register(HandlerSlot::Camera, recorder("camera", &log));

        dispatcher.dispatch(&key_press(65));
        dispatcher.dispatch(&InputEvent::cursor_moved(CursorPos::new(1.0, 2.0), Modifiers::NONE));

        let entries = log.borrow().clone();
        assert_eq!(
            entries,
            vec![
                ("ui", InputKind::Key),
                ("camera", InputKind::Key),
                ("ui", InputKind::Cursor),
                ("camera", InputKind::Cursor),
            ]
        );
    }

    //=====================================================================
    // Registration Tests
    //=====================================================================

    #[test]
    fn register_replaces_previous_handler() {
        let log = Log::default();
        let mut dispatcher = InputDispatcher::new();

        assert!(dispatcher.register(HandlerSlot::Camera, recorder("old", &log)).is_none());
        assert!(dispatcher.register(HandlerSlot::Camera, recorder("new", &log)).is_some());

        dispatcher.dispatch(&key_press(65));
        assert_eq!(names(&log), vec!["new"]);
    }

    #[test]
    fn unregister_empties_slot() {
        let log = Log::default();
        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(HandlerSlot::Ui, recorder("ui", &log));

        assert!(dispatcher.is_registered(HandlerSlot::Ui));
        assert!(dispatcher.unregister(HandlerSlot::Ui).is_some());
        assert!(!dispatcher.is_registered(HandlerSlot::Ui));

        dispatcher.dispatch(&key_press(65));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn closures_can_be_registered() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut dispatcher = InputDispatcher::new();

        dispatcher.register(
            HandlerSlot::App,
            Rc::new(RefCell::new(move |e: &InputEvent| sink.borrow_mut().push(e.value()[0]))),
        );
        dispatcher.dispatch(&key_press(256));

        assert_eq!(*seen.borrow(), vec![256]);
    }

    #[test]
    fn busy_handler_does_not_block_others() {
        let log = Log::default();
        let camera = Rc::new(RefCell::new(Recorder { name: "camera", log: log.clone() }));
        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(HandlerSlot::Camera, camera.clone());
        dispatcher.register(HandlerSlot::App, recorder("app", &log));

        let _held = camera.borrow_mut();
        dispatcher.dispatch(&key_press(65));

        assert_eq!(names(&log), vec!["app"]);
    }
}
