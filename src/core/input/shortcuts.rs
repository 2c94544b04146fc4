//=========================================================================
// Application Shortcuts
//=========================================================================
//
// App-level input consumers. They never touch the window directly;
// requests travel back to the event loop as `ViewerCommand`s, which the
// loop drains after every dispatch.
//
//=========================================================================

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{info, warn};

//=== Internal Imports ====================================================

use super::dispatcher::InputHandler;
use super::event::{InputEvent, KeyCode};

//=== ViewerCommand =======================================================

/// Requests sent from consumers to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Close the window and leave the event loop.
    Close,
}

//=== CloseOnEscape =======================================================

/// Requests [`ViewerCommand::Close`] on any Escape key event: press,
/// repeat or release.
pub struct CloseOnEscape {
    commands: Sender<ViewerCommand>,
}

impl CloseOnEscape {
    pub fn new(commands: Sender<ViewerCommand>) -> Self {
        Self { commands }
    }
}

impl InputHandler for CloseOnEscape {
    fn handle_input(&mut self, event: &InputEvent) {
        if event.key_code() != Some(KeyCode::Escape) {
            return;
        }

        info!(target: "viewer", "Escape key event, requesting close");
        if self.commands.send(ViewerCommand::Close).is_err() {
            warn!(target: "viewer", "Command channel disconnected, close request dropped");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
