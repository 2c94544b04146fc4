//=========================================================================
// Recon Viewer — Binary
//
// Installs the logger and runs the viewer with default settings.
// Log level defaults to `info`; override with `RUST_LOG`.
//
//=========================================================================

use log::error;
use recon_viewer::ViewerBuilder;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = ViewerBuilder::new().build().run() {
        error!("Viewer terminated: {}", e);
        std::process::exit(1);
    }
}
