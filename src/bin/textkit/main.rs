mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use std::process;
use textkit::error::*;

/// Returns `Err(..)` upon fatal errors. Otherwise, returns `Ok(true)` on full success and
/// `Ok(false)` if the transform failed (the failure was printed).
fn run() -> Result<bool> {
    let app = App::new()?;
    app.start()
}

fn main() {
    let result = run();

    match result {
        Err(error) => {
            let stderr = std::io::stderr();
            default_error_handler(&error, &mut stderr.lock());
            process::exit(1);
        }
        Ok(false) => {
            process::exit(1);
        }
        Ok(true) => {
            process::exit(0);
        }
    }
}
