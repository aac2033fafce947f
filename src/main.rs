use osmium::{conf, control};
use std::process::ExitCode;

/// Entry point: load configuration, then run the control loop.
fn main() -> ExitCode {
    let config = conf::load();

    match control::control_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("osmium: {e}");
            ExitCode::FAILURE
        }
    }
}
