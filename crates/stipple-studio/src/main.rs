use std::process::ExitCode;

use stipple_studio::Studio;

fn main() -> ExitCode {
    match Studio::new().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("stipple failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
