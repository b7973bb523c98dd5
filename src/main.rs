use std::process::ExitCode;

mod runtime;

fn main() -> ExitCode {
    match runtime::run(std::env::args().skip(1).collect()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("trackshelf: {e}");
            ExitCode::FAILURE
        }
    }
}
