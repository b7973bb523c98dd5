use std::io::{self, Write};
use std::process::ExitCode;

use trackshelf::{Catalog, FileStore};

mod command;
mod logging;
mod settings;

use command::{Command, Outcome};

pub fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let (settings, warning) = settings::load_settings();
    logging::init(&settings.logging);
    if let Some(msg) = warning {
        log::warn!("{msg}");
    }

    let command = match Command::parse(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("trackshelf: {e}");
            eprintln!("{}", command::USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let mut out = io::stdout().lock();

    // Commands that never touch the catalog file.
    match &command {
        Command::Help => {
            writeln!(out, "{}", command::USAGE)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Config => {
            writeln!(out, "# catalog file: {}", settings.storage.catalog_path().display())?;
            write!(out, "{}", settings.to_toml()?)?;
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let path = settings.storage.catalog_path();
    log::debug!("using catalog file {}", path.display());
    let mut catalog = Catalog::open(FileStore::new(path), settings.storage.seed_if_empty);

    match command::execute(command, &mut catalog, &mut out)? {
        Outcome::Done => Ok(ExitCode::SUCCESS),
        Outcome::Rejected => Ok(ExitCode::FAILURE),
    }
}

#[cfg(test)]
mod tests;
