use std::path::PathBuf;

use crate::error::{ContactError, ContactResult};

/// Contacts file used when no `--file` is given, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "contacts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Parses program arguments (without the program name).
    pub fn from_args<I>(args: I) -> ContactResult<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config = Config::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    config.file_path = args
                        .next()
                        .map(PathBuf::from)
                        .ok_or_else(|| ContactError::Other("--file requires a path argument".into()))?;
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(ContactError::Other(format!("Unknown argument: {}", other)));
                }
            }
        }

        Ok(Invocation::Run(config))
    }
}

pub fn print_usage() {
    println!("Contact Book");
    println!();
    println!("Usage: contact-book [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>      Contacts file path (default: {})", DEFAULT_FILE_NAME);
    println!("  -h, --help             Show this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=info) to see log output.");
}
