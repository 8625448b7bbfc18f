//! Command-line interface for autopgp.
//!
//! Parses the flags, then runs the single encrypt pipeline. Errors are
//! returned to `main`, which reports them and exits non-zero.

pub mod args;
pub mod commands;
pub mod utils;

use crate::Result;

pub use args::{Command, EncryptOptions};
pub use commands::encrypt;
pub use utils::{read_file, write_private_file};

/// Main entry point for the CLI application
pub fn run() -> Result<()> {
    match args::parse_args()? {
        Command::Help => {
            args::print_usage();
            Ok(())
        }
        Command::Encrypt(options) => commands::encrypt(&options),
    }
}
