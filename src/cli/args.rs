//! Command-line argument parsing for autopgp.
//!
//! Flags use the single-dash style (`-key path`, `-key=path`); a leading
//! double dash is accepted as well.

use crate::crypto::CipherProfile;
use crate::error::{AutopgpError, Result};
use std::env;
use std::path::PathBuf;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encrypt one file for one recipient
    Encrypt(EncryptOptions),
    /// Print usage and exit
    Help,
}

/// Options for a single encryption run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncryptOptions {
    /// Prefer 3DES and SHA-1
    pub compat: bool,
    /// Armored public key file
    pub key: PathBuf,
    /// Plaintext file to read
    pub input: PathBuf,
    /// Ciphertext file to write
    pub output: PathBuf,
}

impl EncryptOptions {
    /// Returns the cipher profile selected by `-compat`
    pub fn profile(&self) -> CipherProfile {
        CipherProfile::from_compat(self.compat)
    }

    /// Checks that every path flag was given a non-empty value.
    pub fn validate(&self) -> Result<()> {
        for (flag, path) in [
            ("key", &self.key),
            ("input", &self.input),
            ("output", &self.output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(AutopgpError::invalid_input(format!("-{} is required", flag)));
            }
        }
        Ok(())
    }
}

/// Parse the process arguments into a Command
pub fn parse_args() -> Result<Command> {
    parse_args_from(env::args().skip(1))
}

/// Parse an argument list (without the program name) into a Command
pub fn parse_args_from<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let mut compat: Option<bool> = None;
    let mut key: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        let flag = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|flag| !flag.is_empty() && !flag.starts_with('-'))
            .ok_or_else(|| {
                AutopgpError::invalid_input(format!("Unexpected argument '{}'", arg))
            })?;

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        match name {
            "h" | "help" => return Ok(Command::Help),
            "compat" => {
                let value = match inline_value {
                    Some(value) => parse_bool(name, &value)?,
                    None => true,
                };
                set_once(&mut compat, value, name)?;
            }
            "key" => {
                let value = flag_value(name, inline_value, &mut args)?;
                set_once(&mut key, PathBuf::from(value), name)?;
            }
            "input" => {
                let value = flag_value(name, inline_value, &mut args)?;
                set_once(&mut input, PathBuf::from(value), name)?;
            }
            "output" => {
                let value = flag_value(name, inline_value, &mut args)?;
                set_once(&mut output, PathBuf::from(value), name)?;
            }
            _ => {
                return Err(AutopgpError::invalid_input(format!(
                    "Unknown flag '-{}'",
                    name
                )));
            }
        }
    }

    let options = EncryptOptions {
        compat: compat.unwrap_or(false),
        key: key.unwrap_or_default(),
        input: input.unwrap_or_default(),
        output: output.unwrap_or_default(),
    };
    options.validate()?;

    Ok(Command::Encrypt(options))
}

/// Returns the inline `-flag=value` or the next argument.
fn flag_value<I>(name: &str, inline_value: Option<String>, args: &mut I) -> Result<String>
where
    I: Iterator<Item = String>,
{
    match inline_value {
        Some(value) => Ok(value),
        None => args.next().ok_or_else(|| {
            AutopgpError::invalid_input(format!("Flag '-{}' needs a value", name))
        }),
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, name: &str) -> Result<()> {
    if slot.is_some() {
        return Err(AutopgpError::invalid_input(format!(
            "Flag '-{}' given more than once",
            name
        )));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(AutopgpError::invalid_input(format!(
            "Invalid boolean value '{}' for flag '-{}'",
            value, name
        ))),
    }
}

/// Print usage information
pub fn print_usage() {
    println!("autopgp - encrypt a file to a single OpenPGP recipient");
    println!();
    println!("Usage: autopgp -key <file> -input <file> -output <file> [-compat]");
    println!();
    println!("Flags:");
    println!("  -key <file>      Armored public key of the recipient");
    println!("  -input <file>    Plaintext file to read");
    println!("  -output <file>   Ciphertext file to write (created read-only)");
    println!("  -compat          Prefer 3DES and SHA-1 instead of AES-256 and SHA-512");
    println!("  -help            Show this message");
    println!();
    println!("Examples:");
    println!("  autopgp -key alice.asc -input report.pdf -output report.pdf.gpg");
    println!("  autopgp -compat -key legacy.asc -input notes.txt -output notes.txt.gpg");
}
