//! Command implementations for the autopgp CLI.

use crate::{
    cli::args::EncryptOptions,
    cli::utils::{read_file, write_private_file},
    crypto::{encrypt_message, FileHints, PublicKey},
    Result,
};
use tracing::{debug, info};

/// Execute the encrypt command.
///
/// Steps run strictly in order and the first failure aborts the run. The
/// output file is only created once the message has been finalized.
pub fn encrypt(options: &EncryptOptions) -> Result<()> {
    let key = PublicKey::load(&options.key)?;

    let plaintext = read_file(&options.input)?;
    info!(file = %options.input.display(), "Encrypting plaintext file");

    let profile = options.profile();
    debug!(profile = %profile, "Selected cipher profile");

    let hints = FileHints::for_path(&options.input);
    let encrypted = encrypt_message(&key, profile.policy(), &plaintext, &hints)?;
    drop(plaintext);

    write_private_file(&options.output, encrypted.as_bytes())?;
    info!(
        file = %options.output.display(),
        bytes = encrypted.len(),
        "Wrote ciphertext file"
    );

    Ok(())
}
