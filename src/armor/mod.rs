//! ASCII armor decoding for OpenPGP key material.
//!
//! Key files arrive wrapped in the RFC 4880 ASCII armor envelope. This module
//! strips the envelope and hands back the binary packet stream, refusing
//! anything that is not a `PGP PUBLIC KEY BLOCK`.

use crate::error::{AutopgpError, Result};
use sequoia_openpgp::armor::{Kind, Reader, ReaderMode};
use std::io::Read;

/// Decode an armored public key block into its binary packet stream.
///
/// Fails with an armor error if no armor header is present, if the block is
/// of a different kind (message, signature, private key), or if the armored
/// body cannot be decoded.
pub fn decode_public_key_block(armored: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Reader::from_bytes(armored, ReaderMode::Tolerant(Some(Kind::PublicKey)));

    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| AutopgpError::armor(format!("Failed to decode armor: {}", e)))?;

    match reader.kind() {
        Some(Kind::PublicKey) => {}
        Some(other) => {
            return Err(AutopgpError::armor(format!(
                "Expected a public key block, found {:?}",
                other
            )));
        }
        None => return Err(AutopgpError::armor("No armor header found")),
    }

    if data.is_empty() {
        return Err(AutopgpError::armor("Armored public key block is empty"));
    }

    Ok(data)
}
