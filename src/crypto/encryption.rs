//! OpenPGP message encryption.
//!
//! Plaintext is pushed through a sequoia writer stack
//! (`Message -> Encryptor2 -> LiteralWriter`) that lands in an in-memory sink.
//! The stack must be finalized for the trailing MDC packet to be written; a
//! message that was never closed cannot be decrypted.

use crate::crypto::keys::PublicKey;
use crate::crypto::policy::CipherPolicy;
use crate::error::{AutopgpError, Result};
use sequoia_openpgp::policy::{Policy, StandardPolicy};
use sequoia_openpgp::serialize::stream::{Encryptor2, LiteralWriter, Message};
use sequoia_openpgp::types::DataFormat;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Metadata embedded in the literal data packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHints {
    /// Marks the payload as binary rather than text
    pub is_binary: bool,
    /// Name recorded in the literal packet; informational only
    pub file_name: String,
}

impl FileHints {
    /// Builds binary hints named after the base name of `path`.
    pub fn for_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            is_binary: true,
            file_name,
        }
    }
}

/// A finalized OpenPGP message
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    data: Vec<u8>,
    policy: CipherPolicy,
}

impl fmt::Debug for EncryptedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedMessage")
            .field("cipher", &self.policy.cipher_name())
            .field("hash", &self.policy.hash_name())
            .field("size", &self.data.len())
            .finish()
    }
}

impl EncryptedMessage {
    /// Returns the serialized packet stream
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the message, returning the serialized packet stream
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the policy the encryptor applied
    pub fn policy(&self) -> CipherPolicy {
        self.policy
    }

    /// Returns the size of the packet stream in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no bytes were produced
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An open encryption stream for a single recipient.
///
/// Dropping the stream without calling [`EncryptionStream::close`] leaves the
/// sink holding a truncated message.
pub struct EncryptionStream<'a> {
    writer: Message<'a>,
    applied: CipherPolicy,
    bytes_written: usize,
}

impl<'a> EncryptionStream<'a> {
    /// Opens an encrypting writer over `sink` for every encryption-capable
    /// key of `recipient` that is valid under `key_policy`.
    pub fn open<W>(
        sink: W,
        recipient: &'a PublicKey,
        key_policy: &'a dyn Policy,
        policy: CipherPolicy,
        hints: &FileHints,
    ) -> Result<Self>
    where
        W: 'a + io::Write + Send + Sync,
    {
        let recipients = recipient.recipients(key_policy)?;

        let message = Message::new(sink);
        let message = Encryptor2::for_recipients(message, recipients)
            .symmetric_algo(policy.cipher)
            .build()
            .map_err(|e| AutopgpError::crypto(format!("Failed to open encryptor: {}", e)))?;

        let format = if hints.is_binary {
            DataFormat::Binary
        } else {
            DataFormat::Text
        };

        let writer = LiteralWriter::new(message)
            .format(format)
            .filename(&hints.file_name)
            .map_err(|e| AutopgpError::crypto(format!("Invalid file name hint: {}", e)))?
            .build()
            .map_err(|e| AutopgpError::crypto(format!("Failed to open literal writer: {}", e)))?;

        Ok(Self {
            writer,
            applied: policy,
            bytes_written: 0,
        })
    }

    /// Returns the cipher and hash the stream was built with.
    ///
    /// The hash is carried for reporting only: an unsigned message has no
    /// use for it.
    pub fn applied_policy(&self) -> CipherPolicy {
        self.applied
    }

    /// Encrypts `bytes` into the sink.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| AutopgpError::crypto(format!("Failed to write plaintext: {}", e)))?;
        self.bytes_written += bytes.len();
        Ok(())
    }

    /// Returns the number of plaintext bytes written so far
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Finalizes the message, flushing the integrity packet.
    pub fn close(self) -> Result<()> {
        let written = self.bytes_written;
        self.writer
            .finalize()
            .map_err(|e| AutopgpError::crypto(format!("Failed to finalize message: {}", e)))?;
        debug!(plaintext_bytes = written, "Encryption stream finalized");
        Ok(())
    }
}

/// Encrypts `plaintext` for `recipient` using `policy`.
///
/// Recipient keys are selected under sequoia's standard policy. Nothing is
/// returned unless the stream was finalized successfully.
pub fn encrypt_message(
    recipient: &PublicKey,
    policy: CipherPolicy,
    plaintext: &[u8],
    hints: &FileHints,
) -> Result<EncryptedMessage> {
    let key_policy = StandardPolicy::new();
    let mut sink = Vec::new();

    let applied = {
        let mut stream = EncryptionStream::open(&mut sink, recipient, &key_policy, policy, hints)?;

        let applied = stream.applied_policy();
        info!(hash = %applied.hash_name(), "Using hash");
        info!(cipher = %applied.cipher_name(), "Using cipher");

        stream.write(plaintext)?;
        stream.close()?;
        applied
    };

    debug!(ciphertext_bytes = sink.len(), "Message encrypted");

    Ok(EncryptedMessage {
        data: sink,
        policy: applied,
    })
}
