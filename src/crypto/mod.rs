//! OpenPGP encryption for a single recipient.
//!
//! The heavy lifting (session-key wrapping, bulk encryption, packet framing)
//! is done by `sequoia-openpgp`. This module decides which algorithms to ask
//! for and drives the writer stack:
//!
//! - **keys**: loading the recipient certificate and picking encryption keys
//! - **policy**: the legacy and modern cipher/hash profiles
//! - **encryption**: opening, feeding and finalizing the encryption stream

pub mod encryption;
pub mod keys;
pub mod policy;

pub use encryption::{encrypt_message, EncryptedMessage, EncryptionStream, FileHints};
pub use keys::PublicKey;
pub use policy::{cipher_name, hash_name, CipherPolicy, CipherProfile};
