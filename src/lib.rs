//! # autopgp
//!
//! Encrypts one file to one OpenPGP recipient.
//!
//! Given an ASCII-armored public key, autopgp picks a cipher profile, runs the
//! plaintext through an OpenPGP encryption stream and writes the binary
//! message to disk with owner-read-only permissions.
//!
//! ## Cipher Profiles
//!
//! - **Modern** (default): AES-256 with SHA-512
//! - **Legacy** (`-compat`): 3DES with SHA-1, for old implementations
//!
//! ## Example
//!
//! ```rust,no_run
//! use autopgp::crypto::{encrypt_message, CipherProfile, FileHints, PublicKey};
//! use std::path::Path;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let key = PublicKey::load(Path::new("alice.asc"))?;
//! let hints = FileHints::for_path(Path::new("report.pdf"));
//! let encrypted = encrypt_message(&key, CipherProfile::Modern.policy(), b"secret", &hints)?;
//! println!("{} bytes for {}", encrypted.len(), key.fingerprint_hex());
//! # Ok(())
//! # }
//! ```

pub mod armor;
pub mod cli;
pub mod crypto;
pub mod error;

pub use error::{AutopgpError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
