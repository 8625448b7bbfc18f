//! Cipher and hash selection.
//!
//! The tool knows exactly two profiles: a legacy one for recipients stuck on
//! old OpenPGP implementations, and a modern one used by default.

use sequoia_openpgp::types::{HashAlgorithm, SymmetricAlgorithm};
use std::fmt;

/// Display names for the symmetric ciphers the tool reports on.
const CIPHER_NAMES: &[(SymmetricAlgorithm, &str)] = &[
    (SymmetricAlgorithm::TripleDES, "3DES"),
    (SymmetricAlgorithm::CAST5, "CAST5"),
    (SymmetricAlgorithm::AES128, "AES"),
    (SymmetricAlgorithm::AES192, "AES192"),
    (SymmetricAlgorithm::AES256, "AES256"),
];

/// Display names for hash algorithms, as used in OpenPGP S2K specifiers.
const HASH_NAMES: &[(HashAlgorithm, &str)] = &[
    (HashAlgorithm::MD5, "MD5"),
    (HashAlgorithm::SHA1, "SHA1"),
    (HashAlgorithm::RipeMD, "RIPEMD160"),
    (HashAlgorithm::SHA256, "SHA256"),
    (HashAlgorithm::SHA384, "SHA384"),
    (HashAlgorithm::SHA512, "SHA512"),
    (HashAlgorithm::SHA224, "SHA224"),
];

/// Returns the display name of a cipher, or an empty string if unknown.
pub fn cipher_name(cipher: SymmetricAlgorithm) -> &'static str {
    CIPHER_NAMES
        .iter()
        .find(|(id, _)| *id == cipher)
        .map(|(_, name)| *name)
        .unwrap_or("")
}

/// Returns the display name of a hash algorithm, or an empty string if unknown.
pub fn hash_name(hash: HashAlgorithm) -> &'static str {
    HASH_NAMES
        .iter()
        .find(|(id, _)| *id == hash)
        .map(|(_, name)| *name)
        .unwrap_or("")
}

/// Algorithm profile selected from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherProfile {
    /// 3DES and SHA-1, readable by very old implementations
    Legacy,
    /// AES-256 and SHA-512
    #[default]
    Modern,
}

impl CipherProfile {
    /// Maps the `-compat` flag to a profile.
    pub fn from_compat(compat: bool) -> Self {
        if compat {
            CipherProfile::Legacy
        } else {
            CipherProfile::Modern
        }
    }

    /// Returns the cipher and hash pair for this profile.
    pub fn policy(&self) -> CipherPolicy {
        match self {
            CipherProfile::Legacy => CipherPolicy {
                cipher: SymmetricAlgorithm::TripleDES,
                hash: HashAlgorithm::SHA1,
            },
            CipherProfile::Modern => CipherPolicy {
                cipher: SymmetricAlgorithm::AES256,
                hash: HashAlgorithm::SHA512,
            },
        }
    }

    /// Returns the profile name
    pub fn name(&self) -> &'static str {
        match self {
            CipherProfile::Legacy => "legacy",
            CipherProfile::Modern => "modern",
        }
    }
}

impl fmt::Display for CipherProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A symmetric cipher and hash algorithm pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherPolicy {
    /// Cipher used for the session key and bulk encryption
    pub cipher: SymmetricAlgorithm,
    /// Preferred hash algorithm
    pub hash: HashAlgorithm,
}

impl CipherPolicy {
    /// Display name of the cipher
    pub fn cipher_name(&self) -> &'static str {
        cipher_name(self.cipher)
    }

    /// Display name of the hash
    pub fn hash_name(&self) -> &'static str {
        hash_name(self.hash)
    }
}
