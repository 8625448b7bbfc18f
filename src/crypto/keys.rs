//! Recipient public keys.
//!
//! A [`PublicKey`] wraps a parsed OpenPGP certificate and knows which of its
//! keys can be used as encryption targets.

use crate::armor::decode_public_key_block;
use crate::error::{AutopgpError, Result};
use sequoia_openpgp::parse::Parse;
use sequoia_openpgp::policy::Policy;
use sequoia_openpgp::serialize::stream::Recipient;
use sequoia_openpgp::types::KeyFlags;
use sequoia_openpgp::Cert;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An OpenPGP public key used as the encryption target
#[derive(Clone)]
pub struct PublicKey {
    cert: Cert,
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("fingerprint", &self.fingerprint_hex())
            .field("user_ids", &self.user_ids())
            .finish()
    }
}

impl PublicKey {
    /// Loads an armored public key file.
    ///
    /// The file is read in one go and closed before decoding starts. On
    /// success the key's fingerprint is logged so the operator can check it
    /// against an out-of-band copy.
    pub fn load(path: &Path) -> Result<Self> {
        let armored = fs::read(path).map_err(|e| AutopgpError::io_at(path, e))?;
        let key = Self::from_armored(&armored)?;

        info!(fingerprint = %key.fingerprint_hex(), "Using public key");
        debug!(user_ids = ?key.user_ids(), "Public key identities");

        Ok(key)
    }

    /// Parses an armored public key block.
    pub fn from_armored(armored: &[u8]) -> Result<Self> {
        let packets = decode_public_key_block(armored)?;
        Self::from_packets(&packets)
    }

    /// Parses a binary packet stream holding a single certificate.
    pub fn from_packets(packets: &[u8]) -> Result<Self> {
        let cert = Cert::from_bytes(packets)
            .map_err(|e| AutopgpError::key(format!("Failed to parse public key: {}", e)))?;

        Ok(Self {
            cert: cert.strip_secret_key_material(),
        })
    }

    /// Returns the underlying certificate
    pub fn cert(&self) -> &Cert {
        &self.cert
    }

    /// Returns the raw fingerprint bytes of the primary key
    pub fn fingerprint(&self) -> Vec<u8> {
        self.cert.fingerprint().as_bytes().to_vec()
    }

    /// Returns the fingerprint as uppercase hexadecimal
    pub fn fingerprint_hex(&self) -> String {
        self.cert.fingerprint().to_hex()
    }

    /// Returns the certificate's user IDs
    pub fn user_ids(&self) -> Vec<String> {
        self.cert
            .userids()
            .map(|uid| String::from_utf8_lossy(uid.userid().value()).into_owned())
            .collect()
    }

    /// Returns every key that may receive an encrypted session key.
    ///
    /// Only keys that are valid under `policy`, alive, not revoked, and
    /// flagged for transport or storage encryption qualify.
    pub fn recipients<'a>(&'a self, policy: &'a dyn Policy) -> Result<Vec<Recipient<'a>>> {
        let flags = KeyFlags::empty()
            .set_transport_encryption()
            .set_storage_encryption();

        let recipients: Vec<Recipient<'a>> = self
            .cert
            .keys()
            .with_policy(policy, None)
            .supported()
            .alive()
            .revoked(false)
            .key_flags(flags)
            .map(|ka| ka.into())
            .collect();

        if recipients.is_empty() {
            return Err(AutopgpError::key(format!(
                "No encryption-capable key in certificate {}",
                self.fingerprint_hex()
            )));
        }

        debug!(count = recipients.len(), "Selected recipient keys");
        Ok(recipients)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.fingerprint_hex())
    }
}
