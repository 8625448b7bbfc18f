//! Shared helpers for integration tests: key generation and decryption.

#![allow(dead_code)]

use sequoia_openpgp::cert::CertBuilder;
use sequoia_openpgp::crypto::SessionKey;
use sequoia_openpgp::packet::Packet;
use sequoia_openpgp::parse::{PacketParser, PacketParserResult, Parse};
use sequoia_openpgp::policy::StandardPolicy;
use sequoia_openpgp::serialize::SerializeInto;
use sequoia_openpgp::types::{DataFormat, SymmetricAlgorithm};
use sequoia_openpgp::Cert;

/// Everything recovered from decrypting a message
#[derive(Debug)]
pub struct Decrypted {
    pub plaintext: Vec<u8>,
    pub file_name: Option<Vec<u8>>,
    pub format: DataFormat,
    pub cipher: SymmetricAlgorithm,
    pub mdc_valid: bool,
}

/// Generate a certificate with an encryption subkey (secret parts included)
pub fn generate_cert(user_id: &str) -> Cert {
    let (cert, _revocation) = CertBuilder::general_purpose(None, Some(user_id))
        .generate()
        .expect("Failed to generate certificate");
    cert
}

/// Generate a certificate that can sign but has no encryption key
pub fn generate_signing_only_cert(user_id: &str) -> Cert {
    let (cert, _revocation) = CertBuilder::new()
        .add_userid(user_id)
        .add_signing_subkey()
        .generate()
        .expect("Failed to generate certificate");
    cert
}

/// ASCII-armored public key block for `cert`
pub fn armored_public_key(cert: &Cert) -> Vec<u8> {
    cert.armored()
        .to_vec()
        .expect("Failed to armor certificate")
}

/// Decrypt `ciphertext` with the secret encryption key of `tsk`
#[allow(deprecated)]
pub fn decrypt(tsk: &Cert, ciphertext: &[u8]) -> Decrypted {
    let policy = StandardPolicy::new();
    let mut keypair = tsk
        .keys()
        .unencrypted_secret()
        .with_policy(&policy, None)
        .supported()
        .for_transport_encryption()
        .next()
        .expect("No decryption key")
        .key()
        .clone()
        .into_keypair()
        .expect("Failed to build key pair");

    let mut session: Option<(SymmetricAlgorithm, SessionKey)> = None;
    let mut literal: Option<(Vec<u8>, Option<Vec<u8>>, DataFormat)> = None;
    let mut mdc_valid = false;

    let mut ppr = PacketParser::from_bytes(ciphertext).expect("Failed to parse message");
    while let PacketParserResult::Some(mut pp) = ppr {
        if let Packet::PKESK(ref pkesk) = pp.packet {
            if session.is_none() {
                session = pkesk.decrypt(&mut keypair, None);
            }
        }

        if let Packet::SEIP(_) = pp.packet {
            let (algo, key) = session.as_ref().expect("No session key recovered");
            pp.decrypt(*algo, key).expect("Failed to decrypt data packet");
        }

        if let Packet::Literal(_) = pp.packet {
            pp.buffer_unread_content()
                .expect("Failed to read literal data");
            if let Packet::Literal(ref l) = pp.packet {
                literal = Some((
                    l.body().to_vec(),
                    l.filename().map(|name| name.to_vec()),
                    l.format(),
                ));
            }
        }

        if let Packet::MDC(ref mdc) = pp.packet {
            mdc_valid = mdc.valid();
        }

        ppr = pp.recurse().expect("Failed to parse packet").1;
    }

    let (plaintext, file_name, format) = literal.expect("No literal data packet");
    let (cipher, _) = session.expect("No session key recovered");

    Decrypted {
        plaintext,
        file_name,
        format,
        cipher,
        mdc_valid,
    }
}
