mod constants;
mod encoding;
mod expanded_secret_key;
mod hidden_service_public_key;
mod hidden_service_secret_key;
mod key_blob;
mod onion_address;
mod private_key;
mod public_key;
mod signing_key_pair;

pub use constants::{ONION_DOMAIN_LENGTH, ONION_VERSION, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};
pub use expanded_secret_key::ExpandedSecretKey;
pub use hidden_service_public_key::HiddenServicePublicKey;
pub use hidden_service_secret_key::HiddenServiceSecretKey;
pub use onion_address::OnionAddress;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signing_key_pair::SigningKeyPair;

#[derive(Debug)]
pub enum Error {
    Base64Error(base64::DecodeError),
    ChecksumMismatch,
    EntropyUnavailable(rand_08::Error),
    InvalidKeyLength { expected: usize, found: usize },
    ParseError(String),
    SignatureError(ed25519_dalek::SignatureError),
    UnsupportedVersion(u8),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Base64Error(e) => write!(f, "base64 error: {e}"),
            Error::ChecksumMismatch => write!(f, "checksum mismatch"),
            Error::EntropyUnavailable(e) => write!(f, "entropy unavailable: {e}"),
            Error::InvalidKeyLength { expected, found } => write!(
                f,
                "invalid key length: expected {expected} bytes, found {found} bytes"
            ),
            Error::ParseError(e) => write!(f, "parse error: {e}"),
            Error::SignatureError(e) => write!(f, "signature error: {e}"),
            Error::UnsupportedVersion(version) => write!(f, "unsupported version: {version}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Base64Error(e) => Some(e),
            Error::EntropyUnavailable(e) => Some(e),
            Error::SignatureError(e) => Some(e),
            Error::ChecksumMismatch
            | Error::InvalidKeyLength { .. }
            | Error::ParseError(_)
            | Error::UnsupportedVersion(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
