use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{Error, Result};

pub fn to_base32(bytes: &[u8]) -> String {
    base32::encode(base32::Alphabet::Rfc4648Lower { padding: false }, bytes)
}

/// Callers must have checked the alphabet; decoding is done in upper case.
pub fn from_base32(value: &str) -> Option<Vec<u8>> {
    base32::decode(
        base32::Alphabet::Rfc4648 { padding: false },
        &value.to_ascii_uppercase(),
    )
}

pub fn is_base32(value: &str) -> bool {
    value.chars().all(|c| matches!(c, 'a'..='z' | '2'..='7'))
}

pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(value: &str) -> Result<Vec<u8>> {
    STANDARD.decode(value.trim()).map_err(Error::Base64Error)
}
