#![warn(clippy::pedantic)]

pub mod cli;
pub mod tor;
mod tor_keys;

pub use tor_keys::TorKeys;

/// Generates a fresh Ed25519 key pair for a hidden service.
///
/// # Errors
///
/// Returns [`tor::Error::EntropyUnavailable`] if the operating system cannot
/// supply random bytes.
pub fn generate_key_pair() -> tor::Result<tor::SigningKeyPair> {
    tor::SigningKeyPair::generate()
}

/// Derives the v3 onion address of a 32 byte Ed25519 public key.
///
/// # Errors
///
/// Returns [`tor::Error::InvalidKeyLength`] if `public_key` is not exactly 32
/// bytes long. Nothing is hashed in that case.
pub fn derive_address(public_key: &[u8]) -> tor::Result<tor::OnionAddress> {
    let public_key = tor::PublicKey::try_from(public_key)?;
    Ok(tor::OnionAddress::from(&public_key))
}
