use ed25519_dalek::VerifyingKey;

use super::{
    Error, ExpandedSecretKey, HiddenServicePublicKey, Result, constants::PUBLIC_KEY_LENGTH,
    encoding, hidden_service_public_key::Data,
};

/// The 32 byte Ed25519 public key of a hidden service.
///
/// Only the length is checked on construction; whether the bytes are a valid
/// curve point is irrelevant to address derivation. Use
/// [`PublicKey::verifying_key`] when signatures need checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    #[must_use]
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    /// # Errors
    ///
    /// Returns error if `value` is not base64 or does not decode to 32 bytes.
    pub fn from_base64(value: &str) -> Result<Self> {
        Self::try_from(encoding::from_base64(value)?.as_slice())
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        encoding::to_base64(&self.0)
    }

    /// # Errors
    ///
    /// Returns error if the bytes are not a point on the curve.
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        VerifyingKey::from_bytes(&self.0).map_err(Error::SignatureError)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                found: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(value: &VerifyingKey) -> Self {
        Self(value.to_bytes())
    }
}

impl From<&ExpandedSecretKey> for PublicKey {
    fn from(value: &ExpandedSecretKey) -> Self {
        Self::from(&VerifyingKey::from(&**value))
    }
}

impl From<&HiddenServicePublicKey> for PublicKey {
    fn from(value: &HiddenServicePublicKey) -> Self {
        match &**value {
            Data::Ed25519V1Type0(data) => Self(*data),
        }
    }
}
