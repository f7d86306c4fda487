use ed25519_dalek::SigningKey;

use super::{
    Error, PublicKey, Result,
    constants::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SEED_LENGTH},
    encoding,
};

/// The 64 byte Ed25519 private key: `seed | public key`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; PRIVATE_KEY_LENGTH]);

impl PrivateKey {
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.0
    }

    #[must_use]
    pub fn seed(&self) -> [u8; SEED_LENGTH] {
        let mut seed = [0_u8; SEED_LENGTH];
        seed.copy_from_slice(&self.0[..SEED_LENGTH]);
        seed
    }

    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let mut public_key = [0_u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(&self.0[SEED_LENGTH..]);
        PublicKey::from_bytes(public_key)
    }

    /// # Errors
    ///
    /// Returns error if `value` is not base64, is not 64 bytes, or its public
    /// half does not belong to its seed.
    pub fn from_base64(value: &str) -> Result<Self> {
        Self::try_from(encoding::from_base64(value)?.as_slice())
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        encoding::to_base64(&self.0)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PrivateKey").field(&"..").finish()
    }
}

impl From<&SigningKey> for PrivateKey {
    fn from(value: &SigningKey) -> Self {
        Self(value.to_keypair_bytes())
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PRIVATE_KEY_LENGTH] =
            bytes.try_into().map_err(|_| Error::InvalidKeyLength {
                expected: PRIVATE_KEY_LENGTH,
                found: bytes.len(),
            })?;

        SigningKey::from_keypair_bytes(&bytes).map_err(Error::SignatureError)?;

        Ok(Self(bytes))
    }
}
