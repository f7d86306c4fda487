use ed25519_dalek::{Signature, Signer as _, SigningKey};
use rand_08::{CryptoRng, RngCore, rngs::OsRng};

use super::{
    Error, ExpandedSecretKey, OnionAddress, PrivateKey, PublicKey, Result, constants::SEED_LENGTH,
};

/// Ed25519 signing key pair identifying a hidden service.
#[derive(Clone)]
pub struct SigningKeyPair(SigningKey);

impl SigningKeyPair {
    /// Generates a key pair seeded by the operating system's random number
    /// generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if the operating system cannot
    /// supply random bytes.
    pub fn generate() -> Result<Self> {
        Self::generate_from_rng(&mut OsRng)
    }

    /// Generates a key pair seeded by `csprng`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`] if `csprng` fails to fill the
    /// seed. The failure is never retried.
    #[tracing::instrument(skip_all)]
    pub fn generate_from_rng<R>(csprng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        tracing::debug!("generating secret key");
        let mut seed = [0_u8; SEED_LENGTH];
        csprng
            .try_fill_bytes(&mut seed)
            .map_err(Error::EntropyUnavailable)?;

        Ok(Self::from_seed(&seed))
    }

    #[must_use]
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self(SigningKey::from_bytes(seed))
    }

    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(&self.0.verifying_key())
    }

    #[must_use]
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey::from(&self.0)
    }

    #[must_use]
    pub fn expanded_secret_key(&self) -> ExpandedSecretKey {
        ExpandedSecretKey::from_seed(self.0.as_bytes())
    }

    #[must_use]
    pub fn onion_address(&self) -> OnionAddress {
        OnionAddress::from(&self.public_key())
    }

    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.0.sign(message)
    }
}

impl std::fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

impl From<&PrivateKey> for SigningKeyPair {
    fn from(value: &PrivateKey) -> Self {
        Self::from_seed(&value.seed())
    }
}
