use std::ops::Deref;

use sha2::{Digest, Sha512};

use super::{
    HiddenServiceSecretKey,
    constants::{ED25519_V1_SECRET_TYPE_0_LENGTH, SEED_LENGTH},
    hidden_service_secret_key::Data,
};

/// Ed25519 secret key in the expanded form Tor keeps on disk: the clamped
/// scalar followed by the hash prefix used to derive signing nonces.
pub struct ExpandedSecretKey(ed25519_dalek::hazmat::ExpandedSecretKey);

impl ExpandedSecretKey {
    /// Expands a seed the way Tor does: `SHA-512(seed)` with the lower half
    /// clamped and left unreduced.
    #[must_use]
    pub fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        let mut bytes = [0_u8; ED25519_V1_SECRET_TYPE_0_LENGTH];
        bytes.copy_from_slice(&Sha512::digest(seed));
        bytes[0] &= 248;
        bytes[31] &= 63;
        bytes[31] |= 64;
        Self::from_bytes(&bytes)
    }

    fn from_bytes(bytes: &[u8; ED25519_V1_SECRET_TYPE_0_LENGTH]) -> Self {
        let mut scalar = [0_u8; 32];
        let mut hash_prefix = [0_u8; 32];
        scalar.copy_from_slice(&bytes[0..32]);
        hash_prefix.copy_from_slice(&bytes[32..64]);

        Self(ed25519_dalek::hazmat::ExpandedSecretKey {
            hash_prefix,
            #[allow(deprecated)] // bytes from hs_ed25519_secret_key must be loaded into expanded secret key without modification
            scalar: curve25519_dalek::Scalar::from_bits(scalar),
        })
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; ED25519_V1_SECRET_TYPE_0_LENGTH] {
        let mut output = [0_u8; ED25519_V1_SECRET_TYPE_0_LENGTH];
        output[0..32].copy_from_slice(&self.scalar.to_bytes());
        output[32..64].copy_from_slice(&self.hash_prefix);
        output
    }
}

impl Deref for ExpandedSecretKey {
    type Target = ed25519_dalek::hazmat::ExpandedSecretKey;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&HiddenServiceSecretKey> for ExpandedSecretKey {
    fn from(value: &HiddenServiceSecretKey) -> Self {
        match &**value {
            Data::Ed25519V1Type0(data) => Self::from_bytes(data),
        }
    }
}
