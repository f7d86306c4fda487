use std::ops::Deref;

use super::{
    Error, ExpandedSecretKey, Result,
    constants::{ED25519_V1_SECRET_TYPE_0_KEY, ED25519_V1_SECRET_TYPE_0_LENGTH},
    key_blob,
};

/// Contents of a hidden service's `hs_ed25519_secret_key` file.
///
/// Only ever built in memory; writing it anywhere is left to the caller.
pub struct HiddenServiceSecretKey(Data);

impl Deref for HiddenServiceSecretKey {
    type Target = Data;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub enum Data {
    Ed25519V1Type0([u8; ED25519_V1_SECRET_TYPE_0_LENGTH]),
}

impl TryFrom<&[u8]> for HiddenServiceSecretKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut data = [0_u8; ED25519_V1_SECRET_TYPE_0_LENGTH];
        data.copy_from_slice(key_blob::split(
            bytes,
            ED25519_V1_SECRET_TYPE_0_KEY,
            ED25519_V1_SECRET_TYPE_0_LENGTH,
        )?);
        Ok(Self(Data::Ed25519V1Type0(data)))
    }
}

impl TryFrom<&Vec<u8>> for HiddenServiceSecretKey {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

impl From<&ExpandedSecretKey> for HiddenServiceSecretKey {
    fn from(expanded_secret_key: &ExpandedSecretKey) -> Self {
        Self(Data::Ed25519V1Type0(expanded_secret_key.to_bytes()))
    }
}

impl From<&HiddenServiceSecretKey> for Vec<u8> {
    fn from(value: &HiddenServiceSecretKey) -> Self {
        match &value.0 {
            Data::Ed25519V1Type0(data) => key_blob::join(ED25519_V1_SECRET_TYPE_0_KEY, data),
        }
    }
}
