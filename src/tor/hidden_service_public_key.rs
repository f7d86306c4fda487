use std::ops::Deref;

use super::{
    Error, PublicKey, Result,
    constants::{ED25519_V1_PUBLIC_TYPE_0_KEY, ED25519_V1_PUBLIC_TYPE_0_LENGTH},
    key_blob,
};

/// Contents of a hidden service's `hs_ed25519_public_key` file.
pub struct HiddenServicePublicKey(Data);

pub enum Data {
    Ed25519V1Type0([u8; ED25519_V1_PUBLIC_TYPE_0_LENGTH]),
}

impl Deref for HiddenServicePublicKey {
    type Target = Data;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&PublicKey> for HiddenServicePublicKey {
    fn from(public_key: &PublicKey) -> Self {
        Self(Data::Ed25519V1Type0(public_key.to_bytes()))
    }
}

impl TryFrom<&[u8]> for HiddenServicePublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut data = [0_u8; ED25519_V1_PUBLIC_TYPE_0_LENGTH];
        data.copy_from_slice(key_blob::split(
            bytes,
            ED25519_V1_PUBLIC_TYPE_0_KEY,
            ED25519_V1_PUBLIC_TYPE_0_LENGTH,
        )?);
        Ok(Self(Data::Ed25519V1Type0(data)))
    }
}

impl TryFrom<&Vec<u8>> for HiddenServicePublicKey {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

impl From<&HiddenServicePublicKey> for Vec<u8> {
    fn from(value: &HiddenServicePublicKey) -> Self {
        match &value.0 {
            Data::Ed25519V1Type0(data) => key_blob::join(ED25519_V1_PUBLIC_TYPE_0_KEY, data),
        }
    }
}
