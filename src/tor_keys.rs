use serde::{Deserialize, Serialize};

use crate::tor::{self, SigningKeyPair};

/// # Tor Keys
///
/// A freshly generated hidden service identity, in the text form an external
/// resource manager stores it:
///
/// - `public_key`: base64 of the 32 byte Ed25519 public key.
/// - `private_key`: base64 of the 64 byte Ed25519 private key (seed followed
///   by public key).
/// - `address`: the v3 onion address derived from `public_key`.
///
/// Identifiers used to track the record belong to whoever stores it.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TorKeys {
    pub public_key: String,

    pub private_key: String,

    pub address: String,
}

impl TorKeys {
    /// # Errors
    ///
    /// Returns [`tor::Error::EntropyUnavailable`] if no key pair could be
    /// generated.
    #[tracing::instrument]
    pub fn generate() -> tor::Result<Self> {
        let key_pair = SigningKeyPair::generate()?;
        let tor_keys = Self::from(&key_pair);
        tracing::debug!("generated tor keys");
        Ok(tor_keys)
    }
}

impl From<&SigningKeyPair> for TorKeys {
    fn from(key_pair: &SigningKeyPair) -> Self {
        tracing::debug!("generating public key");
        let public_key = key_pair.public_key();

        tracing::debug!("generating onion address");
        let address = key_pair.onion_address();

        Self {
            public_key: public_key.to_base64(),
            private_key: key_pair.private_key().to_base64(),
            address: address.into(),
        }
    }
}

impl std::fmt::Debug for TorKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TorKeys")
            .field("public_key", &self.public_key)
            .field("private_key", &"..")
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::tor::{OnionAddress, PrivateKey, PublicKey, SigningKeyPair};

    use super::TorKeys;

    #[test]
    fn from_key_pair() {
        // arrange
        let key_pair = SigningKeyPair::from_seed(&[
            0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec,
            0x2c, 0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03,
            0x1c, 0xae, 0x7f, 0x60,
        ]);

        // act
        let tor_keys = TorKeys::from(&key_pair);

        // assert
        assert_eq!(
            TorKeys {
                public_key: "11qYAYKxCrfVS/7TyWQHOg7hcvPapiMlrwIaaPcHURo=".to_string(),
                private_key: "nWGxne/9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2DXWpgBgrEKt9VL/tPJZAc6DuFy89qmIyWvAhpo9wdRGg==".to_string(),
                address: "25njqamcweflpvkl73j4szahhihoc4xt3ktcgjnpaingr5yhkenl5sid.onion"
                    .to_string(),
            },
            tor_keys
        );
    }

    #[test]
    fn generate_is_consistent() {
        // act
        let tor_keys = TorKeys::generate().unwrap();

        // assert
        let public_key = PublicKey::from_base64(&tor_keys.public_key).unwrap();
        let private_key = PrivateKey::from_base64(&tor_keys.private_key).unwrap();
        let address: OnionAddress = tor_keys.address.parse().unwrap();
        assert_eq!(public_key, private_key.public_key());
        assert_eq!(public_key, address.public_key());
    }

    #[test]
    fn serialize() {
        // arrange
        let tor_keys = TorKeys {
            public_key: "public".to_string(),
            private_key: "private".to_string(),
            address: "address".to_string(),
        };

        // act
        let json = serde_json::to_value(&tor_keys).unwrap();

        // assert
        assert_eq!(
            serde_json::json!({
                "public_key": "public",
                "private_key": "private",
                "address": "address",
            }),
            json
        );
        assert_eq!(tor_keys, serde_json::from_value(json).unwrap());
    }

    #[test]
    fn debug_omits_private_key() {
        let tor_keys = TorKeys::from(&SigningKeyPair::from_seed(&[1; 32]));

        assert!(!format!("{tor_keys:?}").contains(&tor_keys.private_key));
    }
}
