use std::str::FromStr;

use sha3::{Digest, Sha3_256};

use super::{
    Error, PublicKey, Result,
    constants::{
        ONION_ADDRESS_PAYLOAD_LENGTH, ONION_CHECKSUM_LENGTH, ONION_CHECKSUM_PREFIX,
        ONION_DOMAIN_LENGTH, ONION_TLD, ONION_VERSION, PUBLIC_KEY_LENGTH,
    },
    encoding,
};

/// Onion Address
///
/// ---
///
/// Encoding onion addresses [ONIONADDRESS]
///
/// The onion address of a hidden service includes its identity public key, a
/// version field and a basic checksum. All this information is then base32
/// encoded as shown below:
///
/// ```text
/// onion_address = base32(PUBKEY | CHECKSUM | VERSION) + ".onion"
/// CHECKSUM = H(".onion checksum" | PUBKEY | VERSION)[:2]
/// ```
///
/// where:
/// - PUBKEY is the 32 bytes ed25519 master pubkey of the hidden service.
/// - VERSION is a one byte version field (default value '\x03')
/// - ".onion checksum" is a constant string
/// - H is SHA3-256
/// - CHECKSUM is truncated to two bytes before inserting it in `onion_address`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OnionAddress {
    address: String,
    public_key: PublicKey,
}

impl OnionAddress {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.address.as_bytes()
    }

    /// The 56 character base32 part, without `.onion`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.address[..ONION_DOMAIN_LENGTH]
    }

    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }
}

fn checksum(public_key: &PublicKey) -> [u8; ONION_CHECKSUM_LENGTH] {
    let mut hasher = Sha3_256::new();
    hasher.update(ONION_CHECKSUM_PREFIX);
    hasher.update(public_key);
    hasher.update([ONION_VERSION]);
    let digest = hasher.finalize();

    let mut checksum = [0_u8; ONION_CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..ONION_CHECKSUM_LENGTH]);
    checksum
}

fn payload(
    public_key: &PublicKey,
    checksum: [u8; ONION_CHECKSUM_LENGTH],
) -> [u8; ONION_ADDRESS_PAYLOAD_LENGTH] {
    let mut payload = [0_u8; ONION_ADDRESS_PAYLOAD_LENGTH];
    payload[..PUBLIC_KEY_LENGTH].copy_from_slice(public_key.as_ref());
    payload[PUBLIC_KEY_LENGTH..PUBLIC_KEY_LENGTH + ONION_CHECKSUM_LENGTH]
        .copy_from_slice(&checksum);
    payload[ONION_ADDRESS_PAYLOAD_LENGTH - 1] = ONION_VERSION;
    payload
}

impl From<&PublicKey> for OnionAddress {
    fn from(public_key: &PublicKey) -> Self {
        let domain = encoding::to_base32(&payload(public_key, checksum(public_key)));

        Self {
            address: format!("{domain}.{ONION_TLD}"),
            public_key: *public_key,
        }
    }
}

impl FromStr for OnionAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((domain, tld)) = s.rsplit_once('.') else {
            return Err(Error::ParseError("missing TLD".to_string()));
        };

        if tld != ONION_TLD {
            return Err(Error::ParseError(format!("unsupported TLD: {tld}")));
        }

        if domain.len() != ONION_DOMAIN_LENGTH {
            return Err(Error::ParseError(format!(
                "expected {} byte domain, found {} bytes",
                ONION_DOMAIN_LENGTH,
                domain.len()
            )));
        }

        if !encoding::is_base32(domain) {
            return Err(Error::ParseError(format!(
                "domain is not lowercase base32: {domain}"
            )));
        }

        let payload = encoding::from_base32(domain)
            .ok_or_else(|| Error::ParseError("domain is not base32".to_string()))?;

        if payload.len() != ONION_ADDRESS_PAYLOAD_LENGTH {
            return Err(Error::ParseError(format!(
                "expected {} byte payload, found {} bytes",
                ONION_ADDRESS_PAYLOAD_LENGTH,
                payload.len()
            )));
        }

        let version = payload[ONION_ADDRESS_PAYLOAD_LENGTH - 1];
        if version != ONION_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        let public_key = PublicKey::try_from(&payload[..PUBLIC_KEY_LENGTH])?;

        if payload[PUBLIC_KEY_LENGTH..PUBLIC_KEY_LENGTH + ONION_CHECKSUM_LENGTH]
            != checksum(&public_key)
        {
            return Err(Error::ChecksumMismatch);
        }

        Ok(Self {
            address: s.to_string(),
            public_key,
        })
    }
}

/// Parses the contents of a hidden service's `hostname` file.
impl TryFrom<&[u8]> for OnionAddress {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        String::from_utf8_lossy(value).trim().parse()
    }
}

impl TryFrom<&Vec<u8>> for OnionAddress {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        value.as_slice().try_into()
    }
}

impl std::fmt::Display for OnionAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl AsRef<str> for OnionAddress {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl From<OnionAddress> for String {
    fn from(value: OnionAddress) -> Self {
        value.address
    }
}

impl From<&OnionAddress> for Vec<u8> {
    fn from(value: &OnionAddress) -> Self {
        value.address.clone().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use sha3::{Digest, Sha3_256};

    use crate::tor::{Error, PublicKey};

    use super::{OnionAddress, checksum, payload};

    const ZERO_KEY_ADDRESS: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaam2dqd.onion";

    #[test]
    fn checksum_zero_key() {
        assert_eq!([0xcd, 0x0e], checksum(&PublicKey::from_bytes([0; 32])));
    }

    #[test]
    fn checksum_is_sha3_over_one_stream() {
        // arrange
        let public_key = PublicKey::from_bytes([0x5a; 32]);
        let input = [b".onion checksum".as_slice(), &[0x5a_u8; 32], &[0x03_u8]].concat();

        // act
        let one_stream = Sha3_256::digest(&input);
        let separately = Sha3_256::digest(
            [
                Sha3_256::digest(b".onion checksum").as_slice(),
                Sha3_256::digest([0x5a_u8; 32]).as_slice(),
                Sha3_256::digest([0x03_u8]).as_slice(),
            ]
            .concat(),
        );

        // assert
        assert_eq!(48, input.len());
        assert_eq!(one_stream[..2], checksum(&public_key));
        assert_ne!(separately[..2], checksum(&public_key));
    }

    #[test]
    fn checksum_is_not_sha2() {
        // sha256(".onion checksum" | 0^32 | 3)[:2] is e258
        assert_ne!([0xe2, 0x58], checksum(&PublicKey::from_bytes([0; 32])));
    }

    #[test]
    fn payload_layout() {
        // arrange
        let public_key = PublicKey::from_bytes([0x11; 32]);

        // act
        let payload = payload(&public_key, [0xaa, 0xbb]);

        // assert
        assert_eq!(35, payload.len());
        assert_eq!([0x11_u8; 32], payload[..32]);
        assert_eq!([0xaa_u8, 0xbb, 0x03], payload[32..]);
    }

    #[test]
    fn zero_key() {
        // act
        let onion_address = OnionAddress::from(&PublicKey::from_bytes([0; 32]));

        // assert
        assert_eq!(ZERO_KEY_ADDRESS, onion_address.as_str());
        assert_eq!(ZERO_KEY_ADDRESS, onion_address.to_string());
        assert_eq!(&ZERO_KEY_ADDRESS[..56], onion_address.domain());
    }

    #[test]
    fn parse_known_addresses() {
        for (address, public_key) in [
            (ZERO_KEY_ADDRESS, [0_u8; 32]),
            (
                "25njqamcweflpvkl73j4szahhihoc4xt3ktcgjnpaingr5yhkenl5sid.onion",
                [
                    215, 90, 152, 1, 130, 177, 10, 183, 213, 75, 254, 211, 201, 100, 7, 58, 14,
                    225, 114, 243, 218, 166, 35, 37, 175, 2, 26, 104, 247, 7, 81, 26,
                ],
            ),
        ] {
            let onion_address: OnionAddress = address.parse().unwrap();

            assert_eq!(public_key, onion_address.public_key().to_bytes());
            assert_eq!(
                onion_address,
                OnionAddress::from(&PublicKey::from_bytes(public_key))
            );
        }
    }

    #[test]
    fn parse_real_world_address() {
        let onion_address: OnionAddress =
            "duckduckgogg42xjoc72x3sjasowoarfbgcmvfimaftt6twagswzczad.onion"
                .parse()
                .unwrap();

        assert_eq!(
            onion_address,
            OnionAddress::from(&onion_address.public_key())
        );
    }

    #[test]
    fn parse_hostname_file() {
        let onion_address = OnionAddress::try_from(format!("{ZERO_KEY_ADDRESS}\n").as_bytes());

        assert_eq!(ZERO_KEY_ADDRESS, onion_address.unwrap().as_str());
    }

    #[test]
    fn parse_missing_tld() {
        assert!(matches!(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaam2dqd".parse::<OnionAddress>(),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn parse_unsupported_tld() {
        assert!(matches!(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaam2dqd.exit".parse::<OnionAddress>(),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn parse_v2_address() {
        assert!(matches!(
            "expyuzz4wqqyqhjn.onion".parse::<OnionAddress>(),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn parse_uppercase() {
        assert!(matches!(
            ZERO_KEY_ADDRESS.replace('m', "M").parse::<OnionAddress>(),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn parse_unsupported_version() {
        // arrange
        let mut payload = payload(&PublicKey::from_bytes([0; 32]), [0xcd, 0x0e]);
        payload[34] = 0x04;
        let address = format!("{}.onion", crate::tor::encoding::to_base32(&payload));

        // act
        let result = address.parse::<OnionAddress>();

        // assert
        assert!(matches!(result, Err(Error::UnsupportedVersion(0x04))));
    }

    #[test]
    fn parse_checksum_mismatch() {
        // arrange
        let mut address = ZERO_KEY_ADDRESS.to_string();
        address.replace_range(0..1, "b");

        // act
        let result = address.parse::<OnionAddress>();

        // assert
        assert!(matches!(result, Err(Error::ChecksumMismatch)));
    }

    #[test]
    fn string_conversions() {
        let onion_address = OnionAddress::from(&PublicKey::from_bytes([0; 32]));

        assert_eq!(ZERO_KEY_ADDRESS.as_bytes(), Vec::<u8>::from(&onion_address));
        assert_eq!(ZERO_KEY_ADDRESS, String::from(onion_address));
    }
}
