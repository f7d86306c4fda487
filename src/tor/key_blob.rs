//! Tor prefixes each key file with a fixed 32 byte header naming the key
//! type, followed by the raw key material.

use super::{Error, Result, constants::VERSION_LENGTH};

/// Returns the key material following `header`, which must be exactly
/// `length` bytes long.
pub fn split<'a>(bytes: &'a [u8], header: &[u8], length: usize) -> Result<&'a [u8]> {
    if bytes.len() < VERSION_LENGTH {
        return Err(Error::ParseError(format!(
            "expected {} byte version, found {} bytes",
            VERSION_LENGTH,
            bytes.len()
        )));
    }

    let (version, data) = bytes.split_at(VERSION_LENGTH);

    if version != header {
        return Err(Error::ParseError("unrecognized version".to_string()));
    }

    if data.len() != length {
        return Err(Error::ParseError(format!(
            "expected {} byte key, found {} bytes",
            length,
            data.len()
        )));
    }

    Ok(data)
}

pub fn join(header: &[u8], data: &[u8]) -> Vec<u8> {
    [header, data].concat()
}

#[cfg(test)]
mod tests {
    use crate::tor::constants::ED25519_V1_PUBLIC_TYPE_0_KEY;

    use super::{join, split};

    #[test]
    fn split_join() {
        // arrange
        let bytes = join(ED25519_V1_PUBLIC_TYPE_0_KEY, &[7; 4]);

        // act
        let data = split(&bytes, ED25519_V1_PUBLIC_TYPE_0_KEY, 4).unwrap();

        // assert
        assert_eq!(36, bytes.len());
        assert_eq!(&[7_u8; 4], data);
    }

    #[test]
    fn split_short_header() {
        assert!(split(b"== ed25519v1", ED25519_V1_PUBLIC_TYPE_0_KEY, 4).is_err());
    }

    #[test]
    fn split_wrong_length() {
        let bytes = join(ED25519_V1_PUBLIC_TYPE_0_KEY, &[7; 5]);

        assert!(split(&bytes, ED25519_V1_PUBLIC_TYPE_0_KEY, 4).is_err());
    }
}
