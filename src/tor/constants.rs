pub const ED25519_V1_PUBLIC_TYPE_0_KEY: &[u8] = b"== ed25519v1-public: type0 ==\0\0\0";
pub const ED25519_V1_PUBLIC_TYPE_0_LENGTH: usize = 32;
pub const ED25519_V1_SECRET_TYPE_0_KEY: &[u8] = b"== ed25519v1-secret: type0 ==\0\0\0";
pub const ED25519_V1_SECRET_TYPE_0_LENGTH: usize = 64;
pub const VERSION_LENGTH: usize = 32;

pub const ONION_ADDRESS_PAYLOAD_LENGTH: usize = PUBLIC_KEY_LENGTH + ONION_CHECKSUM_LENGTH + 1;
pub const ONION_CHECKSUM_LENGTH: usize = 2;
pub const ONION_CHECKSUM_PREFIX: &[u8] = b".onion checksum";
pub const ONION_DOMAIN_LENGTH: usize = 56;
pub const ONION_TLD: &str = "onion";
pub const ONION_VERSION: u8 = 0x03;

pub const PRIVATE_KEY_LENGTH: usize = 64;
pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const SEED_LENGTH: usize = 32;
