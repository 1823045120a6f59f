/// Length of a compressed secp256k1 point, the size of every script slot.
pub const POINT_SLOT_LEN: usize = 33;

/// Number of point slots in a stealth script: `Gr`, `Gy`, `Ur`, `Uy`.
pub const POINT_SLOTS: usize = 4;

/// ErgoTree header: version 0 with constant segregation.
pub const TREE_HEADER: u8 = 0x10;

/// `Coll[Byte]` type code preceding every constant.
pub const COLL_BYTE_TYPE: u8 = 0x0e;

/// Script body: `proveDHTuple(decodePoint(c0), decodePoint(c1), decodePoint(c2), decodePoint(c3))`.
pub const TREE_BODY: [u8; 13] = [
    0xce, 0xee, 0x73, 0x00, 0xee, 0x73, 0x01, 0xee, 0x73, 0x02, 0xee, 0x73, 0x03,
];

/// Header, constant count, four `type || length || point` slots and the body.
pub const SCRIPT_LEN: usize = 2 + POINT_SLOTS * (2 + POINT_SLOT_LEN) + TREE_BODY.len();

pub const MAINNET_PREFIX: u8 = 0x00;
pub const TESTNET_PREFIX: u8 = 0x10;

/// Address type of a pay-to-script address.
pub const P2S_ADDRESS_TYPE: u8 = 0x03;

/// Length of the blake2b256 checksum trailing an encoded address.
pub const ADDRESS_CHECKSUM_LEN: usize = 4;

pub const DEFAULT_EXPLORER_HOST: &str = "explorer.ergoplatform.com";

/// Consecutive rejected draws after which a random source is considered broken.
pub const MAX_SCALAR_ATTEMPTS: usize = 64;
