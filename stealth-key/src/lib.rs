use blake2::{digest::consts::U32, Blake2b, Digest};
use secp256k1::PublicKey;
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal every stealth key starts with.
pub const STEALTH_PREFIX: &str = "stealth";
/// Number of checksum bytes appended to the encoded point.
pub const CHECKSUM_LENGTH: usize = 4;
/// Length of a compressed secp256k1 point.
pub const POINT_LENGTH: usize = 33;

type Blake2b256 = Blake2b<U32>;

/// Error types for stealth key operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid stealth key format: {0}")]
    MalformedKey(String),
    #[error("invalid checksum: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },
    #[error("invalid stealth key point: {0}")]
    InvalidPoint(secp256k1::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// First four bytes of the unkeyed BLAKE2b-256 digest of `bytes`.
pub fn checksum(bytes: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Blake2b256::digest(bytes);
    let mut res = [0u8; CHECKSUM_LENGTH];
    res.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    res
}

/// Validate a textual stealth key and extract the receiver's point.
///
/// The expected format is `"stealth" + base58(point || checksum)`, where
/// `checksum` is the first four bytes of `blake2b256(point)`.
///
/// # Errors
///
/// * [`Error::MalformedKey`] if the prefix is missing, repeated or preceded by
///   other text, if the payload is not base58, or if it is too short to hold a
///   checksum.
/// * [`Error::ChecksumMismatch`] if the checksum does not match the payload.
/// * [`Error::InvalidPoint`] if the payload is not a compressed curve point.
pub fn validate(input: &str) -> Result<PublicKey> {
    let segments: Vec<&str> = input.split(STEALTH_PREFIX).collect();
    if segments.len() != 2 {
        return Err(Error::MalformedKey(format!(
            "expected \"{}\" exactly once, found {} occurrences",
            STEALTH_PREFIX,
            segments.len().saturating_sub(1)
        )));
    }
    if !segments[0].is_empty() {
        return Err(Error::MalformedKey(format!(
            "key must start with \"{}\"",
            STEALTH_PREFIX
        )));
    }

    let decoded = bs58::decode(segments[1])
        .into_vec()
        .map_err(|e| Error::MalformedKey(e.to_string()))?;

    if decoded.len() < CHECKSUM_LENGTH {
        return Err(Error::MalformedKey(format!(
            "payload too short, expected at least {} bytes, got {}",
            CHECKSUM_LENGTH,
            decoded.len()
        )));
    }

    let (main, found) = decoded.split_at(decoded.len() - CHECKSUM_LENGTH);
    let expected = checksum(main);
    if expected[..] != found[..] {
        return Err(Error::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }

    PublicKey::from_slice(main).map_err(Error::InvalidPoint)
}

/// A receiver's stealth public key, as published by ErgoMixer.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct StealthKey {
    pubkey: PublicKey,
}

#[cfg(feature = "serde")]
impl Serialize for StealthKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded: String = (*self).into();
        serializer.serialize_str(&encoded)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for StealthKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key_str: String = Deserialize::deserialize(deserializer)?;

        StealthKey::try_from(key_str.as_str()).map_err(serde::de::Error::custom)
    }
}

impl StealthKey {
    pub fn new(pubkey: PublicKey) -> Self {
        StealthKey { pubkey }
    }

    /// Get the receiver's public point `u`.
    pub fn get_pubkey(&self) -> PublicKey {
        self.pubkey
    }
}

impl fmt::Display for StealthKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <StealthKey as Into<String>>::into(*self))
    }
}

impl TryFrom<&str> for StealthKey {
    type Error = Error;

    fn try_from(key: &str) -> Result<Self> {
        validate(key).map(StealthKey::new)
    }
}

impl TryFrom<String> for StealthKey {
    type Error = Error;

    fn try_from(key: String) -> Result<Self> {
        key.as_str().try_into()
    }
}

impl From<StealthKey> for String {
    fn from(val: StealthKey) -> Self {
        let point = val.pubkey.serialize();

        let mut data = [0u8; POINT_LENGTH + CHECKSUM_LENGTH];
        data[..POINT_LENGTH].copy_from_slice(&point);
        data[POINT_LENGTH..].copy_from_slice(&checksum(&point));

        format!("{}{}", STEALTH_PREFIX, bs58::encode(data).into_string())
    }
}
