use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Stealth key validation
    #[error(transparent)]
    Key(#[from] stealth_key::Error),

    // Output encoding
    #[error("encoding: {0}")]
    Encoding(String),
    #[error("address: {0}")]
    Address(String),
    #[error("invalid network: {0}")]
    Network(String),

    // Entropy
    #[error("random source failure: {0}")]
    RandomSource(String),

    // Wrapped external errors
    #[error(transparent)]
    Secp256k1(#[from] secp256k1::Error),
}

/// Failure classes reported to callers, independent of where the error was raised.
///
/// The first five cover address generation. `MalformedAddress` and
/// `InvalidNetwork` only come from parsing an address or a network name.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedKey,
    ChecksumMismatch,
    InvalidPoint,
    EncodingError,
    RandomSourceFailure,
    MalformedAddress,
    InvalidNetwork,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Key(stealth_key::Error::MalformedKey(_)) => ErrorKind::MalformedKey,
            Error::Key(stealth_key::Error::ChecksumMismatch { .. }) => ErrorKind::ChecksumMismatch,
            Error::Key(stealth_key::Error::InvalidPoint(_)) => ErrorKind::InvalidPoint,
            Error::Encoding(_) => ErrorKind::EncodingError,
            Error::Address(_) => ErrorKind::MalformedAddress,
            Error::Network(_) => ErrorKind::InvalidNetwork,
            Error::RandomSource(_) => ErrorKind::RandomSourceFailure,
            Error::Secp256k1(_) => ErrorKind::InvalidPoint,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
