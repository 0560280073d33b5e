use thiserror::Error;

/// Failures from the code-generation pipeline. Every one of these is an
/// input-validation failure; none are transient, so none are retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotpError {
    #[error("shared key must not be empty")]
    InvalidKey,

    #[error("timestamp precedes the Unix epoch")]
    InvalidTimestamp,

    #[error("HMAC digest is {0} bytes, expected 20")]
    DigestTooShort(usize),

    #[error("HMAC rejected the shared key")]
    KeyError,
}

/// Failures from the on-disk secret store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account not found: {0}")]
    SecretNotFound(String),

    #[error("unable to locate a home directory")]
    NoHomeDir,

    #[error("secret store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("secret store is not valid toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to serialize secret store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Failures from the hex key codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("key is not a valid hex encoding: {0}")]
    Malformed(#[from] data_encoding::DecodeError),

    #[error("key must decode to at least one byte")]
    Empty,
}
