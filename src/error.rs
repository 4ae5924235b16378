// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::codec::CodecError;
use crate::engine::EngineError;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Invalid key use: {0}")]
    InvalidKeyUse(String),

    #[error("Invalid RSA modulus length {0}: expected 1024, 2048 or 4096")]
    InvalidModulusLength(u32),

    #[error("Invalid symmetric key length {0}: expected 128, 192 or 256")]
    InvalidKeyLength(u32),

    #[error("Invalid AES-CTR counter length {0}: expected 32, 64 or 128")]
    InvalidCounterLength(u32),

    #[error("Invalid max value {0}: must be between 1 and 255")]
    InvalidMaxValue(u32),

    #[error("Ciphertext too short: expected at least {expected} bytes, got {actual}")]
    CiphertextTooShort { expected: usize, actual: usize },

    #[error("Encoding error: {0}")]
    Codec(#[from] CodecError),

    #[error("Crypto operation failed: {0}")]
    Engine(#[from] EngineError),

    #[error("Random source failure: {0}")]
    Random(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
