// src/lib.rs
//! crypto-kit: a uniform crypto convenience layer over a pluggable engine
//!
//! Features:
//! - AES-GCM / AES-CBC / AES-CTR with `IV ‖ ciphertext` framing
//! - RSA-OAEP encryption, RSA-PSS or PKCS#1 v1.5 signatures
//! - ECDH shared-key derivation on P-256 / P-384
//! - Hand-written standard and URL-safe base64, PEM envelopes
//! - Default engine on the RustCrypto crates, secrets held in secure-gate types

pub mod aes;
pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod ecdh;
pub mod engine;
pub mod enums;
pub mod error;
pub mod keys;
pub mod message;
pub mod pem;
pub mod random;
pub mod rsa;

// Re-export everything users need at the crate root
pub use codec::{
    buffer_to_string, decode_standard_base64, decode_url_safe_base64, encode_base64,
    encode_url_safe_base64, string_to_buffer, CodecError,
};
pub use config::load as load_config;
pub use config::Config;
pub use crypto::{Crypto, KeyRef, SymmetricOptions};
pub use engine::{CryptoEngine, CryptoKey, EngineError, KeyPair, RustCryptoEngine};
pub use enums::{
    CharSize, CtrCounterLength, EccCurve, Encoding, HashAlg, KeyUse, RsaKeyLength, RsaSignScheme, SymmetricAlg,
    SymmetricKeyLength,
};
pub use error::{CryptoError, Result};
pub use message::{normalize, Message};
pub use random::{random_buffer, OsRandom, SecureRandom};
