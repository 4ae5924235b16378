// src/engine/mod.rs
//! The cryptography engine boundary
//!
//! Orchestrators in this crate never perform AES, RSA or ECDH math. They
//! build parameters and hand them to a [`CryptoEngine`], which owns the key
//! material behind an opaque `Key` handle. [`RustCryptoEngine`] is the
//! bundled implementation on top of the RustCrypto crates.

mod asymmetric;
mod ec;
mod key;
mod params;
mod rust_crypto;
mod symmetric;

use std::fmt;

use thiserror::Error;

use crate::enums::{EccCurve, KeyFormat, KeyUsage};

pub use key::{CryptoKey, KeyAlgorithm, KeyType};
pub use params::{CipherParams, ImportParams, RsaKeyGenParams, SignParams, SymmetricKeyParams};
pub use rust_crypto::RustCryptoEngine;

/// Failures reported by an engine, named after the WebCrypto exception kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("operation not supported: {0}")]
    NotSupported(String),

    #[error("invalid key usages: {0}")]
    Syntax(String),

    #[error("key cannot be used this way: {0}")]
    InvalidAccess(String),

    #[error("malformed key data: {0}")]
    Data(String),

    #[error("operation failed: {0}")]
    Operation(String),
}

/// Public/private halves of a freshly generated key pair
#[derive(Debug, Clone)]
pub struct KeyPair<K> {
    pub public_key: K,
    pub private_key: K,
}

/// Capability surface of a cryptography provider
///
/// Every method either completes or fails atomically. Signature mismatches
/// are reported as `Ok(false)` from [`verify`](CryptoEngine::verify), never
/// as an error.
pub trait CryptoEngine: Send + Sync {
    /// Opaque key handle
    type Key: Clone + fmt::Debug + Send + Sync;

    fn generate_symmetric_key(
        &self,
        params: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<Self::Key, EngineError>;

    fn generate_rsa_key_pair(
        &self,
        params: &RsaKeyGenParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<Self::Key>, EngineError>;

    fn generate_ec_key_pair(
        &self,
        curve: EccCurve,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<Self::Key>, EngineError>;

    /// ECDH: combine `private` with the peer's `public` into a symmetric key
    fn derive_key(
        &self,
        public: &Self::Key,
        private: &Self::Key,
        derived: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<Self::Key, EngineError>;

    fn import_key(
        &self,
        format: KeyFormat,
        data: &[u8],
        params: &ImportParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<Self::Key, EngineError>;

    fn export_key(&self, format: KeyFormat, key: &Self::Key) -> Result<Vec<u8>, EngineError>;

    fn encrypt(
        &self,
        params: &CipherParams<'_>,
        key: &Self::Key,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError>;

    fn decrypt(
        &self,
        params: &CipherParams<'_>,
        key: &Self::Key,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError>;

    fn sign(&self, params: &SignParams, key: &Self::Key, data: &[u8])
        -> Result<Vec<u8>, EngineError>;

    fn verify(
        &self,
        params: &SignParams,
        key: &Self::Key,
        signature: &[u8],
        data: &[u8],
    ) -> Result<bool, EngineError>;
}
