// src/crypto.rs
//! The [`Crypto`] facade
//!
//! Owns an injected [`CryptoEngine`], a [`SecureRandom`] source and a
//! [`Config`]. The AES, RSA and ECDH operations are implemented as methods
//! on it in their own modules.

use std::borrow::Cow;

use crate::config::{self, Config};
use crate::engine::{CryptoEngine, RustCryptoEngine, SymmetricKeyParams};
use crate::enums::{CharSize, HashAlg, SymmetricAlg, SymmetricKeyLength};
use crate::error::Result;
use crate::random::{random_buffer, OsRandom, SecureRandom};

/// A key argument: either an engine handle or its transportable text form
///
/// Text keys are imported for the duration of one call. Symmetric keys are
/// base64 raw bytes; asymmetric keys are base64 SPKI/PKCS8, with or without
/// a PEM envelope.
#[derive(Debug)]
pub enum KeyRef<'a, K> {
    Handle(&'a K),
    Encoded(&'a str),
}

impl<K> Clone for KeyRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for KeyRef<'_, K> {}

/// Per-call AES settings; unset fields fall back to [`Config`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricOptions {
    pub algorithm: Option<SymmetricAlg>,
    pub length: Option<SymmetricKeyLength>,
    /// Fixed IV (initial counter block for AES-CTR); random when unset
    pub iv: Option<[u8; 16]>,
    /// Rightmost counter bits for AES-CTR: 32, 64 or 128
    pub counter_length: Option<u32>,
}

impl SymmetricOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: SymmetricAlg) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn with_length(mut self, length: SymmetricKeyLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_iv(mut self, iv: [u8; 16]) -> Self {
        self.iv = Some(iv);
        self
    }

    pub fn with_counter_length(mut self, bits: u32) -> Self {
        self.counter_length = Some(bits);
        self
    }
}

/// Stateless crypto convenience layer over an engine
#[derive(Debug, Clone)]
pub struct Crypto<E, R = OsRandom> {
    engine: E,
    rng: R,
    config: Config,
}

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    /// Uses the process-wide config from [`config::load`]
    pub fn new(engine: E, rng: R) -> Self {
        Self::with_config(engine, rng, config::load().clone())
    }

    pub fn with_config(engine: E, rng: R, config: Config) -> Self {
        Self { engine, rng, config }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `length` bytes uniformly distributed in `0..=max`
    pub fn random_buffer(&self, length: usize, max: u32) -> Result<Vec<u8>> {
        random_buffer(&self.rng, length, max)
    }

    pub(crate) fn rng(&self) -> &R {
        &self.rng
    }

    pub(crate) fn symmetric_params(&self, opts: &SymmetricOptions) -> SymmetricKeyParams {
        SymmetricKeyParams {
            algorithm: opts.algorithm.unwrap_or(self.config.symmetric.algorithm),
            length: opts.length.unwrap_or(self.config.symmetric.key_length),
        }
    }

    pub(crate) fn char_size_or_default(&self, size: Option<CharSize>) -> CharSize {
        size.unwrap_or(self.config.asymmetric.char_size)
    }

    pub(crate) fn hash_or_default(&self, hash: Option<HashAlg>) -> HashAlg {
        hash.unwrap_or(self.config.asymmetric.hash)
    }

    /// Borrow a handle, or import a text key with `import`
    pub(crate) fn resolve_key<'k, F>(&self, key: KeyRef<'k, E::Key>, import: F) -> Result<Cow<'k, E::Key>>
    where
        F: FnOnce(&str) -> Result<E::Key>,
    {
        match key {
            KeyRef::Handle(handle) => Ok(Cow::Borrowed(handle)),
            KeyRef::Encoded(text) => import(text).map(Cow::Owned),
        }
    }
}

impl Default for Crypto<RustCryptoEngine, OsRandom> {
    fn default() -> Self {
        Self::new(RustCryptoEngine::new(), OsRandom)
    }
}
