// tests/support.rs
//! Test doubles: a call-recording engine and a scripted random source

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use crypto_kit::engine::{
    CipherParams, CryptoEngine, CryptoKey, EngineError, ImportParams, KeyPair, RsaKeyGenParams,
    RustCryptoEngine, SignParams, SymmetricKeyParams,
};
use crypto_kit::enums::{EccCurve, KeyFormat, KeyUsage};
use crypto_kit::{CryptoError, SecureRandom};

/// Owned copy of the cipher parameters an engine was called with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedParams {
    AesGcm { iv: Vec<u8> },
    AesCbc { iv: Vec<u8> },
    AesCtr { counter: Vec<u8>, length: u32 },
    RsaOaep,
}

impl From<&CipherParams<'_>> for RecordedParams {
    fn from(params: &CipherParams<'_>) -> Self {
        match *params {
            CipherParams::AesGcm { iv } => RecordedParams::AesGcm { iv: iv.to_vec() },
            CipherParams::AesCbc { iv } => RecordedParams::AesCbc { iv: iv.to_vec() },
            CipherParams::AesCtr { counter, length } => RecordedParams::AesCtr {
                counter: counter.to_vec(),
                length,
            },
            CipherParams::RsaOaep => RecordedParams::RsaOaep,
        }
    }
}

/// Delegates to [`RustCryptoEngine`] and records every call
#[derive(Default)]
pub struct RecordingEngine {
    inner: RustCryptoEngine,
    calls: Mutex<Vec<&'static str>>,
    params: Mutex<Vec<RecordedParams>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn cipher_params(&self) -> Vec<RecordedParams> {
        self.params.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
        self.params.lock().unwrap().clear();
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CryptoEngine for RecordingEngine {
    type Key = CryptoKey;

    fn generate_symmetric_key(
        &self,
        params: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        self.record("generate_symmetric_key");
        self.inner.generate_symmetric_key(params, extractable, usages)
    }

    fn generate_rsa_key_pair(
        &self,
        params: &RsaKeyGenParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<CryptoKey>, EngineError> {
        self.record("generate_rsa_key_pair");
        self.inner.generate_rsa_key_pair(params, extractable, usages)
    }

    fn generate_ec_key_pair(
        &self,
        curve: EccCurve,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<CryptoKey>, EngineError> {
        self.record("generate_ec_key_pair");
        self.inner.generate_ec_key_pair(curve, extractable, usages)
    }

    fn derive_key(
        &self,
        public: &CryptoKey,
        private: &CryptoKey,
        derived: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        self.record("derive_key");
        self.inner
            .derive_key(public, private, derived, extractable, usages)
    }

    fn import_key(
        &self,
        format: KeyFormat,
        data: &[u8],
        params: &ImportParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        self.record("import_key");
        self.inner
            .import_key(format, data, params, extractable, usages)
    }

    fn export_key(&self, format: KeyFormat, key: &CryptoKey) -> Result<Vec<u8>, EngineError> {
        self.record("export_key");
        self.inner.export_key(format, key)
    }

    fn encrypt(
        &self,
        params: &CipherParams<'_>,
        key: &CryptoKey,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.record("encrypt");
        self.params.lock().unwrap().push(params.into());
        self.inner.encrypt(params, key, data)
    }

    fn decrypt(
        &self,
        params: &CipherParams<'_>,
        key: &CryptoKey,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.record("decrypt");
        self.params.lock().unwrap().push(params.into());
        self.inner.decrypt(params, key, data)
    }

    fn sign(
        &self,
        params: &SignParams,
        key: &CryptoKey,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        self.record("sign");
        self.inner.sign(params, key, data)
    }

    fn verify(
        &self,
        params: &SignParams,
        key: &CryptoKey,
        signature: &[u8],
        data: &[u8],
    ) -> Result<bool, EngineError> {
        self.record("verify");
        self.inner.verify(params, key, signature, data)
    }
}

/// Hands out a fixed byte script, then fails
pub struct ScriptedRandom {
    bytes: Mutex<VecDeque<u8>>,
}

impl ScriptedRandom {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: Mutex::new(bytes.iter().copied().collect()),
        }
    }
}

impl SecureRandom for ScriptedRandom {
    fn fill(&self, dest: &mut [u8]) -> crypto_kit::Result<()> {
        let mut bytes = self.bytes.lock().unwrap();
        for slot in dest.iter_mut() {
            *slot = bytes
                .pop_front()
                .ok_or_else(|| CryptoError::Random("script exhausted".into()))?;
        }
        Ok(())
    }
}
