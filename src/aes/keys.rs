// src/aes/keys.rs
use tracing::debug;

use super::AES_KEY_USAGES;
use crate::codec::{decode_standard_base64, encode_base64};
use crate::crypto::{Crypto, SymmetricOptions};
use crate::engine::{CryptoEngine, ImportParams};
use crate::enums::KeyFormat;
use crate::error::Result;
use crate::random::SecureRandom;

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    /// Fresh extractable AES key for encrypt and decrypt
    pub fn generate_aes_key(&self, opts: &SymmetricOptions) -> Result<E::Key> {
        let params = self.symmetric_params(opts);
        debug!(
            algorithm = params.algorithm.as_str(),
            bits = params.length.bits(),
            "generating AES key"
        );
        Ok(self
            .engine()
            .generate_symmetric_key(&params, true, &AES_KEY_USAGES)?)
    }

    /// Import raw key bytes given as standard base64
    pub fn import_aes_key(&self, encoded: &str, opts: &SymmetricOptions) -> Result<E::Key> {
        let params = self.symmetric_params(opts);
        let raw = decode_standard_base64(encoded)?;
        Ok(self.engine().import_key(
            KeyFormat::Raw,
            &raw,
            &ImportParams::Aes(params),
            true,
            &AES_KEY_USAGES,
        )?)
    }

    /// Raw key bytes as standard base64
    pub fn export_aes_key(&self, key: &E::Key) -> Result<String> {
        let raw = self.engine().export_key(KeyFormat::Raw, key)?;
        Ok(encode_base64(&raw))
    }
}
