// src/aes/operations.rs
use tracing::{debug, trace};

use super::cipher_params;
use crate::codec::{buffer_to_string, concat, encode_base64, split_prefix};
use crate::consts::IV_LENGTH;
use crate::crypto::{Crypto, KeyRef, SymmetricOptions};
use crate::engine::CryptoEngine;
use crate::enums::{CharSize, CtrCounterLength};
use crate::error::{CryptoError, Result};
use crate::message::{normalize_base64, normalize_utf16, Message};
use crate::random::SecureRandom;

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    /// Per-call counter length, checked against 32/64/128 before any engine call
    fn counter_length(&self, opts: &SymmetricOptions) -> Result<u32> {
        let length = match opts.counter_length {
            Some(bits) => CtrCounterLength::try_from(bits)?,
            None => self.config().symmetric.counter_length,
        };
        Ok(length.bits())
    }

    /// Encrypt `msg` and return `IV ‖ ciphertext`
    ///
    /// Text is normalized as UTF-16. The IV comes from `opts.iv` or the
    /// random source.
    pub fn encrypt_aes_bytes<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        key: KeyRef<'_, E::Key>,
        opts: &SymmetricOptions,
    ) -> Result<Vec<u8>> {
        let data = normalize_utf16(msg.into())?;
        let counter_length = self.counter_length(opts)?;
        let key = self.resolve_key(key, |encoded| self.import_aes_key(encoded, opts))?;

        let iv = match opts.iv {
            Some(iv) => iv,
            None => {
                let mut iv = [0u8; IV_LENGTH];
                self.rng().fill(&mut iv)?;
                iv
            }
        };

        let algorithm = self.symmetric_params(opts).algorithm;
        let params = cipher_params(algorithm, &iv, counter_length);
        debug!(algorithm = algorithm.as_str(), len = data.len(), "AES encrypt");

        let ciphertext = self.engine().encrypt(&params, &key, &data)?;
        trace!(framed_len = IV_LENGTH + ciphertext.len(), "framed ciphertext");
        Ok(concat(&iv, &ciphertext))
    }

    /// [`encrypt_aes_bytes`](Self::encrypt_aes_bytes) as standard base64
    pub fn encrypt_aes<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        key: KeyRef<'_, E::Key>,
        opts: &SymmetricOptions,
    ) -> Result<String> {
        Ok(encode_base64(&self.encrypt_aes_bytes(msg, key, opts)?))
    }

    /// Decrypt an `IV ‖ ciphertext` frame (text input is base64)
    pub fn decrypt_aes_bytes<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        key: KeyRef<'_, E::Key>,
        opts: &SymmetricOptions,
    ) -> Result<Vec<u8>> {
        let framed = normalize_base64(msg.into())?;
        let (iv, ciphertext) =
            split_prefix(&framed, IV_LENGTH).ok_or(CryptoError::CiphertextTooShort {
                expected: IV_LENGTH,
                actual: framed.len(),
            })?;
        let counter_length = self.counter_length(opts)?;
        let key = self.resolve_key(key, |encoded| self.import_aes_key(encoded, opts))?;

        let algorithm = self.symmetric_params(opts).algorithm;
        let params = cipher_params(algorithm, iv, counter_length);
        debug!(algorithm = algorithm.as_str(), len = ciphertext.len(), "AES decrypt");

        Ok(self.engine().decrypt(&params, &key, ciphertext)?)
    }

    /// Decrypt to a string of 16-bit code units
    pub fn decrypt_aes<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        key: KeyRef<'_, E::Key>,
        opts: &SymmetricOptions,
    ) -> Result<String> {
        let plaintext = self.decrypt_aes_bytes(msg, key, opts)?;
        Ok(buffer_to_string(&plaintext, CharSize::B16)?)
    }
}
