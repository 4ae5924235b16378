// src/rsa/operations.rs
use tracing::debug;

use crate::crypto::{Crypto, KeyRef};
use crate::engine::{CipherParams, CryptoEngine, SignParams};
use crate::enums::{CharSize, HashAlg, KeyUse, RsaSignScheme};
use crate::error::Result;
use crate::message::{normalize_base64, normalize_unicode, Message};
use crate::random::SecureRandom;

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    fn sign_params(&self) -> SignParams {
        let asymmetric = &self.config().asymmetric;
        match asymmetric.sign_scheme {
            RsaSignScheme::Pss => SignParams::RsaPss {
                salt_length: asymmetric.salt_length,
            },
            RsaSignScheme::Pkcs1v15 => SignParams::RsassaPkcs1v15,
        }
    }

    /// Sign `msg` with a `Write` private key
    pub fn sign<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        private_key: &E::Key,
        char_size: Option<CharSize>,
    ) -> Result<Vec<u8>> {
        let data = normalize_unicode(msg.into(), self.char_size_or_default(char_size))?;
        let params = self.sign_params();
        debug!(algorithm = params.algorithm().as_str(), "RSA sign");
        Ok(self.engine().sign(&params, private_key, &data)?)
    }

    /// Check `signature` (base64 when given as text) over `msg`
    ///
    /// A mismatch is `Ok(false)`; errors mean the inputs were malformed.
    pub fn verify<'m, 's>(
        &self,
        msg: impl Into<Message<'m>>,
        signature: impl Into<Message<'s>>,
        public_key: KeyRef<'_, E::Key>,
        char_size: Option<CharSize>,
        hash: Option<HashAlg>,
    ) -> Result<bool> {
        let key = self.resolve_key(public_key, |encoded| {
            self.import_rsa_public_key(encoded, hash, KeyUse::Write)
        })?;
        let data = normalize_unicode(msg.into(), self.char_size_or_default(char_size))?;
        let signature = normalize_base64(signature.into())?;

        let params = self.sign_params();
        let valid = self.engine().verify(&params, &key, &signature, &data)?;
        debug!(algorithm = params.algorithm().as_str(), valid, "RSA verify");
        Ok(valid)
    }

    /// RSA-OAEP encrypt with an `Exchange` public key
    pub fn encrypt_rsa<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        public_key: KeyRef<'_, E::Key>,
        char_size: Option<CharSize>,
        hash: Option<HashAlg>,
    ) -> Result<Vec<u8>> {
        let key = self.resolve_key(public_key, |encoded| {
            self.import_rsa_public_key(encoded, hash, KeyUse::Exchange)
        })?;
        let data = normalize_unicode(msg.into(), self.char_size_or_default(char_size))?;
        debug!(len = data.len(), "RSA-OAEP encrypt");
        Ok(self.engine().encrypt(&CipherParams::RsaOaep, &key, &data)?)
    }

    /// RSA-OAEP decrypt; text input is base64
    pub fn decrypt_rsa<'m>(
        &self,
        msg: impl Into<Message<'m>>,
        private_key: &E::Key,
    ) -> Result<Vec<u8>> {
        let data = normalize_base64(msg.into())?;
        debug!(len = data.len(), "RSA-OAEP decrypt");
        Ok(self.engine().decrypt(&CipherParams::RsaOaep, private_key, &data)?)
    }
}
