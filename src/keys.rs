// src/keys.rs
//! PEM export for asymmetric keys (RSA and ECDH alike)

use crate::consts::{PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};
use crate::crypto::Crypto;
use crate::engine::CryptoEngine;
use crate::enums::KeyFormat;
use crate::error::Result;
use crate::pem::wrap_pem;
use crate::random::SecureRandom;

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    /// SPKI wrapped in a `PUBLIC KEY` envelope
    pub fn export_public_key_pem(&self, public_key: &E::Key) -> Result<String> {
        let der = self.engine().export_key(KeyFormat::Spki, public_key)?;
        Ok(wrap_pem(&der, PUBLIC_KEY_LABEL))
    }

    /// PKCS8 wrapped in a `PRIVATE KEY` envelope
    pub fn export_private_key_pem(&self, private_key: &E::Key) -> Result<String> {
        let der = self.engine().export_key(KeyFormat::Pkcs8, private_key)?;
        Ok(wrap_pem(&der, PRIVATE_KEY_LABEL))
    }
}
