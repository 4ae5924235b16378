// src/ecdh/keys.rs
use tracing::debug;

use crate::aes::AES_KEY_USAGES;
use crate::codec::decode_standard_base64;
use crate::crypto::{Crypto, SymmetricOptions};
use crate::engine::{CryptoEngine, ImportParams, KeyPair};
use crate::enums::{EccCurve, KeyFormat, KeyUsage};
use crate::error::Result;
use crate::pem::{strip_private_key_header, strip_public_key_header};
use crate::random::SecureRandom;

const DERIVE_USAGES: [KeyUsage; 1] = [KeyUsage::DeriveKey];

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    fn curve_or_default(&self, curve: Option<EccCurve>) -> EccCurve {
        curve.unwrap_or(self.config().ecdh.curve)
    }

    pub fn generate_ecdh_key_pair(&self, curve: Option<EccCurve>) -> Result<KeyPair<E::Key>> {
        let curve = self.curve_or_default(curve);
        debug!(curve = curve.as_str(), "generating ECDH key pair");
        Ok(self.engine().generate_ec_key_pair(curve, true, &DERIVE_USAGES)?)
    }

    /// Combine our private key with the peer's public key into an AES key
    pub fn derive_shared_symmetric_key(
        &self,
        public_key: &E::Key,
        private_key: &E::Key,
        opts: &SymmetricOptions,
    ) -> Result<E::Key> {
        let params = self.symmetric_params(opts);
        debug!(
            algorithm = params.algorithm.as_str(),
            bits = params.length.bits(),
            "deriving shared key"
        );
        Ok(self
            .engine()
            .derive_key(public_key, private_key, &params, false, &AES_KEY_USAGES)?)
    }

    /// Import a base64 SPKI public key, PEM envelope optional
    pub fn import_ecdh_public_key(
        &self,
        encoded: &str,
        curve: Option<EccCurve>,
    ) -> Result<E::Key> {
        let der = decode_standard_base64(strip_public_key_header(encoded))?;
        let params = ImportParams::Ecdh {
            curve: self.curve_or_default(curve),
        };
        Ok(self
            .engine()
            .import_key(KeyFormat::Spki, &der, &params, true, &[])?)
    }

    /// Import a base64 PKCS8 private key, PEM envelope optional
    pub fn import_ecdh_private_key(
        &self,
        encoded: &str,
        curve: Option<EccCurve>,
    ) -> Result<E::Key> {
        let der = decode_standard_base64(strip_private_key_header(encoded))?;
        let params = ImportParams::Ecdh {
            curve: self.curve_or_default(curve),
        };
        Ok(self
            .engine()
            .import_key(KeyFormat::Pkcs8, &der, &params, true, &DERIVE_USAGES)?)
    }
}
