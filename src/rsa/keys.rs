// src/rsa/keys.rs
use tracing::debug;

use super::KeyUseProfile;
use crate::codec::{decode_standard_base64, encode_base64};
use crate::consts::PUBLIC_EXPONENT;
use crate::crypto::Crypto;
use crate::engine::{CryptoEngine, ImportParams, KeyPair, RsaKeyGenParams};
use crate::enums::{HashAlg, KeyFormat, KeyUse, RsaKeyLength};
use crate::error::Result;
use crate::pem::{strip_private_key_header, strip_public_key_header};
use crate::random::SecureRandom;

impl<E: CryptoEngine, R: SecureRandom> Crypto<E, R> {
    fn key_use_profile(&self, key_use: KeyUse) -> KeyUseProfile {
        KeyUseProfile::for_use(key_use, self.config().asymmetric.sign_scheme)
    }

    /// Generate an RSA key pair for `key_use` with exponent 65537
    pub fn make_rsa_key_pair(
        &self,
        length: RsaKeyLength,
        hash: Option<HashAlg>,
        key_use: KeyUse,
    ) -> Result<KeyPair<E::Key>> {
        let profile = self.key_use_profile(key_use);
        let params = RsaKeyGenParams {
            algorithm: profile.algorithm,
            modulus_length: length.bits(),
            public_exponent: PUBLIC_EXPONENT.to_vec(),
            hash: self.hash_or_default(hash),
        };
        debug!(
            algorithm = params.algorithm.as_str(),
            bits = params.modulus_length,
            key_use = %key_use,
            "generating RSA key pair"
        );
        Ok(self
            .engine()
            .generate_rsa_key_pair(&params, true, &profile.all_usages())?)
    }

    /// Import a base64 SPKI public key, PEM envelope optional
    pub fn import_rsa_public_key(
        &self,
        encoded: &str,
        hash: Option<HashAlg>,
        key_use: KeyUse,
    ) -> Result<E::Key> {
        let profile = self.key_use_profile(key_use);
        let der = decode_standard_base64(strip_public_key_header(encoded))?;
        let params = ImportParams::Rsa {
            algorithm: profile.algorithm,
            hash: self.hash_or_default(hash),
        };
        Ok(self
            .engine()
            .import_key(KeyFormat::Spki, &der, &params, true, profile.public)?)
    }

    /// Import a base64 PKCS8 private key, PEM envelope optional
    pub fn import_rsa_private_key(
        &self,
        encoded: &str,
        hash: Option<HashAlg>,
        key_use: KeyUse,
    ) -> Result<E::Key> {
        let profile = self.key_use_profile(key_use);
        let der = decode_standard_base64(strip_private_key_header(encoded))?;
        let params = ImportParams::Rsa {
            algorithm: profile.algorithm,
            hash: self.hash_or_default(hash),
        };
        Ok(self
            .engine()
            .import_key(KeyFormat::Pkcs8, &der, &params, true, profile.private)?)
    }

    /// SPKI of the pair's public half as bare base64
    pub fn get_public_key(&self, pair: &KeyPair<E::Key>) -> Result<String> {
        let der = self.engine().export_key(KeyFormat::Spki, &pair.public_key)?;
        Ok(encode_base64(&der))
    }
}
