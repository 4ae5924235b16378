// src/engine/rust_crypto.rs
//! [`CryptoEngine`] backed by the RustCrypto crates
//!
//! Follows WebCrypto semantics: keys are bound to one algorithm, operations
//! check the key's algorithm and usages before touching material, and raw
//! bytes leave the engine only through `export_key` on extractable keys.

use ::rsa::RsaPublicKey;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::ec::{EcPublicKey, EcSecretKey};
use super::key::{CryptoKey, KeyAlgorithm, KeyMaterial, KeyType};
use super::{
    asymmetric, symmetric, CipherParams, CryptoEngine, EngineError, ImportParams, KeyPair,
    RsaKeyGenParams, SignParams, SymmetricKeyParams,
};
use crate::aliases::SecretKeyBytes;
use crate::enums::{EccCurve, HashAlg, KeyFormat, KeyUsage, RsaAlg, SymmetricAlg};

const AES_USAGES: &[KeyUsage] = &[KeyUsage::Encrypt, KeyUsage::Decrypt];

/// Default engine
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoEngine;

impl RustCryptoEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Usages an RSA algorithm grants to its public and private halves
fn rsa_usages(algorithm: RsaAlg) -> (&'static [KeyUsage], &'static [KeyUsage]) {
    match algorithm {
        RsaAlg::RsaOaep => (&[KeyUsage::Encrypt], &[KeyUsage::Decrypt]),
        RsaAlg::RsaPss | RsaAlg::RsassaPkcs1v15 => (&[KeyUsage::Verify], &[KeyUsage::Sign]),
    }
}

fn check_usages(allowed: &[KeyUsage], requested: &[KeyUsage]) -> Result<Vec<KeyUsage>, EngineError> {
    if let Some(bad) = requested.iter().find(|usage| !allowed.contains(usage)) {
        return Err(EngineError::Syntax(format!("{bad:?} is not permitted here")));
    }
    Ok(requested.to_vec())
}

fn restrict(allowed: &[KeyUsage], requested: &[KeyUsage]) -> Vec<KeyUsage> {
    requested
        .iter()
        .copied()
        .filter(|usage| allowed.contains(usage))
        .collect()
}

fn require(key: &CryptoKey, usage: KeyUsage) -> Result<(), EngineError> {
    if !key.allows(usage) {
        return Err(EngineError::InvalidAccess(format!(
            "key usages {:?} do not include {usage:?}",
            key.usages()
        )));
    }
    Ok(())
}

fn secret_bytes(key: &CryptoKey, expected: SymmetricAlg) -> Result<&[u8], EngineError> {
    match (key.algorithm(), key.material()) {
        (KeyAlgorithm::Aes { name, .. }, KeyMaterial::Secret(bytes)) if name == expected => {
            Ok(bytes.expose_secret().as_slice())
        }
        (algorithm, _) => Err(EngineError::InvalidAccess(format!(
            "{} operation with a {algorithm:?} key",
            expected.as_str()
        ))),
    }
}

fn rsa_hash(key: &CryptoKey, expected: RsaAlg) -> Result<HashAlg, EngineError> {
    match key.algorithm() {
        KeyAlgorithm::Rsa { name, hash, .. } if name == expected => Ok(hash),
        algorithm => Err(EngineError::InvalidAccess(format!(
            "{} operation with a {algorithm:?} key",
            expected.as_str()
        ))),
    }
}

fn rsa_public(key: &CryptoKey) -> Result<&RsaPublicKey, EngineError> {
    match key.material() {
        KeyMaterial::RsaPublic(public) => Ok(public),
        _ => Err(EngineError::InvalidAccess("expected an RSA public key".into())),
    }
}

fn aes_key(
    params: &SymmetricKeyParams,
    extractable: bool,
    usages: Vec<KeyUsage>,
    bytes: SecretKeyBytes,
) -> CryptoKey {
    CryptoKey::new(
        KeyAlgorithm::Aes {
            name: params.algorithm,
            length: params.length,
        },
        KeyType::Secret,
        extractable,
        usages,
        KeyMaterial::Secret(bytes),
    )
}

impl RustCryptoEngine {
    fn import_rsa(
        &self,
        format: KeyFormat,
        data: &[u8],
        algorithm: RsaAlg,
        hash: HashAlg,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        let (public_usages, private_usages) = rsa_usages(algorithm);
        let (key_type, usages, material) = match format {
            KeyFormat::Spki => (
                KeyType::Public,
                check_usages(public_usages, usages)?,
                KeyMaterial::RsaPublic(asymmetric::public_from_spki(data)?),
            ),
            KeyFormat::Pkcs8 => (
                KeyType::Private,
                check_usages(private_usages, usages)?,
                KeyMaterial::RsaPrivate(asymmetric::private_from_pkcs8(data)?),
            ),
            KeyFormat::Raw => {
                return Err(EngineError::NotSupported("raw import of RSA keys".into()))
            }
        };

        let modulus_length = match &material {
            KeyMaterial::RsaPublic(public) => asymmetric::modulus_length(public),
            KeyMaterial::RsaPrivate(private) => asymmetric::modulus_length(&private.to_public_key()),
            _ => 0,
        };

        Ok(CryptoKey::new(
            KeyAlgorithm::Rsa {
                name: algorithm,
                modulus_length,
                hash,
            },
            key_type,
            extractable,
            usages,
            material,
        ))
    }

    fn import_ec(
        &self,
        format: KeyFormat,
        data: &[u8],
        curve: EccCurve,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        let (key_type, usages, material) = match format {
            KeyFormat::Spki => (
                KeyType::Public,
                check_usages(&[], usages)?,
                KeyMaterial::EcPublic(EcPublicKey::from_spki(curve, data)?),
            ),
            KeyFormat::Raw => (
                KeyType::Public,
                check_usages(&[], usages)?,
                KeyMaterial::EcPublic(EcPublicKey::from_raw(curve, data)?),
            ),
            KeyFormat::Pkcs8 => (
                KeyType::Private,
                check_usages(&[KeyUsage::DeriveKey], usages)?,
                KeyMaterial::EcPrivate(EcSecretKey::from_pkcs8(curve, data)?),
            ),
        };

        Ok(CryptoKey::new(
            KeyAlgorithm::Ecdh { curve },
            key_type,
            extractable,
            usages,
            material,
        ))
    }
}

impl CryptoEngine for RustCryptoEngine {
    type Key = CryptoKey;

    fn generate_symmetric_key(
        &self,
        params: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        let usages = check_usages(AES_USAGES, usages)?;
        let mut bytes = vec![0u8; params.length.bytes()];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| EngineError::Operation(format!("random source failure: {err}")))?;
        trace!(algorithm = params.algorithm.as_str(), bits = params.length.bits(), "generated AES key");
        Ok(aes_key(params, extractable, usages, SecretKeyBytes::new(bytes)))
    }

    fn generate_rsa_key_pair(
        &self,
        params: &RsaKeyGenParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<CryptoKey>, EngineError> {
        let (public_usages, private_usages) = rsa_usages(params.algorithm);
        let allowed: Vec<KeyUsage> = public_usages.iter().chain(private_usages).copied().collect();
        check_usages(&allowed, usages)?;
        let private_usages = restrict(private_usages, usages);
        if private_usages.is_empty() {
            return Err(EngineError::Syntax("private key would have no usages".into()));
        }

        let private = asymmetric::generate(params.modulus_length, &params.public_exponent)?;
        let public = private.to_public_key();
        let algorithm = KeyAlgorithm::Rsa {
            name: params.algorithm,
            modulus_length: params.modulus_length,
            hash: params.hash,
        };
        trace!(algorithm = params.algorithm.as_str(), bits = params.modulus_length, "generated RSA key pair");

        Ok(KeyPair {
            // public halves are always extractable
            public_key: CryptoKey::new(
                algorithm,
                KeyType::Public,
                true,
                restrict(public_usages, usages),
                KeyMaterial::RsaPublic(public),
            ),
            private_key: CryptoKey::new(
                algorithm,
                KeyType::Private,
                extractable,
                private_usages,
                KeyMaterial::RsaPrivate(private),
            ),
        })
    }

    fn generate_ec_key_pair(
        &self,
        curve: EccCurve,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<KeyPair<CryptoKey>, EngineError> {
        let usages = check_usages(&[KeyUsage::DeriveKey], usages)?;
        if usages.is_empty() {
            return Err(EngineError::Syntax("private key would have no usages".into()));
        }

        let secret = EcSecretKey::generate(curve)?;
        let public = secret.public_key();
        trace!(curve = curve.as_str(), "generated ECDH key pair");

        Ok(KeyPair {
            public_key: CryptoKey::new(
                KeyAlgorithm::Ecdh { curve },
                KeyType::Public,
                true,
                Vec::new(),
                KeyMaterial::EcPublic(public),
            ),
            private_key: CryptoKey::new(
                KeyAlgorithm::Ecdh { curve },
                KeyType::Private,
                extractable,
                usages,
                KeyMaterial::EcPrivate(secret),
            ),
        })
    }

    fn derive_key(
        &self,
        public: &CryptoKey,
        private: &CryptoKey,
        derived: &SymmetricKeyParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        require(private, KeyUsage::DeriveKey)?;
        let usages = check_usages(AES_USAGES, usages)?;

        let (secret, peer) = match (private.material(), public.material()) {
            (KeyMaterial::EcPrivate(secret), KeyMaterial::EcPublic(peer)) => (secret, peer),
            _ => {
                return Err(EngineError::InvalidAccess(
                    "ECDH derivation needs an EC private key and an EC public key".into(),
                ))
            }
        };
        if secret.curve() != peer.curve() {
            return Err(EngineError::InvalidAccess(format!(
                "curve mismatch: {} private key with {} public key",
                secret.curve().as_str(),
                peer.curve().as_str()
            )));
        }

        let bytes = secret.diffie_hellman(peer, derived.length.bytes())?;
        Ok(aes_key(derived, extractable, usages, bytes))
    }

    fn import_key(
        &self,
        format: KeyFormat,
        data: &[u8],
        params: &ImportParams,
        extractable: bool,
        usages: &[KeyUsage],
    ) -> Result<CryptoKey, EngineError> {
        match *params {
            ImportParams::Aes(aes) => {
                if format != KeyFormat::Raw {
                    return Err(EngineError::NotSupported(format!(
                        "{format:?} import of AES keys"
                    )));
                }
                if data.len() != aes.length.bytes() {
                    return Err(EngineError::Data(format!(
                        "AES key is {} bits, expected {}",
                        data.len() * 8,
                        aes.length.bits()
                    )));
                }
                let usages = check_usages(AES_USAGES, usages)?;
                Ok(aes_key(&aes, extractable, usages, SecretKeyBytes::new(data.to_vec())))
            }
            ImportParams::Rsa { algorithm, hash } => {
                self.import_rsa(format, data, algorithm, hash, extractable, usages)
            }
            ImportParams::Ecdh { curve } => self.import_ec(format, data, curve, extractable, usages),
        }
    }

    fn export_key(&self, format: KeyFormat, key: &CryptoKey) -> Result<Vec<u8>, EngineError> {
        if !key.is_extractable() {
            return Err(EngineError::InvalidAccess("key is not extractable".into()));
        }

        match (format, key.material()) {
            (KeyFormat::Raw, KeyMaterial::Secret(bytes)) => Ok(bytes.expose_secret().clone()),
            (KeyFormat::Raw, KeyMaterial::EcPublic(public)) => Ok(public.to_raw()),
            (KeyFormat::Spki, KeyMaterial::RsaPublic(public)) => asymmetric::public_to_spki(public),
            (KeyFormat::Spki, KeyMaterial::EcPublic(public)) => public.to_spki(),
            (KeyFormat::Pkcs8, KeyMaterial::RsaPrivate(private)) => {
                asymmetric::private_to_pkcs8(private)
            }
            (KeyFormat::Pkcs8, KeyMaterial::EcPrivate(secret)) => secret.to_pkcs8(),
            (format, _) => Err(EngineError::InvalidAccess(format!(
                "{format:?} export of a {:?} {:?} key",
                key.key_type(),
                key.algorithm()
            ))),
        }
    }

    fn encrypt(
        &self,
        params: &CipherParams<'_>,
        key: &CryptoKey,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        require(key, KeyUsage::Encrypt)?;
        match *params {
            CipherParams::AesGcm { iv } => {
                symmetric::gcm_encrypt(secret_bytes(key, SymmetricAlg::AesGcm)?, iv, data)
            }
            CipherParams::AesCbc { iv } => {
                symmetric::cbc_encrypt(secret_bytes(key, SymmetricAlg::AesCbc)?, iv, data)
            }
            CipherParams::AesCtr { counter, length } => symmetric::ctr_apply(
                secret_bytes(key, SymmetricAlg::AesCtr)?,
                counter,
                length,
                data,
            ),
            CipherParams::RsaOaep => {
                let hash = rsa_hash(key, RsaAlg::RsaOaep)?;
                asymmetric::encrypt(rsa_public(key)?, hash, data)
            }
        }
    }

    fn decrypt(
        &self,
        params: &CipherParams<'_>,
        key: &CryptoKey,
        data: &[u8],
    ) -> Result<Vec<u8>, EngineError> {
        require(key, KeyUsage::Decrypt)?;
        match *params {
            CipherParams::AesGcm { iv } => {
                symmetric::gcm_decrypt(secret_bytes(key, SymmetricAlg::AesGcm)?, iv, data)
            }
            CipherParams::AesCbc { iv } => {
                symmetric::cbc_decrypt(secret_bytes(key, SymmetricAlg::AesCbc)?, iv, data)
            }
            CipherParams::AesCtr { counter, length } => symmetric::ctr_apply(
                secret_bytes(key, SymmetricAlg::AesCtr)?,
                counter,
                length,
                data,
            ),
            CipherParams::RsaOaep => {
                let hash = rsa_hash(key, RsaAlg::RsaOaep)?;
                match key.material() {
                    KeyMaterial::RsaPrivate(private) => asymmetric::decrypt(private, hash, data),
                    _ => Err(EngineError::InvalidAccess("expected an RSA private key".into())),
                }
            }
        }
    }

    fn sign(&self, params: &SignParams, key: &CryptoKey, data: &[u8]) -> Result<Vec<u8>, EngineError> {
        require(key, KeyUsage::Sign)?;
        let hash = rsa_hash(key, params.algorithm())?;
        match key.material() {
            KeyMaterial::RsaPrivate(private) => asymmetric::sign(private, params, hash, data),
            _ => Err(EngineError::InvalidAccess("expected an RSA private key".into())),
        }
    }

    fn verify(
        &self,
        params: &SignParams,
        key: &CryptoKey,
        signature: &[u8],
        data: &[u8],
    ) -> Result<bool, EngineError> {
        require(key, KeyUsage::Verify)?;
        let hash = rsa_hash(key, params.algorithm())?;
        Ok(asymmetric::verify(rsa_public(key)?, params, hash, signature, data))
    }
}
