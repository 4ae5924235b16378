// src/engine/key.rs
//! Key handles produced by [`RustCryptoEngine`](super::RustCryptoEngine)

use std::fmt;
use std::sync::Arc;

use ::rsa::{RsaPrivateKey, RsaPublicKey};

use super::ec::{EcPublicKey, EcSecretKey};
use crate::aliases::SecretKeyBytes;
use crate::enums::{EccCurve, HashAlg, KeyUsage, RsaAlg, SymmetricAlg, SymmetricKeyLength};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Secret,
    Public,
    Private,
}

/// Algorithm a key is bound to at generation or import time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Aes {
        name: SymmetricAlg,
        length: SymmetricKeyLength,
    },
    Rsa {
        name: RsaAlg,
        modulus_length: u32,
        hash: HashAlg,
    },
    Ecdh {
        curve: EccCurve,
    },
}

pub(super) enum KeyMaterial {
    Secret(SecretKeyBytes),
    RsaPublic(RsaPublicKey),
    RsaPrivate(RsaPrivateKey),
    EcPublic(EcPublicKey),
    EcPrivate(EcSecretKey),
}

/// Opaque handle to key material held by the engine
///
/// Cloning is cheap and shares the underlying material.
#[derive(Clone)]
pub struct CryptoKey {
    algorithm: KeyAlgorithm,
    key_type: KeyType,
    extractable: bool,
    usages: Vec<KeyUsage>,
    material: Arc<KeyMaterial>,
}

impl CryptoKey {
    pub(super) fn new(
        algorithm: KeyAlgorithm,
        key_type: KeyType,
        extractable: bool,
        usages: Vec<KeyUsage>,
        material: KeyMaterial,
    ) -> Self {
        Self {
            algorithm,
            key_type,
            extractable,
            usages,
            material: Arc::new(material),
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn is_extractable(&self) -> bool {
        self.extractable
    }

    pub fn usages(&self) -> &[KeyUsage] {
        &self.usages
    }

    pub fn allows(&self, usage: KeyUsage) -> bool {
        self.usages.contains(&usage)
    }

    pub(super) fn material(&self) -> &KeyMaterial {
        &self.material
    }
}

// Never print key material
impl fmt::Debug for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoKey")
            .field("algorithm", &self.algorithm)
            .field("key_type", &self.key_type)
            .field("extractable", &self.extractable)
            .field("usages", &self.usages)
            .finish_non_exhaustive()
    }
}
