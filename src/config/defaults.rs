// src/config/defaults.rs
use crate::config::app::{AsymmetricConfig, EcdhConfig, SymmetricConfig};
use crate::consts::SALT_LENGTH;
use crate::enums::{
    CharSize, CtrCounterLength, EccCurve, HashAlg, RsaSignScheme, SymmetricAlg, SymmetricKeyLength,
};

pub fn default_symmetric() -> SymmetricConfig {
    SymmetricConfig {
        algorithm: SymmetricAlg::AesGcm,
        key_length: SymmetricKeyLength::B256,
        counter_length: CtrCounterLength::B64,
    }
}

pub fn default_asymmetric() -> AsymmetricConfig {
    AsymmetricConfig {
        hash: HashAlg::Sha256,
        char_size: CharSize::B16,
        sign_scheme: RsaSignScheme::Pss,
        salt_length: default_salt_length(),
    }
}

pub fn default_ecdh() -> EcdhConfig {
    EcdhConfig {
        curve: EccCurve::P384,
    }
}

pub fn default_salt_length() -> usize {
    SALT_LENGTH
}
