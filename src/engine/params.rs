// src/engine/params.rs
//! Algorithm parameters passed across the engine boundary

use crate::enums::{EccCurve, HashAlg, RsaAlg, SymmetricAlg, SymmetricKeyLength};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricKeyParams {
    pub algorithm: SymmetricAlg,
    pub length: SymmetricKeyLength,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyGenParams {
    pub algorithm: RsaAlg,
    pub modulus_length: u32,
    /// Big-endian public exponent
    pub public_exponent: Vec<u8>,
    pub hash: HashAlg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportParams {
    Aes(SymmetricKeyParams),
    Rsa { algorithm: RsaAlg, hash: HashAlg },
    Ecdh { curve: EccCurve },
}

/// Per-call cipher parameters
///
/// AES-CTR carries its initial counter block and counter bit-length and no
/// IV; the block modes carry only an IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherParams<'a> {
    AesGcm { iv: &'a [u8] },
    AesCbc { iv: &'a [u8] },
    AesCtr { counter: &'a [u8], length: u32 },
    RsaOaep,
}

impl CipherParams<'_> {
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            CipherParams::AesGcm { .. } => SymmetricAlg::AesGcm.as_str(),
            CipherParams::AesCbc { .. } => SymmetricAlg::AesCbc.as_str(),
            CipherParams::AesCtr { .. } => SymmetricAlg::AesCtr.as_str(),
            CipherParams::RsaOaep => RsaAlg::RsaOaep.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignParams {
    RsaPss { salt_length: usize },
    RsassaPkcs1v15,
}

impl SignParams {
    pub fn algorithm(&self) -> RsaAlg {
        match self {
            SignParams::RsaPss { .. } => RsaAlg::RsaPss,
            SignParams::RsassaPkcs1v15 => RsaAlg::RsassaPkcs1v15,
        }
    }
}
