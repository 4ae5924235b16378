// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed sets of algorithm names, key sizes and
//! usage tags. Every string-facing value parses through `FromStr` so an
//! unknown name fails here, before any key material is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Supported symmetric algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SymmetricAlg {
    #[default]
    #[serde(rename = "AES-GCM")]
    AesGcm,
    #[serde(rename = "AES-CBC")]
    AesCbc,
    #[serde(rename = "AES-CTR")]
    AesCtr,
}

impl SymmetricAlg {
    pub fn as_str(self) -> &'static str {
        match self {
            SymmetricAlg::AesGcm => "AES-GCM",
            SymmetricAlg::AesCbc => "AES-CBC",
            SymmetricAlg::AesCtr => "AES-CTR",
        }
    }
}

impl FromStr for SymmetricAlg {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AES-GCM" => Ok(SymmetricAlg::AesGcm),
            "AES-CBC" => Ok(SymmetricAlg::AesCbc),
            "AES-CTR" => Ok(SymmetricAlg::AesCtr),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// AES key sizes in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum SymmetricKeyLength {
    B128,
    B192,
    #[default]
    B256,
}

impl SymmetricKeyLength {
    pub fn bits(self) -> u32 {
        match self {
            SymmetricKeyLength::B128 => 128,
            SymmetricKeyLength::B192 => 192,
            SymmetricKeyLength::B256 => 256,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for SymmetricKeyLength {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            128 => Ok(SymmetricKeyLength::B128),
            192 => Ok(SymmetricKeyLength::B192),
            256 => Ok(SymmetricKeyLength::B256),
            other => Err(CryptoError::InvalidKeyLength(other)),
        }
    }
}

impl From<SymmetricKeyLength> for u32 {
    fn from(length: SymmetricKeyLength) -> u32 {
        length.bits()
    }
}

/// Rightmost counter bits of the AES-CTR counter block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CtrCounterLength {
    B32,
    #[default]
    B64,
    B128,
}

impl CtrCounterLength {
    pub fn bits(self) -> u32 {
        match self {
            CtrCounterLength::B32 => 32,
            CtrCounterLength::B64 => 64,
            CtrCounterLength::B128 => 128,
        }
    }
}

impl TryFrom<u32> for CtrCounterLength {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(CtrCounterLength::B32),
            64 => Ok(CtrCounterLength::B64),
            128 => Ok(CtrCounterLength::B128),
            other => Err(CryptoError::InvalidCounterLength(other)),
        }
    }
}

impl From<CtrCounterLength> for u32 {
    fn from(length: CtrCounterLength) -> u32 {
        length.bits()
    }
}

/// Digest algorithms accepted by RSA-OAEP and RSA signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashAlg {
    #[serde(rename = "SHA-1")]
    Sha1,
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlg {
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlg::Sha1 => "SHA-1",
            HashAlg::Sha256 => "SHA-256",
            HashAlg::Sha384 => "SHA-384",
            HashAlg::Sha512 => "SHA-512",
        }
    }
}

impl FromStr for HashAlg {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SHA-1" | "SHA1" => Ok(HashAlg::Sha1),
            "SHA-256" | "SHA256" => Ok(HashAlg::Sha256),
            "SHA-384" | "SHA384" => Ok(HashAlg::Sha384),
            "SHA-512" | "SHA512" => Ok(HashAlg::Sha512),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Width of one string code unit when a string is turned into bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CharSize {
    B8,
    #[default]
    B16,
}

impl CharSize {
    pub fn bits(self) -> u32 {
        match self {
            CharSize::B8 => 8,
            CharSize::B16 => 16,
        }
    }
}

impl TryFrom<u32> for CharSize {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(CharSize::B8),
            16 => Ok(CharSize::B16),
            other => Err(CryptoError::UnsupportedEncoding(format!("{other}-bit units"))),
        }
    }
}

impl From<CharSize> for u32 {
    fn from(size: CharSize) -> u32 {
        size.bits()
    }
}

/// Target of message normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per string code unit
    Utf8,
    /// Two little-endian bytes per string code unit
    Utf16,
    /// The string is standard base64 text
    Base64,
}

impl From<CharSize> for Encoding {
    fn from(size: CharSize) -> Self {
        match size {
            CharSize::B8 => Encoding::Utf8,
            CharSize::B16 => Encoding::Utf16,
        }
    }
}

impl FromStr for Encoding {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16" | "utf-16" => Ok(Encoding::Utf16),
            "base64" => Ok(Encoding::Base64),
            _ => Err(CryptoError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Named curves for ECDH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EccCurve {
    #[serde(rename = "P-256")]
    P256,
    #[default]
    #[serde(rename = "P-384")]
    P384,
    #[serde(rename = "P-521")]
    P521,
}

impl EccCurve {
    pub fn as_str(self) -> &'static str {
        match self {
            EccCurve::P256 => "P-256",
            EccCurve::P384 => "P-384",
            EccCurve::P521 => "P-521",
        }
    }
}

impl FromStr for EccCurve {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P-256" => Ok(EccCurve::P256),
            "P-384" => Ok(EccCurve::P384),
            "P-521" => Ok(EccCurve::P521),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// RSA modulus sizes in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RsaKeyLength {
    B1024,
    #[default]
    B2048,
    B4096,
}

impl RsaKeyLength {
    pub fn bits(self) -> u32 {
        match self {
            RsaKeyLength::B1024 => 1024,
            RsaKeyLength::B2048 => 2048,
            RsaKeyLength::B4096 => 4096,
        }
    }
}

impl TryFrom<u32> for RsaKeyLength {
    type Error = CryptoError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            1024 => Ok(RsaKeyLength::B1024),
            2048 => Ok(RsaKeyLength::B2048),
            4096 => Ok(RsaKeyLength::B4096),
            other => Err(CryptoError::InvalidModulusLength(other)),
        }
    }
}

/// RSA algorithm names understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsaAlg {
    #[serde(rename = "RSA-OAEP")]
    RsaOaep,
    #[serde(rename = "RSA-PSS")]
    RsaPss,
    #[serde(rename = "RSASSA-PKCS1-v1_5")]
    RsassaPkcs1v15,
}

impl RsaAlg {
    pub fn as_str(self) -> &'static str {
        match self {
            RsaAlg::RsaOaep => "RSA-OAEP",
            RsaAlg::RsaPss => "RSA-PSS",
            RsaAlg::RsassaPkcs1v15 => "RSASSA-PKCS1-v1_5",
        }
    }
}

/// Signature scheme for the `Write` key family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RsaSignScheme {
    #[default]
    #[serde(rename = "RSA-PSS")]
    Pss,
    #[serde(rename = "RSASSA-PKCS1-v1_5")]
    Pkcs1v15,
}

impl From<RsaSignScheme> for RsaAlg {
    fn from(scheme: RsaSignScheme) -> Self {
        match scheme {
            RsaSignScheme::Pss => RsaAlg::RsaPss,
            RsaSignScheme::Pkcs1v15 => RsaAlg::RsassaPkcs1v15,
        }
    }
}

/// Intended purpose of an RSA key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUse {
    /// Encryption and decryption
    Exchange,
    /// Signing and verification
    Write,
}

impl FromStr for KeyUse {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exchange" | "encryption" => Ok(KeyUse::Exchange),
            "write" | "sign" => Ok(KeyUse::Write),
            _ => Err(CryptoError::InvalidKeyUse(s.to_string())),
        }
    }
}

impl fmt::Display for KeyUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyUse::Exchange => write!(f, "exchange"),
            KeyUse::Write => write!(f, "write"),
        }
    }
}

/// Operations a key handle may be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    Encrypt,
    Decrypt,
    Sign,
    Verify,
    DeriveKey,
}

/// Serialized key formats crossing the engine boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    Raw,
    Spki,
    Pkcs8,
}
