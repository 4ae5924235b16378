// src/engine/ec.rs
//! NIST curve keys for ECDH
//!
//! P-256 and P-384 are backed by the `p256` / `p384` crates. P-521 is a
//! recognised curve name but is reported as unsupported.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;

use super::EngineError;
use crate::aliases::SecretKeyBytes;
use crate::enums::EccCurve;

pub(super) enum EcPublicKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
}

pub(super) enum EcSecretKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
}

fn unsupported(curve: EccCurve) -> EngineError {
    EngineError::NotSupported(format!("named curve {}", curve.as_str()))
}

fn data_error<E: std::fmt::Display>(what: &str) -> impl Fn(E) -> EngineError + '_ {
    move |err| EngineError::Data(format!("invalid {what}: {err}"))
}

impl EcSecretKey {
    pub(super) fn generate(curve: EccCurve) -> Result<Self, EngineError> {
        match curve {
            EccCurve::P256 => Ok(Self::P256(p256::SecretKey::random(&mut OsRng))),
            EccCurve::P384 => Ok(Self::P384(p384::SecretKey::random(&mut OsRng))),
            EccCurve::P521 => Err(unsupported(curve)),
        }
    }

    pub(super) fn curve(&self) -> EccCurve {
        match self {
            Self::P256(_) => EccCurve::P256,
            Self::P384(_) => EccCurve::P384,
        }
    }

    pub(super) fn public_key(&self) -> EcPublicKey {
        match self {
            Self::P256(secret) => EcPublicKey::P256(secret.public_key()),
            Self::P384(secret) => EcPublicKey::P384(secret.public_key()),
        }
    }

    /// Raw ECDH shared secret truncated to `length` bytes
    pub(super) fn diffie_hellman(
        &self,
        public: &EcPublicKey,
        length: usize,
    ) -> Result<SecretKeyBytes, EngineError> {
        let shared = match (self, public) {
            (Self::P256(secret), EcPublicKey::P256(public)) => {
                p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), public.as_affine())
                    .raw_secret_bytes()
                    .to_vec()
            }
            (Self::P384(secret), EcPublicKey::P384(public)) => {
                p384::ecdh::diffie_hellman(secret.to_nonzero_scalar(), public.as_affine())
                    .raw_secret_bytes()
                    .to_vec()
            }
            _ => {
                return Err(EngineError::InvalidAccess(
                    "ECDH public and private keys are on different curves".into(),
                ))
            }
        };

        if shared.len() < length {
            return Err(EngineError::Operation(format!(
                "shared secret of {} bits cannot produce a {}-bit key",
                shared.len() * 8,
                length * 8
            )));
        }
        Ok(SecretKeyBytes::new(shared[..length].to_vec()))
    }

    pub(super) fn from_pkcs8(curve: EccCurve, der: &[u8]) -> Result<Self, EngineError> {
        match curve {
            EccCurve::P256 => p256::SecretKey::from_pkcs8_der(der)
                .map(Self::P256)
                .map_err(data_error("P-256 PKCS8")),
            EccCurve::P384 => p384::SecretKey::from_pkcs8_der(der)
                .map(Self::P384)
                .map_err(data_error("P-384 PKCS8")),
            EccCurve::P521 => Err(unsupported(curve)),
        }
    }

    pub(super) fn to_pkcs8(&self) -> Result<Vec<u8>, EngineError> {
        let doc = match self {
            Self::P256(secret) => secret.to_pkcs8_der(),
            Self::P384(secret) => secret.to_pkcs8_der(),
        };
        doc.map(|doc| doc.as_bytes().to_vec())
            .map_err(|err| EngineError::Operation(format!("PKCS8 encoding failed: {err}")))
    }
}

impl EcPublicKey {
    pub(super) fn curve(&self) -> EccCurve {
        match self {
            Self::P256(_) => EccCurve::P256,
            Self::P384(_) => EccCurve::P384,
        }
    }

    pub(super) fn from_spki(curve: EccCurve, der: &[u8]) -> Result<Self, EngineError> {
        match curve {
            EccCurve::P256 => p256::PublicKey::from_public_key_der(der)
                .map(Self::P256)
                .map_err(data_error("P-256 SPKI")),
            EccCurve::P384 => p384::PublicKey::from_public_key_der(der)
                .map(Self::P384)
                .map_err(data_error("P-384 SPKI")),
            EccCurve::P521 => Err(unsupported(curve)),
        }
    }

    /// Uncompressed SEC1 point
    pub(super) fn from_raw(curve: EccCurve, bytes: &[u8]) -> Result<Self, EngineError> {
        match curve {
            EccCurve::P256 => p256::PublicKey::from_sec1_bytes(bytes)
                .map(Self::P256)
                .map_err(data_error("P-256 point")),
            EccCurve::P384 => p384::PublicKey::from_sec1_bytes(bytes)
                .map(Self::P384)
                .map_err(data_error("P-384 point")),
            EccCurve::P521 => Err(unsupported(curve)),
        }
    }

    pub(super) fn to_spki(&self) -> Result<Vec<u8>, EngineError> {
        let doc = match self {
            Self::P256(public) => public.to_public_key_der(),
            Self::P384(public) => public.to_public_key_der(),
        };
        doc.map(|doc| doc.as_bytes().to_vec())
            .map_err(|err| EngineError::Operation(format!("SPKI encoding failed: {err}")))
    }

    pub(super) fn to_raw(&self) -> Vec<u8> {
        match self {
            Self::P256(public) => public.to_encoded_point(false).as_bytes().to_vec(),
            Self::P384(public) => public.to_encoded_point(false).as_bytes().to_vec(),
        }
    }
}
