// src/engine/asymmetric.rs
//! RSA-OAEP encryption and RSA-PSS / RSASSA-PKCS1-v1_5 signatures

use ::rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use ::rsa::traits::PublicKeyParts;
use ::rsa::{BigUint, Oaep, Pkcs1v15Sign, Pss, RsaPrivateKey, RsaPublicKey};
use rand::rngs::OsRng;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use super::{EngineError, SignParams};
use crate::enums::HashAlg;

fn operation(err: ::rsa::Error) -> EngineError {
    EngineError::Operation(err.to_string())
}

fn oaep(hash: HashAlg) -> Oaep {
    match hash {
        HashAlg::Sha1 => Oaep::new::<Sha1>(),
        HashAlg::Sha256 => Oaep::new::<Sha256>(),
        HashAlg::Sha384 => Oaep::new::<Sha384>(),
        HashAlg::Sha512 => Oaep::new::<Sha512>(),
    }
}

fn pss(hash: HashAlg, salt_length: usize) -> Pss {
    match hash {
        HashAlg::Sha1 => Pss::new_with_salt::<Sha1>(salt_length),
        HashAlg::Sha256 => Pss::new_with_salt::<Sha256>(salt_length),
        HashAlg::Sha384 => Pss::new_with_salt::<Sha384>(salt_length),
        HashAlg::Sha512 => Pss::new_with_salt::<Sha512>(salt_length),
    }
}

fn pkcs1v15(hash: HashAlg) -> Pkcs1v15Sign {
    match hash {
        HashAlg::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        HashAlg::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlg::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlg::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

fn digest(hash: HashAlg, data: &[u8]) -> Vec<u8> {
    match hash {
        HashAlg::Sha1 => Sha1::digest(data).to_vec(),
        HashAlg::Sha256 => Sha256::digest(data).to_vec(),
        HashAlg::Sha384 => Sha384::digest(data).to_vec(),
        HashAlg::Sha512 => Sha512::digest(data).to_vec(),
    }
}

pub(super) fn generate(modulus_length: u32, public_exponent: &[u8]) -> Result<RsaPrivateKey, EngineError> {
    let exponent = BigUint::from_bytes_be(public_exponent);
    RsaPrivateKey::new_with_exp(&mut OsRng, modulus_length as usize, &exponent).map_err(operation)
}

pub(super) fn modulus_length(key: &RsaPublicKey) -> u32 {
    (key.size() * 8) as u32
}

pub(super) fn encrypt(key: &RsaPublicKey, hash: HashAlg, data: &[u8]) -> Result<Vec<u8>, EngineError> {
    key.encrypt(&mut OsRng, oaep(hash), data).map_err(operation)
}

pub(super) fn decrypt(key: &RsaPrivateKey, hash: HashAlg, data: &[u8]) -> Result<Vec<u8>, EngineError> {
    key.decrypt(oaep(hash), data).map_err(operation)
}

pub(super) fn sign(
    key: &RsaPrivateKey,
    params: &SignParams,
    hash: HashAlg,
    data: &[u8],
) -> Result<Vec<u8>, EngineError> {
    let hashed = digest(hash, data);
    match params {
        SignParams::RsaPss { salt_length } => key
            .sign_with_rng(&mut OsRng, pss(hash, *salt_length), &hashed)
            .map_err(operation),
        SignParams::RsassaPkcs1v15 => key.sign(pkcs1v15(hash), &hashed).map_err(operation),
    }
}

pub(super) fn verify(
    key: &RsaPublicKey,
    params: &SignParams,
    hash: HashAlg,
    signature: &[u8],
    data: &[u8],
) -> bool {
    let hashed = digest(hash, data);
    let outcome = match params {
        SignParams::RsaPss { salt_length } => key.verify(pss(hash, *salt_length), &hashed, signature),
        SignParams::RsassaPkcs1v15 => key.verify(pkcs1v15(hash), &hashed, signature),
    };
    outcome.is_ok()
}

pub(super) fn public_from_spki(der: &[u8]) -> Result<RsaPublicKey, EngineError> {
    RsaPublicKey::from_public_key_der(der)
        .map_err(|err| EngineError::Data(format!("invalid RSA SPKI: {err}")))
}

pub(super) fn private_from_pkcs8(der: &[u8]) -> Result<RsaPrivateKey, EngineError> {
    RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|err| EngineError::Data(format!("invalid RSA PKCS8: {err}")))
}

pub(super) fn public_to_spki(key: &RsaPublicKey) -> Result<Vec<u8>, EngineError> {
    key.to_public_key_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|err| EngineError::Operation(format!("SPKI encoding failed: {err}")))
}

pub(super) fn private_to_pkcs8(key: &RsaPrivateKey) -> Result<Vec<u8>, EngineError> {
    key.to_pkcs8_der()
        .map(|doc| doc.as_bytes().to_vec())
        .map_err(|err| EngineError::Operation(format!("PKCS8 encoding failed: {err}")))
}
