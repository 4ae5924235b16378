// src/engine/symmetric.rs
//! AES-GCM / AES-CBC / AES-CTR over raw key bytes
//!
//! The AES variant is picked from the key length. GCM runs with a 16-byte
//! nonce and a 128-bit tag; CBC uses PKCS#7 padding; CTR supports 32, 64 or
//! 128 counter bits.

use ::aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{AesGcm, Nonce};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use ctr::{Ctr128BE, Ctr32BE, Ctr64BE};

use super::EngineError;
use crate::consts::IV_LENGTH;

macro_rules! with_aes {
    ($key:expr, $cipher:ident => $body:expr) => {
        match $key.len() {
            16 => {
                type $cipher = Aes128;
                $body
            }
            24 => {
                type $cipher = Aes192;
                $body
            }
            32 => {
                type $cipher = Aes256;
                $body
            }
            n => Err(EngineError::Data(format!("invalid AES key length: {} bits", n * 8))),
        }
    };
}

fn check_iv(iv: &[u8]) -> Result<(), EngineError> {
    if iv.len() != IV_LENGTH {
        return Err(EngineError::Operation(format!(
            "invalid IV length: expected {IV_LENGTH} bytes, got {}",
            iv.len()
        )));
    }
    Ok(())
}

fn invalid_key<E: std::fmt::Display>(err: E) -> EngineError {
    EngineError::Data(format!("cannot initialise AES: {err}"))
}

pub(super) fn gcm_encrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, EngineError> {
    check_iv(iv)?;
    with_aes!(key, Cipher => {
        let cipher = AesGcm::<Cipher, U16>::new_from_slice(key).map_err(invalid_key)?;
        cipher
            .encrypt(Nonce::<U16>::from_slice(iv), data)
            .map_err(|_| EngineError::Operation("AES-GCM encryption failed".into()))
    })
}

pub(super) fn gcm_decrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, EngineError> {
    check_iv(iv)?;
    with_aes!(key, Cipher => {
        let cipher = AesGcm::<Cipher, U16>::new_from_slice(key).map_err(invalid_key)?;
        cipher.decrypt(Nonce::<U16>::from_slice(iv), data).map_err(|_| {
            EngineError::Operation("AES-GCM authentication failed (wrong key or tampered data)".into())
        })
    })
}

pub(super) fn cbc_encrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, EngineError> {
    check_iv(iv)?;
    with_aes!(key, Cipher => {
        let encryptor = cbc::Encryptor::<Cipher>::new_from_slices(key, iv).map_err(invalid_key)?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(data))
    })
}

pub(super) fn cbc_decrypt(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, EngineError> {
    check_iv(iv)?;
    with_aes!(key, Cipher => {
        let decryptor = cbc::Decryptor::<Cipher>::new_from_slices(key, iv).map_err(invalid_key)?;
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| EngineError::Operation("AES-CBC decryption failed: bad padding".into()))
    })
}

/// Encrypt and decrypt are the same keystream XOR
pub(super) fn ctr_apply(
    key: &[u8],
    counter: &[u8],
    length: u32,
    data: &[u8],
) -> Result<Vec<u8>, EngineError> {
    check_iv(counter)?;
    let mut buf = data.to_vec();
    with_aes!(key, Cipher => {
        match length {
            32 => apply_keystream::<Ctr32BE<Cipher>>(key, counter, &mut buf),
            64 => apply_keystream::<Ctr64BE<Cipher>>(key, counter, &mut buf),
            128 => apply_keystream::<Ctr128BE<Cipher>>(key, counter, &mut buf),
            other => Err(EngineError::NotSupported(format!(
                "AES-CTR counter length {other}"
            ))),
        }
    })?;
    Ok(buf)
}

fn apply_keystream<C>(key: &[u8], counter: &[u8], buf: &mut [u8]) -> Result<(), EngineError>
where
    C: KeyIvInit + StreamCipher,
{
    let mut cipher = C::new_from_slices(key, counter).map_err(invalid_key)?;
    cipher
        .try_apply_keystream(buf)
        .map_err(|_| EngineError::Operation("AES-CTR counter exhausted".into()))
}
