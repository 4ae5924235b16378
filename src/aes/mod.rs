// src/aes/mod.rs
//! Symmetric cipher orchestration
//!
//! AES-GCM, AES-CBC and AES-CTR share one wire format:
//! `IV (16 bytes) ‖ engine ciphertext`, base64 encoded for the string
//! variants. For AES-CTR the IV bytes are the initial counter block.

mod keys;
mod operations;

use crate::engine::CipherParams;
use crate::enums::{KeyUsage, SymmetricAlg};

/// Usages of every AES key this crate creates
pub(crate) const AES_KEY_USAGES: [KeyUsage; 2] = [KeyUsage::Encrypt, KeyUsage::Decrypt];

/// Engine parameters for one AES call
pub(crate) fn cipher_params(
    algorithm: SymmetricAlg,
    iv: &[u8],
    counter_length: u32,
) -> CipherParams<'_> {
    match algorithm {
        SymmetricAlg::AesGcm => CipherParams::AesGcm { iv },
        SymmetricAlg::AesCbc => CipherParams::AesCbc { iv },
        SymmetricAlg::AesCtr => CipherParams::AesCtr {
            counter: iv,
            length: counter_length,
        },
    }
}
