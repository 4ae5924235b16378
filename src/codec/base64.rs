// src/codec/base64.rs
//! Hand-rolled base64 codecs
//!
//! Encoding works on 3-byte groups packed big-endian into a 24-bit integer,
//! from which four 6-bit symbols are masked out. A 1- or 2-byte tail yields
//! two or three symbols. The standard flavour pads with `=`, the URL-safe
//! flavour does not.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine;

use super::CodecError;

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Standard alphabet, `=` padded
pub fn encode_base64(bytes: &[u8]) -> String {
    encode_with(bytes, STANDARD_ALPHABET, true)
}

/// URL-safe alphabet, unpadded
pub fn encode_url_safe_base64(bytes: &[u8]) -> String {
    encode_with(bytes, URL_SAFE_ALPHABET, false)
}

fn encode_with(bytes: &[u8], alphabet: &[u8; 64], pad: bool) -> String {
    let remainder = bytes.len() % 3;
    let main_length = bytes.len() - remainder;
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    let symbol = |index: u32| char::from(alphabet[index as usize]);

    for group in bytes[..main_length].chunks_exact(3) {
        let chunk =
            (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2]);

        out.push(symbol((chunk & 0xFC_0000) >> 18));
        out.push(symbol((chunk & 0x03_F000) >> 12));
        out.push(symbol((chunk & 0x00_0FC0) >> 6));
        out.push(symbol(chunk & 0x00_003F));
    }

    match remainder {
        1 => {
            let chunk = u32::from(bytes[main_length]);
            out.push(symbol((chunk & 0xFC) >> 2));
            // low 4 bits of the second symbol are zero
            out.push(symbol((chunk & 0x03) << 4));
            if pad {
                out.push_str("==");
            }
        }
        2 => {
            let chunk = (u32::from(bytes[main_length]) << 8) | u32::from(bytes[main_length + 1]);
            out.push(symbol((chunk & 0xFC00) >> 10));
            out.push(symbol((chunk & 0x03F0) >> 4));
            // low 2 bits of the third symbol are zero
            out.push(symbol((chunk & 0x000F) << 2));
            if pad {
                out.push('=');
            }
        }
        _ => {}
    }

    out
}

fn char_code_to_number(code: u8) -> Result<u32, CodecError> {
    match code {
        b'A'..=b'Z' => Ok(u32::from(code - b'A')),
        b'a'..=b'z' => Ok(u32::from(code - b'a') + 26),
        b'0'..=b'9' => Ok(u32::from(code) + 4),
        b'-' => Ok(62),
        b'_' => Ok(63),
        other => Err(CodecError::InvalidCharacter(other)),
    }
}

/// Decode unpadded URL-safe base64
///
/// A length of 1 mod 4 can never come out of the encoder and is rejected.
/// Remainders of 2 and 3 carry one and two trailing bytes. Leftover low bits
/// of the last character are dropped unchecked, so `"Zh"` decodes like `"Zg"`.
pub fn decode_url_safe_base64(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let input = encoded.as_bytes();
    let (main_length, rest_bytes) = match input.len() % 4 {
        0 => (input.len(), 0),
        1 => return Err(CodecError::InvalidLength(input.len())),
        2 => (input.len() - 2, 1),
        _ => (input.len() - 3, 2),
    };

    let mut out = Vec::with_capacity(main_length / 4 * 3 + rest_bytes);

    for quad in input[..main_length].chunks_exact(4) {
        let chunk = (char_code_to_number(quad[0])? << 18)
            | (char_code_to_number(quad[1])? << 12)
            | (char_code_to_number(quad[2])? << 6)
            | char_code_to_number(quad[3])?;

        out.push(((chunk & 0xFF_0000) >> 16) as u8);
        out.push(((chunk & 0x00_FF00) >> 8) as u8);
        out.push((chunk & 0x00_00FF) as u8);
    }

    let tail = &input[main_length..];
    match rest_bytes {
        1 => {
            let chunk = (char_code_to_number(tail[0])? << 2) | (char_code_to_number(tail[1])? >> 4);
            out.push((chunk & 0xFF) as u8);
        }
        2 => {
            let chunk = (char_code_to_number(tail[0])? << 10)
                | (char_code_to_number(tail[1])? << 4)
                | (char_code_to_number(tail[2])? >> 2);
            out.push(((chunk & 0xFF00) >> 8) as u8);
            out.push((chunk & 0x00FF) as u8);
        }
        _ => {}
    }

    Ok(out)
}

/// Decode padded standard base64
pub fn decode_standard_base64(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(encoded)?)
}
