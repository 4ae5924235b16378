// src/codec/text.rs
//! Code-unit views of strings
//!
//! Strings are walked as UTF-16 code units. With 8-bit units each code unit
//! keeps only its low byte; with 16-bit units each unit is written
//! little-endian.

use crate::enums::CharSize;

use super::CodecError;

pub fn string_to_buffer(s: &str, size: CharSize) -> Vec<u8> {
    match size {
        CharSize::B8 => s.encode_utf16().map(|unit| (unit & 0xFF) as u8).collect(),
        CharSize::B16 => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
    }
}

pub fn buffer_to_string(bytes: &[u8], size: CharSize) -> Result<String, CodecError> {
    match size {
        CharSize::B8 => Ok(bytes.iter().copied().map(char::from).collect()),
        CharSize::B16 => {
            if bytes.len() % 2 != 0 {
                return Err(CodecError::OddLength(bytes.len()));
            }
            let units = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .collect::<Result<String, _>>()
                .map_err(|err| CodecError::InvalidUtf16(err.unpaired_surrogate()))
        }
    }
}
