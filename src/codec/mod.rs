// src/codec/mod.rs
//! Binary encoding utilities: no keys, no engine
//!
//! Everything here is a pure transformation between byte buffers and
//! transportable strings: the hand-written base64 codecs, code-unit string
//! conversion and buffer joining/splitting.

mod base64;
mod buffer;
mod text;

use thiserror::Error;

pub use self::base64::{
    decode_standard_base64, decode_url_safe_base64, encode_base64, encode_url_safe_base64,
};
pub use buffer::{concat, split_prefix};
pub use text::{buffer_to_string, string_to_buffer};

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid url safe base64 length {0}: length mod 4 must not be 1")]
    InvalidLength(usize),

    #[error("invalid char code in url safe base64: {0}")]
    InvalidCharacter(u8),

    #[error("odd byte length {0} cannot hold 16-bit code units")]
    OddLength(usize),

    #[error("unpaired UTF-16 surrogate {0:#06x}")]
    InvalidUtf16(u16),

    #[error("base64 decode error: {0}")]
    Base64(#[from] ::base64::DecodeError),
}
