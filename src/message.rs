// src/message.rs
//! Message normalization
//!
//! Every cipher entry point accepts a [`Message`] and turns it into a fresh
//! canonical byte buffer here, so encrypt and decrypt call sites can never
//! disagree about how text became bytes.

use crate::codec::{decode_standard_base64, string_to_buffer};
use crate::enums::{CharSize, Encoding};
use crate::error::Result;

/// Caller-supplied input to a cipher or signature operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(text)
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Message::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Message<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Message::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Message<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Message::Bytes(bytes.as_slice())
    }
}

/// Turn `msg` into canonical bytes for `target`
///
/// Byte input is copied verbatim regardless of `target`; only text is
/// interpreted.
pub fn normalize(msg: Message<'_>, target: Encoding) -> Result<Vec<u8>> {
    match msg {
        Message::Bytes(bytes) => Ok(bytes.to_vec()),
        Message::Text(text) => match target {
            Encoding::Utf8 => Ok(string_to_buffer(text, CharSize::B8)),
            Encoding::Utf16 => Ok(string_to_buffer(text, CharSize::B16)),
            Encoding::Base64 => Ok(decode_standard_base64(text)?),
        },
    }
}

pub fn normalize_utf8(msg: Message<'_>) -> Result<Vec<u8>> {
    normalize(msg, Encoding::Utf8)
}

pub fn normalize_utf16(msg: Message<'_>) -> Result<Vec<u8>> {
    normalize(msg, Encoding::Utf16)
}

pub fn normalize_base64(msg: Message<'_>) -> Result<Vec<u8>> {
    normalize(msg, Encoding::Base64)
}

pub fn normalize_unicode(msg: Message<'_>, size: CharSize) -> Result<Vec<u8>> {
    normalize(msg, Encoding::from(size))
}
