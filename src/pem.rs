// src/pem.rs
//! PEM-style envelopes for exported key material
//!
//! The envelope is a single base64 line between literal header and footer
//! lines. Stripping removes exactly that literal text and leaves the body
//! untouched; text without the expected header or footer passes through.

use crate::codec::encode_base64;
use crate::consts::{PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};

fn header(label: &str) -> String {
    format!("-----BEGIN {label}-----\n")
}

fn footer(label: &str) -> String {
    format!("\n-----END {label}-----")
}

pub fn wrap_pem(bytes: &[u8], label: &str) -> String {
    format!("{}{}{}", header(label), encode_base64(bytes), footer(label))
}

pub fn strip_pem<'a>(text: &'a str, label: &str) -> &'a str {
    let body = text.strip_prefix(header(label).as_str()).unwrap_or(text);
    body.strip_suffix(footer(label).as_str()).unwrap_or(body)
}

pub fn strip_public_key_header(text: &str) -> &str {
    strip_pem(text, PUBLIC_KEY_LABEL)
}

pub fn strip_private_key_header(text: &str) -> &str {
    strip_pem(text, PRIVATE_KEY_LABEL)
}
