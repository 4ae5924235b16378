// src/codec/buffer.rs
//! Byte-buffer joins and splits for `IV ‖ ciphertext` frames

/// Join two buffers into a fresh allocation, `a` first
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(a.len() + b.len());
    joined.extend_from_slice(a);
    joined.extend_from_slice(b);
    joined
}

/// Split off the first `n` bytes, or `None` if the buffer is shorter
pub fn split_prefix(buf: &[u8], n: usize) -> Option<(&[u8], &[u8])> {
    if buf.len() < n {
        return None;
    }
    Some(buf.split_at(n))
}
