// src/ecdh/mod.rs
//! ECDH key agreement
//!
//! Key pairs carry `deriveKey` on the private half only. Two parties that
//! exchange public keys derive the same AES key, which stays inside the
//! engine (derived keys are not extractable).

mod keys;
