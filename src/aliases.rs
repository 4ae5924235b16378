// src/aliases.rs
//! Re-exports secure-gate's secret wrappers
//!
//! Raw symmetric key bytes live in these types inside the default engine
//! so they are zeroized when the last key handle drops.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(SecretKeyBytes, Vec<u8>); // raw AES key material (16, 24 or 32 bytes)
