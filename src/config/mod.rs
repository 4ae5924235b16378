// src/config/mod.rs
//! Configuration system for crypto-kit
//!
//! Central, lazy-loaded global config with TOML file + env var override.
//! Every field has a built-in default, so a partial file (or none at all)
//! still yields a complete [`Config`].

pub use app::{load, AsymmetricConfig, Config, EcdhConfig, SymmetricConfig};

mod app;
mod defaults;
