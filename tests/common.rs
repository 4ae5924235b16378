// tests/common.rs
//! Shared test utilities: logging setup and a ready-made facade

#![allow(dead_code)]

use crypto_kit::{Config, Crypto, OsRandom, RustCryptoEngine};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tracing output captured per test, filtered by `RUST_LOG`
pub fn setup() {
    #[cfg(feature = "logging")]
    init_tracing(EnvFilter::from_default_env());
}

/// Like [`setup`] with `crypto_kit=debug` regardless of `RUST_LOG`
pub fn setup_debug() {
    #[cfg(feature = "logging")]
    init_tracing(EnvFilter::new("crypto_kit=debug"));
}

#[cfg(feature = "logging")]
fn init_tracing(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(filter)
        .try_init();
}

/// Facade on the default engine with built-in defaults, independent of any
/// config file in the working directory
pub fn crypto() -> Crypto<RustCryptoEngine, OsRandom> {
    Crypto::with_config(RustCryptoEngine::new(), OsRandom, Config::default())
}

pub fn crypto_with(config: Config) -> Crypto<RustCryptoEngine, OsRandom> {
    Crypto::with_config(RustCryptoEngine::new(), OsRandom, config)
}
