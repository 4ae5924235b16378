// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::enums::{
    CharSize, CtrCounterLength, EccCurve, HashAlg, RsaSignScheme, SymmetricAlg, SymmetricKeyLength,
};
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_symmetric")]
    pub symmetric: SymmetricConfig,
    #[serde(default = "default_asymmetric")]
    pub asymmetric: AsymmetricConfig,
    #[serde(default = "default_ecdh")]
    pub ecdh: EcdhConfig,
}

/// `[symmetric]`: defaults for AES operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymmetricConfig {
    #[serde(default)]
    pub algorithm: SymmetricAlg,
    #[serde(default)]
    pub key_length: SymmetricKeyLength,
    /// Rightmost counter bits for AES-CTR
    #[serde(default)]
    pub counter_length: CtrCounterLength,
}

/// `[asymmetric]`: defaults for RSA operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsymmetricConfig {
    #[serde(default)]
    pub hash: HashAlg,
    #[serde(default)]
    pub char_size: CharSize,
    #[serde(default)]
    pub sign_scheme: RsaSignScheme,
    /// RSA-PSS salt length in bytes
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,
}

/// `[ecdh]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EcdhConfig {
    #[serde(default)]
    pub curve: EccCurve,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            symmetric: default_symmetric(),
            asymmetric: default_asymmetric(),
            ecdh: default_ecdh(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.asymmetric.salt_length == 0 {
            return Err(CryptoError::Config(
                "asymmetric.salt_length must be positive".into(),
            ));
        }
        Ok(())
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, read once from `CRYPTO_KIT_CONFIG` (or
/// `crypto-kit.toml`)
///
/// A missing or invalid file falls back to built-in defaults.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!(path = %config_path, "config file not found, using built-in defaults");
            return Config::default();
        }

        match Config::load_from_path(&config_path) {
            Ok(conf) => {
                debug!(path = %config_path, "loaded config");
                conf
            }
            Err(err) => {
                warn!(path = %config_path, error = %err, "ignoring invalid config, using built-in defaults");
                Config::default()
            }
        }
    })
}
