// src/consts.rs
//! Shared constants: framing sizes and algorithm parameters

/// Length of the IV (or AES-CTR initial counter block) prepended to every ciphertext
pub const IV_LENGTH: usize = 16;

/// RSA-PSS salt length in bytes
pub const SALT_LENGTH: usize = 128;

/// RSA public exponent 65537, big-endian
pub const PUBLIC_EXPONENT: [u8; 3] = [0x01, 0x00, 0x01];

/// PEM label for SPKI public keys
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// PEM label for PKCS8 private keys
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CRYPTO_KIT_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "crypto-kit.toml";
