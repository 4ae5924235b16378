// tests/config_tests.rs
mod common;

use std::io::Write;

use crypto_kit::config::Config;
use crypto_kit::{
    CharSize, CryptoError, CtrCounterLength, EccCurve, HashAlg, KeyRef, RsaSignScheme, SymmetricAlg,
    SymmetricKeyLength, SymmetricOptions,
};

#[test]
fn test_builtin_defaults() {
    let config = Config::default();
    assert_eq!(config.symmetric.algorithm, SymmetricAlg::AesGcm);
    assert_eq!(config.symmetric.key_length, SymmetricKeyLength::B256);
    assert_eq!(config.symmetric.counter_length, CtrCounterLength::B64);
    assert_eq!(config.asymmetric.hash, HashAlg::Sha256);
    assert_eq!(config.asymmetric.char_size, CharSize::B16);
    assert_eq!(config.asymmetric.sign_scheme, RsaSignScheme::Pss);
    assert_eq!(config.asymmetric.salt_length, 128);
    assert_eq!(config.ecdh.curve, EccCurve::P384);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_and_partial_files_fill_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());

    let config = Config::from_toml_str(
        r#"
        [symmetric]
        algorithm = "AES-CTR"

        [asymmetric]
        sign_scheme = "RSASSA-PKCS1-v1_5"
        "#,
    )
    .unwrap();
    assert_eq!(config.symmetric.algorithm, SymmetricAlg::AesCtr);
    assert_eq!(config.symmetric.key_length, SymmetricKeyLength::B256);
    assert_eq!(config.asymmetric.sign_scheme, RsaSignScheme::Pkcs1v15);
    assert_eq!(config.asymmetric.hash, HashAlg::Sha256);
    assert_eq!(config.ecdh.curve, EccCurve::P384);
}

#[test]
fn test_load_full_file_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[symmetric]
algorithm = "AES-CBC"
key_length = 128
counter_length = 32

[asymmetric]
hash = "SHA-512"
char_size = 8
salt_length = 32

[ecdh]
curve = "P-256"
"#
    )
    .unwrap();

    let config = Config::load_from_path(file.path()).unwrap();
    assert_eq!(config.symmetric.algorithm, SymmetricAlg::AesCbc);
    assert_eq!(config.symmetric.key_length, SymmetricKeyLength::B128);
    assert_eq!(config.symmetric.counter_length, CtrCounterLength::B32);
    assert_eq!(config.asymmetric.hash, HashAlg::Sha512);
    assert_eq!(config.asymmetric.char_size, CharSize::B8);
    assert_eq!(config.asymmetric.salt_length, 32);
    assert_eq!(config.ecdh.curve, EccCurve::P256);
}

#[test]
fn test_invalid_values_are_rejected() {
    for toml in [
        "[symmetric]\nkey_length = 100",
        "[symmetric]\nalgorithm = \"AES-XTS\"",
        "[asymmetric]\nchar_size = 32",
        "[ecdh]\ncurve = \"secp256k1\"",
        "[symmetric]\nunknown = 1",
        "[symmetric]\ncounter_length = 0",
        "[symmetric]\ncounter_length = 20",
        "[symmetric]\ncounter_length = 129",
    ] {
        assert!(
            matches!(Config::from_toml_str(toml), Err(CryptoError::Toml(_))),
            "{toml}"
        );
    }

    assert!(matches!(
        Config::from_toml_str("[asymmetric]\nsalt_length = 0"),
        Err(CryptoError::Config(_))
    ));
}

#[test]
fn test_counter_length_accepts_only_ctr_widths() {
    for (bits, expected) in [
        (32, CtrCounterLength::B32),
        (64, CtrCounterLength::B64),
        (128, CtrCounterLength::B128),
    ] {
        let config =
            Config::from_toml_str(&format!("[symmetric]\ncounter_length = {bits}")).unwrap();
        assert_eq!(config.symmetric.counter_length, expected);
    }

    let err = Config::from_toml_str("[symmetric]\ncounter_length = 20").unwrap_err();
    assert!(err.to_string().contains("counter length 20"), "{err}");
    assert!(matches!(
        CtrCounterLength::try_from(20),
        Err(CryptoError::InvalidCounterLength(20))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from_path(dir.path().join("absent.toml")),
        Err(CryptoError::Io(_))
    ));
}

#[test]
fn test_facade_applies_configured_defaults() {
    let config = Config::from_toml_str(
        "[symmetric]\nalgorithm = \"AES-CTR\"\nkey_length = 192\ncounter_length = 128",
    )
    .unwrap();
    let crypto = common::crypto_with(config);
    let opts = SymmetricOptions::new();

    let key = crypto.generate_aes_key(&opts).unwrap();
    let exported = crypto.export_aes_key(&key).unwrap();
    assert_eq!(crypto_kit::decode_standard_base64(&exported).unwrap().len(), 24);

    // CTR output is as long as its input
    let framed = crypto.encrypt_aes_bytes("ab", KeyRef::Handle(&key), &opts).unwrap();
    assert_eq!(framed.len(), 16 + 4);
    assert_eq!(
        crypto.decrypt_aes(&framed, KeyRef::Handle(&key), &opts).unwrap(),
        "ab"
    );
}

#[test]
fn test_default_facade_uses_global_config() {
    let crypto = crypto_kit::Crypto::default();
    assert_eq!(crypto.config(), crypto_kit::load_config());
    assert!(std::ptr::eq(crypto_kit::load_config(), crypto_kit::load_config()));
}
