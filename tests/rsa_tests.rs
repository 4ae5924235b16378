// tests/rsa_tests.rs
mod common;

use crypto_kit::config::Config;
use crypto_kit::engine::{EngineError, KeyType};
use crypto_kit::enums::KeyUsage;
use crypto_kit::{
    encode_base64, CharSize, CryptoError, CryptoKey, HashAlg, KeyPair, KeyRef, KeyUse,
    RsaKeyLength, RsaSignScheme,
};
use once_cell::sync::Lazy;

static SIGNING: Lazy<KeyPair<CryptoKey>> = Lazy::new(|| {
    common::crypto()
        .make_rsa_key_pair(RsaKeyLength::B2048, None, KeyUse::Write)
        .unwrap()
});

static EXCHANGE: Lazy<KeyPair<CryptoKey>> = Lazy::new(|| {
    common::crypto()
        .make_rsa_key_pair(RsaKeyLength::B2048, None, KeyUse::Exchange)
        .unwrap()
});

#[test]
fn test_key_use_tags() {
    assert_eq!("exchange".parse::<KeyUse>().unwrap(), KeyUse::Exchange);
    assert_eq!("encryption".parse::<KeyUse>().unwrap(), KeyUse::Exchange);
    assert_eq!("write".parse::<KeyUse>().unwrap(), KeyUse::Write);
    assert_eq!("sign".parse::<KeyUse>().unwrap(), KeyUse::Write);
    assert!(matches!(
        "decrypt".parse::<KeyUse>(),
        Err(CryptoError::InvalidKeyUse(tag)) if tag == "decrypt"
    ));
}

#[test]
fn test_modulus_length_is_validated() {
    assert_eq!(RsaKeyLength::try_from(4096).unwrap().bits(), 4096);
    assert!(matches!(
        RsaKeyLength::try_from(1000),
        Err(CryptoError::InvalidModulusLength(1000))
    ));
}

#[test]
fn test_generated_usages_are_split_per_half() {
    assert_eq!(SIGNING.public_key.usages(), &[KeyUsage::Verify]);
    assert_eq!(SIGNING.private_key.usages(), &[KeyUsage::Sign]);
    assert_eq!(SIGNING.public_key.key_type(), KeyType::Public);

    assert_eq!(EXCHANGE.public_key.usages(), &[KeyUsage::Encrypt]);
    assert_eq!(EXCHANGE.private_key.usages(), &[KeyUsage::Decrypt]);
}

#[test]
fn test_sign_then_verify() {
    common::setup();
    let crypto = common::crypto();
    let msg = "signed statement";

    let signature = crypto.sign(msg, &SIGNING.private_key, None).unwrap();
    assert_eq!(signature.len(), 256);
    assert!(crypto
        .verify(msg, &signature, KeyRef::Handle(&SIGNING.public_key), None, None)
        .unwrap());
}

#[test]
fn test_tampered_message_does_not_verify() {
    let crypto = common::crypto();
    let msg = b"signed bytes".to_vec();
    let signature = crypto.sign(&msg, &SIGNING.private_key, None).unwrap();

    let mut tampered = msg.clone();
    tampered[0] ^= 0x01;
    assert!(!crypto
        .verify(&tampered, &signature, KeyRef::Handle(&SIGNING.public_key), None, None)
        .unwrap());
}

#[test]
fn test_char_size_must_match_between_sign_and_verify() {
    let crypto = common::crypto();
    let signature = crypto
        .sign("text", &SIGNING.private_key, Some(CharSize::B8))
        .unwrap();
    let public = KeyRef::Handle(&SIGNING.public_key);

    assert!(crypto
        .verify("text", &signature, public, Some(CharSize::B8), None)
        .unwrap());
    assert!(!crypto
        .verify("text", &signature, public, Some(CharSize::B16), None)
        .unwrap());
}

#[test]
fn test_verify_with_text_public_key_and_base64_signature() {
    let crypto = common::crypto();
    let signature = encode_base64(&crypto.sign("hi", &SIGNING.private_key, None).unwrap());

    let bare = crypto.get_public_key(&SIGNING).unwrap();
    let pem = crypto.export_public_key_pem(&SIGNING.public_key).unwrap();
    assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));

    for text_key in [bare.as_str(), pem.as_str()] {
        assert!(crypto
            .verify("hi", signature.as_str(), KeyRef::Encoded(text_key), None, None)
            .unwrap());
    }
}

#[test]
fn test_private_key_pem_round_trip() {
    let crypto = common::crypto();
    let pem = crypto.export_private_key_pem(&SIGNING.private_key).unwrap();
    assert!(pem.ends_with("\n-----END PRIVATE KEY-----"));

    let reimported = crypto
        .import_rsa_private_key(&pem, None, KeyUse::Write)
        .unwrap();
    let signature = crypto.sign("again", &reimported, None).unwrap();
    assert!(crypto
        .verify("again", &signature, KeyRef::Handle(&SIGNING.public_key), None, None)
        .unwrap());
}

#[test]
fn test_oaep_round_trip() {
    let crypto = common::crypto();
    let ciphertext = crypto
        .encrypt_rsa("wrap me", KeyRef::Handle(&EXCHANGE.public_key), Some(CharSize::B8), None)
        .unwrap();
    let plaintext = crypto
        .decrypt_rsa(encode_base64(&ciphertext).as_str(), &EXCHANGE.private_key)
        .unwrap();
    assert_eq!(plaintext, b"wrap me");
}

#[test]
fn test_oaep_with_text_public_key() {
    let crypto = common::crypto();
    let pem = crypto.export_public_key_pem(&EXCHANGE.public_key).unwrap();
    let ciphertext = crypto
        .encrypt_rsa(&[9u8; 32], KeyRef::Encoded(&pem), None, Some(HashAlg::Sha256))
        .unwrap();
    assert_eq!(
        crypto.decrypt_rsa(&ciphertext, &EXCHANGE.private_key).unwrap(),
        vec![9u8; 32]
    );
}

#[test]
fn test_oaep_rejects_oversize_message() {
    let crypto = common::crypto();
    // 2048-bit OAEP with SHA-256 fits at most 190 bytes
    let err = crypto
        .encrypt_rsa(&[0u8; 191], KeyRef::Handle(&EXCHANGE.public_key), None, None)
        .unwrap_err();
    assert!(matches!(err, CryptoError::Engine(_)));
}

#[test]
fn test_oaep_hash_mismatch_fails_to_decrypt() {
    let crypto = common::crypto();
    let spki = crypto.get_public_key(&EXCHANGE).unwrap();
    let ciphertext = crypto
        .encrypt_rsa("x", KeyRef::Encoded(&spki), None, Some(HashAlg::Sha1))
        .unwrap();
    assert!(crypto.decrypt_rsa(&ciphertext, &EXCHANGE.private_key).is_err());
}

#[test]
fn test_keys_are_bound_to_their_use() {
    let crypto = common::crypto();
    let err = crypto.sign("x", &EXCHANGE.private_key, None).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::InvalidAccess(_))
    ));

    let err = crypto
        .encrypt_rsa("x", KeyRef::Handle(&SIGNING.public_key), None, None)
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::InvalidAccess(_))
    ));

    // the same SPKI can be re-imported for the other use
    let spki = crypto.get_public_key(&EXCHANGE).unwrap();
    let key = crypto
        .import_rsa_public_key(&spki, None, KeyUse::Write)
        .unwrap();
    assert_eq!(key.usages(), &[KeyUsage::Verify]);
}

#[test]
fn test_import_rejects_malformed_key() {
    let crypto = common::crypto();
    let err = crypto
        .import_rsa_public_key(&encode_base64(b"not a key"), None, KeyUse::Exchange)
        .unwrap_err();
    assert!(matches!(err, CryptoError::Engine(EngineError::Data(_))));
}

#[test]
fn test_pkcs1v15_sign_scheme_from_config() {
    let mut config = Config::default();
    config.asymmetric.sign_scheme = RsaSignScheme::Pkcs1v15;
    let crypto = common::crypto_with(config);

    let pair = crypto
        .make_rsa_key_pair(RsaKeyLength::B1024, Some(HashAlg::Sha512), KeyUse::Write)
        .unwrap();
    let first = crypto.sign("deterministic", &pair.private_key, None).unwrap();
    let second = crypto.sign("deterministic", &pair.private_key, None).unwrap();
    assert_eq!(first, second);
    assert!(crypto
        .verify("deterministic", &first, KeyRef::Handle(&pair.public_key), None, None)
        .unwrap());

    // keys generated for PSS do not accept PKCS#1 v1.5 parameters
    let err = crypto.sign("x", &SIGNING.private_key, None).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::InvalidAccess(_))
    ));
}
