// tests/ecdh_tests.rs
mod common;

use crypto_kit::engine::{EngineError, KeyType};
use crypto_kit::enums::KeyUsage;
use crypto_kit::{CryptoError, EccCurve, KeyRef, SymmetricAlg, SymmetricKeyLength, SymmetricOptions};

#[test]
fn test_both_parties_derive_the_same_key() {
    common::setup();
    let crypto = common::crypto();
    let opts = SymmetricOptions::new();

    for curve in [None, Some(EccCurve::P256), Some(EccCurve::P384)] {
        let alice = crypto.generate_ecdh_key_pair(curve).unwrap();
        let bob = crypto.generate_ecdh_key_pair(curve).unwrap();

        let alice_key = crypto
            .derive_shared_symmetric_key(&bob.public_key, &alice.private_key, &opts)
            .unwrap();
        let bob_key = crypto
            .derive_shared_symmetric_key(&alice.public_key, &bob.private_key, &opts)
            .unwrap();

        let ciphertext = crypto
            .encrypt_aes("hello bob", KeyRef::Handle(&alice_key), &opts)
            .unwrap();
        assert_eq!(
            crypto
                .decrypt_aes(ciphertext.as_str(), KeyRef::Handle(&bob_key), &opts)
                .unwrap(),
            "hello bob"
        );
    }
}

#[test]
fn test_derived_key_follows_options_and_is_not_extractable() {
    let crypto = common::crypto();
    let opts = SymmetricOptions::new()
        .with_algorithm(SymmetricAlg::AesCbc)
        .with_length(SymmetricKeyLength::B128);
    let alice = crypto.generate_ecdh_key_pair(None).unwrap();
    let bob = crypto.generate_ecdh_key_pair(None).unwrap();

    let key = crypto
        .derive_shared_symmetric_key(&bob.public_key, &alice.private_key, &opts)
        .unwrap();
    assert!(!key.is_extractable());
    assert_eq!(key.usages(), &[KeyUsage::Encrypt, KeyUsage::Decrypt]);
    assert!(matches!(
        crypto.export_aes_key(&key),
        Err(CryptoError::Engine(EngineError::InvalidAccess(_)))
    ));

    let framed = crypto.encrypt_aes_bytes("cbc", KeyRef::Handle(&key), &opts).unwrap();
    assert_eq!(
        crypto.decrypt_aes(&framed, KeyRef::Handle(&key), &opts).unwrap(),
        "cbc"
    );
}

#[test]
fn test_pair_usages() {
    let crypto = common::crypto();
    let pair = crypto.generate_ecdh_key_pair(Some(EccCurve::P256)).unwrap();
    assert!(pair.public_key.usages().is_empty());
    assert_eq!(pair.private_key.usages(), &[KeyUsage::DeriveKey]);
    assert_eq!(pair.private_key.key_type(), KeyType::Private);

    // public keys cannot derive
    let err = crypto
        .derive_shared_symmetric_key(&pair.private_key, &pair.public_key, &SymmetricOptions::new())
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::InvalidAccess(_))
    ));
}

#[test]
fn test_pem_exported_keys_reimport() {
    let crypto = common::crypto();
    let opts = SymmetricOptions::new();
    let alice = crypto.generate_ecdh_key_pair(None).unwrap();
    let bob = crypto.generate_ecdh_key_pair(None).unwrap();

    let bob_public_pem = crypto.export_public_key_pem(&bob.public_key).unwrap();
    let alice_private_pem = crypto.export_private_key_pem(&alice.private_key).unwrap();

    let bob_public = crypto.import_ecdh_public_key(&bob_public_pem, None).unwrap();
    let alice_private = crypto
        .import_ecdh_private_key(&alice_private_pem, None)
        .unwrap();

    let from_imported = crypto
        .derive_shared_symmetric_key(&bob_public, &alice_private, &opts)
        .unwrap();
    let bob_key = crypto
        .derive_shared_symmetric_key(&alice.public_key, &bob.private_key, &opts)
        .unwrap();

    let framed = crypto
        .encrypt_aes_bytes("re-imported", KeyRef::Handle(&from_imported), &opts)
        .unwrap();
    assert_eq!(
        crypto.decrypt_aes(&framed, KeyRef::Handle(&bob_key), &opts).unwrap(),
        "re-imported"
    );
}

#[test]
fn test_import_on_wrong_curve_fails() {
    let crypto = common::crypto();
    let pair = crypto.generate_ecdh_key_pair(Some(EccCurve::P256)).unwrap();
    let pem = crypto.export_public_key_pem(&pair.public_key).unwrap();

    let err = crypto
        .import_ecdh_public_key(&pem, Some(EccCurve::P384))
        .unwrap_err();
    assert!(matches!(err, CryptoError::Engine(EngineError::Data(_))));
}

#[test]
fn test_curve_mismatch_is_rejected() {
    let crypto = common::crypto();
    let p256 = crypto.generate_ecdh_key_pair(Some(EccCurve::P256)).unwrap();
    let p384 = crypto.generate_ecdh_key_pair(Some(EccCurve::P384)).unwrap();

    let err = crypto
        .derive_shared_symmetric_key(&p384.public_key, &p256.private_key, &SymmetricOptions::new())
        .unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::InvalidAccess(_))
    ));
}

#[test]
fn test_p521_is_not_supported() {
    let crypto = common::crypto();
    let err = crypto.generate_ecdh_key_pair(Some(EccCurve::P521)).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Engine(EngineError::NotSupported(_))
    ));
}
