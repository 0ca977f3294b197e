//! tests/kdf_tests.rs
//! PBKDF2-HMAC-SHA1 with the compiled-in parameters

mod common;
use common::{TEST_ITERATIONS, TEST_PASSWORD};

use pbecrypt_rs::aliases::{Aes256Key32, PasswordString, Salt32};
use pbecrypt_rs::consts::{PBKDF2_ITERATIONS, SALT};
use pbecrypt_rs::{derive_key, derive_pbkdf2_key, PbecryptError};

#[test]
fn derive_key_matches_known_answer() {
    let password = PasswordString::new(TEST_PASSWORD.to_string());
    let key = derive_key(&password).unwrap();

    let expected =
        hex::decode("929b65918d4c8993ce4f9dd338798ec0fc1c5da677179b78ddb1301fb5cfa31e").unwrap();
    assert_eq!(key.expose_secret().as_slice(), expected.as_slice());
}

#[test]
fn derive_key_is_deterministic() {
    let password = PasswordString::new("correct horse".to_string());
    let first = derive_key(&password).unwrap();
    let second = derive_key(&password).unwrap();
    assert_eq!(first.expose_secret(), second.expose_secret());
}

#[test]
fn derive_key_equals_explicit_parameters() {
    let password = PasswordString::new("correct horse".to_string());
    let salt = Salt32::new(SALT);
    let mut explicit = Aes256Key32::new([0u8; 32]);
    derive_pbkdf2_key(&password, &salt, PBKDF2_ITERATIONS, &mut explicit).unwrap();

    let key = derive_key(&password).unwrap();
    assert_eq!(key.expose_secret(), explicit.expose_secret());
}

#[test]
fn different_passwords_give_different_keys() {
    let a = derive_key(&PasswordString::new("pw123".to_string())).unwrap();
    let b = derive_key(&PasswordString::new("pw124".to_string())).unwrap();
    assert_ne!(a.expose_secret(), b.expose_secret());
}

#[test]
fn empty_password_is_not_rejected_by_kdf() {
    let key = derive_key(&PasswordString::new(String::new())).unwrap();
    let expected =
        hex::decode("87e69bd3c9a45412c24781bf1cb298a8e0eceb05eae3d7460c96ea3504ca69c7").unwrap();
    assert_eq!(key.expose_secret().as_slice(), expected.as_slice());
}

#[test]
fn unicode_password_uses_utf8_bytes() {
    let key = derive_key(&PasswordString::new("パスワード123!@#".to_string())).unwrap();
    let expected =
        hex::decode("30444fdd438d160dc2642ac4db8166953e0a51cdd6c798dca41854a1b46f5919").unwrap();
    assert_eq!(key.expose_secret().as_slice(), expected.as_slice());
}

#[test]
fn pbkdf2_zero_iterations_error() {
    let password = PasswordString::new("test".to_string());
    let salt = Salt32::new([0x11; 32]);
    let mut key = Aes256Key32::new([0u8; 32]);

    let err = derive_pbkdf2_key(&password, &salt, 0, &mut key).unwrap_err();
    assert!(matches!(err, PbecryptError::Crypto(_)));
}

#[test]
fn salt_changes_the_key() {
    let password = PasswordString::new("test".to_string());
    let mut a = Aes256Key32::new([0u8; 32]);
    let mut b = Aes256Key32::new([0u8; 32]);

    derive_pbkdf2_key(&password, &Salt32::new([0x11; 32]), TEST_ITERATIONS, &mut a).unwrap();
    derive_pbkdf2_key(&password, &Salt32::new([0x22; 32]), TEST_ITERATIONS, &mut b).unwrap();
    assert_ne!(a.expose_secret(), b.expose_secret());
}
