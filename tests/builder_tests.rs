//! tests/builder_tests.rs
//! PBKDF2 builder

mod common;
use common::TEST_ITERATIONS;

use pbecrypt_rs::aliases::{Aes256Key32, PasswordString};
use pbecrypt_rs::consts::{PBKDF2_ITERATIONS, SALT};
use pbecrypt_rs::{derive_key, Pbkdf2Builder};

#[test]
fn defaults_match_file_format() {
    let builder = Pbkdf2Builder::default();
    assert_eq!(builder.iterations(), PBKDF2_ITERATIONS);
    assert_eq!(builder.salt(), &SALT);
    assert!(builder.is_default());
}

#[test]
fn default_builder_matches_derive_key() {
    let password = PasswordString::new("hunter2".to_string());
    let from_builder = Pbkdf2Builder::new().derive_secure_new(&password).unwrap();
    let direct = derive_key(&password).unwrap();
    assert_eq!(from_builder.expose_secret(), direct.expose_secret());
}

#[test]
fn custom_params_known_answer() {
    let password = PasswordString::new("hunter2".to_string());

    let mut key = Aes256Key32::new([0u8; 32]);
    Pbkdf2Builder::new()
        .with_iterations(1)
        .with_salt([0x55u8; 32])
        .derive_secure(&password, &mut key)
        .unwrap();

    let expected =
        hex::decode("39d55fc6f4662336fa640e9c761ec449d140ecf275a364ec35757421c4087419").unwrap();
    assert_eq!(key.expose_secret().as_slice(), expected.as_slice());
}

#[test]
fn zero_iterations_clamped_to_one() {
    let builder = Pbkdf2Builder::new().with_iterations(0);
    assert_eq!(builder.iterations(), 1);
    assert!(!builder.is_default());

    let password = PasswordString::new("test".to_string());
    assert!(builder.derive_secure_new(&password).is_ok());
}

#[test]
fn overridden_params_change_the_key() {
    let password = PasswordString::new("hunter2".to_string());
    let fast = Pbkdf2Builder::new()
        .with_iterations(TEST_ITERATIONS)
        .derive_secure_new(&password)
        .unwrap();
    let real = derive_key(&password).unwrap();
    assert_ne!(fast.expose_secret(), real.expose_secret());
}
