mod common;

use common::init_tracing;
use common::TEST_COST;
use neonhire_auth::is_password_too_long;
use neonhire_auth::BcryptHasher;
use neonhire_auth::CredentialHasher;
use neonhire_auth::PasswordError;
use neonhire_auth::PasswordHasher;
use neonhire_auth::PasswordScheme;
use neonhire_auth::Sha256BcryptHasher;

const SAMPLE_PASSWORDS: &[&str] = &[
    "correct horse",
    "",
    "пароль с пробелами",
    "🔐 emoji secret",
    "tab\tand\nnewline",
];

#[test]
fn test_both_schemes_verify_their_own_hashes() {
    init_tracing();

    for scheme in [PasswordScheme::Bcrypt, PasswordScheme::Sha256Bcrypt] {
        let hasher = PasswordHasher::new(scheme, TEST_COST);

        for password in SAMPLE_PASSWORDS {
            let hash = hasher.hash(password).expect("Failed to hash password");

            assert!(hasher.verify(password, &hash), "{:?}: {:?}", scheme, password);
            assert!(!hasher.verify("definitely different", &hash));
        }
    }
}

#[test]
fn test_correct_horse() {
    init_tracing();
    let hasher = BcryptHasher::new(TEST_COST);

    let hash = hasher.hash("correct horse").expect("Failed to hash password");

    assert!(hasher.verify("correct horse", &hash));
    assert!(!hasher.verify("wrong horse", &hash));
}

#[test]
fn test_direct_scheme_rejects_73_multibyte_bytes() {
    init_tracing();
    let hasher = BcryptHasher::new(TEST_COST);
    // 24 three-byte characters plus one ASCII byte
    let password = format!("{}x", "€".repeat(24));

    assert_eq!(password.len(), 73);
    assert!(is_password_too_long(&password));
    assert!(hasher.is_too_long(&password));
    assert_eq!(
        hasher.hash(&password),
        Err(PasswordError::TooLong {
            max: 72,
            actual: 73
        })
    );
}

#[test]
fn test_prehash_scheme_has_no_length_ceiling() {
    init_tracing();
    let hasher = Sha256BcryptHasher::new(TEST_COST);
    let password = "€".repeat(500);

    assert!(!hasher.is_too_long(&password));
    let hash = hasher.hash(&password).expect("Failed to hash password");
    assert!(hasher.verify(&password, &hash));
}

#[test]
fn test_stored_hash_is_modular_crypt_string() {
    init_tracing();

    for scheme in [PasswordScheme::Bcrypt, PasswordScheme::Sha256Bcrypt] {
        let hash = PasswordHasher::new(scheme, TEST_COST)
            .hash("password")
            .expect("Failed to hash password");

        assert_eq!(hash.len(), 60);
        assert!(hash.starts_with("$2b$04$"));
    }
}

#[test]
fn test_switching_scheme_fails_closed() {
    init_tracing();
    let direct = PasswordHasher::new(PasswordScheme::Bcrypt, TEST_COST);
    let prehash = PasswordHasher::new(PasswordScheme::Sha256Bcrypt, TEST_COST);

    let hash = direct.hash("correct horse").expect("Failed to hash password");

    assert!(!prehash.verify("correct horse", &hash));
}

#[test]
fn test_foreign_hash_formats_do_not_verify() {
    init_tracing();
    let hasher = PasswordHasher::new(PasswordScheme::Bcrypt, TEST_COST);

    for stored in [
        "",
        "plaintext",
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g",
        "$2b$04$tooshort",
    ] {
        assert!(!hasher.verify("plaintext", stored), "{:?}", stored);
    }
}
