use crate::{hash_password, verify_password};

#[test]
fn given_password_when_hashed_then_verify_succeeds_and_hash_differs() {
    let hash = hash_password("Abcdef1").unwrap();

    assert_ne!(hash, "Abcdef1");
    assert!(verify_password("Abcdef1", &hash));
}

#[test]
fn given_wrong_password_when_verified_then_false() {
    let hash = hash_password("Abcdef1").unwrap();

    assert!(!verify_password("Abcdef2", &hash));
}

#[test]
fn given_unparseable_hash_when_verified_then_false() {
    assert!(!verify_password("Abcdef1", "not-a-phc-string"));
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let first = hash_password("Abcdef1").unwrap();
    let second = hash_password("Abcdef1").unwrap();

    assert_ne!(first, second);
}
