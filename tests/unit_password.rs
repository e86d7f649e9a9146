use gescom::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify_password() {
    let password = "correct horse battery staple";
    let hash = hash_password(password).unwrap();

    assert_ne!(hash, password);
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("wrong password", &hash).unwrap());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    // bcrypt salts per call
    assert_ne!(hash1, hash2);
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");
    assert!(result.is_err());
}
