use gescom::config::jwt::JwtConfig;
use gescom::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn test_config(expiry: i64) -> JwtConfig {
    JwtConfig {
        secret: "unit-test-secret".to_string(),
        access_token_expiry: expiry,
    }
}

#[test]
fn test_create_and_verify_token() {
    let config = test_config(3600);
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "user@example.com", &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "user@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_token_wrong_secret() {
    let config = test_config(3600);
    let token = create_access_token(Uuid::new_v4(), "user@example.com", &config).unwrap();

    let other = JwtConfig {
        secret: "a-different-secret".to_string(),
        access_token_expiry: 3600,
    };
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_verify_expired_token() {
    // Expired an hour ago; default validation leeway is shorter than that.
    let config = test_config(-3600);
    let token = create_access_token(Uuid::new_v4(), "user@example.com", &config).unwrap();

    assert!(verify_token(&token, &config).is_err());
}

#[test]
fn test_verify_garbage_token() {
    let config = test_config(3600);
    assert!(verify_token("not.a.jwt", &config).is_err());
}
