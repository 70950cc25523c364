use crate::AuthConfig;

#[test]
fn given_missing_secret_when_validated_then_error() {
    let config = AuthConfig::default();

    assert!(config.validate().is_err());
}

#[test]
fn given_short_secret_when_validated_then_error() {
    let config = AuthConfig {
        jwt_secret: Some("too-short".to_string()),
        ..AuthConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_valid_secret_when_validated_then_ok() {
    let config = AuthConfig {
        jwt_secret: Some("0123456789abcdef0123456789abcdef".to_string()),
        ..AuthConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn given_zero_ttl_when_validated_then_error() {
    let config = AuthConfig {
        jwt_secret: Some("0123456789abcdef0123456789abcdef".to_string()),
        token_ttl_days: 0,
    };

    assert!(config.validate().is_err());
}
