use crate::{AuthError, bearer_token};

#[test]
fn given_missing_header_when_parsed_then_missing_header_error() {
    let result = bearer_token(None);

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn given_basic_scheme_when_parsed_then_invalid_scheme_error() {
    let result = bearer_token(Some("Basic dXNlcjpwYXNz"));

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_empty_token_when_parsed_then_token_missing_error() {
    let result = bearer_token(Some("Bearer   "));

    assert!(matches!(result, Err(AuthError::TokenMissing { .. })));
}

#[test]
fn given_bearer_token_when_parsed_then_token_returned_trimmed() {
    let result = bearer_token(Some("Bearer abc.def.ghi "));

    assert_eq!(result.unwrap(), "abc.def.ghi");
}
