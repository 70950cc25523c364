use serde::Serialize;

/// Successful login: a signed bearer token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
