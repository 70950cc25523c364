pub mod bearer;
pub mod claims;
pub mod error;
pub mod identity;
pub mod password;
pub mod policy;
pub mod token;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity::Identity;
pub use password::{hash_password, verify_password};
pub use token::TokenService;

#[cfg(test)]
mod tests;
