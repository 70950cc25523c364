pub mod identity;
pub mod json;
