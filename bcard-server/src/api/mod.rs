pub mod cards;
pub mod error;
pub mod extractors;
pub mod users;
