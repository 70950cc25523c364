pub mod address;
pub mod card;
pub mod image;
pub mod person_name;
pub mod user;
