pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::address::Address;
pub use models::card::Card;
pub use models::image::Image;
pub use models::person_name::PersonName;
pub use models::user::User;

pub use error_location::ErrorLocation;
