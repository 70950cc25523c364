//! Field-level validation rules.
//!
//! These mirror the schema rules the API enforces before any business logic
//! runs. Each check returns a `CoreError::Validation` naming the offending
//! field so the API layer can collect them into a details list.

use crate::{Address, CoreError, Image, PersonName, Result};

pub const NAME_PART_MIN: usize = 2;
pub const NAME_PART_MAX: usize = 50;
pub const PHONE_MIN: usize = 7;
pub const PHONE_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 6;
pub const TITLE_MAX: usize = 256;
pub const DESCRIPTION_MAX: usize = 1024;

/// Generated bizNumbers are always 7 digits.
pub const BIZ_NUMBER_MIN: i64 = 1_000_000;
pub const BIZ_NUMBER_MAX: i64 = 9_999_999;

pub fn validate_name(name: &PersonName) -> Result<()> {
    validate_text("name.first", &name.first, NAME_PART_MIN, NAME_PART_MAX)?;
    if let Some(ref middle) = name.middle {
        if middle.chars().count() > NAME_PART_MAX {
            return Err(CoreError::validation(
                "name.middle",
                format!("must be at most {} characters", NAME_PART_MAX),
            ));
        }
    }
    validate_text("name.last", &name.last, NAME_PART_MIN, NAME_PART_MAX)
}

/// Phone numbers: 7-20 characters from digits, `-`, `+`, `(`, `)`, space.
pub fn validate_phone(phone: &str) -> Result<()> {
    let len = phone.chars().count();
    if !(PHONE_MIN..=PHONE_MAX).contains(&len)
        || !phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '(' | ')' | ' '))
    {
        return Err(CoreError::validation("phone", "must be a valid phone number"));
    }
    Ok(())
}

/// Minimal email shape check: `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::validation("email", "must be a valid email address"));
    }
    Ok(())
}

/// Passwords need at least 6 characters with one lowercase letter, one
/// uppercase letter, and one digit.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < PASSWORD_MIN
        || !password.chars().any(|c| c.is_ascii_lowercase())
        || !password.chars().any(|c| c.is_ascii_uppercase())
        || !password.chars().any(|c| c.is_ascii_digit())
    {
        return Err(CoreError::validation(
            "password",
            "must be at least 6 characters with a lowercase letter, an uppercase letter, and a digit",
        ));
    }
    Ok(())
}

/// URLs must be http(s). Empty strings pass when `allow_empty` is set (user
/// images and card web links may be blank).
pub fn validate_url(field: &str, url: &str, allow_empty: bool) -> Result<()> {
    if url.is_empty() {
        if allow_empty {
            return Ok(());
        }
        return Err(CoreError::validation(field, "must not be empty"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CoreError::validation(field, "must be a valid URL"));
    }
    Ok(())
}

pub fn validate_user_image(image: &Image) -> Result<()> {
    validate_url("image.url", &image.url, true)
}

pub fn validate_card_image(image: &Image) -> Result<()> {
    validate_url("image.url", &image.url, false)?;
    if image.alt.is_empty() {
        return Err(CoreError::validation("image.alt", "must not be empty"));
    }
    Ok(())
}

pub fn validate_address(address: &Address) -> Result<()> {
    validate_min("address.country", &address.country, 2)?;
    validate_min("address.city", &address.city, 2)?;
    validate_min("address.street", &address.street, 2)?;
    if address.house_number < 1 {
        return Err(CoreError::validation("address.houseNumber", "must be at least 1"));
    }
    if let Some(zip) = address.zip {
        if zip < 0 {
            return Err(CoreError::validation("address.zip", "must not be negative"));
        }
    }
    Ok(())
}

/// A client-supplied bizNumber only needs to be positive; generated ones are
/// always in the 7-digit range.
pub fn validate_biz_number(biz_number: i64) -> Result<()> {
    if biz_number < 1 {
        return Err(CoreError::validation("bizNumber", "must be a positive integer"));
    }
    Ok(())
}

pub fn validate_text(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(CoreError::validation(
            field,
            format!("must be at least {} characters", min),
        ));
    }
    if len > max {
        return Err(CoreError::validation(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}

fn validate_min(field: &str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(CoreError::validation(
            field,
            format!("must be at least {} characters", min),
        ));
    }
    Ok(())
}
