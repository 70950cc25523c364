#![allow(dead_code)]

//! Shared fixtures for repository tests

use bcard_core::{Address, Card, Image, PersonName, User};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // In-memory databases exist per connection, so the pool must stay at one
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn sample_user(email: &str) -> User {
    User::new(
        PersonName {
            first: "Noa".to_string(),
            middle: None,
            last: "Levi".to_string(),
        },
        "050-1234567".to_string(),
        email.to_string(),
        "$argon2id$fake-hash".to_string(),
        Image {
            url: String::new(),
            alt: String::new(),
        },
        sample_address(),
        false,
    )
}

pub fn sample_card(owner_id: Uuid, biz_number: i64) -> Card {
    Card::new(
        "Levi Plumbing".to_string(),
        "24/7 service".to_string(),
        "Residential and commercial plumbing".to_string(),
        "03-5551234".to_string(),
        "office@leviplumbing.example".to_string(),
        Some("https://leviplumbing.example".to_string()),
        Image {
            url: "https://leviplumbing.example/logo.png".to_string(),
            alt: "logo".to_string(),
        },
        sample_address(),
        biz_number,
        owner_id,
    )
}

pub fn sample_address() -> Address {
    Address {
        state: None,
        country: "Israel".to_string(),
        city: "Tel Aviv".to_string(),
        street: "Herzl".to_string(),
        house_number: 10,
        zip: Some(68125),
    }
}
