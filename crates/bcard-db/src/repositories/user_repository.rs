//! User repository for CRUD operations on accounts.

use crate::{DbError, Result as DbErrorResult};

use bcard_core::{Address, Image, PersonName, User};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new user. A concurrent registration with the same email
    /// surfaces as `DbError::Duplicate` via the unique index.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, first_name, middle_name, last_name, phone, email,
                    password_hash, image_url, image_alt,
                    addr_state, addr_country, addr_city, addr_street,
                    addr_house_number, addr_zip,
                    is_business, is_admin, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name.first)
        .bind(&user.name.middle)
        .bind(&user.name.last)
        .bind(&user.phone)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.image.url)
        .bind(&user.image.alt)
        .bind(&user.address.state)
        .bind(&user.address.country)
        .bind(&user.address.city)
        .bind(&user.address.street)
        .bind(user.address.house_number)
        .bind(user.address.zip)
        .bind(user.is_business)
        .bind(user.is_admin)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::on_unique(e, "email"))?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    /// Lookup by email. Callers are expected to lowercase the email first;
    /// stored emails are always lowercased.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY created_at, rowid")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(user_from_row).collect()
    }

    /// Full profile update (name, phone, image, address). Email, password,
    /// and role flags are immutable through this path.
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: &PersonName,
        phone: &str,
        image: &Image,
        address: &Address,
    ) -> DbErrorResult<Option<User>> {
        let result = sqlx::query(
            r#"
                UPDATE users SET
                    first_name = ?, middle_name = ?, last_name = ?, phone = ?,
                    image_url = ?, image_alt = ?,
                    addr_state = ?, addr_country = ?, addr_city = ?,
                    addr_street = ?, addr_house_number = ?, addr_zip = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&name.first)
        .bind(&name.middle)
        .bind(&name.last)
        .bind(phone)
        .bind(&image.url)
        .bind(&image.alt)
        .bind(&address.state)
        .bind(&address.country)
        .bind(&address.city)
        .bind(&address.street)
        .bind(address.house_number)
        .bind(address.zip)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::on_unique(e, "email"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Set the business flag to an explicit value.
    pub async fn set_business(&self, id: Uuid, is_business: bool) -> DbErrorResult<Option<User>> {
        let result = sqlx::query("UPDATE users SET is_business = ?, updated_at = ? WHERE id = ?")
            .bind(is_business)
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Returns false when the user was already absent.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: parse_uuid("users.id", &row.try_get::<String, _>("id")?)?,
        name: PersonName {
            first: row.try_get("first_name")?,
            middle: row.try_get("middle_name")?,
            last: row.try_get("last_name")?,
        },
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        image: Image {
            url: row.try_get("image_url")?,
            alt: row.try_get("image_alt")?,
        },
        address: Address {
            state: row.try_get("addr_state")?,
            country: row.try_get("addr_country")?,
            city: row.try_get("addr_city")?,
            street: row.try_get("addr_street")?,
            house_number: row.try_get("addr_house_number")?,
            zip: row.try_get("addr_zip")?,
        },
        is_business: row.try_get("is_business")?,
        is_admin: row.try_get("is_admin")?,
        created_at: parse_timestamp("users.created_at", row.try_get("created_at")?)?,
        updated_at: parse_timestamp("users.updated_at", row.try_get("updated_at")?)?,
    })
}

pub(crate) fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(format!("invalid UUID in {}: {}", column, e)))
}

pub(crate) fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::decode(format!("invalid timestamp in {}", column)))
}
