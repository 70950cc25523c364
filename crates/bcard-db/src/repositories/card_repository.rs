//! Card repository for CRUD, ownership queries, and the like toggle.
//!
//! The like toggle runs delete-else-insert inside a single transaction so
//! that concurrent toggles by different users never overwrite each other's
//! membership in the like set.

use crate::repositories::user_repository::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use bcard_core::{Address, Card, Image};

use std::collections::HashMap;

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct CardRepository {
    pool: SqlitePool,
}

impl CardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new card. A bizNumber collision surfaces as
    /// `DbError::Duplicate` via the unique index.
    pub async fn create(&self, card: &Card) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO cards (
                    id, title, subtitle, description, phone, email, web,
                    image_url, image_alt,
                    addr_state, addr_country, addr_city, addr_street,
                    addr_house_number, addr_zip,
                    biz_number, owner_id, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(card.id.to_string())
        .bind(&card.title)
        .bind(&card.subtitle)
        .bind(&card.description)
        .bind(&card.phone)
        .bind(&card.email)
        .bind(&card.web)
        .bind(&card.image.url)
        .bind(&card.image.alt)
        .bind(&card.address.state)
        .bind(&card.address.country)
        .bind(&card.address.city)
        .bind(&card.address.street)
        .bind(card.address.house_number)
        .bind(card.address.zip)
        .bind(card.biz_number)
        .bind(card.owner_id.to_string())
        .bind(card.created_at.timestamp())
        .bind(card.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::on_unique(e, "bizNumber"))?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Card>> {
        let row = sqlx::query("SELECT * FROM cards WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut card = card_from_row(&row)?;
        card.likes = self.likes_for(id).await?;
        Ok(Some(card))
    }

    /// All cards, newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Card>> {
        let rows = sqlx::query("SELECT * FROM cards ORDER BY created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?;

        self.with_likes(rows).await
    }

    /// Cards owned by one user, newest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> DbErrorResult<Vec<Card>> {
        let rows = sqlx::query(
            "SELECT * FROM cards WHERE owner_id = ? ORDER BY created_at DESC, rowid DESC",
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        self.with_likes(rows).await
    }

    /// Write back a card's mutable fields. Returns false when the card was
    /// deleted in the meantime.
    pub async fn update(&self, card: &Card) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE cards SET
                    title = ?, subtitle = ?, description = ?, phone = ?,
                    email = ?, web = ?, image_url = ?, image_alt = ?,
                    addr_state = ?, addr_country = ?, addr_city = ?,
                    addr_street = ?, addr_house_number = ?, addr_zip = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&card.title)
        .bind(&card.subtitle)
        .bind(&card.description)
        .bind(&card.phone)
        .bind(&card.email)
        .bind(&card.web)
        .bind(&card.image.url)
        .bind(&card.image.alt)
        .bind(&card.address.state)
        .bind(&card.address.country)
        .bind(&card.address.city)
        .bind(&card.address.street)
        .bind(card.address.house_number)
        .bind(card.address.zip)
        .bind(Utc::now().timestamp())
        .bind(card.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a card and its likes. Returns false when already absent.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM card_likes WHERE card_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn biz_number_exists(&self, biz_number: i64) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM cards WHERE biz_number = ?")
            .bind(biz_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Atomic set-membership toggle on the like set.
    ///
    /// Returns `None` when the card is absent, otherwise the new liked state
    /// for this user and the new like count.
    pub async fn toggle_like(
        &self,
        card_id: Uuid,
        user_id: Uuid,
    ) -> DbErrorResult<Option<(bool, i64)>> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query("SELECT 1 FROM cards WHERE id = ?")
            .bind(card_id.to_string())
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM card_likes WHERE card_id = ? AND user_id = ?")
            .bind(card_id.to_string())
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = removed == 0;
        if liked {
            sqlx::query("INSERT INTO card_likes (card_id, user_id, liked_at) VALUES (?, ?, ?)")
                .bind(card_id.to_string())
                .bind(user_id.to_string())
                .bind(Utc::now().timestamp())
                .execute(&mut *tx)
                .await?;
        }

        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM card_likes WHERE card_id = ?")
            .bind(card_id.to_string())
            .fetch_one(&mut *tx)
            .await?
            .try_get("n")?;

        tx.commit().await?;

        Ok(Some((liked, count)))
    }

    async fn likes_for(&self, card_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let rows =
            sqlx::query("SELECT user_id FROM card_likes WHERE card_id = ? ORDER BY liked_at, rowid")
                .bind(card_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter()
            .map(|r| parse_uuid("card_likes.user_id", &r.try_get::<String, _>("user_id")?))
            .collect()
    }

    /// Attach like sets to a page of cards with a single likes query.
    async fn with_likes(&self, rows: Vec<SqliteRow>) -> DbErrorResult<Vec<Card>> {
        let mut cards = rows
            .iter()
            .map(card_from_row)
            .collect::<DbErrorResult<Vec<_>>>()?;

        let like_rows =
            sqlx::query("SELECT card_id, user_id FROM card_likes ORDER BY liked_at, rowid")
                .fetch_all(&self.pool)
                .await?;

        let mut likes: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for row in &like_rows {
            let card_id = parse_uuid("card_likes.card_id", &row.try_get::<String, _>("card_id")?)?;
            let user_id = parse_uuid("card_likes.user_id", &row.try_get::<String, _>("user_id")?)?;
            likes.entry(card_id).or_default().push(user_id);
        }

        for card in &mut cards {
            if let Some(ids) = likes.remove(&card.id) {
                card.likes = ids;
            }
        }

        Ok(cards)
    }
}

fn card_from_row(row: &SqliteRow) -> DbErrorResult<Card> {
    Ok(Card {
        id: parse_uuid("cards.id", &row.try_get::<String, _>("id")?)?,
        title: row.try_get("title")?,
        subtitle: row.try_get("subtitle")?,
        description: row.try_get("description")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        web: row.try_get("web")?,
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
        biz_number: row.try_get("biz_number")?,
        owner_id: parse_uuid("cards.owner_id", &row.try_get::<String, _>("owner_id")?)?,
        likes: Vec::new(),
        created_at: parse_timestamp("cards.created_at", row.try_get("created_at")?)?,
        updated_at: parse_timestamp("cards.updated_at", row.try_get("updated_at")?)?,
    })
}
