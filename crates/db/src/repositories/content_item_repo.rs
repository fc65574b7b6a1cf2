//! Repository for the `content_items` table.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::content_item::{ContentItem, CreateContentItem, UpdateContentItem};

const COLUMNS: &str = "id, creator_id, category, title, description, body, \
                        approval_status, approved_by, approved_at, created_at, updated_at";

/// Provides CRUD and approval operations for content items.
pub struct ContentItemRepo;

impl ContentItemRepo {
    /// Insert a new item. Status always starts `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContentItem,
    ) -> Result<ContentItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_items (creator_id, category, title, description, body)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(input.creator_id)
            .bind(&input.category)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_items WHERE id = $1");
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items for a creator, optionally scoped to one category.
    pub async fn list_for_creator(
        pool: &PgPool,
        creator_id: DbId,
        category: Option<&str>,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        match category {
            Some(cat) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM content_items
                     WHERE creator_id = $1 AND category = $2
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ContentItem>(&query)
                    .bind(creator_id)
                    .bind(cat)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM content_items
                     WHERE creator_id = $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ContentItem>(&query)
                    .bind(creator_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Partially update an item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContentItem,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!(
            "UPDATE content_items SET
                category = COALESCE($2, category),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                body = COALESCE($5, body),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Mark an item approved, recording who approved it and when.
    ///
    /// Only transitions rows currently `pending`; returns `None` when the
    /// row is missing or already approved so the caller can distinguish.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        approved_by: DbId,
    ) -> Result<Option<ContentItem>, sqlx::Error> {
        let query = format!(
            "UPDATE content_items SET
                approval_status = 'approved',
                approved_by = $2,
                approved_at = now(),
                updated_at = now()
             WHERE id = $1 AND approval_status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentItem>(&query)
            .bind(id)
            .bind(approved_by)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an item. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
