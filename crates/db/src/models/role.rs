//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;

use creatorhub_core::types::DbId;

/// A row from the seeded `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleRow {
    pub id: DbId,
    pub name: String,
}
