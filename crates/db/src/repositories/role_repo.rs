//! Repository for the `roles` and `user_roles` tables.
//!
//! Role names returned here feed `creatorhub_core::roles::ResolvedRoles`;
//! this is the single server-side source of truth for access decisions.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::role::RoleRow;

/// Provides role lookup and assignment operations.
pub struct RoleRepo;

impl RoleRepo {
    /// List the seeded role catalogue.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
        sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a role by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<RoleRow>, sqlx::Error> {
        sqlx::query_as::<_, RoleRow>("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// The role names currently assigned to a user.
    ///
    /// Fetched fresh on every gated request -- role assignment can change
    /// between sessions and must not be cached indefinitely.
    pub async fn names_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT r.name FROM user_roles ur
             JOIN roles r ON r.id = ur.role_id
             WHERE ur.user_id = $1
             ORDER BY r.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Assign a role to a user. Idempotent: re-assigning is a no-op.
    pub async fn assign(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)
             ON CONFLICT (user_id, role_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Revoke a role from a user. Returns whether a row was removed.
    pub async fn revoke(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
