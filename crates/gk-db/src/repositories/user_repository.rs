use crate::{DbError, Result as DbErrorResult};

use gk_core::{Identity, RecentUser, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Records a sighting of `identity`. First sighting inserts a fresh
    /// `Normal` row; later sightings refresh the profile columns only,
    /// overwriting with the incoming values (including `None`). Returns
    /// whether a row was created.
    ///
    /// Safe under concurrent calls: duplicate inserts are suppressed by
    /// the UNIQUE constraint on `identity`, not by application locking.
    pub async fn ensure_user(
        &self,
        identity: Identity,
        display_name: Option<&str>,
        handle: Option<&str>,
    ) -> DbErrorResult<bool> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO users (identity, display_name, handle, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(identity)
        .bind(display_name)
        .bind(handle)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        sqlx::query(
            r#"
              UPDATE users
              SET display_name = ?, handle = ?
              WHERE identity = ?
              "#,
        )
        .bind(display_name)
        .bind(handle)
        .bind(identity)
        .execute(&self.pool)
        .await?;

        Ok(false)
    }

    pub async fn find_by_identity(&self, identity: Identity) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT identity, display_name, handle, role, created_at
              FROM users
              WHERE identity = ?
              "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<User> {
            let role: String = r.try_get("role")?;
            let created_at: i64 = r.try_get("created_at")?;

            Ok(User {
                identity: r.try_get("identity")?,
                display_name: r.try_get("display_name")?,
                handle: r.try_get("handle")?,
                role: decode_role(&role)?,
                created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
                    DbError::Initialization {
                        message: "Invalid timestamp in users.created_at".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?,
            })
        })
        .transpose()
    }

    pub async fn get_role(&self, identity: Identity) -> DbErrorResult<Option<Role>> {
        let role: Option<String> = sqlx::query_scalar(
            r#"
              SELECT role
              FROM users
              WHERE identity = ?
              "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await?;

        role.map(|r| decode_role(&r)).transpose()
    }

    /// Assigns `role` to a known identity. Returns `false` when the
    /// identity has never been seen; nothing is created in that case.
    pub async fn set_role(&self, identity: Identity, role: Role) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET role = ? WHERE identity = ?")
            .bind(role.as_str())
            .bind(identity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Most recently created users first, at most `limit` rows.
    pub async fn list_recent(&self, limit: i64) -> DbErrorResult<Vec<RecentUser>> {
        let rows = sqlx::query(
            r#"
              SELECT identity, role, handle
              FROM users
              ORDER BY id DESC
              LIMIT ?
              "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> DbErrorResult<RecentUser> {
                let role: String = r.try_get("role")?;

                Ok(RecentUser {
                    identity: r.try_get("identity")?,
                    role: decode_role(&role)?,
                    handle: r.try_get("handle")?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

/// Every role read back goes through the closed parser: an
/// out-of-enumeration value in storage is a decode failure, never a
/// silently unranked user.
#[track_caller]
fn decode_role(value: &str) -> DbErrorResult<Role> {
    Role::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid role in users.role: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
