use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};
use tracing::info;
use uuid::Uuid;

use crate::database::ports::users::UsersRepository;
use crate::domain::users::{User, UserChanges, UserDraft};
use crate::error::{Result, RosterError};

/// SQLite-backed implementation of the `UsersRepository` port.
#[derive(Clone, Debug)]
pub struct SqliteUsersRepository {
    pool: SqlitePool,
}

impl SqliteUsersRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Ids are stored as canonical hyphenated strings; timestamps ride on the
// sqlx chrono codec.
impl FromRow<'_, SqliteRow> for User {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let raw_id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&raw_id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            image: row.try_get("image")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl UsersRepository for SqliteUsersRepository {
    async fn create_user(&self, draft: &UserDraft) -> Result<Uuid> {
        draft.validate()?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, phone, image, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(id.to_string())
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(draft.image.as_deref())
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await
        .map_err(|e| RosterError::Database(format!("failed to create user: {e}")))?;

        info!("Created user: {} ({})", draft.name, id);
        Ok(id)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, image, created_at, updated_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| RosterError::Database(format!("failed to get user by id: {e}")))
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        // rowid preserves insertion order
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone, image, created_at, updated_at
            FROM users
            ORDER BY rowid
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| RosterError::Database(format!("failed to list users: {e}")))
    }

    async fn update_user(&self, id: Uuid, changes: &UserChanges) -> Result<Option<User>> {
        changes.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?1, email = ?2, phone = ?3, image = ?4, updated_at = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.phone)
        .bind(changes.image.as_deref())
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(self.pool())
        .await
        .map_err(|e| RosterError::Database(format!("failed to update user: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        info!("Updated user: {}", id);
        self.get_user_by_id(id).await
    }

    async fn delete_user(&self, id: Uuid) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_id(id).await? else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.to_string())
            .execute(self.pool())
            .await
            .map_err(|e| RosterError::Database(format!("failed to delete user: {e}")))?;

        info!("Deleted user: {} ({})", user.name, user.id);
        Ok(Some(user))
    }
}
