//! User repository: parameterized CRUD against the shared store session
//!
//! Every statement binds its inputs; SQL metacharacters in user-supplied
//! values are stored literally.

use sqlx::PgPool;
use thiserror::Error;

use crate::models::User;

/// Repository-level error, translated to the HTTP taxonomy at the handler
/// boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Unique constraint violation on `users.email`
    #[error("email already exists")]
    DuplicateEmail,

    /// Any other store failure
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// CRUD operations over the `users` table
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All users, newest first
    pub async fn list(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// A single user by id, or `None` if no row matches
    pub async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user; the store assigns `id` and `created_at`.
    ///
    /// A unique violation on `email` surfaces as
    /// [`RepositoryError::DuplicateEmail`], distinct from generic failure.
    pub async fn create(&self, name: &str, email: &str) -> RepositoryResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) \
             RETURNING id, name, email, created_at",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::DuplicateEmail
            }
            _ => RepositoryError::Sqlx(e),
        })?;

        Ok(user)
    }

    /// Delete a user by id; returns whether a row was actually removed.
    /// Zero-row deletes are a negative result, not an error.
    pub async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_error_display() {
        assert_eq!(
            RepositoryError::DuplicateEmail.to_string(),
            "email already exists"
        );
    }

    #[test]
    fn test_sqlx_errors_pass_through() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::Sqlx(_)));
    }

    // Live-store coverage; each test runs in its own database provided by
    // the harness. Ignored by default so the suite passes without Postgres
    // (run with `cargo test -- --ignored` and DATABASE_URL set).

    #[sqlx::test]
    #[ignore = "requires a live Postgres store (set DATABASE_URL)"]
    async fn test_duplicate_email_is_rejected_and_leaves_one_row(pool: PgPool) {
        crate::db::ensure_schema(&pool).await.unwrap();
        let repo = UserRepository::new(pool);

        let first = repo.create("Ada", "ada@example.com").await.unwrap();

        let err = repo.create("Ada B", "ada@example.com").await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateEmail));

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, first.id);
        assert_eq!(users[0].name, "Ada");
    }

    #[sqlx::test]
    #[ignore = "requires a live Postgres store (set DATABASE_URL)"]
    async fn test_deleted_user_is_gone(pool: PgPool) {
        crate::db::ensure_schema(&pool).await.unwrap();
        let repo = UserRepository::new(pool);

        let user = repo.create("Grace", "grace@example.com").await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "requires a live Postgres store (set DATABASE_URL)"]
    async fn test_delete_missing_id_reports_no_row(pool: PgPool) {
        crate::db::ensure_schema(&pool).await.unwrap();
        let repo = UserRepository::new(pool);

        assert!(!repo.delete(999_999).await.unwrap());
    }
}
