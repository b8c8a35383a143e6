//! User repository backed by Postgres
//!
//! Expects `users(id SERIAL PRIMARY KEY, name TEXT, email TEXT UNIQUE, age INTEGER)`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, UserRepository};
use crate::models::{User, UserId};

/// User repository
#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepo {
    async fn create(&self, user: &User) -> Result<i32, DbError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn fetch_by_id(&self, id: UserId) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn update(&self, id: UserId, user: &User) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE users SET name = $1, email = $2, age = $3 WHERE id = $4")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        // Callers check existence first; zero rows means a concurrent delete won.
        if result.rows_affected() == 0 {
            tracing::warn!(user_id = %id, "update matched no rows");
        }

        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(user_id = %id, "delete matched no rows");
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, DbError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DbError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p usermgmt-server -- --ignored

    async fn test_repo() -> PgUserRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                age INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .expect("create users table");

        PgUserRepo::new(pool)
    }

    fn sample(email: &str) -> User {
        User {
            id: 0,
            name: "John Doe".into(),
            email: email.into(),
            age: 30,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_fetch_round_trips() {
        let repo = test_repo().await;
        let email = format!("roundtrip-{}@example.com", std::process::id());

        let id = repo.create(&sample(&email)).await.expect("create");
        assert!(id > 0);
        assert!(repo.exists_by_email(&email).await.expect("exists_by_email"));

        let fetched = repo.fetch_by_id(UserId::new(id)).await.expect("fetch");
        assert_eq!(fetched, User { id, ..sample(&email) });

        repo.delete(UserId::new(id)).await.expect("delete");
        assert!(!repo.exists_by_id(UserId::new(id)).await.expect("exists_by_id"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn fetch_missing_is_not_found() {
        let repo = test_repo().await;
        let err = repo.fetch_by_id(UserId::new(i32::MAX)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_tolerate_missing_rows() {
        let repo = test_repo().await;
        let missing = UserId::new(i32::MAX);

        repo.update(missing, &sample("nobody@example.com"))
            .await
            .expect("update of missing row succeeds");
        repo.delete(missing).await.expect("delete of missing row succeeds");
    }
}
