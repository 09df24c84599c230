use sqlx::PgPool;

use super::dto::RegisterRequest;
use super::repo_types::User;

impl User {
    /// Find a user by username.
    pub async fn find_by_username(db: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, full_name, age, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, full_name, age, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        payload: &RegisterRequest,
        password_hash: &str,
        age: i32,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, full_name, age)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, full_name, age, created_at
            "#,
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(password_hash)
        .bind(&payload.full_name)
        .bind(age)
        .fetch_one(db)
        .await
    }
}
