use axum::async_trait;

use crate::auth::repo_types::{NewUser, User};
use crate::db::PgStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Insert a user. Returns `None` when the email is already taken.
    async fn insert(&self, user: NewUser) -> anyhow::Result<Option<User>>;
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, role, name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> anyhow::Result<Option<User>> {
        let res = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, role, name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password, role, name, created_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.role)
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await;

        match res {
            Ok(u) => Ok(Some(u)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
