use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    models::users::{User, UserRole, UserStatus},
    Result,
};

use super::{unique_violation_as_bad_request, PostgresRepo};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn insert_user(
        &self,
        login_id: &str,
        password_hash: &str,
        email: &str,
        nickname: &str,
        role: UserRole,
        status: UserStatus,
    ) -> Result<User>;
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>>;
    async fn find_by_login_or_email(&self, login_id: &str, email: &str) -> Result<Option<User>>;
}

#[async_trait]
impl UsersRepository for PostgresRepo {
    #[instrument(skip(self, password_hash))]
    async fn insert_user(
        &self,
        login_id: &str,
        password_hash: &str,
        email: &str,
        nickname: &str,
        role: UserRole,
        status: UserStatus,
    ) -> Result<User> {
        let id = Uuid::now_v7();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, login_id, password, email, nickname, role, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING id, login_id, password, email, nickname, role, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(login_id)
        .bind(password_hash)
        .bind(email)
        .bind(nickname)
        .bind(role)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| unique_violation_as_bad_request(err, "Login id or email already exists"))?;

        Ok(user)
    }

    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login_id, password, email, nickname, role, status, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_login_or_email(&self, login_id: &str, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login_id, password, email, nickname, role, status, created_at, updated_at
            FROM users
            WHERE login_id = $1 OR email = $2
            "#,
        )
        .bind(login_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
