use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::{
    models::users::{User, UserRole, UserStatus},
    repositories::users_repo::UsersRepository,
    Error, Result,
};

pub const GUEST_NICKNAME: &str = "guest";

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UsersRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    pub async fn register(
        &self,
        login_id: &str,
        password: &str,
        email: &str,
        nickname: &str,
    ) -> Result<User> {
        if self
            .repo
            .find_by_login_or_email(login_id, email)
            .await?
            .is_some()
        {
            return Err(Error::BadRequest(
                "Login id or email already exists".to_string(),
            ));
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        self.repo
            .insert_user(
                login_id,
                &password_hash,
                email,
                nickname,
                UserRole::User,
                UserStatus::Active,
            )
            .await
    }

    /// Display name for the home page: the user's nickname, or the guest
    /// placeholder when unauthenticated or unknown.
    pub async fn nickname_or_guest(&self, user_id: Option<Uuid>) -> Result<String> {
        let Some(user_id) = user_id else {
            return Ok(GUEST_NICKNAME.to_string());
        };

        let nickname = self
            .repo
            .find_user(user_id)
            .await?
            .map(|u| u.nickname)
            .unwrap_or_else(|| GUEST_NICKNAME.to_string());

        Ok(nickname)
    }
}
