use crate::config::AuthConfig;
use crate::domain::session::Session;
use crate::domain::token::TokenKeeper;
use crate::domain::user::User;
use crate::error::{AppError, Result};
use crate::storage::user_repo::UserRepository;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct AccountService {
    config: AuthConfig,
    users: UserRepository,
    tokens: TokenKeeper,
}

impl AccountService {
    #[must_use]
    pub const fn new(config: AuthConfig, users: UserRepository, tokens: TokenKeeper) -> Self {
        Self { config, users, tokens }
    }

    #[tracing::instrument(
        skip(self, email, username, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn register(&self, email: String, username: String, password: String) -> Result<Session> {
        self.validate_registration(&email, &username, &password)?;

        let password_hash = self.hash_password(password).await?;
        let Some(user) = self.users.create(&email, &username, &password_hash) else {
            return Err(AppError::Conflict("Email already registered".into()));
        };

        tracing::Span::current().record("user_id", tracing::field::display(user.id));
        tracing::info!("user registered");
        self.issue_session(&user)
    }

    #[tracing::instrument(
        skip(self, email, password),
        fields(user_id = tracing::field::Empty),
        err(level = "warn")
    )]
    pub async fn login(&self, email: String, password: String) -> Result<Session> {
        let Some(user) = self.users.find_by_email(&email) else {
            tracing::warn!("Login failed: user not found");
            return Err(AppError::AuthError);
        };

        tracing::Span::current().record("user_id", tracing::field::display(user.id));

        let is_valid = self.verify_password(password, user.password_hash.clone()).await?;
        if !is_valid {
            tracing::warn!("Login failed: invalid password");
            return Err(AppError::AuthError);
        }

        self.issue_session(&user)
    }

    fn validate_registration(&self, email: &str, username: &str, password: &str) -> Result<()> {
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".into()));
        }
        let username_len = username.chars().count();
        if username_len < self.config.username_min_length || username_len > self.config.username_max_length {
            return Err(AppError::BadRequest(format!(
                "Username must be {}-{} characters",
                self.config.username_min_length, self.config.username_max_length
            )));
        }
        let password_len = password.chars().count();
        if password_len < self.config.password_min_length || password_len > self.config.password_max_length {
            return Err(AppError::BadRequest(format!(
                "Password must be {}-{} characters",
                self.config.password_min_length, self.config.password_max_length
            )));
        }
        Ok(())
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| AppError::Internal)
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    async fn verify_password(&self, password: String, password_hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&password_hash).map_err(|_| AppError::Internal)?;
            Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
        })
        .await
        .map_err(|_| AppError::Internal)?
    }

    fn issue_session(&self, user: &User) -> Result<Session> {
        let token = self.tokens.issue(&user.id.to_string(), None).map_err(|_| AppError::Internal)?;
        let expires_at = OffsetDateTime::now_utc().unix_timestamp() + self.tokens.ttl().as_secs() as i64;
        Ok(Session { token, email: user.email.clone(), expires_at })
    }
}
