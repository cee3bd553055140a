use super::ApiClient;
use crate::adapters::dto::user::{LoginRequestDto, RegisterRequestDto, VerifyEmailRequestDto};
use crate::adapters::dto::{AuthResponseDto, Mapper, UserDto, UserMapper};
use crate::domain::model::{AuthSession, Credentials, Registration, User};
use crate::domain::ports::AuthRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;

pub struct HttpAuthRepository {
    client: ApiClient,
}

impl HttpAuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, credentials: Credentials) -> Result<AuthSession> {
        let body = LoginRequestDto::from(credentials);
        let dto: AuthResponseDto = self.client.post(&["auth", "login"], &body).await?;
        Ok(dto.into())
    }

    async fn register(&self, registration: Registration) -> Result<AuthSession> {
        let body = RegisterRequestDto::from(registration);
        let dto: AuthResponseDto = self.client.post(&["auth", "register"], &body).await?;
        Ok(dto.into())
    }

    async fn logout(&self) -> Result<()> {
        self.client
            .execute(Method::POST, &["auth", "logout"])
            .await?;
        Ok(())
    }

    async fn verify_email(&self, token: &str) -> Result<User> {
        let body = VerifyEmailRequestDto {
            token: token.to_string(),
        };
        let dto: UserDto = self.client.post(&["auth", "verify-email"], &body).await?;
        Ok(UserMapper::to_domain(dto))
    }
}
