use super::ApiClient;
use crate::adapters::dto::user::UpdateProfileRequestDto;
use crate::adapters::dto::{Mapper, UserDto, UserMapper};
use crate::domain::model::{ProfileUpdate, User};
use crate::domain::ports::UserRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;

pub struct HttpUserRepository {
    client: ApiClient,
}

impl HttpUserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn get_profile(&self) -> Result<User> {
        let dto: UserDto = self.client.get(&["users", "me"]).await?;
        Ok(UserMapper::to_domain(dto))
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let body = UpdateProfileRequestDto::from(update);
        let dto: UserDto = self
            .client
            .send_json(Method::PATCH, &["users", "me"], &body)
            .await?;
        Ok(UserMapper::to_domain(dto))
    }
}
