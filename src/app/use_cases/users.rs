use crate::domain::model::{ProfileUpdate, User};
use crate::domain::ports::UserRepository;
use crate::session::SessionContext;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::sync::Arc;

pub struct GetProfileUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetProfileUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<User> {
        self.repository.get_profile().await
    }
}

pub struct UpdateProfileUseCase {
    repository: Arc<dyn UserRepository>,
    session: SessionContext,
}

impl UpdateProfileUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, session: SessionContext) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub async fn execute(&self, update: ProfileUpdate) -> Result<User> {
        validate_non_empty_string("displayName", &update.display_name)?;
        let user = self.repository.update_profile(update).await?;
        self.session.refresh_user(user.clone());
        Ok(user)
    }
}
