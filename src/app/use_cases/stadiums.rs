use crate::domain::model::Stadium;
use crate::domain::ports::StadiumRepository;
use crate::utils::error::Result;
use crate::utils::validation::validate_uuid;
use std::sync::Arc;

pub struct GetStadiumsUseCase {
    repository: Arc<dyn StadiumRepository>,
}

impl GetStadiumsUseCase {
    pub fn new(repository: Arc<dyn StadiumRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Stadium>> {
        self.repository.get_all().await
    }
}

pub struct GetStadiumByIdUseCase {
    repository: Arc<dyn StadiumRepository>,
}

impl GetStadiumByIdUseCase {
    pub fn new(repository: Arc<dyn StadiumRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, stadium_id: &str) -> Result<Option<Stadium>> {
        validate_uuid("stadiumId", stadium_id)?;
        self.repository.get_by_id(stadium_id).await
    }
}
