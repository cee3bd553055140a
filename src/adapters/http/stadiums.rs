use super::ApiClient;
use crate::adapters::dto::{Mapper, StadiumDto, StadiumMapper};
use crate::domain::model::Stadium;
use crate::domain::ports::StadiumRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HttpStadiumRepository {
    client: ApiClient,
}

impl HttpStadiumRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StadiumRepository for HttpStadiumRepository {
    async fn get_all(&self) -> Result<Vec<Stadium>> {
        let dtos: Vec<StadiumDto> = self.client.get(&["stadiums"]).await?;
        Ok(StadiumMapper::to_domain_list(dtos))
    }

    async fn get_by_id(&self, stadium_id: &str) -> Result<Option<Stadium>> {
        let dto: Option<StadiumDto> = self.client.get_optional(&["stadiums", stadium_id]).await?;
        Ok(dto.map(StadiumMapper::to_domain))
    }
}
