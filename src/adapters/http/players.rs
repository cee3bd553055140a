use super::ApiClient;
use crate::adapters::dto::{Mapper, PlayerDto, PlayerMapper};
use crate::domain::model::Player;
use crate::domain::ports::PlayerRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HttpPlayerRepository {
    client: ApiClient,
}

impl HttpPlayerRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlayerRepository for HttpPlayerRepository {
    async fn get_by_team(&self, team_id: &str) -> Result<Vec<Player>> {
        let dtos: Vec<PlayerDto> = self.client.get(&["teams", team_id, "players"]).await?;
        Ok(PlayerMapper::to_domain_list(dtos))
    }

    async fn get_by_id(&self, player_id: &str) -> Result<Option<Player>> {
        let dto: Option<PlayerDto> = self.client.get_optional(&["players", player_id]).await?;
        Ok(dto.map(PlayerMapper::to_domain))
    }
}
