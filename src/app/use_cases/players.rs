use crate::domain::model::Player;
use crate::domain::ports::PlayerRepository;
use crate::utils::error::Result;
use crate::utils::validation::validate_uuid;
use std::sync::Arc;

pub struct GetPlayersByTeamUseCase {
    repository: Arc<dyn PlayerRepository>,
}

impl GetPlayersByTeamUseCase {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, team_id: &str) -> Result<Vec<Player>> {
        validate_uuid("teamId", team_id)?;
        self.repository.get_by_team(team_id).await
    }
}

pub struct GetPlayerByIdUseCase {
    repository: Arc<dyn PlayerRepository>,
}

impl GetPlayerByIdUseCase {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, player_id: &str) -> Result<Option<Player>> {
        validate_uuid("playerId", player_id)?;
        self.repository.get_by_id(player_id).await
    }
}
