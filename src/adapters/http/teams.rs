use super::ApiClient;
use crate::adapters::dto::{
    GroupDto, GroupMapper, GroupStandingDto, GroupStandingMapper, Mapper, TeamDto, TeamMapper,
};
use crate::domain::model::{Group, GroupStanding, Team};
use crate::domain::ports::TeamRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HttpTeamRepository {
    client: ApiClient,
}

impl HttpTeamRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeamRepository for HttpTeamRepository {
    async fn get_all(&self) -> Result<Vec<Team>> {
        let dtos: Vec<TeamDto> = self.client.get(&["teams"]).await?;
        Ok(TeamMapper::to_domain_list(dtos))
    }

    async fn get_by_id(&self, team_id: &str) -> Result<Option<Team>> {
        let dto: Option<TeamDto> = self.client.get_optional(&["teams", team_id]).await?;
        Ok(dto.map(TeamMapper::to_domain))
    }

    async fn get_groups(&self) -> Result<Vec<Group>> {
        let dtos: Vec<GroupDto> = self.client.get(&["groups"]).await?;
        Ok(GroupMapper::to_domain_list(dtos))
    }

    async fn get_group_standings(&self, group_id: &str) -> Result<Vec<GroupStanding>> {
        let dtos: Vec<GroupStandingDto> = self
            .client
            .get(&["groups", group_id, "standings"])
            .await?;
        Ok(GroupStandingMapper::to_domain_list(dtos))
    }
}
