use crate::domain::model::{Group, GroupStanding, Team};
use crate::domain::ports::TeamRepository;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_uuid};
use std::sync::Arc;

pub struct GetTeamsUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl GetTeamsUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Team>> {
        self.repository.get_all().await
    }
}

pub struct GetTeamByIdUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl GetTeamByIdUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, team_id: &str) -> Result<Option<Team>> {
        validate_uuid("teamId", team_id)?;
        self.repository.get_by_id(team_id).await
    }
}

pub struct GetGroupsUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl GetGroupsUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Group>> {
        self.repository.get_groups().await
    }
}

pub struct GetGroupStandingsUseCase {
    repository: Arc<dyn TeamRepository>,
}

impl GetGroupStandingsUseCase {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, group_id: &str) -> Result<Vec<GroupStanding>> {
        validate_non_empty_string("groupId", group_id)?;
        self.repository.get_group_standings(group_id).await
    }
}
