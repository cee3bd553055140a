use crate::domain::model::{League, LeagueCategory, LeagueMember, LeagueRanking, NewLeague};
use crate::domain::ports::LeagueRepository;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_non_empty_string, validate_uuid};
use std::sync::Arc;

pub const LEAGUE_NAME_MAX_LENGTH: usize = 50;

pub struct GetLeagueByIdUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetLeagueByIdUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when the league does not exist.
    pub async fn execute(&self, league_id: &str) -> Result<Option<League>> {
        validate_uuid("leagueId", league_id)?;
        self.repository.get_by_id(league_id).await
    }
}

pub struct GetMyLeaguesUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetMyLeaguesUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<League>> {
        self.repository.get_my_leagues().await
    }
}

pub struct GetPublicLeaguesUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetPublicLeaguesUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<League>> {
        self.repository.get_public_leagues(None).await
    }
}

pub struct GetLeaguesByCategoryUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetLeaguesByCategoryUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    /// Only `general`, `corporate`, `friends` and `community` are accepted.
    pub async fn execute(&self, category: &str) -> Result<Vec<League>> {
        let category: LeagueCategory = category.parse()?;
        self.repository.get_public_leagues(Some(category)).await
    }
}

pub struct CreateLeagueUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl CreateLeagueUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, league: NewLeague) -> Result<League> {
        validate_non_empty_string("name", &league.name)?;
        validate_max_length("name", &league.name, LEAGUE_NAME_MAX_LENGTH)?;
        self.repository.create(league).await
    }
}

pub struct JoinLeagueUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl JoinLeagueUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, code: &str) -> Result<League> {
        validate_non_empty_string("code", code)?;
        self.repository.join(code.trim()).await
    }
}

pub struct LeaveLeagueUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl LeaveLeagueUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, league_id: &str) -> Result<()> {
        validate_uuid("leagueId", league_id)?;
        self.repository.leave(league_id).await
    }
}

pub struct GetLeagueRankingUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetLeagueRankingUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    /// Returned in the backend's order; no client-side re-sorting.
    pub async fn execute(&self, league_id: &str) -> Result<LeagueRanking> {
        validate_uuid("leagueId", league_id)?;
        self.repository.get_ranking(league_id).await
    }
}

pub struct GetLeagueMembersUseCase {
    repository: Arc<dyn LeagueRepository>,
}

impl GetLeagueMembersUseCase {
    pub fn new(repository: Arc<dyn LeagueRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, league_id: &str) -> Result<Vec<LeagueMember>> {
        validate_uuid("leagueId", league_id)?;
        self.repository.get_members(league_id).await
    }
}
