use crate::domain::model::{Calendar, KnockoutMatch, KnockoutPhase, Match, Phase};
use crate::domain::ports::MatchRepository;
use crate::utils::error::Result;
use crate::utils::validation::validate_uuid;
use std::sync::Arc;

pub struct GetCalendarUseCase {
    repository: Arc<dyn MatchRepository>,
}

impl GetCalendarUseCase {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Calendar> {
        self.repository.get_calendar().await
    }
}

pub struct GetMatchByIdUseCase {
    repository: Arc<dyn MatchRepository>,
}

impl GetMatchByIdUseCase {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, match_id: &str) -> Result<Option<Match>> {
        validate_uuid("matchId", match_id)?;
        self.repository.get_by_id(match_id).await
    }
}

pub struct GetMatchesByPhaseUseCase {
    repository: Arc<dyn MatchRepository>,
}

impl GetMatchesByPhaseUseCase {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    /// Accepts the wire name of the phase, e.g. `QUARTER_FINALS`.
    pub async fn execute(&self, phase: &str) -> Result<Vec<Match>> {
        let phase: Phase = phase.parse()?;
        self.repository.get_by_phase(phase).await
    }
}

pub struct GetKnockoutMatchesUseCase {
    repository: Arc<dyn MatchRepository>,
}

impl GetKnockoutMatchesUseCase {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, phase: KnockoutPhase) -> Result<Vec<KnockoutMatch>> {
        self.repository.get_knockout_matches(phase).await
    }
}
