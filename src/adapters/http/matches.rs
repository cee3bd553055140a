use super::ApiClient;
use crate::adapters::dto::{
    CalendarMapper, CalendarResponseDto, KnockoutMatchDto, KnockoutMatchMapper, MatchDto,
    MatchMapper, Mapper,
};
use crate::domain::model::{Calendar, KnockoutMatch, KnockoutPhase, Match, Phase};
use crate::domain::ports::MatchRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HttpMatchRepository {
    client: ApiClient,
}

impl HttpMatchRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MatchRepository for HttpMatchRepository {
    async fn get_calendar(&self) -> Result<Calendar> {
        let dto: CalendarResponseDto = self.client.get(&["matches", "calendar"]).await?;
        Ok(CalendarMapper::to_domain(dto))
    }

    async fn get_by_id(&self, match_id: &str) -> Result<Option<Match>> {
        let dto: Option<MatchDto> = self.client.get_optional(&["matches", match_id]).await?;
        Ok(dto.map(MatchMapper::to_domain))
    }

    async fn get_by_phase(&self, phase: Phase) -> Result<Vec<Match>> {
        let dtos: Vec<MatchDto> = self
            .client
            .get_with_query(&["matches"], &[("phase", phase.as_str())])
            .await?;
        Ok(MatchMapper::to_domain_list(dtos))
    }

    async fn get_knockout_matches(&self, phase: KnockoutPhase) -> Result<Vec<KnockoutMatch>> {
        let dtos: Vec<KnockoutMatchDto> = self
            .client
            .get(&["matches", "knockouts", phase.as_str()])
            .await?;
        Ok(KnockoutMatchMapper::to_domain_list(dtos))
    }
}
