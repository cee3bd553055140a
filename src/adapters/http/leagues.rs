use super::ApiClient;
use crate::adapters::dto::league::{CreateLeagueRequestDto, JoinLeagueRequestDto};
use crate::adapters::dto::{
    LeagueDto, LeagueMapper, LeagueMemberDto, LeagueMemberMapper, Mapper, RankingMapper,
    RankingResponseDto,
};
use crate::domain::model::{League, LeagueCategory, LeagueMember, LeagueRanking, NewLeague};
use crate::domain::ports::LeagueRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;

pub struct HttpLeagueRepository {
    client: ApiClient,
}

impl HttpLeagueRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeagueRepository for HttpLeagueRepository {
    async fn get_by_id(&self, league_id: &str) -> Result<Option<League>> {
        let dto: Option<LeagueDto> = self.client.get_optional(&["leagues", league_id]).await?;
        Ok(dto.map(LeagueMapper::to_domain))
    }

    async fn get_my_leagues(&self) -> Result<Vec<League>> {
        let dtos: Vec<LeagueDto> = self.client.get(&["leagues", "me"]).await?;
        Ok(LeagueMapper::to_domain_list(dtos))
    }

    async fn get_public_leagues(&self, category: Option<LeagueCategory>) -> Result<Vec<League>> {
        let dtos: Vec<LeagueDto> = match category {
            Some(category) => {
                self.client
                    .get_with_query(&["leagues", "public"], &[("category", category.as_str())])
                    .await?
            }
            None => self.client.get(&["leagues", "public"]).await?,
        };
        Ok(LeagueMapper::to_domain_list(dtos))
    }

    async fn create(&self, league: NewLeague) -> Result<League> {
        let body = CreateLeagueRequestDto::from(league);
        let dto: LeagueDto = self.client.post(&["leagues"], &body).await?;
        Ok(LeagueMapper::to_domain(dto))
    }

    async fn join(&self, code: &str) -> Result<League> {
        let body = JoinLeagueRequestDto {
            code: code.to_string(),
        };
        let dto: LeagueDto = self.client.post(&["leagues", "join"], &body).await?;
        Ok(LeagueMapper::to_domain(dto))
    }

    async fn leave(&self, league_id: &str) -> Result<()> {
        self.client
            .execute(Method::DELETE, &["leagues", league_id, "members", "me"])
            .await?;
        Ok(())
    }

    async fn get_ranking(&self, league_id: &str) -> Result<LeagueRanking> {
        let dto: RankingResponseDto = self.client.get(&["leagues", league_id, "ranking"]).await?;
        let ranking = RankingMapper::to_domain(dto);
        if !ranking.is_canonically_ordered() {
            tracing::warn!(
                "Ranking for league {} is not in tie-break order",
                ranking.league_id
            );
        }
        Ok(ranking)
    }

    async fn get_members(&self, league_id: &str) -> Result<Vec<LeagueMember>> {
        let dtos: Vec<LeagueMemberDto> = self.client.get(&["leagues", league_id, "members"]).await?;
        Ok(LeagueMemberMapper::to_domain_list(dtos))
    }
}
