use super::ApiClient;
use crate::adapters::dto::prediction::CreatePredictionRequestDto;
use crate::adapters::dto::{
    AwardsDto, AwardsMapper, GroupSubmissionDto, GroupSubmissionResponseDto, KnockoutSubmissionDto,
    KnockoutSubmissionResponseDto, Mapper, PredictionDto, PredictionMapper, PredictionStatsDto,
    PredictionStatsMapper,
};
use crate::domain::model::{
    Awards, GroupSubmissionResult, KnockoutPhase, KnockoutSubmissionResult, MatchPrediction,
    Prediction, PredictionStats,
};
use crate::domain::ports::PredictionRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;

pub struct HttpPredictionRepository {
    client: ApiClient,
}

impl HttpPredictionRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PredictionRepository for HttpPredictionRepository {
    async fn get_by_id(&self, prediction_id: &str) -> Result<Option<Prediction>> {
        let dto: Option<PredictionDto> = self
            .client
            .get_optional(&["predictions", prediction_id])
            .await?;
        Ok(dto.map(PredictionMapper::to_domain))
    }

    async fn create(&self, league_id: &str) -> Result<Prediction> {
        let body = CreatePredictionRequestDto {
            league_id: league_id.to_string(),
        };
        let dto: PredictionDto = self.client.post(&["predictions"], &body).await?;
        Ok(PredictionMapper::to_domain(dto))
    }

    async fn get_stats(&self, prediction_id: &str) -> Result<PredictionStats> {
        let dto: PredictionStatsDto = self
            .client
            .get(&["predictions", prediction_id, "stats"])
            .await?;
        let stats = PredictionStatsMapper::to_domain(dto);
        if !stats.completion_is_consistent() {
            tracing::warn!(
                "Prediction {} reports {}% complete for {}/{} matches",
                prediction_id,
                stats.completion_percentage,
                stats.predicted_matches,
                stats.total_matches
            );
        }
        Ok(stats)
    }

    async fn save_group_predictions(
        &self,
        prediction_id: &str,
        group_id: &str,
        predictions: Vec<MatchPrediction>,
    ) -> Result<GroupSubmissionResult> {
        let body = GroupSubmissionDto::new(group_id, &predictions);
        let dto: GroupSubmissionResponseDto = self
            .client
            .post(&["predictions", prediction_id, "groups", group_id], &body)
            .await?;
        Ok(dto.into())
    }

    async fn save_knockout_predictions(
        &self,
        prediction_id: &str,
        phase: KnockoutPhase,
        predictions: Vec<MatchPrediction>,
    ) -> Result<KnockoutSubmissionResult> {
        let body = KnockoutSubmissionDto::new(phase, &predictions);
        let dto: KnockoutSubmissionResponseDto = self
            .client
            .post(
                &["predictions", prediction_id, "knockouts", phase.as_str()],
                &body,
            )
            .await?;
        tracing::debug!(
            "Saved {} {} predictions, bracket complete: {}",
            dto.matches_saved,
            phase,
            dto.knockouts_completed
        );
        Ok(dto.into())
    }

    async fn save_awards(&self, prediction_id: &str, awards: Awards) -> Result<Awards> {
        let body = AwardsMapper::to_dto(&awards);
        let dto: AwardsDto = self
            .client
            .send_json(Method::PUT, &["predictions", prediction_id, "awards"], &body)
            .await?;
        Ok(AwardsMapper::to_domain(dto))
    }
}
