use crate::domain::model::{
    Awards, GroupSubmissionResult, KnockoutPhase, KnockoutSubmissionResult, MatchPrediction,
    Prediction, PredictionStats,
};
use crate::domain::ports::PredictionRepository;
use crate::domain::services::bracket::{validate_group_predictions, validate_knockout_predictions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_uuid};
use std::sync::Arc;

pub struct GetPredictionByIdUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl GetPredictionByIdUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, prediction_id: &str) -> Result<Option<Prediction>> {
        validate_uuid("predictionId", prediction_id)?;
        self.repository.get_by_id(prediction_id).await
    }
}

pub struct CreatePredictionUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl CreatePredictionUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, league_id: &str) -> Result<Prediction> {
        validate_uuid("leagueId", league_id)?;
        self.repository.create(league_id).await
    }
}

pub struct GetPredictionStatsUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl GetPredictionStatsUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, prediction_id: &str) -> Result<PredictionStats> {
        validate_uuid("predictionId", prediction_id)?;
        self.repository.get_stats(prediction_id).await
    }
}

pub struct SaveGroupPredictionsUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl SaveGroupPredictionsUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        prediction_id: &str,
        group_id: &str,
        predictions: Vec<MatchPrediction>,
    ) -> Result<GroupSubmissionResult> {
        validate_uuid("predictionId", prediction_id)?;
        validate_non_empty_string("groupId", group_id)?;
        validate_group_predictions(&predictions)?;
        self.repository
            .save_group_predictions(prediction_id, group_id, predictions)
            .await
    }
}

pub struct SubmitKnockoutPredictionsUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl SubmitKnockoutPredictionsUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    /// The whole round is submitted at once; a submission that does not
    /// fill the bracket exactly never reaches the service.
    pub async fn execute(
        &self,
        prediction_id: &str,
        phase: KnockoutPhase,
        predictions: Vec<MatchPrediction>,
    ) -> Result<KnockoutSubmissionResult> {
        validate_uuid("predictionId", prediction_id)?;
        if let Err(e) = validate_knockout_predictions(phase, &predictions) {
            tracing::warn!("Rejected {} submission: {}", phase, e);
            return Err(e);
        }
        self.repository
            .save_knockout_predictions(prediction_id, phase, predictions)
            .await
    }
}

pub struct SaveAwardsUseCase {
    repository: Arc<dyn PredictionRepository>,
}

impl SaveAwardsUseCase {
    pub fn new(repository: Arc<dyn PredictionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, prediction_id: &str, awards: Awards) -> Result<Awards> {
        validate_uuid("predictionId", prediction_id)?;
        let picks = [
            ("championTeamId", &awards.champion_team_id),
            ("goldenBallPlayerId", &awards.golden_ball_player_id),
            ("goldenBootPlayerId", &awards.golden_boot_player_id),
            ("goldenGlovePlayerId", &awards.golden_glove_player_id),
        ];
        for (field, value) in picks {
            if let Some(id) = value {
                validate_uuid(field, id)?;
            }
        }
        self.repository.save_awards(prediction_id, awards).await
    }
}
