use super::Mapper;
use crate::domain::model::{
    Awards, GroupSubmissionResult, KnockoutPhase, KnockoutSubmissionResult, MatchPrediction,
    PenaltiesWinner, Prediction, PredictionStats,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    pub id: String,
    pub league_id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion_team_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct PredictionMapper;

impl Mapper for PredictionMapper {
    type Dto = PredictionDto;
    type Domain = Prediction;

    fn to_domain(dto: PredictionDto) -> Prediction {
        Prediction {
            id: dto.id,
            league_id: dto.league_id,
            user_id: dto.user_id,
            name: dto.name,
            champion_team_id: dto.champion_team_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }

    fn to_dto(prediction: &Prediction) -> PredictionDto {
        PredictionDto {
            id: prediction.id.clone(),
            league_id: prediction.league_id.clone(),
            user_id: prediction.user_id.clone(),
            name: prediction.name.clone(),
            champion_team_id: prediction.champion_team_id.clone(),
            created_at: prediction.created_at,
            updated_at: prediction.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPredictionDto {
    pub match_id: String,
    pub home_score: u8,
    pub away_score: u8,
    #[serde(
        rename = "homeScoreET",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub home_score_et: Option<u8>,
    #[serde(
        rename = "awayScoreET",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub away_score_et: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties_winner: Option<PenaltiesWinner>,
}

pub struct MatchPredictionMapper;

impl Mapper for MatchPredictionMapper {
    type Dto = MatchPredictionDto;
    type Domain = MatchPrediction;

    fn to_domain(dto: MatchPredictionDto) -> MatchPrediction {
        MatchPrediction {
            match_id: dto.match_id,
            home_score: dto.home_score,
            away_score: dto.away_score,
            home_score_et: dto.home_score_et,
            away_score_et: dto.away_score_et,
            penalties_winner: dto.penalties_winner,
        }
    }

    fn to_dto(prediction: &MatchPrediction) -> MatchPredictionDto {
        MatchPredictionDto {
            match_id: prediction.match_id.clone(),
            home_score: prediction.home_score,
            away_score: prediction.away_score,
            home_score_et: prediction.home_score_et,
            away_score_et: prediction.away_score_et,
            penalties_winner: prediction.penalties_winner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionStatsDto {
    pub total_matches: u32,
    pub predicted_matches: u32,
    pub groups_completed: u8,
    pub total_groups: u8,
    pub has_champion: bool,
    pub has_all_awards: bool,
    pub completion_percentage: u8,
}

pub struct PredictionStatsMapper;

impl Mapper for PredictionStatsMapper {
    type Dto = PredictionStatsDto;
    type Domain = PredictionStats;

    fn to_domain(dto: PredictionStatsDto) -> PredictionStats {
        PredictionStats {
            total_matches: dto.total_matches,
            predicted_matches: dto.predicted_matches,
            groups_completed: dto.groups_completed,
            total_groups: dto.total_groups,
            has_champion: dto.has_champion,
            has_all_awards: dto.has_all_awards,
            completion_percentage: dto.completion_percentage,
        }
    }

    fn to_dto(stats: &PredictionStats) -> PredictionStatsDto {
        PredictionStatsDto {
            total_matches: stats.total_matches,
            predicted_matches: stats.predicted_matches,
            groups_completed: stats.groups_completed,
            total_groups: stats.total_groups,
            has_champion: stats.has_champion,
            has_all_awards: stats.has_all_awards,
            completion_percentage: stats.completion_percentage,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion_team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden_ball_player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden_boot_player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden_glove_player_id: Option<String>,
}

pub struct AwardsMapper;

impl Mapper for AwardsMapper {
    type Dto = AwardsDto;
    type Domain = Awards;

    fn to_domain(dto: AwardsDto) -> Awards {
        Awards {
            champion_team_id: dto.champion_team_id,
            golden_ball_player_id: dto.golden_ball_player_id,
            golden_boot_player_id: dto.golden_boot_player_id,
            golden_glove_player_id: dto.golden_glove_player_id,
        }
    }

    fn to_dto(awards: &Awards) -> AwardsDto {
        AwardsDto {
            champion_team_id: awards.champion_team_id.clone(),
            golden_ball_player_id: awards.golden_ball_player_id.clone(),
            golden_boot_player_id: awards.golden_boot_player_id.clone(),
            golden_glove_player_id: awards.golden_glove_player_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePredictionRequestDto {
    pub league_id: String,
}

/// `POST /predictions/{id}/knockouts/{phase}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnockoutSubmissionDto {
    pub phase: KnockoutPhase,
    pub predictions: Vec<MatchPredictionDto>,
}

impl KnockoutSubmissionDto {
    pub fn new(phase: KnockoutPhase, predictions: &[MatchPrediction]) -> Self {
        Self {
            phase,
            predictions: predictions.iter().map(MatchPredictionMapper::to_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutSubmissionResponseDto {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub phase: KnockoutPhase,
    pub matches_saved: u32,
    pub knockouts_completed: bool,
}

impl From<KnockoutSubmissionResponseDto> for KnockoutSubmissionResult {
    fn from(dto: KnockoutSubmissionResponseDto) -> Self {
        KnockoutSubmissionResult {
            success: dto.success,
            message: dto.message,
            phase: dto.phase,
            matches_saved: dto.matches_saved,
            knockouts_completed: dto.knockouts_completed,
        }
    }
}

/// `POST /predictions/{id}/groups/{groupId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSubmissionDto {
    pub group_id: String,
    pub predictions: Vec<MatchPredictionDto>,
}

impl GroupSubmissionDto {
    pub fn new(group_id: &str, predictions: &[MatchPrediction]) -> Self {
        Self {
            group_id: group_id.to_string(),
            predictions: predictions.iter().map(MatchPredictionMapper::to_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSubmissionResponseDto {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub group_id: String,
    pub matches_saved: u32,
    pub groups_completed: u8,
}

impl From<GroupSubmissionResponseDto> for GroupSubmissionResult {
    fn from(dto: GroupSubmissionResponseDto) -> Self {
        GroupSubmissionResult {
            success: dto.success,
            message: dto.message,
            group_id: dto.group_id,
            matches_saved: dto.matches_saved,
            groups_completed: dto.groups_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_knockout_submission_wire_shape() {
        let predictions = vec![
            MatchPrediction::regular_time("m-103", 2, 1),
            MatchPrediction::regular_time("m-104", 1, 1)
                .with_extra_time(1, 1)
                .with_penalties(PenaltiesWinner::Away),
        ];
        let body = serde_json::to_value(KnockoutSubmissionDto::new(
            KnockoutPhase::SemiFinals,
            &predictions,
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({
                "phase": "SEMI_FINALS",
                "predictions": [
                    {"matchId": "m-103", "homeScore": 2, "awayScore": 1},
                    {"matchId": "m-104", "homeScore": 1, "awayScore": 1,
                     "homeScoreET": 1, "awayScoreET": 1, "penaltiesWinner": "away"}
                ]
            })
        );
    }

    #[test]
    fn test_knockout_response() {
        let dto: KnockoutSubmissionResponseDto = serde_json::from_value(json!({
            "success": true,
            "message": "Predictions saved",
            "phase": "FINAL",
            "matchesSaved": 1,
            "knockoutsCompleted": true
        }))
        .unwrap();
        let result = KnockoutSubmissionResult::from(dto);
        assert_eq!(result.phase, KnockoutPhase::Final);
        assert!(result.knockouts_completed);
        assert_eq!(result.matches_saved, 1);
    }

    #[test]
    fn test_stats_round_trip() {
        let stats = PredictionStats {
            total_matches: 104,
            predicted_matches: 72,
            groups_completed: 12,
            total_groups: 12,
            has_champion: false,
            has_all_awards: false,
            completion_percentage: 69,
        };
        let json = serde_json::to_value(PredictionStatsMapper::to_dto(&stats)).unwrap();
        assert_eq!(json["completionPercentage"], 69);
        let back = PredictionStatsMapper::to_domain(serde_json::from_value(json).unwrap());
        assert_eq!(back, stats);
    }
}
