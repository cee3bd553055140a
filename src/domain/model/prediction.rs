use crate::domain::model::matches::KnockoutPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TOTAL_MATCHES: u32 = 104;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub id: String,
    pub league_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub champion_team_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltiesWinner {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPrediction {
    pub match_id: String,
    pub home_score: u8,
    pub away_score: u8,
    pub home_score_et: Option<u8>,
    pub away_score_et: Option<u8>,
    pub penalties_winner: Option<PenaltiesWinner>,
}

impl MatchPrediction {
    pub fn regular_time(match_id: impl Into<String>, home_score: u8, away_score: u8) -> Self {
        Self {
            match_id: match_id.into(),
            home_score,
            away_score,
            home_score_et: None,
            away_score_et: None,
            penalties_winner: None,
        }
    }

    pub fn with_extra_time(mut self, home: u8, away: u8) -> Self {
        self.home_score_et = Some(home);
        self.away_score_et = Some(away);
        self
    }

    pub fn with_penalties(mut self, winner: PenaltiesWinner) -> Self {
        self.penalties_winner = Some(winner);
        self
    }

    pub fn is_draw_at_full_time(&self) -> bool {
        self.home_score == self.away_score
    }

    pub fn has_extra_time(&self) -> bool {
        self.home_score_et.is_some() || self.away_score_et.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionStats {
    pub total_matches: u32,
    pub predicted_matches: u32,
    pub groups_completed: u8,
    pub total_groups: u8,
    pub has_champion: bool,
    pub has_all_awards: bool,
    pub completion_percentage: u8,
}

impl PredictionStats {
    /// Rounded share of predicted matches, clamped to 0..=100.
    pub fn compute_completion(predicted: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        let ratio = predicted.min(total) as f64 / total as f64;
        (ratio * 100.0).round() as u8
    }

    /// Whether the reported percentage agrees with predicted/total.
    pub fn completion_is_consistent(&self) -> bool {
        self.completion_percentage
            == Self::compute_completion(self.predicted_matches, self.total_matches)
    }

    pub fn is_complete(&self) -> bool {
        self.predicted_matches >= self.total_matches
            && self.groups_completed >= self.total_groups
            && self.has_champion
            && self.has_all_awards
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Awards {
    pub champion_team_id: Option<String>,
    pub golden_ball_player_id: Option<String>,
    pub golden_boot_player_id: Option<String>,
    pub golden_glove_player_id: Option<String>,
}

impl Awards {
    pub fn is_complete(&self) -> bool {
        self.champion_team_id.is_some()
            && self.golden_ball_player_id.is_some()
            && self.golden_boot_player_id.is_some()
            && self.golden_glove_player_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnockoutSubmissionResult {
    pub success: bool,
    pub message: String,
    pub phase: KnockoutPhase,
    pub matches_saved: u32,
    pub knockouts_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSubmissionResult {
    pub success: bool,
    pub message: String,
    pub group_id: String,
    pub matches_saved: u32,
    pub groups_completed: u8,
}
