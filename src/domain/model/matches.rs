use crate::domain::model::stadium::StadiumRef;
use crate::domain::model::team::TeamRef;
use crate::utils::error::{PredictionsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tournament phases as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    GroupStage,
    #[serde(rename = "ROUND_OF_32")]
    RoundOf32,
    #[serde(rename = "ROUND_OF_16")]
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    ThirdPlace,
    Final,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::GroupStage,
        Phase::RoundOf32,
        Phase::RoundOf16,
        Phase::QuarterFinals,
        Phase::SemiFinals,
        Phase::ThirdPlace,
        Phase::Final,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::GroupStage => "GROUP_STAGE",
            Phase::RoundOf32 => "ROUND_OF_32",
            Phase::RoundOf16 => "ROUND_OF_16",
            Phase::QuarterFinals => "QUARTER_FINALS",
            Phase::SemiFinals => "SEMI_FINALS",
            Phase::ThirdPlace => "THIRD_PLACE",
            Phase::Final => "FINAL",
        }
    }

    pub fn is_knockout(&self) -> bool {
        !matches!(self, Phase::GroupStage)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = PredictionsError;

    fn from_str(s: &str) -> Result<Self> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PredictionsError::validation("phase", s, "Unknown tournament phase"))
    }
}

/// The bracket rounds a user submits predictions for. Each round has half
/// the matches of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnockoutPhase {
    #[serde(rename = "ROUND_OF_32")]
    RoundOf32,
    #[serde(rename = "ROUND_OF_16")]
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    Final,
}

impl KnockoutPhase {
    pub const ALL: [KnockoutPhase; 5] = [
        KnockoutPhase::RoundOf32,
        KnockoutPhase::RoundOf16,
        KnockoutPhase::QuarterFinals,
        KnockoutPhase::SemiFinals,
        KnockoutPhase::Final,
    ];

    pub fn expected_matches(&self) -> usize {
        match self {
            KnockoutPhase::RoundOf32 => 16,
            KnockoutPhase::RoundOf16 => 8,
            KnockoutPhase::QuarterFinals => 4,
            KnockoutPhase::SemiFinals => 2,
            KnockoutPhase::Final => 1,
        }
    }

    pub fn next(&self) -> Option<KnockoutPhase> {
        match self {
            KnockoutPhase::RoundOf32 => Some(KnockoutPhase::RoundOf16),
            KnockoutPhase::RoundOf16 => Some(KnockoutPhase::QuarterFinals),
            KnockoutPhase::QuarterFinals => Some(KnockoutPhase::SemiFinals),
            KnockoutPhase::SemiFinals => Some(KnockoutPhase::Final),
            KnockoutPhase::Final => None,
        }
    }

    pub fn as_phase(&self) -> Phase {
        match self {
            KnockoutPhase::RoundOf32 => Phase::RoundOf32,
            KnockoutPhase::RoundOf16 => Phase::RoundOf16,
            KnockoutPhase::QuarterFinals => Phase::QuarterFinals,
            KnockoutPhase::SemiFinals => Phase::SemiFinals,
            KnockoutPhase::Final => Phase::Final,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.as_phase().as_str()
    }
}

impl TryFrom<Phase> for KnockoutPhase {
    type Error = PredictionsError;

    fn try_from(phase: Phase) -> Result<Self> {
        KnockoutPhase::ALL
            .into_iter()
            .find(|knockout| knockout.as_phase() == phase)
            .ok_or_else(|| {
                PredictionsError::validation(
                    "phase",
                    phase.as_str(),
                    "Predictions are not submitted for this phase as a bracket round",
                )
            })
    }
}

impl FromStr for KnockoutPhase {
    type Err = PredictionsError;

    fn from_str(s: &str) -> Result<Self> {
        KnockoutPhase::try_from(s.parse::<Phase>()?)
    }
}

impl fmt::Display for KnockoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub fn has_started(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Finished)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScorePair {
    pub home: u8,
    pub away: u8,
}

impl ScorePair {
    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub match_number: u16,
    pub phase: Phase,
    pub status: MatchStatus,
    pub group: Option<String>,
    pub home_team: Option<TeamRef>,
    pub away_team: Option<TeamRef>,
    pub stadium: StadiumRef,
    pub match_date: DateTime<Utc>,
    pub predictions_locked_at: DateTime<Utc>,
    pub score: Option<ScorePair>,
    pub score_et: Option<ScorePair>,
    pub penalties: Option<ScorePair>,
}

impl Match {
    pub fn has_started(&self) -> bool {
        self.status.has_started()
    }

    pub fn is_knockout(&self) -> bool {
        self.phase.is_knockout()
    }

    pub fn predictions_locked(&self, now: DateTime<Utc>) -> bool {
        now >= self.predictions_locked_at
    }

    /// Scores only exist once a match has started; extra time and
    /// penalties only in knockout rounds, each after a tie in the
    /// preceding period.
    pub fn score_is_consistent(&self) -> bool {
        if !self.has_started() {
            return self.score.is_none() && self.score_et.is_none() && self.penalties.is_none();
        }
        if !self.is_knockout() {
            return self.score_et.is_none() && self.penalties.is_none();
        }
        match (self.score, self.score_et, self.penalties) {
            (None, Some(_), _) | (_, None, Some(_)) => false,
            (Some(score), Some(_), _) if !score.is_draw() => false,
            (_, Some(et), Some(_)) if !et.is_draw() => false,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnockoutMatch {
    pub id: String,
    pub match_number: u16,
    pub home_team: Option<TeamRef>,
    pub away_team: Option<TeamRef>,
    pub stadium: StadiumRef,
    pub match_date: DateTime<Utc>,
    pub predictions_locked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPhase {
    pub phase: Phase,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    pub total: u32,
    pub phases: Vec<CalendarPhase>,
}

impl Calendar {
    pub fn matches_in(&self, phase: Phase) -> &[Match] {
        self.phases
            .iter()
            .find(|entry| entry.phase == phase)
            .map(|entry| entry.matches.as_slice())
            .unwrap_or(&[])
    }
}
