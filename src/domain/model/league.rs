use crate::utils::error::{PredictionsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueCategory {
    General,
    Corporate,
    Friends,
    Community,
}

impl LeagueCategory {
    pub const ALL: [LeagueCategory; 4] = [
        LeagueCategory::General,
        LeagueCategory::Corporate,
        LeagueCategory::Friends,
        LeagueCategory::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueCategory::General => "general",
            LeagueCategory::Corporate => "corporate",
            LeagueCategory::Friends => "friends",
            LeagueCategory::Community => "community",
        }
    }
}

impl fmt::Display for LeagueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the wire values.
impl FromStr for LeagueCategory {
    type Err = PredictionsError;

    fn from_str(s: &str) -> Result<Self> {
        LeagueCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| PredictionsError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub code: String,
    pub category: LeagueCategory,
    pub is_public: bool,
    pub is_paid: bool,
    pub admin_id: String,
    pub member_count: u32,
    pub max_members: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl League {
    pub fn is_full(&self) -> bool {
        self.max_members
            .is_some_and(|max| self.member_count >= max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueMember {
    pub user_id: String,
    pub display_name: String,
    pub total_points: u32,
    /// None until the backend has scored this member at least once.
    pub last_points_calculation: Option<DateTime<Utc>>,
    pub join_date: DateTime<Utc>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueRanking {
    pub league_id: String,
    pub members: Vec<LeagueMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLeague {
    pub name: String,
    pub description: Option<String>,
    pub category: LeagueCategory,
    pub is_public: bool,
}
