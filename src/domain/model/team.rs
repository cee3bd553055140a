use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confederation {
    Uefa,
    Conmebol,
    Concacaf,
    Caf,
    Afc,
    Ofc,
    /// Slot not yet decided by qualification or playoffs.
    Tbd,
}

impl Confederation {
    pub const ALL: [Confederation; 7] = [
        Confederation::Uefa,
        Confederation::Conmebol,
        Confederation::Concacaf,
        Confederation::Caf,
        Confederation::Afc,
        Confederation::Ofc,
        Confederation::Tbd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Confederation::Uefa => "UEFA",
            Confederation::Conmebol => "CONMEBOL",
            Confederation::Concacaf => "CONCACAF",
            Confederation::Caf => "CAF",
            Confederation::Afc => "AFC",
            Confederation::Ofc => "OFC",
            Confederation::Tbd => "TBD",
        }
    }
}

impl fmt::Display for Confederation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub fifa_code: String,
    pub confederation: Confederation,
    pub is_host: bool,
    pub group: Option<String>,
    pub flag_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// FIFA codes are exactly three ASCII letters.
    pub fn fifa_code_is_valid(&self) -> bool {
        self.fifa_code.len() == 3 && self.fifa_code.chars().all(|c| c.is_ascii_alphabetic())
    }
}

/// Compact team reference embedded in match payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
    pub fifa_code: String,
    pub flag_url: Option<String>,
}
