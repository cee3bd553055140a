use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub position: String,
    pub shirt_number: Option<u8>,
    pub date_of_birth: Option<NaiveDate>,
    pub club: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
