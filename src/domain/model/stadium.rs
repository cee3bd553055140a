use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stadium {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: u32,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StadiumRef {
    pub id: String,
    pub name: String,
    pub city: String,
}
