use crate::domain::model::team::Team;
use serde::Serialize;

pub const GROUP_COUNT: u8 = 12;
pub const TEAMS_PER_GROUP: u8 = 4;
/// Round robin between four teams.
pub const MATCHES_PER_GROUP: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStanding {
    pub team_id: String,
    pub position: u8,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl GroupStanding {
    pub fn is_consistent(&self) -> bool {
        let difference = self.goals_for as i64 - self.goals_against as i64;
        (1..=TEAMS_PER_GROUP).contains(&self.position)
            && self.goal_difference as i64 == difference
            && self.wins + self.draws + self.losses == self.played
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub teams: Vec<Team>,
    pub standings: Vec<GroupStanding>,
}

impl Group {
    /// Every standing is internally consistent and positions 1..=n are
    /// each used exactly once.
    pub fn standings_are_consistent(&self) -> bool {
        let mut positions: Vec<u8> = self.standings.iter().map(|s| s.position).collect();
        positions.sort_unstable();
        let expected: Vec<u8> = (1..=self.standings.len() as u8).collect();
        positions == expected && self.standings.iter().all(GroupStanding::is_consistent)
    }
}
