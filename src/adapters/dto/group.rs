use super::team::{TeamDto, TeamMapper};
use super::Mapper;
use crate::domain::model::{Group, GroupStanding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStandingDto {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
    #[serde(default)]
    pub standings: Vec<GroupStandingDto>,
}

pub struct GroupStandingMapper;

impl Mapper for GroupStandingMapper {
    type Dto = GroupStandingDto;
    type Domain = GroupStanding;

    fn to_domain(dto: GroupStandingDto) -> GroupStanding {
        GroupStanding {
            team_id: dto.team_id,
            position: dto.position,
            points: dto.points,
            played: dto.played,
            wins: dto.wins,
            draws: dto.draws,
            losses: dto.losses,
            goals_for: dto.goals_for,
            goals_against: dto.goals_against,
            goal_difference: dto.goal_difference,
        }
    }

    fn to_dto(standing: &GroupStanding) -> GroupStandingDto {
        GroupStandingDto {
            team_id: standing.team_id.clone(),
            position: standing.position,
            points: standing.points,
            played: standing.played,
            wins: standing.wins,
            draws: standing.draws,
            losses: standing.losses,
            goals_for: standing.goals_for,
            goals_against: standing.goals_against,
            goal_difference: standing.goal_difference,
        }
    }
}

pub struct GroupMapper;

impl Mapper for GroupMapper {
    type Dto = GroupDto;
    type Domain = Group;

    fn to_domain(dto: GroupDto) -> Group {
        Group {
            id: dto.id,
            name: dto.name,
            teams: TeamMapper::to_domain_list(dto.teams),
            standings: GroupStandingMapper::to_domain_list(dto.standings),
        }
    }

    fn to_dto(group: &Group) -> GroupDto {
        GroupDto {
            id: group.id.clone(),
            name: group.name.clone(),
            teams: group.teams.iter().map(TeamMapper::to_dto).collect(),
            standings: group.standings.iter().map(GroupStandingMapper::to_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Confederation, Team};
    use chrono::{TimeZone, Utc};

    fn team(id: &str, code: &str, confederation: Confederation) -> Team {
        Team {
            id: id.to_string(),
            name: code.to_string(),
            fifa_code: code.to_string(),
            confederation,
            is_host: code == "MEX",
            group: Some("A".to_string()),
            flag_url: Some(format!("https://flags.example.com/{}.svg", code)),
            created_at: Utc.with_ymd_and_hms(2025, 12, 5, 17, 0, 0).unwrap(),
            updated_at: Utc.timestamp_opt(1_765_000_000, 123_456_789).unwrap(),
        }
    }

    fn standing(team_id: &str, position: u8, gf: u32, ga: u32) -> GroupStanding {
        GroupStanding {
            team_id: team_id.to_string(),
            position,
            points: 9 - 3 * (position as u32 - 1).min(3),
            played: 3,
            wins: 3 - (position as u32 - 1).min(3),
            draws: 0,
            losses: (position as u32 - 1).min(3),
            goals_for: gf,
            goals_against: ga,
            goal_difference: gf as i32 - ga as i32,
        }
    }

    fn group_a() -> Group {
        Group {
            id: "g-a".to_string(),
            name: "A".to_string(),
            teams: vec![
                team("t-mex", "MEX", Confederation::Concacaf),
                team("t-rsa", "RSA", Confederation::Caf),
                team("t-kor", "KOR", Confederation::Afc),
                team("t-tbd", "TBD", Confederation::Tbd),
            ],
            standings: vec![
                standing("t-mex", 1, 6, 1),
                standing("t-kor", 2, 4, 3),
                standing("t-rsa", 3, 2, 4),
                standing("t-tbd", 4, 1, 5),
            ],
        }
    }

    #[test]
    fn test_group_round_trip_is_identity() {
        let group = group_a();
        assert_eq!(GroupMapper::to_domain(GroupMapper::to_dto(&group)), group);

        let empty = Group {
            id: "g-l".to_string(),
            name: "L".to_string(),
            teams: vec![],
            standings: vec![],
        };
        assert_eq!(GroupMapper::to_domain(GroupMapper::to_dto(&empty)), empty);
    }

    #[test]
    fn test_group_round_trip_through_json() {
        let group = group_a();
        let json = serde_json::to_string(&GroupMapper::to_dto(&group)).unwrap();
        let parsed: GroupDto = serde_json::from_str(&json).unwrap();
        assert_eq!(GroupMapper::to_domain(parsed), group);
        assert!(group.standings_are_consistent());
    }

    #[test]
    fn test_group_without_standings() {
        let json = r#"{"id": "g-b", "name": "B"}"#;
        let group = GroupMapper::to_domain(serde_json::from_str(json).unwrap());
        assert!(group.teams.is_empty());
        assert!(group.standings.is_empty());
    }
}
