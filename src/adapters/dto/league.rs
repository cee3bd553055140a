use super::Mapper;
use crate::domain::model::{League, LeagueCategory, LeagueMember, LeagueRanking, NewLeague};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code: String,
    pub category: LeagueCategory,
    pub is_public: bool,
    #[serde(default)]
    pub is_paid: bool,
    pub admin_id: String,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_members: Option<u32>,
    pub created_at: DateTime<Utc>,
}

pub struct LeagueMapper;

impl Mapper for LeagueMapper {
    type Dto = LeagueDto;
    type Domain = League;

    fn to_domain(dto: LeagueDto) -> League {
        League {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            code: dto.code,
            category: dto.category,
            is_public: dto.is_public,
            is_paid: dto.is_paid,
            admin_id: dto.admin_id,
            member_count: dto.member_count,
            max_members: dto.max_members,
            created_at: dto.created_at,
        }
    }

    fn to_dto(league: &League) -> LeagueDto {
        LeagueDto {
            id: league.id.clone(),
            name: league.name.clone(),
            description: league.description.clone(),
            code: league.code.clone(),
            category: league.category,
            is_public: league.is_public,
            is_paid: league.is_paid,
            admin_id: league.admin_id.clone(),
            member_count: league.member_count,
            max_members: league.max_members,
            created_at: league.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMemberDto {
    pub user_id: String,
    pub display_name: String,
    pub total_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_points_calculation: Option<DateTime<Utc>>,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

pub struct LeagueMemberMapper;

impl Mapper for LeagueMemberMapper {
    type Dto = LeagueMemberDto;
    type Domain = LeagueMember;

    fn to_domain(dto: LeagueMemberDto) -> LeagueMember {
        LeagueMember {
            user_id: dto.user_id,
            display_name: dto.display_name,
            total_points: dto.total_points,
            last_points_calculation: dto.last_points_calculation,
            join_date: dto.join_date,
            position: dto.position,
        }
    }

    fn to_dto(member: &LeagueMember) -> LeagueMemberDto {
        LeagueMemberDto {
            user_id: member.user_id.clone(),
            display_name: member.display_name.clone(),
            total_points: member.total_points,
            last_points_calculation: member.last_points_calculation,
            join_date: member.join_date,
            position: member.position,
        }
    }
}

/// `GET /leagues/{id}/ranking`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponseDto {
    pub league_id: String,
    pub ranking: Vec<LeagueMemberDto>,
}

pub struct RankingMapper;

impl Mapper for RankingMapper {
    type Dto = RankingResponseDto;
    type Domain = LeagueRanking;

    /// Keeps the backend order untouched.
    fn to_domain(dto: RankingResponseDto) -> LeagueRanking {
        LeagueRanking {
            league_id: dto.league_id,
            members: LeagueMemberMapper::to_domain_list(dto.ranking),
        }
    }

    fn to_dto(ranking: &LeagueRanking) -> RankingResponseDto {
        RankingResponseDto {
            league_id: ranking.league_id.clone(),
            ranking: ranking.members.iter().map(LeagueMemberMapper::to_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueRequestDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: LeagueCategory,
    pub is_public: bool,
}

impl From<NewLeague> for CreateLeagueRequestDto {
    fn from(league: NewLeague) -> Self {
        Self {
            name: league.name,
            description: league.description,
            category: league.category,
            is_public: league.is_public,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinLeagueRequestDto {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_keeps_backend_order() {
        let json = r#"{
            "leagueId": "l-1",
            "ranking": [
                {"userId": "u-2", "displayName": "Bo", "totalPoints": 10,
                 "lastPointsCalculation": "2024-01-02T00:00:00Z", "joinDate": "2023-02-01T00:00:00Z", "position": 1},
                {"userId": "u-1", "displayName": "Al", "totalPoints": 10,
                 "lastPointsCalculation": "2024-01-01T00:00:00Z", "joinDate": "2023-01-01T00:00:00Z", "position": 2},
                {"userId": "u-4", "displayName": "Di", "totalPoints": 0,
                 "lastPointsCalculation": null, "joinDate": "2023-03-01T00:00:00Z"}
            ]
        }"#;
        let ranking = RankingMapper::to_domain(serde_json::from_str(json).unwrap());
        let ids: Vec<&str> = ranking.members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u-2", "u-1", "u-4"]);
        assert!(ranking.members[2].last_points_calculation.is_none());
        assert!(ranking.is_canonically_ordered());
    }

    #[test]
    fn test_unscored_member_omits_last_calculation() {
        let member = LeagueMemberDto {
            user_id: "u-5".to_string(),
            display_name: "Eve".to_string(),
            total_points: 0,
            last_points_calculation: None,
            join_date: "2026-01-01T00:00:00Z".parse().unwrap(),
            position: None,
        };
        let json = serde_json::to_value(&member).unwrap();
        assert!(json.get("lastPointsCalculation").is_none());
        assert!(json.get("position").is_none());
        assert_eq!(json["joinDate"], "2026-01-01T00:00:00Z");

        let back: LeagueMemberDto = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn test_create_league_body() {
        let body = CreateLeagueRequestDto::from(NewLeague {
            name: "Office pool".to_string(),
            description: None,
            category: LeagueCategory::Corporate,
            is_public: false,
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"name": "Office pool", "category": "corporate", "isPublic": false})
        );
    }
}
