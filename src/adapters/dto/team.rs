use super::Mapper;
use crate::domain::model::{Confederation, Team, TeamRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub fifa_code: String,
    pub confederation: Confederation,
    pub is_host: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRefDto {
    pub id: String,
    pub name: String,
    pub fifa_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
}

pub struct TeamMapper;

impl Mapper for TeamMapper {
    type Dto = TeamDto;
    type Domain = Team;

    fn to_domain(dto: TeamDto) -> Team {
        Team {
            id: dto.id,
            name: dto.name,
            fifa_code: dto.fifa_code,
            confederation: dto.confederation,
            is_host: dto.is_host,
            group: dto.group,
            flag_url: dto.flag_url,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }

    fn to_dto(team: &Team) -> TeamDto {
        TeamDto {
            id: team.id.clone(),
            name: team.name.clone(),
            fifa_code: team.fifa_code.clone(),
            confederation: team.confederation,
            is_host: team.is_host,
            group: team.group.clone(),
            flag_url: team.flag_url.clone(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

pub struct TeamRefMapper;

impl Mapper for TeamRefMapper {
    type Dto = TeamRefDto;
    type Domain = TeamRef;

    fn to_domain(dto: TeamRefDto) -> TeamRef {
        TeamRef {
            id: dto.id,
            name: dto.name,
            fifa_code: dto.fifa_code,
            flag_url: dto.flag_url,
        }
    }

    fn to_dto(team: &TeamRef) -> TeamRefDto {
        TeamRefDto {
            id: team.id.clone(),
            name: team.name.clone(),
            fifa_code: team.fifa_code.clone(),
            flag_url: team.flag_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_wire() {
        let json = r#"{
            "id": "0b6c3c52-7a1f-4f3e-9d55-2d8e1f4a9c10",
            "name": "Mexico",
            "fifaCode": "MEX",
            "confederation": "CONCACAF",
            "isHost": true,
            "group": "A",
            "createdAt": "2025-12-05T17:00:00Z",
            "updatedAt": "2025-12-06T09:30:15.250Z"
        }"#;
        let dto: TeamDto = serde_json::from_str(json).unwrap();
        let team = TeamMapper::to_domain(dto);

        assert_eq!(team.confederation, Confederation::Concacaf);
        assert!(team.is_host);
        assert!(team.fifa_code_is_valid());
        assert_eq!(team.flag_url, None);
        assert_eq!(team.updated_at.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_unknown_confederation_rejected_by_deserializer() {
        let json = r#"{
            "id": "t", "name": "Atlantis", "fifaCode": "ATL", "confederation": "NOPE",
            "isHost": false, "createdAt": "2025-12-05T17:00:00Z", "updatedAt": "2025-12-05T17:00:00Z"
        }"#;
        assert!(serde_json::from_str::<TeamDto>(json).is_err());
    }

    #[test]
    fn test_tbd_slot() {
        let json = r#"{
            "id": "t", "name": "UEFA Playoff D", "fifaCode": "TBD", "confederation": "TBD",
            "isHost": false, "createdAt": "2025-12-05T17:00:00Z", "updatedAt": "2025-12-05T17:00:00Z"
        }"#;
        let team = TeamMapper::to_domain(serde_json::from_str(json).unwrap());
        assert_eq!(team.confederation, Confederation::Tbd);
        let back = serde_json::to_value(TeamMapper::to_dto(&team)).unwrap();
        assert_eq!(back["confederation"], "TBD");
        assert!(back.get("flagUrl").is_none());
    }
}
