use super::Mapper;
use crate::domain::model::Player;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub team_id: String,
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct PlayerMapper;

impl Mapper for PlayerMapper {
    type Dto = PlayerDto;
    type Domain = Player;

    fn to_domain(dto: PlayerDto) -> Player {
        Player {
            id: dto.id,
            team_id: dto.team_id,
            name: dto.name,
            position: dto.position,
            shirt_number: dto.shirt_number,
            date_of_birth: dto.date_of_birth,
            club: dto.club,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }

    fn to_dto(player: &Player) -> PlayerDto {
        PlayerDto {
            id: player.id.clone(),
            team_id: player.team_id.clone(),
            name: player.name.clone(),
            position: player.position.clone(),
            shirt_number: player.shirt_number,
            date_of_birth: player.date_of_birth,
            club: player.club.clone(),
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}
