use super::Mapper;
use crate::domain::model::{Stadium, StadiumRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumDto {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub capacity: u32,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumRefDto {
    pub id: String,
    pub name: String,
    pub city: String,
}

pub struct StadiumMapper;

impl Mapper for StadiumMapper {
    type Dto = StadiumDto;
    type Domain = Stadium;

    fn to_domain(dto: StadiumDto) -> Stadium {
        Stadium {
            id: dto.id,
            name: dto.name,
            city: dto.city,
            country: dto.country,
            capacity: dto.capacity,
            timezone: dto.timezone,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }

    fn to_dto(stadium: &Stadium) -> StadiumDto {
        StadiumDto {
            id: stadium.id.clone(),
            name: stadium.name.clone(),
            city: stadium.city.clone(),
            country: stadium.country.clone(),
            capacity: stadium.capacity,
            timezone: stadium.timezone.clone(),
            created_at: stadium.created_at,
            updated_at: stadium.updated_at,
        }
    }
}

pub struct StadiumRefMapper;

impl Mapper for StadiumRefMapper {
    type Dto = StadiumRefDto;
    type Domain = StadiumRef;

    fn to_domain(dto: StadiumRefDto) -> StadiumRef {
        StadiumRef {
            id: dto.id,
            name: dto.name,
            city: dto.city,
        }
    }

    fn to_dto(stadium: &StadiumRef) -> StadiumRefDto {
        StadiumRefDto {
            id: stadium.id.clone(),
            name: stadium.name.clone(),
            city: stadium.city.clone(),
        }
    }
}
