//! Wire shapes of the predictions API and their mappers.
//!
//! DTOs mirror the JSON exactly (camelCase, RFC 3339 timestamps). Malformed
//! payloads fail in serde; mapping itself never fails.

pub mod group;
pub mod league;
pub mod matches;
pub mod payment;
pub mod player;
pub mod prediction;
pub mod stadium;
pub mod team;
pub mod user;

pub use group::{GroupDto, GroupMapper, GroupStandingDto, GroupStandingMapper};
pub use league::{
    LeagueDto, LeagueMapper, LeagueMemberDto, LeagueMemberMapper, RankingMapper, RankingResponseDto,
};
pub use matches::{
    CalendarMapper, CalendarResponseDto, KnockoutMatchDto, KnockoutMatchMapper, MatchDto, MatchMapper,
};
pub use payment::{CheckoutSessionDto, PaymentStatusDto};
pub use player::{PlayerDto, PlayerMapper};
pub use prediction::{
    AwardsDto, AwardsMapper, GroupSubmissionDto, GroupSubmissionResponseDto, KnockoutSubmissionDto,
    KnockoutSubmissionResponseDto, MatchPredictionDto, MatchPredictionMapper, PredictionDto,
    PredictionMapper, PredictionStatsDto, PredictionStatsMapper,
};
pub use stadium::{StadiumDto, StadiumMapper};
pub use team::{TeamDto, TeamMapper};
pub use user::{AuthResponseDto, UserDto, UserMapper};

/// Stateless conversion between a wire DTO and its domain entity.
pub trait Mapper {
    type Dto;
    type Domain;

    fn to_domain(dto: Self::Dto) -> Self::Domain;

    fn to_dto(domain: &Self::Domain) -> Self::Dto;

    fn to_domain_list(dtos: Vec<Self::Dto>) -> Vec<Self::Domain> {
        dtos.into_iter().map(Self::to_domain).collect()
    }
}
