use super::stadium::{StadiumRefDto, StadiumRefMapper};
use super::team::{TeamRefDto, TeamRefMapper};
use super::Mapper;
use crate::domain::model::{
    Calendar, CalendarPhase, KnockoutMatch, Match, MatchStatus, Phase, ScorePair,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDto {
    pub home: u8,
    pub away: u8,
}

impl From<ScoreDto> for ScorePair {
    fn from(dto: ScoreDto) -> Self {
        ScorePair {
            home: dto.home,
            away: dto.away,
        }
    }
}

impl From<ScorePair> for ScoreDto {
    fn from(score: ScorePair) -> Self {
        ScoreDto {
            home: score.home,
            away: score.away,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: String,
    pub match_number: u16,
    pub phase: Phase,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<TeamRefDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<TeamRefDto>,
    pub stadium: StadiumRefDto,
    pub match_date: DateTime<Utc>,
    pub predictions_locked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_et: Option<ScoreDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<ScoreDto>,
}

pub struct MatchMapper;

impl Mapper for MatchMapper {
    type Dto = MatchDto;
    type Domain = Match;

    fn to_domain(dto: MatchDto) -> Match {
        Match {
            id: dto.id,
            match_number: dto.match_number,
            phase: dto.phase,
            status: dto.status,
            group: dto.group,
            home_team: dto.home_team.map(TeamRefMapper::to_domain),
            away_team: dto.away_team.map(TeamRefMapper::to_domain),
            stadium: StadiumRefMapper::to_domain(dto.stadium),
            match_date: dto.match_date,
            predictions_locked_at: dto.predictions_locked_at,
            score: dto.score.map(Into::into),
            score_et: dto.score_et.map(Into::into),
            penalties: dto.penalties.map(Into::into),
        }
    }

    fn to_dto(game: &Match) -> MatchDto {
        MatchDto {
            id: game.id.clone(),
            match_number: game.match_number,
            phase: game.phase,
            status: game.status,
            group: game.group.clone(),
            home_team: game.home_team.as_ref().map(TeamRefMapper::to_dto),
            away_team: game.away_team.as_ref().map(TeamRefMapper::to_dto),
            stadium: StadiumRefMapper::to_dto(&game.stadium),
            match_date: game.match_date,
            predictions_locked_at: game.predictions_locked_at,
            score: game.score.map(Into::into),
            score_et: game.score_et.map(Into::into),
            penalties: game.penalties.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutMatchDto {
    pub id: String,
    pub match_number: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<TeamRefDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<TeamRefDto>,
    pub stadium: StadiumRefDto,
    pub match_date: DateTime<Utc>,
    pub predictions_locked_at: DateTime<Utc>,
}

pub struct KnockoutMatchMapper;

impl Mapper for KnockoutMatchMapper {
    type Dto = KnockoutMatchDto;
    type Domain = KnockoutMatch;

    fn to_domain(dto: KnockoutMatchDto) -> KnockoutMatch {
        KnockoutMatch {
            id: dto.id,
            match_number: dto.match_number,
            home_team: dto.home_team.map(TeamRefMapper::to_domain),
            away_team: dto.away_team.map(TeamRefMapper::to_domain),
            stadium: StadiumRefMapper::to_domain(dto.stadium),
            match_date: dto.match_date,
            predictions_locked_at: dto.predictions_locked_at,
        }
    }

    fn to_dto(game: &KnockoutMatch) -> KnockoutMatchDto {
        KnockoutMatchDto {
            id: game.id.clone(),
            match_number: game.match_number,
            home_team: game.home_team.as_ref().map(TeamRefMapper::to_dto),
            away_team: game.away_team.as_ref().map(TeamRefMapper::to_dto),
            stadium: StadiumRefMapper::to_dto(&game.stadium),
            match_date: game.match_date,
            predictions_locked_at: game.predictions_locked_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarPhaseDto {
    pub phase: Phase,
    pub matches: Vec<MatchDto>,
}

/// `GET /matches/calendar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResponseDto {
    pub total: u32,
    pub calendar: Vec<CalendarPhaseDto>,
}

pub struct CalendarMapper;

impl Mapper for CalendarMapper {
    type Dto = CalendarResponseDto;
    type Domain = Calendar;

    fn to_domain(dto: CalendarResponseDto) -> Calendar {
        Calendar {
            total: dto.total,
            phases: dto
                .calendar
                .into_iter()
                .map(|entry| CalendarPhase {
                    phase: entry.phase,
                    matches: MatchMapper::to_domain_list(entry.matches),
                })
                .collect(),
        }
    }

    fn to_dto(calendar: &Calendar) -> CalendarResponseDto {
        CalendarResponseDto {
            total: calendar.total,
            calendar: calendar
                .phases
                .iter()
                .map(|entry| CalendarPhaseDto {
                    phase: entry.phase,
                    matches: entry.matches.iter().map(MatchMapper::to_dto).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR: &str = r#"{
        "total": 2,
        "calendar": [
            {
                "phase": "GROUP_STAGE",
                "matches": [{
                    "id": "m-1", "matchNumber": 1, "phase": "GROUP_STAGE", "status": "FINISHED",
                    "group": "A",
                    "homeTeam": {"id": "t-mex", "name": "Mexico", "fifaCode": "MEX"},
                    "awayTeam": {"id": "t-rsa", "name": "South Africa", "fifaCode": "RSA"},
                    "stadium": {"id": "s-azt", "name": "Estadio Azteca", "city": "Mexico City"},
                    "matchDate": "2026-06-11T19:00:00Z",
                    "predictionsLockedAt": "2026-06-11T18:00:00Z",
                    "score": {"home": 2, "away": 0}
                }]
            },
            {
                "phase": "FINAL",
                "matches": [{
                    "id": "m-104", "matchNumber": 104, "phase": "FINAL", "status": "SCHEDULED",
                    "stadium": {"id": "s-met", "name": "MetLife Stadium", "city": "East Rutherford"},
                    "matchDate": "2026-07-19T19:00:00Z",
                    "predictionsLockedAt": "2026-07-19T18:00:00Z"
                }]
            }
        ]
    }"#;

    #[test]
    fn test_calendar_from_wire() {
        let dto: CalendarResponseDto = serde_json::from_str(CALENDAR).unwrap();
        let calendar = CalendarMapper::to_domain(dto.clone());

        assert_eq!(calendar.total, 2);
        let opener = &calendar.matches_in(Phase::GroupStage)[0];
        assert_eq!(opener.score, Some(ScorePair { home: 2, away: 0 }));
        assert_eq!(opener.home_team.as_ref().unwrap().fifa_code, "MEX");
        assert!(opener.score_is_consistent());

        let final_match = &calendar.matches_in(Phase::Final)[0];
        assert!(final_match.home_team.is_none());
        assert!(final_match.score.is_none());
        assert!(calendar.matches_in(Phase::ThirdPlace).is_empty());

        assert_eq!(CalendarMapper::to_dto(&calendar), dto);
    }

    #[test]
    fn test_absent_scores_are_omitted() {
        let dto: CalendarResponseDto = serde_json::from_str(CALENDAR).unwrap();
        let final_match = serde_json::to_value(&dto.calendar[1].matches[0]).unwrap();
        assert!(final_match.get("score").is_none());
        assert!(final_match.get("scoreEt").is_none());
        assert_eq!(final_match["predictionsLockedAt"], "2026-07-19T18:00:00Z");
    }
}
