#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wc_predictions::domain::model::*;
use wc_predictions::domain::ports::*;
use wc_predictions::{PredictionsError, Repositories, Result};

pub const LEAGUE_ID: &str = "5b1f0e3a-8c2d-4f6e-9a7b-3c4d5e6f7a8b";
pub const PREDICTION_ID: &str = "0d9c8b7a-6e5f-4a3b-8c1d-2e3f4a5b6c7d";
pub const USER_ID: &str = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";

/// In-memory implementation of every repository port. Counts calls and
/// can be told to fail the next calls with an API status.
#[derive(Default)]
pub struct FakeBackend {
    calls: AtomicUsize,
    pub league: Mutex<Option<League>>,
    pub verified: AtomicBool,
    pub fail_with_status: Mutex<Option<u16>>,
    pub last_knockout: Mutex<Option<(String, KnockoutPhase, Vec<MatchPrediction>)>>,
    pub last_category: Mutex<Option<Option<LeagueCategory>>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.fail_with_status.lock().unwrap() {
            Some(status) => Err(PredictionsError::Api {
                status,
                message: format!("backend failed with {}", status),
            }),
            None => Ok(()),
        }
    }
}

pub fn repositories(backend: &Arc<FakeBackend>) -> Repositories {
    Repositories {
        matches: backend.clone(),
        teams: backend.clone(),
        stadiums: backend.clone(),
        players: backend.clone(),
        leagues: backend.clone(),
        predictions: backend.clone(),
        payments: backend.clone(),
        users: backend.clone(),
        auth: backend.clone(),
    }
}

pub fn league() -> League {
    League {
        id: LEAGUE_ID.to_string(),
        name: "Office pool".to_string(),
        description: None,
        code: "ABC123".to_string(),
        category: LeagueCategory::Corporate,
        is_public: false,
        is_paid: false,
        admin_id: USER_ID.to_string(),
        member_count: 4,
        max_members: Some(20),
        created_at: Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap(),
    }
}

pub fn user(verified: bool) -> User {
    User {
        id: USER_ID.to_string(),
        email: "ana@example.com".to_string(),
        display_name: "Ana".to_string(),
        avatar_url: None,
        is_email_verified: verified,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
    }
}

fn prediction() -> Prediction {
    Prediction {
        id: PREDICTION_ID.to_string(),
        league_id: LEAGUE_ID.to_string(),
        user_id: USER_ID.to_string(),
        name: None,
        champion_team_id: None,
        created_at: Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap(),
    }
}

#[async_trait]
impl MatchRepository for FakeBackend {
    async fn get_calendar(&self) -> Result<Calendar> {
        self.hit()?;
        Ok(Calendar {
            total: 0,
            phases: vec![],
        })
    }

    async fn get_by_id(&self, _match_id: &str) -> Result<Option<Match>> {
        self.hit()?;
        Ok(None)
    }

    async fn get_by_phase(&self, _phase: Phase) -> Result<Vec<Match>> {
        self.hit()?;
        Ok(vec![])
    }

    async fn get_knockout_matches(&self, _phase: KnockoutPhase) -> Result<Vec<KnockoutMatch>> {
        self.hit()?;
        Ok(vec![])
    }
}

#[async_trait]
impl TeamRepository for FakeBackend {
    async fn get_all(&self) -> Result<Vec<Team>> {
        self.hit()?;
        Ok(vec![])
    }

    async fn get_by_id(&self, _team_id: &str) -> Result<Option<Team>> {
        self.hit()?;
        Ok(None)
    }

    async fn get_groups(&self) -> Result<Vec<Group>> {
        self.hit()?;
        Ok(vec![])
    }

    async fn get_group_standings(&self, _group_id: &str) -> Result<Vec<GroupStanding>> {
        self.hit()?;
        Ok(vec![])
    }
}

#[async_trait]
impl StadiumRepository for FakeBackend {
    async fn get_all(&self) -> Result<Vec<Stadium>> {
        self.hit()?;
        Ok(vec![])
    }

    async fn get_by_id(&self, _stadium_id: &str) -> Result<Option<Stadium>> {
        self.hit()?;
        Ok(None)
    }
}

#[async_trait]
impl PlayerRepository for FakeBackend {
    async fn get_by_team(&self, _team_id: &str) -> Result<Vec<Player>> {
        self.hit()?;
        Ok(vec![])
    }

    async fn get_by_id(&self, _player_id: &str) -> Result<Option<Player>> {
        self.hit()?;
        Ok(None)
    }
}

#[async_trait]
impl LeagueRepository for FakeBackend {
    async fn get_by_id(&self, _league_id: &str) -> Result<Option<League>> {
        self.hit()?;
        Ok(self.league.lock().unwrap().clone())
    }

    async fn get_my_leagues(&self) -> Result<Vec<League>> {
        self.hit()?;
        Ok(vec![league()])
    }

    async fn get_public_leagues(&self, category: Option<LeagueCategory>) -> Result<Vec<League>> {
        self.hit()?;
        *self.last_category.lock().unwrap() = Some(category);
        Ok(vec![league()])
    }

    async fn create(&self, new_league: NewLeague) -> Result<League> {
        self.hit()?;
        Ok(League {
            name: new_league.name,
            category: new_league.category,
            ..league()
        })
    }

    async fn join(&self, _code: &str) -> Result<League> {
        self.hit()?;
        Ok(league())
    }

    async fn leave(&self, _league_id: &str) -> Result<()> {
        self.hit()
    }

    async fn get_ranking(&self, league_id: &str) -> Result<LeagueRanking> {
        self.hit()?;
        Ok(LeagueRanking {
            league_id: league_id.to_string(),
            members: vec![],
        })
    }

    async fn get_members(&self, _league_id: &str) -> Result<Vec<LeagueMember>> {
        self.hit()?;
        Ok(vec![])
    }
}

#[async_trait]
impl PredictionRepository for FakeBackend {
    async fn get_by_id(&self, _prediction_id: &str) -> Result<Option<Prediction>> {
        self.hit()?;
        Ok(Some(prediction()))
    }

    async fn create(&self, _league_id: &str) -> Result<Prediction> {
        self.hit()?;
        Ok(prediction())
    }

    async fn get_stats(&self, _prediction_id: &str) -> Result<PredictionStats> {
        self.hit()?;
        Ok(PredictionStats {
            total_matches: 104,
            predicted_matches: 52,
            groups_completed: 6,
            total_groups: 12,
            has_champion: false,
            has_all_awards: false,
            completion_percentage: 50,
        })
    }

    async fn save_group_predictions(
        &self,
        _prediction_id: &str,
        group_id: &str,
        predictions: Vec<MatchPrediction>,
    ) -> Result<GroupSubmissionResult> {
        self.hit()?;
        Ok(GroupSubmissionResult {
            success: true,
            message: "saved".to_string(),
            group_id: group_id.to_string(),
            matches_saved: predictions.len() as u32,
            groups_completed: 1,
        })
    }

    async fn save_knockout_predictions(
        &self,
        prediction_id: &str,
        phase: KnockoutPhase,
        predictions: Vec<MatchPrediction>,
    ) -> Result<KnockoutSubmissionResult> {
        self.hit()?;
        let saved = predictions.len() as u32;
        *self.last_knockout.lock().unwrap() =
            Some((prediction_id.to_string(), phase, predictions));
        Ok(KnockoutSubmissionResult {
            success: true,
            message: "saved".to_string(),
            phase,
            matches_saved: saved,
            knockouts_completed: phase == KnockoutPhase::Final,
        })
    }

    async fn save_awards(&self, _prediction_id: &str, awards: Awards) -> Result<Awards> {
        self.hit()?;
        Ok(awards)
    }
}

#[async_trait]
impl PaymentRepository for FakeBackend {
    async fn create_checkout(&self, _league_id: &str) -> Result<CheckoutSession> {
        self.hit()?;
        Ok(CheckoutSession {
            session_id: "cs_test_1".to_string(),
            checkout_url: "https://pay.example.com/cs_test_1".to_string(),
        })
    }

    async fn get_status(&self, session_id: &str) -> Result<PaymentStatus> {
        self.hit()?;
        Ok(PaymentStatus {
            session_id: session_id.to_string(),
            league_id: LEAGUE_ID.to_string(),
            status: PaymentState::Paid,
        })
    }
}

#[async_trait]
impl UserRepository for FakeBackend {
    async fn get_profile(&self) -> Result<User> {
        self.hit()?;
        Ok(user(true))
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        self.hit()?;
        Ok(User {
            display_name: update.display_name,
            avatar_url: update.avatar_url,
            ..user(true)
        })
    }
}

#[async_trait]
impl AuthRepository for FakeBackend {
    async fn login(&self, _credentials: Credentials) -> Result<AuthSession> {
        self.hit()?;
        Ok(AuthSession {
            access_token: "token-login".to_string(),
            user: user(true),
        })
    }

    async fn register(&self, registration: Registration) -> Result<AuthSession> {
        self.hit()?;
        Ok(AuthSession {
            access_token: "token-register".to_string(),
            user: User {
                email: registration.email,
                display_name: registration.display_name,
                ..user(false)
            },
        })
    }

    async fn logout(&self) -> Result<()> {
        self.hit()
    }

    async fn verify_email(&self, _token: &str) -> Result<User> {
        self.hit()?;
        Ok(user(self.verified.load(Ordering::SeqCst)))
    }
}
