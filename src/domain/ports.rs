use crate::domain::model::{
    AuthSession, Awards, Calendar, CheckoutSession, Credentials, Group, GroupStanding,
    GroupSubmissionResult, KnockoutMatch, KnockoutPhase, KnockoutSubmissionResult, League,
    LeagueCategory, LeagueMember, LeagueRanking, Match, MatchPrediction, NewLeague, PaymentStatus,
    Phase, Player, Prediction, PredictionStats, ProfileUpdate, Registration, Stadium, Team, User,
};
use crate::utils::error::Result;
use async_trait::async_trait;

// Lookups by id return Ok(None) when the service reports the record does
// not exist; every other failure is an error.

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn get_calendar(&self) -> Result<Calendar>;
    async fn get_by_id(&self, match_id: &str) -> Result<Option<Match>>;
    async fn get_by_phase(&self, phase: Phase) -> Result<Vec<Match>>;
    async fn get_knockout_matches(&self, phase: KnockoutPhase) -> Result<Vec<KnockoutMatch>>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Team>>;
    async fn get_by_id(&self, team_id: &str) -> Result<Option<Team>>;
    async fn get_groups(&self) -> Result<Vec<Group>>;
    async fn get_group_standings(&self, group_id: &str) -> Result<Vec<GroupStanding>>;
}

#[async_trait]
pub trait StadiumRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Stadium>>;
    async fn get_by_id(&self, stadium_id: &str) -> Result<Option<Stadium>>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn get_by_team(&self, team_id: &str) -> Result<Vec<Player>>;
    async fn get_by_id(&self, player_id: &str) -> Result<Option<Player>>;
}

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn get_by_id(&self, league_id: &str) -> Result<Option<League>>;
    async fn get_my_leagues(&self) -> Result<Vec<League>>;
    async fn get_public_leagues(&self, category: Option<LeagueCategory>) -> Result<Vec<League>>;
    async fn create(&self, league: NewLeague) -> Result<League>;
    async fn join(&self, code: &str) -> Result<League>;
    async fn leave(&self, league_id: &str) -> Result<()>;
    /// Members in the backend's canonical ranking order.
    async fn get_ranking(&self, league_id: &str) -> Result<LeagueRanking>;
    async fn get_members(&self, league_id: &str) -> Result<Vec<LeagueMember>>;
}

#[async_trait]
pub trait PredictionRepository: Send + Sync {
    async fn get_by_id(&self, prediction_id: &str) -> Result<Option<Prediction>>;
    async fn create(&self, league_id: &str) -> Result<Prediction>;
    async fn get_stats(&self, prediction_id: &str) -> Result<PredictionStats>;
    async fn save_group_predictions(
        &self,
        prediction_id: &str,
        group_id: &str,
        predictions: Vec<MatchPrediction>,
    ) -> Result<GroupSubmissionResult>;
    async fn save_knockout_predictions(
        &self,
        prediction_id: &str,
        phase: KnockoutPhase,
        predictions: Vec<MatchPrediction>,
    ) -> Result<KnockoutSubmissionResult>;
    async fn save_awards(&self, prediction_id: &str, awards: Awards) -> Result<Awards>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create_checkout(&self, league_id: &str) -> Result<CheckoutSession>;
    async fn get_status(&self, session_id: &str) -> Result<PaymentStatus>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_profile(&self) -> Result<User>;
    async fn update_profile(&self, update: ProfileUpdate) -> Result<User>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<AuthSession>;
    async fn register(&self, registration: Registration) -> Result<AuthSession>;
    async fn logout(&self) -> Result<()>;
    async fn verify_email(&self, token: &str) -> Result<User>;
}
