use crate::adapters::http::{
    ApiClient, HttpAuthRepository, HttpLeagueRepository, HttpMatchRepository,
    HttpPaymentRepository, HttpPlayerRepository, HttpPredictionRepository, HttpStadiumRepository,
    HttpTeamRepository, HttpUserRepository,
};
use crate::app::use_cases::*;
use crate::config::ClientConfig;
use crate::domain::ports::{
    AuthRepository, LeagueRepository, MatchRepository, PaymentRepository, PlayerRepository,
    PredictionRepository, StadiumRepository, TeamRepository, UserRepository,
};
use crate::session::SessionContext;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// One implementation per repository port.
#[derive(Clone)]
pub struct Repositories {
    pub matches: Arc<dyn MatchRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub stadiums: Arc<dyn StadiumRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub leagues: Arc<dyn LeagueRepository>,
    pub predictions: Arc<dyn PredictionRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub users: Arc<dyn UserRepository>,
    pub auth: Arc<dyn AuthRepository>,
}

impl Repositories {
    pub fn http(client: ApiClient) -> Self {
        Self {
            matches: Arc::new(HttpMatchRepository::new(client.clone())),
            teams: Arc::new(HttpTeamRepository::new(client.clone())),
            stadiums: Arc::new(HttpStadiumRepository::new(client.clone())),
            players: Arc::new(HttpPlayerRepository::new(client.clone())),
            leagues: Arc::new(HttpLeagueRepository::new(client.clone())),
            predictions: Arc::new(HttpPredictionRepository::new(client.clone())),
            payments: Arc::new(HttpPaymentRepository::new(client.clone())),
            users: Arc::new(HttpUserRepository::new(client.clone())),
            auth: Arc::new(HttpAuthRepository::new(client)),
        }
    }
}

/// Composition root: owns the repositories and the session and hands out
/// use cases wired to them.
#[derive(Clone)]
pub struct AppContainer {
    repositories: Repositories,
    session: SessionContext,
}

impl AppContainer {
    pub fn new(repositories: Repositories, session: SessionContext) -> Self {
        Self {
            repositories,
            session,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::from_config_with_session(config, SessionContext::new())
    }

    pub fn from_config_with_session(config: &ClientConfig, session: SessionContext) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::new(
            config.base_url()?,
            config.timeout(),
            config.user_agent(),
            session.clone(),
        )?;
        tracing::debug!("API client configured for {}", config.api.base_url);
        Ok(Self::new(Repositories::http(client), session))
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn get_calendar(&self) -> GetCalendarUseCase {
        GetCalendarUseCase::new(self.repositories.matches.clone())
    }

    pub fn get_match_by_id(&self) -> GetMatchByIdUseCase {
        GetMatchByIdUseCase::new(self.repositories.matches.clone())
    }

    pub fn get_matches_by_phase(&self) -> GetMatchesByPhaseUseCase {
        GetMatchesByPhaseUseCase::new(self.repositories.matches.clone())
    }

    pub fn get_knockout_matches(&self) -> GetKnockoutMatchesUseCase {
        GetKnockoutMatchesUseCase::new(self.repositories.matches.clone())
    }

    pub fn get_teams(&self) -> GetTeamsUseCase {
        GetTeamsUseCase::new(self.repositories.teams.clone())
    }

    pub fn get_team_by_id(&self) -> GetTeamByIdUseCase {
        GetTeamByIdUseCase::new(self.repositories.teams.clone())
    }

    pub fn get_groups(&self) -> GetGroupsUseCase {
        GetGroupsUseCase::new(self.repositories.teams.clone())
    }

    pub fn get_group_standings(&self) -> GetGroupStandingsUseCase {
        GetGroupStandingsUseCase::new(self.repositories.teams.clone())
    }

    pub fn get_stadiums(&self) -> GetStadiumsUseCase {
        GetStadiumsUseCase::new(self.repositories.stadiums.clone())
    }

    pub fn get_stadium_by_id(&self) -> GetStadiumByIdUseCase {
        GetStadiumByIdUseCase::new(self.repositories.stadiums.clone())
    }

    pub fn get_players_by_team(&self) -> GetPlayersByTeamUseCase {
        GetPlayersByTeamUseCase::new(self.repositories.players.clone())
    }

    pub fn get_player_by_id(&self) -> GetPlayerByIdUseCase {
        GetPlayerByIdUseCase::new(self.repositories.players.clone())
    }

    pub fn get_league_by_id(&self) -> GetLeagueByIdUseCase {
        GetLeagueByIdUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_my_leagues(&self) -> GetMyLeaguesUseCase {
        GetMyLeaguesUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_public_leagues(&self) -> GetPublicLeaguesUseCase {
        GetPublicLeaguesUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_leagues_by_category(&self) -> GetLeaguesByCategoryUseCase {
        GetLeaguesByCategoryUseCase::new(self.repositories.leagues.clone())
    }

    pub fn create_league(&self) -> CreateLeagueUseCase {
        CreateLeagueUseCase::new(self.repositories.leagues.clone())
    }

    pub fn join_league(&self) -> JoinLeagueUseCase {
        JoinLeagueUseCase::new(self.repositories.leagues.clone())
    }

    pub fn leave_league(&self) -> LeaveLeagueUseCase {
        LeaveLeagueUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_league_ranking(&self) -> GetLeagueRankingUseCase {
        GetLeagueRankingUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_league_members(&self) -> GetLeagueMembersUseCase {
        GetLeagueMembersUseCase::new(self.repositories.leagues.clone())
    }

    pub fn get_prediction_by_id(&self) -> GetPredictionByIdUseCase {
        GetPredictionByIdUseCase::new(self.repositories.predictions.clone())
    }

    pub fn create_prediction(&self) -> CreatePredictionUseCase {
        CreatePredictionUseCase::new(self.repositories.predictions.clone())
    }

    pub fn get_prediction_stats(&self) -> GetPredictionStatsUseCase {
        GetPredictionStatsUseCase::new(self.repositories.predictions.clone())
    }

    pub fn save_group_predictions(&self) -> SaveGroupPredictionsUseCase {
        SaveGroupPredictionsUseCase::new(self.repositories.predictions.clone())
    }

    pub fn submit_knockout_predictions(&self) -> SubmitKnockoutPredictionsUseCase {
        SubmitKnockoutPredictionsUseCase::new(self.repositories.predictions.clone())
    }

    pub fn save_awards(&self) -> SaveAwardsUseCase {
        SaveAwardsUseCase::new(self.repositories.predictions.clone())
    }

    pub fn create_checkout(&self) -> CreateCheckoutUseCase {
        CreateCheckoutUseCase::new(self.repositories.payments.clone())
    }

    pub fn get_payment_status(&self) -> GetPaymentStatusUseCase {
        GetPaymentStatusUseCase::new(self.repositories.payments.clone())
    }

    pub fn get_profile(&self) -> GetProfileUseCase {
        GetProfileUseCase::new(self.repositories.users.clone())
    }

    pub fn update_profile(&self) -> UpdateProfileUseCase {
        UpdateProfileUseCase::new(self.repositories.users.clone(), self.session.clone())
    }

    pub fn login(&self) -> LoginUseCase {
        LoginUseCase::new(self.repositories.auth.clone(), self.session.clone())
    }

    pub fn register(&self) -> RegisterUseCase {
        RegisterUseCase::new(self.repositories.auth.clone(), self.session.clone())
    }

    pub fn logout(&self) -> LogoutUseCase {
        LogoutUseCase::new(self.repositories.auth.clone(), self.session.clone())
    }

    pub fn verify_email(&self) -> VerifyEmailUseCase {
        VerifyEmailUseCase::new(self.repositories.auth.clone(), self.session.clone())
    }
}
