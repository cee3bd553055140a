//! One type per business operation. Each validates its identifiers, then
//! makes exactly one repository call and returns the result unchanged.

pub mod auth;
pub mod leagues;
pub mod matches;
pub mod payments;
pub mod players;
pub mod predictions;
pub mod stadiums;
pub mod teams;
pub mod users;

pub use auth::{LoginUseCase, LogoutUseCase, RegisterUseCase, VerifyEmailUseCase};
pub use leagues::{
    CreateLeagueUseCase, GetLeagueByIdUseCase, GetLeagueMembersUseCase, GetLeagueRankingUseCase,
    GetLeaguesByCategoryUseCase, GetMyLeaguesUseCase, GetPublicLeaguesUseCase, JoinLeagueUseCase,
    LeaveLeagueUseCase,
};
pub use matches::{
    GetCalendarUseCase, GetKnockoutMatchesUseCase, GetMatchByIdUseCase, GetMatchesByPhaseUseCase,
};
pub use payments::{CreateCheckoutUseCase, GetPaymentStatusUseCase};
pub use players::{GetPlayerByIdUseCase, GetPlayersByTeamUseCase};
pub use predictions::{
    CreatePredictionUseCase, GetPredictionByIdUseCase, GetPredictionStatsUseCase,
    SaveAwardsUseCase, SaveGroupPredictionsUseCase, SubmitKnockoutPredictionsUseCase,
};
pub use stadiums::{GetStadiumByIdUseCase, GetStadiumsUseCase};
pub use teams::{GetGroupStandingsUseCase, GetGroupsUseCase, GetTeamByIdUseCase, GetTeamsUseCase};
pub use users::{GetProfileUseCase, UpdateProfileUseCase};
