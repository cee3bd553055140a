pub mod client;

mod auth;
mod leagues;
mod matches;
mod payments;
mod players;
mod predictions;
mod stadiums;
mod teams;
mod users;

pub use auth::HttpAuthRepository;
pub use client::ApiClient;
pub use leagues::HttpLeagueRepository;
pub use matches::HttpMatchRepository;
pub use payments::HttpPaymentRepository;
pub use players::HttpPlayerRepository;
pub use predictions::HttpPredictionRepository;
pub use stadiums::HttpStadiumRepository;
pub use teams::HttpTeamRepository;
pub use users::HttpUserRepository;
