pub mod group;
pub mod league;
pub mod matches;
pub mod payment;
pub mod player;
pub mod prediction;
pub mod stadium;
pub mod team;
pub mod user;

pub use group::{Group, GroupStanding};
pub use league::{League, LeagueCategory, LeagueMember, LeagueRanking, NewLeague};
pub use matches::{
    Calendar, CalendarPhase, KnockoutMatch, KnockoutPhase, Match, MatchStatus, Phase, ScorePair,
};
pub use payment::{CheckoutSession, PaymentState, PaymentStatus};
pub use player::Player;
pub use prediction::{
    Awards, GroupSubmissionResult, KnockoutSubmissionResult, MatchPrediction, PenaltiesWinner,
    Prediction, PredictionStats,
};
pub use stadium::{Stadium, StadiumRef};
pub use team::{Confederation, Team, TeamRef};
pub use user::{AuthSession, Credentials, ProfileUpdate, Registration, User};
