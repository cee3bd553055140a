pub mod bracket;
pub mod ranking;
