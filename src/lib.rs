pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{AppContainer, Repositories};
pub use config::ClientConfig;
pub use session::SessionContext;
pub use utils::error::{PredictionsError, Result};
