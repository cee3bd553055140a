pub mod container;
pub mod use_cases;

pub use container::{AppContainer, Repositories};
