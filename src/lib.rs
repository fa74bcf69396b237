pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;

pub use config::AppConfig;
pub use error::{ApiError, LoadError};
pub use state::AppState;
