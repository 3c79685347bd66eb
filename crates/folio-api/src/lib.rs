pub mod book;
pub mod card;
pub mod chapter;
pub mod config;
pub mod error;
pub mod middleware;
pub mod review;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::{ApiConfig, Environment};
pub use error::ApiError;
pub use state::ApiState;
