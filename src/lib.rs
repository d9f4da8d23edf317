pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

// Re-export commonly used items
pub use config::{AppState, Config};
pub use error::AppError;
pub use handlers::configure;
pub use models::*;
pub use store::Store;
