pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod reference;
pub mod services;
pub mod session;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use session::Session;
