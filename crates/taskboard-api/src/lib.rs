pub mod categories;
pub mod config;
pub mod error;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod router;
pub mod state;
pub mod todos;
pub mod validate;

pub use config::ServerConfig;
pub use router::build_app;
pub use state::{AppState, AppStateInner};
