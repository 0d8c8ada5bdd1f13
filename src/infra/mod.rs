mod auth;
mod cli;
mod client_error;
mod config;

pub use auth::{CurrentUser, USER_ID_HEADER};
pub use cli::Cli;
pub use client_error::ClientError;
pub use config::{DatabaseSettings, ServerSettings, Settings, get_config_settings};
