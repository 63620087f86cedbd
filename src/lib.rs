pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{app_router, AppState, Application, SiteOptions};
pub use adapters::resend::ResendProvider;
pub use config::{LambdaConfig, ServerConfig};
pub use core::waitlist::WaitlistService;
pub use utils::error::{Result, WaitlistError};
