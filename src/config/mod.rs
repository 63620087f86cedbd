#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod server;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use server::ServerConfig;
