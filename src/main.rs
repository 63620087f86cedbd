use clap::Parser;
use waitlist_relay::utils::{logger, validation::Validate};
use waitlist_relay::{AppState, Application, CliConfig, WaitlistError, WaitlistService};

fn exit_on_config_error(e: &WaitlistError) -> ! {
    tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env.local wins over .env
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting waitlist-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_on_config_error(&e),
    };
    if let Err(e) = config.validate() {
        exit_on_config_error(&e);
    }

    let waitlist = match WaitlistService::from_config(&config) {
        Ok(service) => service,
        Err(e) => exit_on_config_error(&e),
    };
    tracing::info!("Sending waitlist email from {}", waitlist.sender());

    let site = config.site_options();
    if let Some(dir) = &site.static_dir {
        if !dir.is_dir() {
            tracing::warn!("static directory {} does not exist", dir.display());
        }
    }

    let app = Application::build(AppState::new(waitlist), &config.address(), &site).await?;
    app.run().await?;

    Ok(())
}
