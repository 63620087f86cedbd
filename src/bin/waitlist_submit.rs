use clap::Parser;
use waitlist_relay::client::{FormOutcome, WaitlistClient, WaitlistForm};
use waitlist_relay::core::Category;
use waitlist_relay::utils::logger;

#[derive(Parser)]
#[command(name = "waitlist-submit")]
#[command(about = "Submit one waitlist signup the way the site form does")]
struct Args {
    /// Email address to sign up
    #[arg(short, long)]
    email: String,

    /// Signup category: mastermind, retreat or system
    #[arg(short = 't', long = "type", default_value = "system")]
    kind: String,

    #[arg(long, default_value = "http://localhost:3001/api/waitlist")]
    endpoint: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let client = WaitlistClient::new(args.endpoint);
    let mut form = WaitlistForm::new(Category::parse(&args.kind));
    form.set_email(args.email);

    println!("{}", form.submit_label());
    match form.submit(&client).await {
        FormOutcome::Confirmed(confirmation) => {
            println!("✅ {}", confirmation.headline);
            println!("{}", confirmation.detail);
        }
        FormOutcome::Alerted(alert) => {
            eprintln!("❌ {}", alert);
            std::process::exit(1);
        }
        FormOutcome::Ignored => {
            eprintln!("❌ Enter your email address");
            std::process::exit(2);
        }
    }

    Ok(())
}
