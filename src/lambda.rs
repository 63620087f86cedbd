use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use waitlist_relay::adapters::function::{handle_event, FunctionEvent, FunctionResponse};
use waitlist_relay::utils::{logger, validation::Validate};
use waitlist_relay::{LambdaConfig, WaitlistService};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // A missing key fails the cold start instead of every invocation.
    let config = LambdaConfig::from_env();
    config.validate().map_err(|e| {
        tracing::error!("❌ {} | {}", e.user_friendly_message(), e.recovery_suggestion());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;
    let waitlist = WaitlistService::from_config(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    run(service_fn(move |event: LambdaEvent<FunctionEvent>| {
        let waitlist = waitlist.clone();
        async move {
            let response: FunctionResponse = handle_event(&waitlist, event.payload).await;
            Ok::<_, Error>(response)
        }
    }))
    .await
}
