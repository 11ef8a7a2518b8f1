use anyhow::Context;
use atlas_onboarding::configuration::get_configuration;
use atlas_onboarding::startup::Application;
use atlas_onboarding::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("atlas_onboarding".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber).context("Failed to subscribe to tracing")?;

    let configuration = get_configuration().context("Failed to read configuration")?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    Ok(())
}
