use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{eligibility, health_check, home, onboard},
    webhook_client::WebhookClient,
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is configured
    /// through the `settings` argument.
    ///
    /// Fails if the webhook URL doesn't parse, the HTTP client can't be created or
    /// the listening address can't be bound.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let webhook_config = settings.webhook;
        let webhook_url = webhook_config
            .url()
            .with_context(|| format!("Invalid webhook URL: {}", webhook_config.url))?;
        let webhook_client = WebhookClient::new(webhook_url, webhook_config.timeout())
            .context("Failed to build the webhook HTTP client")?;

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(&app_address)
            .with_context(|| format!("Failed to bind to {}", app_address))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, webhook_client)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(listener: TcpListener, webhook_client: WebhookClient) -> std::io::Result<Server> {
    let webhook_client = web::Data::new(webhook_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(health_check)
            .service(home)
            .service(eligibility)
            .service(onboard)
            .app_data(webhook_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
