use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// App-wide configuration
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub webhook: WebhookSettings,
}

#[derive(Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Settings needed for forwarding accepted submissions to the spreadsheet webhook.
#[derive(Clone, Deserialize)]
pub struct WebhookSettings {
    pub url: String,
    pub timeout_milliseconds: u64,
}

impl WebhookSettings {
    /// The endpoint that accepted submissions are POSTed to.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// The runtime environment the app has been deployed into. Picks which
/// configuration file gets layered over `base.yaml`.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

/// Reads app configuration from the `configuration` directory.
///
/// `base.yaml` is always read, then the file named after `APP_ENVIRONMENT`
/// (`local` when unset). Environment variables prefixed with `APP_` win over both,
/// e.g. `APP_WEBHOOK__URL` sets `webhook.url`.
///
/// Returns an error if a file is missing or malformed, or if the merged sources
/// don't deserialize into a `Settings` struct.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(e.to_string()))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
