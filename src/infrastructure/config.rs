use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::application::aggregation::{DEFAULT_DUE_SOON_DAYS, MAX_DUE_SOON_DAYS};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Lookahead window for upcoming generator maintenance
    pub due_soon_days: i64,
    /// Alternative dataset; the bundled fleet is used when unset
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

impl DashboardSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_DUE_SOON_DAYS).contains(&self.due_soon_days),
            "dashboard.due_soon_days must be between 1 and {}, got {}",
            MAX_DUE_SOON_DAYS,
            self.due_soon_days
        );
        Ok(())
    }
}

fn with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("dashboard.due_soon_days", DEFAULT_DUE_SOON_DAYS)?)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` env vars
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    into_app_config(settings)
}

fn into_app_config(settings: config::Config) -> anyhow::Result<AppConfig> {
    let config: AppConfig = settings.try_deserialize()?;
    config.dashboard.validate()?;
    Ok(config)
}
