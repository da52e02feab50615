// Fleet domain model - Towers and their telemetry samples
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::status::StatusToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TowerStatus {
    Online,
    Offline,
    Maintenance,
}

impl TowerStatus {
    pub fn token(self) -> StatusToken {
        match self {
            Self::Online => StatusToken::Online,
            Self::Offline => StatusToken::Offline,
            Self::Maintenance => StatusToken::Maintenance,
        }
    }

    /// Offline and maintenance towers both need attention.
    pub fn is_alert(self) -> bool {
        matches!(self, Self::Offline | Self::Maintenance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorStatus {
    Active,
    Standby,
    Maintenance,
    Error,
}

impl GeneratorStatus {
    /// Distribution order used by the status chart.
    pub const ALL: [GeneratorStatus; 4] = [
        Self::Active,
        Self::Standby,
        Self::Maintenance,
        Self::Error,
    ];

    pub fn token(self) -> StatusToken {
        match self {
            Self::Active => StatusToken::Active,
            Self::Standby => StatusToken::Standby,
            Self::Maintenance => StatusToken::Maintenance,
            Self::Error => StatusToken::Error,
        }
    }

    pub fn label(self) -> &'static str {
        self.token().label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: TowerStatus,
    pub battery_level: f64,
    pub power_consumption: f64,
    pub uptime: f64,
    pub last_maintenance: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerSample {
    pub id: String,
    pub tower_id: String,
    pub consumption: f64,
    pub voltage: f64,
    pub current: f64,
    /// Continuous uptime in hours
    pub uptime: u32,
    pub last_anomaly: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatterySample {
    pub id: String,
    pub tower_id: String,
    pub charge_level: f64,
    pub temperature: f64,
    pub health: f64,
    pub cycles: u32,
    pub last_replaced: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSample {
    pub id: String,
    pub tower_id: String,
    pub status: GeneratorStatus,
    pub fuel_level: f64,
    /// Cumulative runtime in hours
    pub runtime: u32,
    pub last_started: DateTime<Utc>,
    pub maintenance_due: DateTime<Utc>,
}

/// A telemetry record that belongs to exactly one tower.
pub trait TowerOwned {
    fn tower_id(&self) -> &str;
}

impl TowerOwned for PowerSample {
    fn tower_id(&self) -> &str {
        &self.tower_id
    }
}

impl TowerOwned for BatterySample {
    fn tower_id(&self) -> &str {
        &self.tower_id
    }
}

impl TowerOwned for GeneratorSample {
    fn tower_id(&self) -> &str {
        &self.tower_id
    }
}

/// Everything a single render pass reads. Never mutated once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetSnapshot {
    pub towers: Vec<Tower>,
    pub power: Vec<PowerSample>,
    pub batteries: Vec<BatterySample>,
    pub generators: Vec<GeneratorSample>,
}
