// In-memory fleet store - read-only dataset loaded once at startup
use crate::application::fleet_repository::FleetRepository;
use crate::domain::fleet::{
    BatterySample, FleetSnapshot, GeneratorSample, GeneratorStatus, PowerSample, Tower, TowerOwned,
    TowerStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const BUNDLED_FLEET: &str = include_str!("../../data/fleet.toml");

#[derive(Debug, thiserror::Error)]
pub enum FleetDataError {
    #[error("failed to read fleet dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fleet dataset: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed timestamp in {record}.{field}: '{value}'")]
    MalformedTimestamp {
        record: String,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FleetDocument {
    #[serde(default)]
    towers: Vec<TowerRecord>,
    #[serde(default)]
    power: Vec<PowerRecord>,
    #[serde(default)]
    batteries: Vec<BatteryRecord>,
    #[serde(default)]
    generators: Vec<GeneratorRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TowerRecord {
    id: String,
    name: String,
    location: String,
    status: TowerStatus,
    battery_level: f64,
    power_consumption: f64,
    uptime: f64,
    last_maintenance: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PowerRecord {
    id: String,
    tower_id: String,
    consumption: f64,
    voltage: f64,
    current: f64,
    uptime: u32,
    #[serde(default)]
    last_anomaly: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatteryRecord {
    id: String,
    tower_id: String,
    charge_level: f64,
    temperature: f64,
    health: f64,
    cycles: u32,
    last_replaced: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorRecord {
    id: String,
    tower_id: String,
    status: GeneratorStatus,
    fuel_level: f64,
    runtime: u32,
    last_started: String,
    maintenance_due: String,
}

fn parse_timestamp(record: &str, field: &'static str, value: &str) -> Result<DateTime<Utc>, FleetDataError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| FleetDataError::MalformedTimestamp {
            record: record.to_string(),
            field,
            value: value.to_string(),
        })
}

impl TryFrom<TowerRecord> for Tower {
    type Error = FleetDataError;

    fn try_from(r: TowerRecord) -> Result<Self, Self::Error> {
        let last_maintenance = parse_timestamp(&r.id, "lastMaintenance", &r.last_maintenance)?;
        Ok(Tower {
            id: r.id,
            name: r.name,
            location: r.location,
            status: r.status,
            battery_level: r.battery_level,
            power_consumption: r.power_consumption,
            uptime: r.uptime,
            last_maintenance,
        })
    }
}

impl TryFrom<PowerRecord> for PowerSample {
    type Error = FleetDataError;

    fn try_from(r: PowerRecord) -> Result<Self, Self::Error> {
        let last_anomaly = r
            .last_anomaly
            .as_deref()
            .map(|value| parse_timestamp(&r.id, "lastAnomaly", value))
            .transpose()?;
        Ok(PowerSample {
            id: r.id,
            tower_id: r.tower_id,
            consumption: r.consumption,
            voltage: r.voltage,
            current: r.current,
            uptime: r.uptime,
            last_anomaly,
        })
    }
}

impl TryFrom<BatteryRecord> for BatterySample {
    type Error = FleetDataError;

    fn try_from(r: BatteryRecord) -> Result<Self, Self::Error> {
        let last_replaced = parse_timestamp(&r.id, "lastReplaced", &r.last_replaced)?;
        Ok(BatterySample {
            id: r.id,
            tower_id: r.tower_id,
            charge_level: r.charge_level,
            temperature: r.temperature,
            health: r.health,
            cycles: r.cycles,
            last_replaced,
        })
    }
}

impl TryFrom<GeneratorRecord> for GeneratorSample {
    type Error = FleetDataError;

    fn try_from(r: GeneratorRecord) -> Result<Self, Self::Error> {
        let last_started = parse_timestamp(&r.id, "lastStarted", &r.last_started)?;
        let maintenance_due = parse_timestamp(&r.id, "maintenanceDue", &r.maintenance_due)?;
        Ok(GeneratorSample {
            id: r.id,
            tower_id: r.tower_id,
            status: r.status,
            fuel_level: r.fuel_level,
            runtime: r.runtime,
            last_started,
            maintenance_due,
        })
    }
}

fn convert_all<R, T: TryFrom<R, Error = FleetDataError>>(records: Vec<R>) -> Result<Vec<T>, FleetDataError> {
    records.into_iter().map(T::try_from).collect()
}

/// Number of samples whose tower id has no matching tower
fn dangling_references<S: TowerOwned>(samples: &[S], tower_ids: &HashSet<&str>) -> usize {
    samples
        .iter()
        .filter(|s| !tower_ids.contains(s.tower_id()))
        .count()
}

#[derive(Debug, Clone)]
pub struct InMemoryFleetStore {
    snapshot: Arc<FleetSnapshot>,
}

impl InMemoryFleetStore {
    pub fn new(snapshot: FleetSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// The dataset compiled into the binary
    pub fn bundled() -> Result<Self, FleetDataError> {
        Self::from_toml_str(BUNDLED_FLEET)
    }

    pub fn from_path(path: &Path) -> Result<Self, FleetDataError> {
        let content = std::fs::read_to_string(path).map_err(|source| FleetDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, FleetDataError> {
        let document: FleetDocument = toml::from_str(content)?;

        let snapshot = FleetSnapshot {
            towers: convert_all(document.towers)?,
            power: convert_all(document.power)?,
            batteries: convert_all(document.batteries)?,
            generators: convert_all(document.generators)?,
        };

        let tower_ids: HashSet<&str> = snapshot.towers.iter().map(|t| t.id.as_str()).collect();
        let dangling = dangling_references(&snapshot.power, &tower_ids)
            + dangling_references(&snapshot.batteries, &tower_ids)
            + dangling_references(&snapshot.generators, &tower_ids);
        if dangling > 0 {
            tracing::warn!("{} samples reference unknown towers; they will be labelled by id", dangling);
        }

        tracing::info!(
            "Loaded fleet dataset: {} towers, {} power, {} battery, {} generator samples",
            snapshot.towers.len(),
            snapshot.power.len(),
            snapshot.batteries.len(),
            snapshot.generators.len()
        );

        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl FleetRepository for InMemoryFleetStore {
    async fn towers(&self) -> anyhow::Result<Vec<Tower>> {
        Ok(self.snapshot.towers.clone())
    }

    async fn power_samples(&self) -> anyhow::Result<Vec<PowerSample>> {
        Ok(self.snapshot.power.clone())
    }

    async fn battery_samples(&self) -> anyhow::Result<Vec<BatterySample>> {
        Ok(self.snapshot.batteries.clone())
    }

    async fn generator_samples(&self) -> anyhow::Result<Vec<GeneratorSample>> {
        Ok(self.snapshot.generators.clone())
    }

    async fn snapshot(&self) -> anyhow::Result<FleetSnapshot> {
        Ok(self.snapshot.as_ref().clone())
    }
}
