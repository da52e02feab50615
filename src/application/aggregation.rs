// Aggregation - pure derivations over fleet collections
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::iter::Sum;

use crate::domain::fleet::{GeneratorSample, GeneratorStatus, Tower, TowerOwned};

pub const DEFAULT_DUE_SOON_DAYS: i64 = 7;
/// Upper bound accepted for the maintenance lookahead window.
pub const MAX_DUE_SOON_DAYS: i64 = 365;

/// Round half-up to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor + 0.5).floor() / factor
}

/// Arithmetic mean of `field`, or `None` for an empty collection.
pub fn mean<T>(items: &[T], field: impl Fn(&T) -> f64) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let total: f64 = items.iter().map(field).sum();
    Some(total / items.len() as f64)
}

/// Rounded mean of `field`, or `None` for an empty collection.
pub fn average<T>(items: &[T], field: impl Fn(&T) -> f64, precision: u32) -> Option<f64> {
    mean(items, field).map(|m| round_to(m, precision))
}

pub fn sum<T, N: Sum<N>>(items: &[T], field: impl Fn(&T) -> N) -> N {
    items.iter().map(field).sum()
}

pub fn bucket_count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|&item| predicate(item)).count()
}

/// True when `date` is less than `threshold_days` ahead of `now`.
/// Dates already in the past are always due.
pub fn due_soon(date: DateTime<Utc>, now: DateTime<Utc>, threshold_days: i64) -> bool {
    let remaining = date.signed_duration_since(now);
    if remaining < Duration::zero() {
        return true;
    }
    match Duration::try_days(threshold_days) {
        Some(window) => remaining < window,
        // window wider than any representable span
        None => threshold_days > 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthBucket {
    Good,
    Fair,
    Poor,
}

impl HealthBucket {
    pub const ALL: [HealthBucket; 3] = [Self::Good, Self::Fair, Self::Poor];

    pub fn classify(health: f64) -> Self {
        if health > 80.0 {
            Self::Good
        } else if health >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good (>80%)",
            Self::Fair => "Fair (60-80%)",
            Self::Poor => "Poor (<60%)",
        }
    }
}

pub fn health_distribution<T>(items: &[T], health: impl Fn(&T) -> f64) -> Vec<(HealthBucket, usize)> {
    HealthBucket::ALL
        .into_iter()
        .map(|bucket| (bucket, bucket_count(items, |i| HealthBucket::classify(health(i)) == bucket)))
        .collect()
}

pub fn generator_status_distribution(generators: &[GeneratorSample]) -> Vec<(GeneratorStatus, usize)> {
    GeneratorStatus::ALL
        .into_iter()
        .map(|status| (status, bucket_count(generators, |g| g.status == status)))
        .collect()
}

pub fn fallback_tower_name(tower_id: &str) -> String {
    format!("Tower {}", tower_id)
}

/// Tower lookup by id, built once per render pass.
#[derive(Debug, Clone)]
pub struct TowerIndex<'a> {
    by_id: HashMap<&'a str, &'a Tower>,
}

impl<'a> TowerIndex<'a> {
    pub fn new(towers: &'a [Tower]) -> Self {
        let mut by_id = HashMap::with_capacity(towers.len());
        for tower in towers {
            // first occurrence wins on duplicate ids
            by_id.entry(tower.id.as_str()).or_insert(tower);
        }
        Self { by_id }
    }

    pub fn get(&self, tower_id: &str) -> Option<&'a Tower> {
        self.by_id.get(tower_id).copied()
    }

    pub fn display_name(&self, tower_id: &str) -> String {
        match self.get(tower_id) {
            Some(tower) => tower.name.clone(),
            None => {
                tracing::debug!("No tower registered for id {}", tower_id);
                fallback_tower_name(tower_id)
            }
        }
    }
}

pub fn join_tower_name<S: TowerOwned>(sample: &S, index: &TowerIndex<'_>) -> String {
    index.display_name(sample.tower_id())
}

/// A sample paired with the display name of its tower
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched<'a, S> {
    pub tower_name: String,
    pub sample: &'a S,
}

pub fn enrich<'a, S: TowerOwned>(samples: &'a [S], index: &TowerIndex<'_>) -> Vec<Enriched<'a, S>> {
    samples
        .iter()
        .map(|sample| Enriched {
            tower_name: join_tower_name(sample, index),
            sample,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::fleet::{
        BatterySample, GeneratorSample, GeneratorStatus, PowerSample, Tower, TowerStatus,
    };

    pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    pub fn tower(id: &str, name: &str, status: TowerStatus, battery_level: f64) -> Tower {
        Tower {
            id: id.to_string(),
            name: name.to_string(),
            location: "Downtown".to_string(),
            status,
            battery_level,
            power_consumption: 1200.0,
            uptime: 99.5,
            last_maintenance: at(2024, 5, 1, 8),
        }
    }

    pub fn power(id: &str, tower_id: &str, consumption: f64, voltage: f64) -> PowerSample {
        PowerSample {
            id: id.to_string(),
            tower_id: tower_id.to_string(),
            consumption,
            voltage,
            current: 25.0,
            uptime: 50,
            last_anomaly: None,
        }
    }

    pub fn battery(id: &str, tower_id: &str, health: f64) -> BatterySample {
        BatterySample {
            id: id.to_string(),
            tower_id: tower_id.to_string(),
            charge_level: 75.0,
            temperature: 25.0,
            health,
            cycles: 100,
            last_replaced: at(2023, 1, 15, 0),
        }
    }

    pub fn generator(id: &str, tower_id: &str, status: GeneratorStatus) -> GeneratorSample {
        GeneratorSample {
            id: id.to_string(),
            tower_id: tower_id.to_string(),
            status,
            fuel_level: 80.0,
            runtime: 120,
            last_started: at(2024, 6, 1, 12),
            maintenance_due: at(2024, 7, 1, 0),
        }
    }
}
