// Cell formatters - raw field values to renderable cells
use chrono::{DateTime, Utc};

use crate::application::aggregation::{due_soon, HealthBucket};
use crate::application::table::RawValue;
use crate::domain::widgets::{Cell, Level, Tone};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Batteries above this temperature (°C) are flagged.
pub const HOT_BATTERY_CELSIUS: f64 = 30.0;

pub fn plain_number(value: f64) -> String {
    format!("{}", value)
}

pub fn date(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

pub fn date_time(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_TIME_FORMAT).to_string()
}

pub fn level_for(value: f64) -> Level {
    if value > 70.0 {
        Level::High
    } else if value > 30.0 {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Appends a unit to the plain value, e.g. " W" or "%"
pub fn suffixed(suffix: &'static str) -> impl Fn(&RawValue) -> Cell {
    move |raw| Cell::text(format!("{}{}", raw.plain(), suffix))
}

/// Hours rendered as "N days H hrs"
pub fn uptime_hours(raw: &RawValue) -> Cell {
    match raw {
        RawValue::Count(hours) => Cell::text(format!("{} days {} hrs", hours / 24, hours % 24)),
        RawValue::Number(hours) => Cell::text(format!(
            "{} days {} hrs",
            plain_number((hours / 24.0).floor()),
            plain_number(hours % 24.0)
        )),
        other => Cell::text(other.plain()),
    }
}

pub fn level_bar(raw: &RawValue) -> Cell {
    match raw.as_number() {
        Some(value) => Cell::LevelBar {
            value,
            level: level_for(value),
            label: None,
        },
        None => Cell::text(raw.plain()),
    }
}

/// Level bar with the percentage printed next to it
pub fn labelled_level_bar(raw: &RawValue) -> Cell {
    match raw.as_number() {
        Some(value) => Cell::LevelBar {
            value,
            level: level_for(value),
            label: Some(format!("{}%", plain_number(value))),
        },
        None => Cell::text(raw.plain()),
    }
}

pub fn status_badge(raw: &RawValue) -> Cell {
    match raw {
        RawValue::Status(token) => Cell::Badge {
            label: token.label().to_string(),
            category: token.category(),
        },
        other => Cell::text(other.plain()),
    }
}

pub fn temperature(raw: &RawValue) -> Cell {
    match raw.as_number() {
        Some(celsius) => {
            let tone = if celsius > HOT_BATTERY_CELSIUS {
                Tone::Alert
            } else {
                Tone::Normal
            };
            Cell::toned(format!("{}°C", plain_number(celsius)), tone)
        }
        None => Cell::text(raw.plain()),
    }
}

pub fn health(raw: &RawValue) -> Cell {
    match raw.as_number() {
        Some(value) => {
            let tone = match HealthBucket::classify(value) {
                HealthBucket::Good => Tone::Good,
                HealthBucket::Fair => Tone::Fair,
                HealthBucket::Poor => Tone::Poor,
            };
            Cell::toned(format!("{}%", plain_number(value)), tone)
        }
        None => Cell::text(raw.plain()),
    }
}

pub fn date_only(raw: &RawValue) -> Cell {
    match raw.as_timestamp() {
        Some(ts) => Cell::text(date(&ts)),
        None => Cell::text(raw.plain()),
    }
}

pub fn date_and_time(raw: &RawValue) -> Cell {
    match raw.as_timestamp() {
        Some(ts) => Cell::text(date_time(&ts)),
        None => Cell::text(raw.plain()),
    }
}

/// Date-time, or "None" when the timestamp is absent
pub fn optional_date_time(raw: &RawValue) -> Cell {
    match raw.as_timestamp() {
        Some(ts) => Cell::text(date_time(&ts)),
        None => Cell::text("None"),
    }
}

/// Maintenance date, emphasised when it falls inside the lookahead window
pub fn maintenance_due(now: DateTime<Utc>, threshold_days: i64) -> impl Fn(&RawValue) -> Cell {
    move |raw| match raw.as_timestamp() {
        Some(ts) => {
            let tone = if due_soon(ts, now, threshold_days) {
                Tone::Alert
            } else {
                Tone::Normal
            };
            Cell::toned(date(&ts), tone)
        }
        None => Cell::text(raw.plain()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregation::fixtures::at;
    use crate::domain::status::{StatusCategory, StatusToken};

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(suffixed(" W")(&RawValue::Number(1250.0)), Cell::text("1250 W"));
        assert_eq!(suffixed(" V")(&RawValue::Number(48.2)), Cell::text("48.2 V"));
        assert_eq!(suffixed("%")(&RawValue::Number(99.8)), Cell::text("99.8%"));
        assert_eq!(suffixed(" hrs")(&RawValue::Count(340)), Cell::text("340 hrs"));
    }

    #[test]
    fn test_uptime_hours_split() {
        assert_eq!(uptime_hours(&RawValue::Count(720)), Cell::text("30 days 0 hrs"));
        assert_eq!(uptime_hours(&RawValue::Count(53)), Cell::text("2 days 5 hrs"));
        assert_eq!(uptime_hours(&RawValue::Number(26.0)), Cell::text("1 days 2 hrs"));
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for(70.1), Level::High);
        assert_eq!(level_for(70.0), Level::Medium);
        assert_eq!(level_for(30.1), Level::Medium);
        assert_eq!(level_for(30.0), Level::Low);
    }

    #[test]
    fn test_labelled_level_bar() {
        assert_eq!(
            labelled_level_bar(&RawValue::Number(85.0)),
            Cell::LevelBar {
                value: 85.0,
                level: Level::High,
                label: Some("85%".to_string()),
            }
        );
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(
            status_badge(&RawValue::Status(StatusToken::Maintenance)),
            Cell::Badge {
                label: "Maintenance".to_string(),
                category: StatusCategory::Warning,
            }
        );
    }

    #[test]
    fn test_temperature_and_health_tones() {
        assert_eq!(temperature(&RawValue::Number(32.5)), Cell::toned("32.5°C", Tone::Alert));
        assert_eq!(temperature(&RawValue::Number(30.0)), Cell::toned("30°C", Tone::Normal));
        assert_eq!(health(&RawValue::Number(92.0)), Cell::toned("92%", Tone::Good));
        assert_eq!(health(&RawValue::Number(60.0)), Cell::toned("60%", Tone::Fair));
        assert_eq!(health(&RawValue::Number(45.0)), Cell::toned("45%", Tone::Poor));
    }

    #[test]
    fn test_absent_anomaly_renders_none() {
        assert_eq!(optional_date_time(&RawValue::OptionalTimestamp(None)), Cell::text("None"));
        assert_eq!(
            optional_date_time(&RawValue::OptionalTimestamp(Some(at(2024, 6, 2, 14)))),
            Cell::text("2024-06-02 14:00 UTC")
        );
        assert_eq!(date_only(&RawValue::Timestamp(at(2023, 1, 15, 0))), Cell::text("2023-01-15"));
    }

    #[test]
    fn test_required_timestamp_renders_date_and_time() {
        assert_eq!(
            date_and_time(&RawValue::Timestamp(at(2024, 6, 1, 12))),
            Cell::text("2024-06-01 12:00 UTC")
        );
        assert_eq!(date_and_time(&RawValue::Text("n/a".to_string())), Cell::text("n/a"));
    }

    #[test]
    fn test_maintenance_due_emphasis() {
        let now = at(2024, 6, 10, 0);
        let format = maintenance_due(now, 7);
        assert_eq!(
            format(&RawValue::Timestamp(at(2024, 6, 12, 0))),
            Cell::toned("2024-06-12", Tone::Alert)
        );
        assert_eq!(
            format(&RawValue::Timestamp(at(2024, 6, 17, 0))),
            Cell::toned("2024-06-17", Tone::Normal)
        );
    }

    #[test]
    fn test_formatters_tolerate_unexpected_values() {
        assert_eq!(level_bar(&RawValue::Text("n/a".to_string())), Cell::text("n/a"));
        assert_eq!(status_badge(&RawValue::Text("rebooting".to_string())), Cell::text("rebooting"));
    }
}
