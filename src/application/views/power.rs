// Power supply page
use crate::application::aggregation::{average, bucket_count, enrich, sum, Enriched, TowerIndex};
use crate::application::formatting::{optional_date_time, plain_number, suffixed, uptime_hours};
use crate::application::table::{render_table, Column, RawValue};
use crate::domain::dashboard::DashboardPage;
use crate::domain::fleet::{FleetSnapshot, PowerSample};
use crate::domain::navigation::Route;
use crate::domain::widgets::{Chart, ChartKind, ChartPoint, StatusCard, Trend};

use super::{average_card, BLUE, GREEN, PURPLE, RED};

type PowerRow<'a> = Enriched<'a, PowerSample>;

pub fn build(snapshot: &FleetSnapshot) -> DashboardPage {
    let samples = &snapshot.power;
    let index = TowerIndex::new(&snapshot.towers);
    let rows = enrich(samples, &index);

    let total_consumption = sum(samples, |p| p.consumption);
    let anomalies = bucket_count(samples, |p| p.last_anomaly.is_some());

    let cards = vec![
        StatusCard::new(
            "Total Consumption",
            format!("{} W", plain_number(total_consumption)),
            BLUE,
            "zap",
        )
        .with_change(Trend::down(3)),
        average_card("Average Voltage", average(samples, |p| p.voltage, 1), " V", GREEN, "zap"),
        StatusCard::new("Power Anomalies", anomalies.to_string(), RED, "alert-triangle"),
        average_card(
            "Avg. Uptime",
            average(samples, |p| f64::from(p.uptime), 0),
            " hrs",
            PURPLE,
            "clock",
        ),
    ];

    let charts = vec![
        Chart::new(
            "consumption",
            "Power Consumption",
            ChartKind::Bar,
            "Power Consumption",
            rows.iter()
                .map(|r| ChartPoint::new(r.tower_name.clone(), r.sample.consumption))
                .collect(),
        )
        .with_axis("Consumption (W)", None),
        Chart::new(
            "voltage",
            "Voltage Levels",
            ChartKind::Line,
            "Voltage",
            rows.iter()
                .map(|r| ChartPoint::new(r.tower_name.clone(), r.sample.voltage))
                .collect(),
        )
        .with_axis("Voltage (V)", Some((40.0, 50.0))),
    ];

    let columns = vec![
        Column::new("Tower Name", |r: &PowerRow<'_>| RawValue::Text(r.tower_name.clone())),
        Column::new("Power Consumption", |r: &PowerRow<'_>| RawValue::Number(r.sample.consumption))
            .formatted(suffixed(" W")),
        Column::new("Voltage", |r: &PowerRow<'_>| RawValue::Number(r.sample.voltage))
            .formatted(suffixed(" V")),
        Column::new("Current", |r: &PowerRow<'_>| RawValue::Number(r.sample.current))
            .formatted(suffixed(" A")),
        Column::new("Uptime", |r: &PowerRow<'_>| RawValue::Count(u64::from(r.sample.uptime)))
            .formatted(uptime_hours),
        Column::new("Last Anomaly", |r: &PowerRow<'_>| {
            RawValue::OptionalTimestamp(r.sample.last_anomaly)
        })
        .formatted(optional_date_time),
    ];
    let table = render_table("Power Supply Details", &columns, &rows);

    DashboardPage::new(
        Route::PowerSupply,
        "Power Supply Monitoring",
        "Monitor power consumption and electrical parameters",
        cards,
        charts,
        table,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregation::fixtures::{at, power, tower};
    use crate::domain::fleet::TowerStatus;
    use crate::domain::widgets::Cell;

    fn snapshot() -> FleetSnapshot {
        let mut anomalous = power("p2", "t2", 950.0, 47.3);
        anomalous.last_anomaly = Some(at(2024, 6, 2, 14));
        anomalous.uptime = 53;

        FleetSnapshot {
            towers: vec![
                tower("t1", "Harbor Point", TowerStatus::Online, 80.0),
                tower("t2", "Ridge Top", TowerStatus::Online, 70.0),
            ],
            power: vec![
                power("p1", "t1", 1250.0, 48.2),
                anomalous,
                power("p3", "missing", 800.0, 46.9),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_cards() {
        let page = build(&snapshot());

        assert_eq!(page.card("Total Consumption").unwrap().value, "3000 W");
        // (48.2 + 47.3 + 46.9) / 3 = 47.466..
        assert_eq!(page.card("Average Voltage").unwrap().value, "47.5 V");
        assert_eq!(page.card("Power Anomalies").unwrap().value, "1");
        // (50 + 53 + 50) / 3 = 51
        assert_eq!(page.card("Avg. Uptime").unwrap().value, "51 hrs");
    }

    #[test]
    fn test_dangling_tower_reference_uses_fallback_name() {
        let page = build(&snapshot());

        assert_eq!(page.table.rows[2][0], Cell::text("Tower missing"));
        let labels: Vec<&str> = page
            .chart("consumption")
            .unwrap()
            .points
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Harbor Point", "Ridge Top", "Tower missing"]);
    }

    #[test]
    fn test_table_formatting() {
        let page = build(&snapshot());

        let row = &page.table.rows[1];
        assert_eq!(row[1], Cell::text("950 W"));
        assert_eq!(row[2], Cell::text("47.3 V"));
        assert_eq!(row[3], Cell::text("25 A"));
        assert_eq!(row[4], Cell::text("2 days 5 hrs"));
        assert_eq!(row[5], Cell::text("2024-06-02 14:00 UTC"));
        assert_eq!(page.table.rows[0][5], Cell::text("None"));
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let snapshot = snapshot();
        assert_eq!(build(&snapshot), build(&snapshot));
    }
}
