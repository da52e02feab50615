// Battery page
use crate::application::aggregation::{
    average, enrich, health_distribution, sum, Enriched, TowerIndex,
};
use crate::application::formatting::{date_only, health, labelled_level_bar, temperature};
use crate::application::table::{render_table, Column, RawValue};
use crate::domain::dashboard::DashboardPage;
use crate::domain::fleet::{BatterySample, FleetSnapshot};
use crate::domain::navigation::Route;
use crate::domain::widgets::{Chart, ChartKind, ChartPoint, StatusCard, Trend};

use super::{average_card, BLUE, GREEN, PURPLE, RED};

type BatteryRow<'a> = Enriched<'a, BatterySample>;

pub fn build(snapshot: &FleetSnapshot) -> DashboardPage {
    let samples = &snapshot.batteries;
    let index = TowerIndex::new(&snapshot.towers);
    let rows = enrich(samples, &index);

    let total_cycles = sum(samples, |b| u64::from(b.cycles));

    let cards = vec![
        average_card("Average Charge", average(samples, |b| b.charge_level, 0), "%", BLUE, "battery")
            .with_change(Trend::up(2)),
        average_card(
            "Average Temperature",
            average(samples, |b| b.temperature, 1),
            "°C",
            RED,
            "thermometer",
        ),
        average_card("Average Health", average(samples, |b| b.health, 0), "%", GREEN, "activity")
            .with_change(Trend::down(1)),
        StatusCard::new("Total Cycles", total_cycles.to_string(), PURPLE, "battery"),
    ];

    let distribution = health_distribution(samples, |b| b.health)
        .into_iter()
        .map(|(bucket, count)| ChartPoint::new(bucket.label(), count as f64))
        .collect();

    let charts = vec![
        Chart::new(
            "charge-levels",
            "Battery Charge Levels",
            ChartKind::Bar,
            "Charge Level",
            rows.iter()
                .map(|r| ChartPoint::new(r.tower_name.clone(), r.sample.charge_level))
                .collect(),
        )
        .with_axis("Charge Level (%)", Some((0.0, 100.0))),
        Chart::new(
            "health-distribution",
            "Battery Health Distribution",
            ChartKind::Pie,
            "Batteries",
            distribution,
        ),
    ];

    let columns = vec![
        Column::new("Tower Name", |r: &BatteryRow<'_>| RawValue::Text(r.tower_name.clone())),
        Column::new("Charge Level", |r: &BatteryRow<'_>| RawValue::Number(r.sample.charge_level))
            .formatted(labelled_level_bar),
        Column::new("Temperature", |r: &BatteryRow<'_>| RawValue::Number(r.sample.temperature))
            .formatted(temperature),
        Column::new("Health", |r: &BatteryRow<'_>| RawValue::Number(r.sample.health)).formatted(health),
        Column::new("Cycles", |r: &BatteryRow<'_>| RawValue::Count(u64::from(r.sample.cycles))),
        Column::new("Last Replaced", |r: &BatteryRow<'_>| RawValue::Timestamp(r.sample.last_replaced))
            .formatted(date_only),
    ];
    let table = render_table("Battery Details", &columns, &rows);

    DashboardPage::new(
        Route::Battery,
        "Battery Monitoring",
        "Monitor battery health and performance",
        cards,
        charts,
        table,
    )
}
