// Overview page - fleet-wide tower status
use crate::application::aggregation::{average, bucket_count};
use crate::application::formatting::{level_bar, status_badge, suffixed};
use crate::application::table::{render_table, Column, RawValue};
use crate::domain::dashboard::DashboardPage;
use crate::domain::fleet::{FleetSnapshot, Tower, TowerStatus};
use crate::domain::navigation::Route;
use crate::domain::widgets::{Chart, ChartKind, ChartPoint, StatusCard, Trend};

use super::{average_card, AMBER, BLUE, GREEN, RED};

pub fn build(snapshot: &FleetSnapshot) -> DashboardPage {
    let towers = &snapshot.towers;

    let online = bucket_count(towers, |t| t.status == TowerStatus::Online);
    let in_alert = bucket_count(towers, |t| t.status.is_alert());
    let avg_battery = average(towers, |t| t.battery_level, 0);

    let cards = vec![
        StatusCard::new("Total Towers", towers.len().to_string(), BLUE, "radio").with_change(Trend::up(5)),
        StatusCard::new("Online Towers", online.to_string(), GREEN, "zap"),
        average_card("Average Battery", avg_battery, "%", AMBER, "battery").with_change(Trend::up(2)),
        StatusCard::new("Towers in Alert", in_alert.to_string(), RED, "alert-triangle")
            .with_change(Trend::down(1)),
    ];

    let charts = vec![
        Chart::new(
            "battery-levels",
            "Battery Levels",
            ChartKind::Bar,
            "Battery Level",
            towers.iter().map(|t| ChartPoint::new(t.name.clone(), t.battery_level)).collect(),
        )
        .with_axis("Battery Level (%)", None),
        Chart::new(
            "uptime",
            "Uptime Percentage",
            ChartKind::Line,
            "Uptime",
            towers.iter().map(|t| ChartPoint::new(t.name.clone(), t.uptime)).collect(),
        )
        .with_axis("Uptime (%)", Some((0.0, 100.0))),
    ];

    let columns = vec![
        Column::new("Tower Name", |t: &Tower| RawValue::Text(t.name.clone())),
        Column::new("Location", |t: &Tower| RawValue::Text(t.location.clone())),
        Column::new("Status", |t: &Tower| RawValue::Status(t.status.token())).formatted(status_badge),
        Column::new("Battery Level", |t: &Tower| RawValue::Number(t.battery_level)).formatted(level_bar),
        Column::new("Power Consumption", |t: &Tower| RawValue::Number(t.power_consumption))
            .formatted(suffixed(" W")),
        Column::new("Uptime", |t: &Tower| RawValue::Number(t.uptime)).formatted(suffixed("%")),
    ];
    let table = render_table("Cell Tower Status", &columns, towers);

    DashboardPage::new(
        Route::Overview,
        "Dashboard Overview",
        "Monitor and manage your cell tower fleet",
        cards,
        charts,
        table,
    )
}
