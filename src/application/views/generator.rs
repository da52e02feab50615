// Generator page
use crate::application::aggregation::{
    average, bucket_count, due_soon, enrich, generator_status_distribution, sum, Enriched, TowerIndex,
};
use crate::application::formatting::{date_and_time, labelled_level_bar, maintenance_due, status_badge, suffixed};
use crate::application::table::{render_table, Column, RawValue};
use crate::domain::dashboard::DashboardPage;
use crate::domain::fleet::{FleetSnapshot, GeneratorSample, GeneratorStatus};
use crate::domain::navigation::Route;
use crate::domain::widgets::{Chart, ChartKind, ChartPoint, StatusCard, Trend};

use super::{average_card, RenderContext, BLUE, GREEN, PURPLE, RED};

type GeneratorRow<'a> = Enriched<'a, GeneratorSample>;

pub fn build(snapshot: &FleetSnapshot, ctx: &RenderContext) -> DashboardPage {
    let samples = &snapshot.generators;
    let index = TowerIndex::new(&snapshot.towers);
    let rows = enrich(samples, &index);

    let active = bucket_count(samples, |g| g.status == GeneratorStatus::Active);
    let total_runtime = sum(samples, |g| u64::from(g.runtime));
    let maintenance_soon = bucket_count(samples, |g| {
        due_soon(g.maintenance_due, ctx.now, ctx.due_soon_days)
    });

    let cards = vec![
        StatusCard::new("Active Generators", active.to_string(), GREEN, "wind"),
        average_card("Average Fuel Level", average(samples, |g| g.fuel_level, 0), "%", BLUE, "droplet")
            .with_change(Trend::down(5)),
        StatusCard::new("Total Runtime", format!("{} hrs", total_runtime), PURPLE, "clock"),
        StatusCard::new("Maintenance Due", maintenance_soon.to_string(), RED, "calendar"),
    ];

    let distribution = generator_status_distribution(samples)
        .into_iter()
        .map(|(status, count)| ChartPoint::new(status.label(), count as f64))
        .collect();

    let charts = vec![
        Chart::new(
            "fuel-levels",
            "Fuel Levels",
            ChartKind::Bar,
            "Fuel Level",
            rows.iter()
                .map(|r| ChartPoint::new(r.tower_name.clone(), r.sample.fuel_level))
                .collect(),
        )
        .with_axis("Fuel Level (%)", Some((0.0, 100.0))),
        Chart::new(
            "status-distribution",
            "Generator Status Distribution",
            ChartKind::Pie,
            "Generators",
            distribution,
        ),
    ];

    let columns = vec![
        Column::new("Tower Name", |r: &GeneratorRow<'_>| RawValue::Text(r.tower_name.clone())),
        Column::new("Status", |r: &GeneratorRow<'_>| RawValue::Status(r.sample.status.token()))
            .formatted(status_badge),
        Column::new("Fuel Level", |r: &GeneratorRow<'_>| RawValue::Number(r.sample.fuel_level))
            .formatted(labelled_level_bar),
        Column::new("Runtime", |r: &GeneratorRow<'_>| RawValue::Count(u64::from(r.sample.runtime)))
            .formatted(suffixed(" hrs")),
        Column::new("Last Started", |r: &GeneratorRow<'_>| RawValue::Timestamp(r.sample.last_started))
            .formatted(date_and_time),
        Column::new("Maintenance Due", |r: &GeneratorRow<'_>| {
            RawValue::Timestamp(r.sample.maintenance_due)
        })
        .formatted(maintenance_due(ctx.now, ctx.due_soon_days)),
    ];
    let table = render_table("Generator Details", &columns, &rows);

    DashboardPage::new(
        Route::Generator,
        "Generator Monitoring",
        "Monitor backup generators status and performance",
        cards,
        charts,
        table,
    )
}
