// Page compositions - one builder per dashboard route
pub mod battery;
pub mod generator;
pub mod overview;
pub mod power;

use chrono::{DateTime, Utc};

use crate::application::aggregation::DEFAULT_DUE_SOON_DAYS;
use crate::application::formatting::plain_number;
use crate::domain::dashboard::DashboardPage;
use crate::domain::fleet::FleetSnapshot;
use crate::domain::navigation::Route;
use crate::domain::widgets::StatusCard;

pub(crate) const BLUE: &str = "#3b82f6";
pub(crate) const GREEN: &str = "#10b981";
pub(crate) const AMBER: &str = "#f59e0b";
pub(crate) const RED: &str = "#ef4444";
pub(crate) const PURPLE: &str = "#8b5cf6";

/// Inputs shared by every view that are not part of the dataset
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub due_soon_days: i64,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>, due_soon_days: i64) -> Self {
        Self { now, due_soon_days }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self::new(now, DEFAULT_DUE_SOON_DAYS)
    }
}

pub fn render(route: Route, snapshot: &FleetSnapshot, ctx: &RenderContext) -> DashboardPage {
    match route {
        Route::Overview => overview::build(snapshot),
        Route::PowerSupply => power::build(snapshot),
        Route::Battery => battery::build(snapshot),
        Route::Generator => generator::build(snapshot, ctx),
    }
}

/// Card for a rounded average; an empty collection shows 0 and is flagged.
pub(crate) fn average_card(
    title: &str,
    average: Option<f64>,
    unit: &str,
    color: &str,
    icon: &str,
) -> StatusCard {
    match average {
        Some(value) => StatusCard::new(title, format!("{}{}", plain_number(value), unit), color, icon),
        None => {
            tracing::warn!("No samples to average for card '{}'", title);
            StatusCard::new(title, format!("0{}", unit), color, icon).with_no_data(true)
        }
    }
}
