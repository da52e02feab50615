// Dashboard domain model
use serde::Serialize;

use super::navigation::Route;
use super::widgets::{Chart, StatusCard, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub route: Route,
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<StatusCard>,
    pub charts: Vec<Chart>,
    pub table: Table,
}

impl DashboardPage {
    pub fn new(
        route: Route,
        title: &str,
        subtitle: &str,
        cards: Vec<StatusCard>,
        charts: Vec<Chart>,
        table: Table,
    ) -> Self {
        Self {
            route,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            cards,
            charts,
            table,
        }
    }

    pub fn card(&self, title: &str) -> Option<&StatusCard> {
        self.cards.iter().find(|c| c.title == title)
    }

    pub fn chart(&self, id: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}
