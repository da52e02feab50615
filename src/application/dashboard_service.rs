// Dashboard service - Use case for rendering a dashboard page
use crate::application::fleet_repository::FleetRepository;
use crate::application::views::{self, RenderContext};
use crate::domain::dashboard::DashboardPage;
use crate::domain::navigation::Route;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn FleetRepository>,
    due_soon_days: i64,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn FleetRepository>, due_soon_days: i64) -> Self {
        Self {
            repository,
            due_soon_days,
        }
    }

    pub async fn get_page(&self, route: Route, now: DateTime<Utc>) -> anyhow::Result<DashboardPage> {
        let snapshot = self.repository.snapshot().await?;
        let ctx = RenderContext::new(now, self.due_soon_days);

        tracing::debug!(
            "Rendering {:?} over {} towers, {} power, {} battery, {} generator samples",
            route,
            snapshot.towers.len(),
            snapshot.power.len(),
            snapshot.batteries.len(),
            snapshot.generators.len()
        );

        Ok(views::render(route, &snapshot, &ctx))
    }
}
