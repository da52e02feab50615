// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::navigation::Navigation;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub navigation: Navigation,
}
