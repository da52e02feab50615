// HTTP request handlers
use crate::domain::dashboard::DashboardPage;
use crate::domain::navigation::{Navigation, Route};
use crate::presentation::app_state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;

type PageResponse = Result<Json<DashboardPage>, StatusCode>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Side navigation shell
pub async fn navigation(State(state): State<Arc<AppState>>) -> Json<Navigation> {
    Json(state.navigation.clone())
}

async fn render_page(route: Route, state: &AppState) -> PageResponse {
    match state.dashboard_service.get_page(route, Utc::now()).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            tracing::error!("Error rendering page {}: {:#}", route.path(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn overview_page(State(state): State<Arc<AppState>>) -> PageResponse {
    render_page(Route::Overview, &state).await
}

pub async fn power_supply_page(State(state): State<Arc<AppState>>) -> PageResponse {
    render_page(Route::PowerSupply, &state).await
}

pub async fn battery_page(State(state): State<Arc<AppState>>) -> PageResponse {
    render_page(Route::Battery, &state).await
}

pub async fn generator_page(State(state): State<Arc<AppState>>) -> PageResponse {
    render_page(Route::Generator, &state).await
}
