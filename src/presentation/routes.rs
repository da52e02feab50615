// Route table
use crate::domain::navigation::Route;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    battery_page, generator_page, health_check, navigation, overview_page, power_supply_page,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/navigation", get(navigation))
        .route(Route::Overview.path(), get(overview_page))
        .route(Route::PowerSupply.path(), get(power_supply_page))
        .route(Route::Battery.path(), get(battery_page))
        .route(Route::Generator.path(), get(generator_page))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::domain::navigation::Navigation;
    use crate::infrastructure::fleet_store::InMemoryFleetStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = InMemoryFleetStore::bundled().unwrap();
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(store), 7),
            navigation: Navigation::sidebar(),
        });
        router(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_every_route_serves_its_page() {
        for route in Route::ALL {
            let (status, page) = get_json(route.path()).await;
            assert_eq!(status, StatusCode::OK, "{}", route.path());
            assert_eq!(page["cards"].as_array().unwrap().len(), 4);
            assert_eq!(page["charts"].as_array().unwrap().len(), 2);
            assert_eq!(page["table"]["rows"].as_array().unwrap().len(), 5);
        }
    }

    #[tokio::test]
    async fn test_overview_payload() {
        let (_, page) = get_json("/").await;
        assert_eq!(page["route"], "overview");
        assert_eq!(page["title"], "Dashboard Overview");
        assert_eq!(page["cards"][0]["title"], "Total Towers");
        assert_eq!(page["cards"][0]["value"], "5");
        assert_eq!(page["cards"][0]["change"]["is_positive"], true);
        assert_eq!(page["table"]["rows"][0][2]["kind"], "badge");
    }

    #[tokio::test]
    async fn test_power_supply_route_name() {
        let (_, page) = get_json("/power-supply").await;
        assert_eq!(page["route"], "power-supply");
        assert_eq!(page["charts"][1]["y_domain"], serde_json::json!([40.0, 50.0]));
    }

    #[tokio::test]
    async fn test_navigation_and_health() {
        let (status, nav) = get_json("/navigation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(nav["title"], "Cell Tower Monitoring");
        assert_eq!(nav["items"].as_array().unwrap().len(), 4);
        assert_eq!(nav["items"][1]["path"], "/power-supply");

        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = get_json("/solar").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
