//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::planner::{Planner, RouteError};
use crate::stations::ResolveError;

use super::dto::*;
use super::state::AppState;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let stations = state
        .stations
        .search(&req.q, limit)
        .iter()
        .map(|m| StationSearchResult::from_match(&state.network, m))
        .collect();

    Json(StationSearchResponse { stations })
}

/// Plan a route between two named stations.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = state.stations.resolve(&req.from)?;
    let to = state.stations.resolve(&req.to)?;
    debug!(%from, %to, "planning route");

    let planner = Planner::new(&state.network, state.config);
    let plan = state
        .routes
        .get_or_plan(from, to, || planner.plan(from, to))
        .await?;

    Ok(Json(RouteResponse::from_plan(&state.network, &plan)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
        suggestions: Vec<StationRef>,
    },
    NotFound {
        message: String,
    },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        AppError::BadRequest {
            suggestions: e.alternatives().iter().map(StationRef::from).collect(),
            message: e.to_string(),
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NoRoute { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::NotFound(_) => AppError::BadRequest {
                message: e.to_string(),
                suggestions: Vec::new(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, suggestions) = match self {
            AppError::BadRequest {
                message,
                suggestions,
            } => (StatusCode::BAD_REQUEST, message, suggestions),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, Vec::new()),
        };

        warn!(%status, %error, "request failed");

        let body = Json(ErrorResponse { error, suggestions });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::domain::{Colour, GeoPoint, Line, LineId, Station, StationId};
    use crate::network::Network;
    use crate::planner::RouteConfig;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let station = |id, name| Station::new(StationId(id), name, GeoPoint::new(51.5, -0.1));
        let network = Network::builder()
            .add_line(Line::new(LineId(1), "Bakerloo Line", Colour::from_rgb(0xab, 0x66, 0x12)))
            .add_line(Line::new(LineId(2), "Circle Line", Colour::from_rgb(0xff, 0xd3, 0x29)))
            .add_station(station(1, "Oxford Circus").with_zone(1.0))
            .add_station(station(2, "Baker Street"))
            .add_station(station(3, "Edgware Road (B)"))
            .add_station(station(4, "Edgware Road (C)"))
            .add_station(station(5, "Mornington Crescent"))
            .add_segment(StationId(1), StationId(2), LineId(1), 2.0)
            .add_segment(StationId(2), StationId(3), LineId(1), 1.0)
            .add_segment(StationId(2), StationId(4), LineId(2), 1.0)
            .build()
            .unwrap();
        create_router(AppState::new(network, RouteConfig::default(), &CacheConfig::default()))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn station_search() {
        let (status, body) = get("/api/stations/search?q=edgware").await;
        assert_eq!(status, StatusCode::OK);

        let stations = body["stations"].as_array().unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0]["name"], "Edgware Road (B)");
        assert_eq!(stations[0]["id"], 3);
        assert_eq!(stations[0]["lines"][0], "Bakerloo Line");
        assert_eq!(stations[1]["lines"][0], "Circle Line");
    }

    #[tokio::test]
    async fn station_search_limit() {
        let (_, body) = get("/api/stations/search?q=&limit=2").await;
        assert_eq!(body["stations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn route_with_change() {
        let (status, body) = get("/api/route?from=oxford%20circus&to=Edgware%20Road%20(C)").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["from"]["name"], "Oxford Circus");
        assert_eq!(body["to"]["id"], 4);
        // 2 + 1 km plus one change
        assert_eq!(body["total_cost"], 8.0);

        let rides = body["rides"].as_array().unwrap();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0]["line"]["name"], "Bakerloo Line");
        assert_eq!(rides[0]["line"]["colour"], "#ab6612");
        assert_eq!(rides[0]["alight"]["name"], "Baker Street");
        assert_eq!(rides[1]["stops"], 1);

        let transfers = body["transfers"].as_array().unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0]["at"]["name"], "Baker Street");
        assert_eq!(transfers[0]["to_line"]["name"], "Circle Line");
    }

    #[tokio::test]
    async fn same_station_route_is_empty() {
        let (status, body) = get("/api/route?from=Baker%20Street&to=baker%20street").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_cost"], 0.0);
        assert!(body["rides"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ambiguous_name_is_bad_request() {
        let (status, body) = get("/api/route?from=Oxford%20Circus&to=edgware").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "\"edgware\" matches 2 stations");
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_name_is_bad_request() {
        let (status, body) = get("/api/route?from=Bakr%20Street&to=Oxford%20Circus").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["suggestions"][0]["name"], "Baker Street");
    }

    #[tokio::test]
    async fn disconnected_station_is_not_found() {
        let (status, body) = get("/api/route?from=Oxford%20Circus&to=Mornington%20Crescent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no route from station 1 to station 5");
        assert!(body.get("suggestions").is_none());
    }

    #[tokio::test]
    async fn missing_query_parameter() {
        let (status, _) = get("/api/route?from=Oxford%20Circus").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
