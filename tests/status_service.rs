//! End-to-end tests of the status service through its public API.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use tower::ServiceExt;

use hello_status::api::{create_router, AppState};
use hello_status::config::Config;
use hello_status::status::{format_uptime, Metadata, StatusReporter};

fn full_app(reporter: StatusReporter, static_dir: &std::path::Path) -> Router {
    create_router(AppState::new(reporter).with_static_dir(static_dir))
}

fn dashboard_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("hello-status-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
    dir
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn uptime_examples() {
    assert_eq!(format_uptime(0), "00:00:00");
    assert_eq!(format_uptime(3661), "01:01:01");
    assert_eq!(format_uptime(360_000), "100:00:00");
}

#[tokio::test]
async fn every_catalogued_route_is_served() {
    let dir = dashboard_dir("catalog");
    let reporter = StatusReporter::new(Metadata::new("1.0.0"));
    let catalog = reporter.info().endpoints;
    let app = full_app(reporter, &dir);

    assert!(!catalog.is_empty());
    for entry in catalog.iter() {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&entry.path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::NOT_FOUND, "{} not served", entry.path);
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn info_reports_uptime_since_configured_start() {
    let dir = dashboard_dir("uptime");
    let start = OffsetDateTime::now_utc() - Duration::seconds(3661);
    let reporter = StatusReporter::started_at(Metadata::new("2.0.0"), start);
    let app = full_app(reporter, &dir);

    let (status, body) = get_json(app, "/api/info").await;
    assert_eq!(status, StatusCode::OK);

    // One extra second may tick between construction and the request.
    let uptime = body["uptime"].as_str().unwrap();
    assert!(uptime == "01:01:01" || uptime == "01:01:02", "{uptime}");

    let start_time = OffsetDateTime::parse(body["startTime"].as_str().unwrap(), &Rfc3339).unwrap();
    assert_eq!(start_time, start);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn greeting_timestamp_parses_back() {
    let dir = dashboard_dir("greeting");
    let before = OffsetDateTime::now_utc();
    let app = full_app(StatusReporter::new(Metadata::new("1.0.0")), &dir);

    let (_, body) = get_json(app, "/api/greeting").await;
    let ts = OffsetDateTime::parse(body["timestamp"].as_str().unwrap(), &Rfc3339).unwrap();
    assert!(ts >= before);
    assert!(ts <= OffsetDateTime::now_utc());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn configured_mission_and_version_flow_through() {
    let vars = vec![
        ("APP_VERSION".to_string(), "4.5.6".to_string()),
        ("APP_MISSION".to_string(), "Say hello".to_string()),
    ];
    let config: Config = envy::from_iter(vars).unwrap();
    tokio_test::assert_ok!(config.validate());

    let app = create_router(AppState::new(StatusReporter::new(Metadata::from_config(&config))));

    let (_, info) = get_json(app.clone(), "/api/info").await;
    assert_eq!(info["version"], "4.5.6");
    assert_eq!(info["mission"], "Say hello");

    let (_, health) = get_json(app, "/health").await;
    assert_eq!(health["version"], "4.5.6");
    assert_eq!(health["status"], "UP");
}

#[tokio::test]
async fn metrics_endpoint_exports_uptime() {
    let dir = dashboard_dir("metrics");
    let start = OffsetDateTime::now_utc() - Duration::seconds(90);
    let app = full_app(StatusReporter::started_at(Metadata::new("1.0.0"), start), &dir);

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("process_uptime_seconds"), "body: {body:?}");
    assert!(body.contains(r#"version="1.0.0""#), "body: {body:?}");

    let uptime: f64 = body
        .lines()
        .find(|l| l.starts_with("process_uptime_seconds "))
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|v| v.parse().ok())
        .unwrap();
    assert!(uptime >= 90.0, "{uptime}");

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn catalog_matches_routes_without_dashboard() {
    let config = Config {
        static_dir: "/nonexistent/hello-status-ui".to_string(),
        ..Config::default()
    };
    let reporter = StatusReporter::new(Metadata::from_config(&config));
    let catalog = reporter.info().endpoints;
    let app = create_router(AppState::new(reporter));

    assert!(!catalog.contains("/"));
    for entry in catalog.iter() {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&entry.path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::NOT_FOUND, "{} not served", entry.path);
    }
}
