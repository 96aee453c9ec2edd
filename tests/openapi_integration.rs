// tests/openapi_integration.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use finboard_core::presentation::http::openapi::{ApiDoc, docs_router, write_openapi_snapshot};
use tower::ServiceExt;
use utoipa::OpenApi;

#[tokio::test]
async fn openapi_json_is_served() {
    let app = docs_router();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/payroll/run"].is_object());
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let app = docs_router();
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/docs");
}

#[test]
fn snapshot_is_written_where_configured() {
    let dir = std::env::temp_dir().join(format!("finboard-openapi-{}", uuid::Uuid::new_v4()));
    let path = dir.join("openapi.json");
    // SAFETY: no other test in this binary reads OPENAPI_SNAPSHOT_PATH.
    unsafe { std::env::set_var("OPENAPI_SNAPSHOT_PATH", &path) };
    write_openapi_snapshot().unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let expected = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert_eq!(written["info"], expected["info"]);
    std::fs::remove_dir_all(dir).ok();
}
