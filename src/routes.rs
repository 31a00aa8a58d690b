use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api_v1 = crate::api::routes::selection_routes::selection_api_routes();

    Router::new()
        // Dashboard page + form endpoints
        .merge(crate::api::routes::selection_routes::selection_routes())
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::app_state::build_app_state;
    use crate::core::client::cluster_adapter::mock::MockClusterAdapter;

    fn app(adapter: MockClusterAdapter) -> Router {
        app_router().with_state(build_app_state(Arc::new(adapter), "dev"))
    }

    fn cluster() -> MockClusterAdapter {
        MockClusterAdapter::new()
            .with_namespace("default")
            .with_namespace("kube-system")
            .with_pod("default", "web-1", "Running")
            .with_logs(
                "default",
                "web-1",
                &(1..=80).map(|i| format!("request {i} served")).collect::<Vec<_>>().join("\n"),
            )
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(app, req).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_get_pods_returns_names_and_status() {
        let (status, body) = send_json(app(cluster()), form_post("/get_pods", "namespace=default")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "pods": [{ "name": "web-1", "status": "Running" }] }));
    }

    #[tokio::test]
    async fn test_get_pods_for_missing_namespace_is_error_shape() {
        let (status, body) = send_json(app(cluster()), form_post("/get_pods", "namespace=ghost")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("ghost"));
        assert!(body.get("pods").is_none());
    }

    #[tokio::test]
    async fn test_get_pods_without_namespace_is_bad_request() {
        let (status, body) = send_json(app(cluster()), form_post("/get_pods", "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_logs_echoes_query() {
        let (status, body) = send_json(
            app(cluster()),
            form_post("/get_logs", "namespace=default&pod_name=web-1&tail_lines=50"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pod"], "web-1");
        assert_eq!(body["namespace"], "default");
        assert_eq!(body["tail_lines"], 50);
        assert_eq!(body["logs"].as_str().unwrap().lines().count(), 50);
    }

    #[tokio::test]
    async fn test_get_logs_coerces_bad_tail_lines() {
        for tail in ["tail_lines=abc", "tail_lines=0", "tail_lines=-10", "tail_lines="] {
            let body = format!("namespace=default&pod_name=web-1&{tail}");
            let (status, json) = send_json(app(cluster()), form_post("/get_logs", &body)).await;

            assert_eq!(status, StatusCode::OK, "{tail}");
            assert_eq!(json["tail_lines"], 20, "{tail}");
        }

        let (_, json) = send_json(app(cluster()), form_post("/get_logs", "namespace=default&pod_name=web-1")).await;
        assert_eq!(json["tail_lines"], 20);
    }

    #[tokio::test]
    async fn test_get_logs_for_missing_pod_has_no_logs_field() {
        let (status, body) = send_json(
            app(cluster()),
            form_post("/get_logs", "namespace=default&pod_name=nope&tail_lines=20"),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "pods \"nope\" not found");
        assert!(body.get("logs").is_none());
    }

    #[tokio::test]
    async fn test_get_logs_with_wrong_content_type_is_error_shape() {
        let req = Request::builder()
            .method("POST")
            .uri("/get_logs")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("namespace=default"))
            .unwrap();
        let (status, body) = send_json(app(cluster()), req).await;

        assert!(status.is_client_error());
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_index_renders_namespace_dropdown() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(app(cluster()), req).await;

        assert_eq!(status, StatusCode::OK);
        let default_at = html.find(r#"<option value="default">"#).unwrap();
        let system_at = html.find(r#"<option value="kube-system">"#).unwrap();
        assert!(default_at < system_at);
        assert!(html.contains("<option>dev</option>"));
    }

    #[tokio::test]
    async fn test_index_renders_error_page_when_cluster_unreachable() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(app(MockClusterAdapter::unreachable()), req).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(html.contains("alert-danger"));
        assert!(html.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_namespaces_api() {
        let req = Request::builder().uri("/api/v1/namespaces").body(Body::empty()).unwrap();
        let (status, body) = send_json(app(cluster()), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({ "context": "dev", "namespaces": ["default", "kube-system"] })
        );
    }

    #[tokio::test]
    async fn test_health_and_fallback() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        assert_eq!(send(app(cluster()), req).await, (StatusCode::OK, "OK".to_string()));

        let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        assert_eq!(send(app(cluster()), req).await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_pods_rejects_path_segments_in_namespace() {
        for body in ["namespace=kube-system%2Fsecrets%2Fdb-password%3F", "namespace=..", "namespace=default%3Fwatch%3Dtrue"] {
            let (status, json) = send_json(app(cluster()), form_post("/get_pods", body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert!(json["error"].is_string(), "{body}");
            assert!(json.get("pods").is_none(), "{body}");
        }
    }

    #[tokio::test]
    async fn test_get_logs_rejects_path_segments() {
        let bodies = [
            "namespace=kube-system%2Fsecrets%2Fdb-password%3F&pod_name=web-1",
            "namespace=..&pod_name=web-1",
            "namespace=default&pod_name=..%2Fsecrets%2Ftoken%3Fx%3D",
            "namespace=default&pod_name=web-1%3Fcontainer%3Dsidecar",
            "namespace=default&pod_name=..",
        ];
        for body in bodies {
            let (status, json) = send_json(app(cluster()), form_post("/get_logs", body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert!(json["error"].is_string(), "{body}");
            assert!(json.get("logs").is_none(), "{body}");
        }
    }
}
