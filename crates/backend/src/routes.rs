use axum::{http::Method, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::ServerConfig;

/// Site router: `/health` plus the Trunk bundle.
///
/// Paths that match no file fall back to `index.html` so client-side routes
/// like `/dinopedia` survive a reload.
pub fn configure_routes(server: &ServerConfig) -> Router {
    let dist = server.dist_path();
    let static_files = ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(static_files)
        .layer(CompressionLayer::new().gzip(true))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>spa</body></html>";

    /// A throwaway dist directory, removed when the guard drops.
    fn fixture_dist() -> TempDir {
        let dir = tempfile::Builder::new().prefix("dino-backend-").tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").unwrap();
        dir
    }

    fn config_for(dir: &Path) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            dist_dir: dir.display().to_string(),
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = fixture_dist();
        let app = configure_routes(&config_for(dir.path()));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = fixture_dist();
        let app = configure_routes(&config_for(dir.path()));

        let response = app
            .oneshot(Request::get("/app.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let dir = fixture_dist();

        for path in ["/dinopedia", "/tickets", "/no/such/page"] {
            let app = configure_routes(&config_for(dir.path()));
            let response = app
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            assert_eq!(body_string(response).await, INDEX);
        }
    }

    #[tokio::test]
    async fn test_gzip_when_accepted() {
        let dir = fixture_dist();
        let app = configure_routes(&config_for(dir.path()));

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::ACCEPT_ENCODING, "gzip")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING).unwrap(),
            "gzip"
        );
    }

    #[tokio::test]
    async fn test_fixture_dist_is_removed_after_use() {
        let dir = fixture_dist();
        let path = dir.path().to_path_buf();
        let app = configure_routes(&config_for(&path));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert!(path.join("index.html").exists());
        drop(dir);
        assert!(!path.exists());
    }
}
