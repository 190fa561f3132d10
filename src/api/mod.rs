//! YearMaps HTTP API
//!
//! HTTP layer for the gallery, built with Axum.
//!
//! # Endpoints
//!
//! ## Gallery
//! - `GET /api` - Published provider records, `[[id, name, image_path], ...]`
//! - `GET /update_time` - Last update time as a JSON string
//! - `POST /refresh` - Rescan the image directory
//! - `GET /images/*` - Heat-map image files
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Catalog status
//!
//! Any other path is served from `static_dir` when configured, falling back
//! to its `index.html`, so the built front-end and the API share one origin.
//!
//! # Example
//!
//! ```rust,ignore
//! use yearmaps::api::{serve, AppState};
//! use yearmaps::catalog::Catalog;
//! use yearmaps::config::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     let catalog = Arc::new(Catalog::new(config.gallery, config.providers));
//!     catalog.refresh().await?;
//!
//!     serve(AppState::new(catalog, config.server)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::catalog::IMAGE_ROUTE;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let images = ServeDir::new(state.catalog.image_dir());
    let static_dir = state.config.static_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let router = Router::new()
        .route("/api", get(routes::gallery::list_providers))
        .route("/update_time", get(routes::gallery::update_time))
        .route("/refresh", post(routes::gallery::refresh))
        .nest("/health", health_routes)
        .nest_service(&format!("/{}", IMAGE_ROUTE), images);

    let router = match static_dir {
        Some(dir) => {
            let index = Path::new(&dir).join("index.html");
            router.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        // The development front-end runs on its own origin
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("YearMaps listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("YearMaps shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::{GalleryConfig, ProviderConfig, ServerConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    async fn create_test_app(
        images: &[&str],
        providers: Vec<ProviderConfig>,
        static_dir: Option<String>,
    ) -> (Router, Arc<Catalog>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        for image in images {
            std::fs::write(dir.path().join(image), b"\x89PNG").unwrap();
        }

        let gallery = GalleryConfig {
            image_dir: dir.path().to_string_lossy().to_string(),
            ..Default::default()
        };
        let catalog = Arc::new(Catalog::new(gallery, providers));
        catalog.refresh().await.unwrap();

        let server = ServerConfig {
            static_dir,
            ..Default::default()
        };
        let router = build_router(AppState::new(Arc::clone(&catalog), server));

        (router, catalog, dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_providers() {
        let providers = vec![ProviderConfig::new("github"), ProviderConfig::new("bilibili")];
        let (app, _catalog, _dir) =
            create_test_app(&["github.png", "bilibili.png"], providers, None).await;

        let response = get(app, "/api").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!([
                ["github", "GITHUB", "images/github.png"],
                ["bilibili", "BILIBILI", "images/bilibili.png"]
            ])
        );
    }

    #[tokio::test]
    async fn test_list_providers_empty() {
        let (app, _catalog, _dir) = create_test_app(&[], Vec::new(), None).await;

        let response = get(app, "/api").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_update_time() {
        let (app, catalog, _dir) =
            create_test_app(&["github.png"], vec![ProviderConfig::new("github")], None).await;

        let response = get(app, "/update_time").await;
        assert_eq!(response.status(), StatusCode::OK);

        let expected = catalog.update_time().await;
        assert!(!expected.is_empty());
        assert_eq!(body_json(response).await, serde_json::Value::String(expected));
    }

    #[tokio::test]
    async fn test_update_time_blank_without_images() {
        let (app, _catalog, _dir) =
            create_test_app(&[], vec![ProviderConfig::new("github")], None).await;

        let response = get(app, "/update_time").await;
        assert_eq!(body_json(response).await, serde_json::json!(""));
    }

    #[tokio::test]
    async fn test_record_image_path_is_servable() {
        let mut provider = ProviderConfig::new("github");
        provider.image = Some("map?#%.png".to_string());
        let (app, catalog, _dir) = create_test_app(&["map?#%.png"], vec![provider], None).await;

        let records = catalog.records().await;
        let path = records[0].image_path().unwrap().to_string();

        let response = get(app, &format!("/{}", path)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"\x89PNG");
    }

    #[tokio::test]
    async fn test_serves_images() {
        let (app, _catalog, _dir) =
            create_test_app(&["github.png"], vec![ProviderConfig::new("github")], None).await;

        let response = get(app.clone(), "/images/github.png").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"\x89PNG");

        let response = get(app, "/images/missing.png").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_refresh() {
        let (app, _catalog, dir) =
            create_test_app(&[], vec![ProviderConfig::new("github")], None).await;
        std::fs::write(dir.path().join("github.png"), b"png").unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["providers"], 1);

        let response = get(app, "/api").await;
        assert_eq!(
            body_json(response).await,
            serde_json::json!([["github", "GITHUB", "images/github.png"]])
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _catalog, _dir) =
            create_test_app(&[], vec![ProviderConfig::new("github")], None).await;

        let response = get(app.clone(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["providers"], 0);
        assert_eq!(body["configured"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route_without_static_dir() {
        let (app, _catalog, _dir) = create_test_app(&[], Vec::new(), None).await;

        let response = get(app, "/nothing-here").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_dir_fallback() {
        let site = tempdir().unwrap();
        std::fs::write(site.path().join("index.html"), "<main></main>").unwrap();
        let static_dir = Some(site.path().to_string_lossy().to_string());

        let (app, _catalog, _dir) = create_test_app(&[], Vec::new(), static_dir).await;

        let response = get(app.clone(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<main></main>");

        // API routes still win over the static bundle
        let response = get(app, "/api").await;
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }
}
