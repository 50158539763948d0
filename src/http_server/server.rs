//! # HTTP Server
//!
//! Combines the endpoint routers with the CORS layer and serves them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::config::HttpServerConfig;
use super::student_routes::{health_routes, student_routes, AppState};

/// HTTP server for the student registration API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_config(HttpServerConfig::default(), state)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(student_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        println!("Starting studentreg HTTP server on {}", addr);
        println!("Health check: http://{}/health", addr);
        println!("Students API: http://{}/students", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
