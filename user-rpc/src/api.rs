use crate::handlers::{docs_handler, health_handler, user_handler, UserHandler};
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use user_service::IdGenerator;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub env_name: Arc<str>,
    pub users: Arc<RwLock<UserHandler>>,
}

pub struct RpcServer {
    state: AppState,
}

impl RpcServer {
    pub fn new(env_name: impl Into<String>) -> Self {
        Self::with_handler(env_name, UserHandler::new())
    }

    pub fn with_id_generator(env_name: impl Into<String>, ids: impl IdGenerator + 'static) -> Self {
        Self::with_handler(env_name, UserHandler::with_id_generator(ids))
    }

    fn with_handler(env_name: impl Into<String>, handler: UserHandler) -> Self {
        Self {
            state: AppState {
                env_name: Arc::from(env_name.into()),
                users: Arc::new(RwLock::new(handler)),
            },
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(health_handler::health_check))
            .route(
                "/user",
                get(user_handler::list_users).post(user_handler::create_user),
            )
            .route("/api-docs", get(docs_handler::api_docs))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Bind `0.0.0.0:<port>` and serve until `shutdown` resolves.
    pub async fn serve<F>(self, port: u16, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await?;
        self.serve_listener(listener, shutdown).await
    }

    pub async fn serve_listener<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let port = listener.local_addr()?.port();
        for line in startup_messages(port, &self.state.env_name) {
            tracing::info!("{}", line);
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
    }
}

pub fn startup_messages(port: u16, env_name: &str) -> [String; 2] {
    [
        format!("Server running on port {}", port),
        format!("Environment: {}", env_name),
    ]
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received interrupt signal, shutting down"),
        Err(err) => {
            tracing::error!("Error setting up signal handler: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
