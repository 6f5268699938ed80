//! In-memory todo HTTP service.
//!
//! # Overview
//! `app` wires four routes over a `TodoStore` passed in as router state:
//!
//! | Method | Path          | Success |
//! |--------|---------------|---------|
//! | GET    | `/todos`      | 200     |
//! | POST   | `/todos`      | 200     |
//! | PUT    | `/todos/{id}` | 200     |
//! | DELETE | `/todos/{id}` | 204     |
//!
//! Bad payloads and non-integer ids answer 400; updating an unknown id
//! answers 404. State lives only in process memory.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod telemetry;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use store::{StoreError, Todo, TodoInput, TodoStore};

pub fn app(store: TodoStore) -> Router {
    with_middleware(routes()).with_state(store)
}

/// The four todo routes, still waiting for their store.
pub fn routes() -> Router<TodoStore> {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todos/{id}", put(handlers::update_todo).delete(handlers::delete_todo))
}

/// Request tracing plus panic recovery: a panicking handler answers 500 and
/// the server keeps serving.
pub fn with_middleware(router: Router<TodoStore>) -> Router<TodoStore> {
    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

/// Serve a fresh store on `listener` until SIGINT or SIGTERM.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(TodoStore::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received, draining requests");
}
