//! HTTP host for the todo store.
//!
//! # Overview
//! Routes `/todo` requests onto a shared `TodoStore`, publishes an OpenAPI
//! description with a Swagger UI page, and can serve a static directory for
//! every other path.
//!
//! # Design
//! The store is created by the caller and passed in as router state; nothing
//! here holds a global. `app()` builds a router over a fresh store with the
//! default configuration, which is what the tests use.

use std::{future::Future, sync::Arc};

use axum::Router;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;

pub use crate::config::AppConfig;
pub use error::ApiError;
pub use todo_core::TodoItem;

/// Store handle shared by every request.
pub type SharedStore = Arc<TodoStore>;

pub fn app() -> Router {
    app_with_store(Arc::new(TodoStore::new()))
}

pub fn app_with_store(store: SharedStore) -> Router {
    build_router(&AppConfig::default(), store)
}

/// Assembles the full router for `config` around `store`.
pub fn build_router(config: &AppConfig, store: SharedStore) -> Router {
    let mut router = handlers::routes().with_state(store);

    if config.docs.enabled {
        router = router.merge(openapi::routes(&config.docs));
    }

    if config.static_files.enabled {
        router = router.fallback_service(ServeDir::new(&config.static_files.dir));
    }

    router.layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("listening on {addr}");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
