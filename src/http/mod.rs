//! HTTP surface of the service.
//!
//! Routes live under `/api/v1` and mirror the kanban client's expectations:
//! `user`, `board` and `todo` groups, every route behind bearer
//! authentication. Handlers are thin: they parse the request, call one of the
//! application services held in [`AppState`], and shape the JSON reply.

mod auth;
mod error;
mod extract;
mod routes;

use crate::board::ports::BoardRepository;
use crate::board::services::BoardCatalogService;
use crate::identity::IdentityVerifier;
use crate::task::domain::PositionPolicy;
use crate::task::ports::{ColumnCatalog, TaskRepository};
use crate::task::services::{ReorderService, TaskLifecycleService};
use crate::user::ports::UserRepository;
use crate::user::services::UserProfileService;
use axum::{Router, http::HeaderValue, middleware};
use mockable::DefaultClock;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub use error::ApiError;
pub use extract::ApiJson;

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Profile registration and edits.
    pub users: UserProfileService<dyn UserRepository, DefaultClock>,
    /// Boards, templates and statistics.
    pub boards: BoardCatalogService<dyn BoardRepository, dyn TaskRepository, DefaultClock>,
    /// Task creation, edits and removal.
    pub tasks: TaskLifecycleService<dyn TaskRepository>,
    /// Position reindexing engine.
    pub reorder: ReorderService<dyn TaskRepository, dyn ColumnCatalog>,
    /// Bearer token verification.
    pub identity: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Wires the services over one set of stores.
    ///
    /// The board store doubles as the column catalog consulted by moves.
    #[must_use]
    pub fn new<U, B, T>(
        users: Arc<U>,
        boards: Arc<B>,
        tasks: Arc<T>,
        identity: Arc<dyn IdentityVerifier>,
        policy: PositionPolicy,
    ) -> Self
    where
        U: UserRepository + 'static,
        B: BoardRepository + 'static,
        T: TaskRepository + 'static,
    {
        let clock = Arc::new(DefaultClock);
        let user_store: Arc<dyn UserRepository> = users;
        let board_store: Arc<dyn BoardRepository> = Arc::<B>::clone(&boards);
        let catalog: Arc<dyn ColumnCatalog> = boards;
        let task_store: Arc<dyn TaskRepository> = tasks;

        Self {
            users: UserProfileService::new(user_store, Arc::clone(&clock)),
            boards: BoardCatalogService::new(board_store, Arc::clone(&task_store), clock),
            tasks: TaskLifecycleService::new(Arc::clone(&task_store), policy),
            reorder: ReorderService::new(task_store, catalog, policy),
            identity,
        }
    }
}

/// Builds the application router.
///
/// An empty `allowed_origins` list allows any origin.
#[must_use]
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .nest("/user", routes::user::router())
        .nest("/board", routes::board::router())
        .nest("/todo", routes::todo::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|err| warn!(%origin, error = %err, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

