use crate::core::service::SolveService;
use crate::domain::model::{SolveRequest, SolveResponse};
use crate::domain::ports::LpSolver;
use crate::utils::error::{LpServiceError, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const HEALTH_MESSAGE: &str = "lp-solver is running";

pub fn router<S: LpSolver + 'static>(service: SolveService<S>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/solve", post(solve::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

async fn health() -> Json<Value> {
    Json(json!({ "message": HEALTH_MESSAGE }))
}

/// The body is parsed here rather than through `Json<T>` so that every schema
/// failure answers 422 with a `detail` message.
async fn solve<S: LpSolver + 'static>(
    State(service): State<Arc<SolveService<S>>>,
    body: Bytes,
) -> Result<Json<SolveResponse>> {
    let request: SolveRequest = serde_json::from_slice(&body)
        .map_err(|e| LpServiceError::schema(format!("Invalid request body: {}", e)))?;

    let response = tokio::task::spawn_blocking(move || service.solve(&request))
        .await
        .map_err(|e| LpServiceError::SolverError {
            message: format!("solve task did not complete: {}", e),
        })??;

    Ok(Json(response))
}

/// Serves until `shutdown` resolves.
pub async fn serve<S, F>(listener: TcpListener, service: SolveService<S>, shutdown: F) -> Result<()>
where
    S: LpSolver + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(
            "🚀 lp-solver listening on http://{} (solver: {})",
            addr,
            service.solver_name()
        );
    }

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("lp-solver stopped");
    Ok(())
}
