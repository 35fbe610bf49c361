//! `GET /health`: liveness plus a record count per publication kind.
//!
//! Counting both tables doubles as the database probe; a failing count
//! marks the service degraded and answers 503 so load balancers stop routing
//! to it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use newsroom_core::filter::PublicationFilter;
use newsroom_core::publication::PublicationKind;
use newsroom_db::repositories::PublicationRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored records per kind; empty when the database is unreachable.
    pub records: Vec<RecordCount>,
}

#[derive(Debug, Serialize)]
pub struct RecordCount {
    pub kind: PublicationKind,
    pub count: i64,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let everything = PublicationFilter::default();
    let mut records = Vec::with_capacity(PublicationKind::ALL.len());

    for kind in PublicationKind::ALL {
        match PublicationRepo::count(&state.pool, kind, &everything).await {
            Ok(count) => records.push(RecordCount { kind, count }),
            Err(err) => {
                tracing::warn!(%kind, error = %err, "Health check could not count records");
                records.clear();
                break;
            }
        }
    }

    let db_healthy = records.len() == PublicationKind::ALL.len();
    let (status, label) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status: label,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        records,
    };
    (status, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
