//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{BreakdownQuery, ErrorResponse, LineItemRecord, ReportBody, ReportResponse};
use crate::estimator::SavingsReport;

/// Returns savings reports for both utilities and the combined view.
///
/// `GET /report` → 200 + `ReportResponse` JSON
pub async fn get_report(State(state): State<Arc<AppState>>) -> Json<ReportResponse> {
    let combined = SavingsReport::combined(Some(&state.electricity), Some(&state.gas))
        .unwrap_or(SavingsReport::from_costs(0.0, 0.0));

    Json(ReportResponse {
        electricity: ReportBody::from(&state.electricity),
        gas: ReportBody::from(&state.gas),
        combined: ReportBody::from(&combined),
    })
}

/// Returns breakdown rows, optionally filtered to one utility.
///
/// `GET /breakdown` → 200 + all rows, electricity first
/// `GET /breakdown?utility=gas` → 200 + gas rows only
/// `GET /breakdown?utility=water` → 400 + `ErrorResponse`
pub async fn get_breakdown(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BreakdownQuery>,
) -> impl IntoResponse {
    let items: Vec<LineItemRecord> = match query.utility.as_deref() {
        None => state
            .electricity_items
            .iter()
            .chain(&state.gas_items)
            .map(LineItemRecord::from)
            .collect(),
        Some("electricity") => state.electricity_items.iter().map(LineItemRecord::from).collect(),
        Some("gas") => state.gas_items.iter().map(LineItemRecord::from).collect(),
        Some(other) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("unknown utility \"{other}\", expected electricity or gas"),
                }),
            ));
        }
    };

    Ok(Json(items))
}
