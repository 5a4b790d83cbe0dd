//! REST API over a finished estimate.
//!
//! Provides two GET endpoints:
//! - `/report` — savings reports for both utilities plus the combined view
//! - `/breakdown` — itemized line items with optional utility filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::{BillScenario, ConfigError};
use crate::estimator::{LineItem, SavingsReport};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after estimation completes and wrapped in `Arc`; no
/// locks needed since all data is read-only.
#[derive(Debug)]
pub struct AppState {
    /// Scenario the estimate was computed from.
    pub scenario: BillScenario,
    /// Electricity savings report.
    pub electricity: SavingsReport,
    /// Gas savings report.
    pub gas: SavingsReport,
    /// Electricity breakdown rows.
    pub electricity_items: Vec<LineItem>,
    /// Gas breakdown rows.
    pub gas_items: Vec<LineItem>,
}

impl AppState {
    /// Validates the scenario and computes everything the API serves.
    ///
    /// # Errors
    ///
    /// Returns the scenario's validation errors when it is invalid.
    pub fn from_scenario(scenario: BillScenario) -> Result<Self, Vec<ConfigError>> {
        let errors = scenario.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let electricity_bill = scenario.electricity_bill();
        let gas_bill = scenario.gas_bill();
        let electricity = electricity_bill
            .estimate()
            .unwrap_or(SavingsReport::from_costs(0.0, 0.0));
        let gas = gas_bill
            .estimate()
            .unwrap_or(SavingsReport::from_costs(0.0, 0.0));
        Ok(Self {
            electricity,
            gas,
            electricity_items: electricity_bill.breakdown(),
            gas_items: gas_bill.breakdown(),
            scenario,
        })
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/report", get(handlers::get_report))
        .route("/breakdown", get(handlers::get_breakdown))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
