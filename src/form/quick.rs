//! Quick form: one usage/rate pair per utility and a running total.

use super::parse_field;
use crate::estimator::{QuickEstimate, ValidationError};

/// Mutable state of the quick calculator form.
#[derive(Debug, Clone, Default)]
pub struct QuickForm {
    pub electricity_usage: String,
    pub electricity_rate: String,
    pub gas_usage: String,
    pub gas_rate: String,
    pub has_solar: bool,

    errors: Vec<ValidationError>,
    total: Option<f64>,
}

impl QuickForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation errors from the last recompute.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Latest successfully computed total bill; persists while errors exist.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// Builds estimator inputs from the current field values.
    pub fn to_estimate(&self) -> QuickEstimate {
        QuickEstimate {
            electricity_usage_kwh: parse_field(&self.electricity_usage),
            electricity_rate: parse_field(&self.electricity_rate),
            gas_usage_mj: parse_field(&self.gas_usage),
            gas_rate: parse_field(&self.gas_rate),
            has_solar: self.has_solar,
        }
    }

    /// Re-runs validation and estimation from the current field values.
    pub fn recompute(&mut self) {
        match self.to_estimate().estimate() {
            Ok(total) => {
                self.total = Some(total);
                self.errors.clear();
            }
            Err(errors) => self.errors = errors,
        }
    }

    /// Restores every field to its default and clears errors and total.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
