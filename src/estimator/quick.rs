//! Two-field quick estimate, the simplest calculator variant.
//!
//! One usage/rate pair per utility and a single total, with an optional
//! flat 30% solar discount on the electricity component. Unlike the full
//! estimator, rates here multiply as entered with no cents conversion.

use super::types::{ValidationError, check_non_negative};

/// Fraction of the electricity cost still payable with solar active.
const SOLAR_DISCOUNT_FACTOR: f64 = 0.7;

/// Inputs for the quick total-bill estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuickEstimate {
    pub electricity_usage_kwh: f64,
    pub electricity_rate: f64,
    pub gas_usage_mj: f64,
    pub gas_rate: f64,
    /// Applies the flat solar discount to the electricity component.
    pub has_solar: bool,
}

impl QuickEstimate {
    /// Checks every field for non-negativity.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "electricity_usage_kwh", self.electricity_usage_kwh);
        check_non_negative(&mut errors, "electricity_rate", self.electricity_rate);
        check_non_negative(&mut errors, "gas_usage_mj", self.gas_usage_mj);
        check_non_negative(&mut errors, "gas_rate", self.gas_rate);
        errors
    }

    /// Total bill: electricity (discounted when solar is active) plus gas.
    pub fn total(&self) -> f64 {
        let mut electricity = self.electricity_usage_kwh * self.electricity_rate;
        if self.has_solar {
            electricity *= SOLAR_DISCOUNT_FACTOR;
        }
        electricity + self.gas_usage_mj * self.gas_rate
    }

    /// Validates and, when clean, returns the total bill in dollars.
    ///
    /// # Errors
    ///
    /// Returns the full list of validation errors when any field is
    /// negative.
    pub fn estimate(&self) -> Result<f64, Vec<ValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_both_utilities() {
        let q = QuickEstimate {
            electricity_usage_kwh: 300.0,
            electricity_rate: 0.25,
            gas_usage_mj: 4000.0,
            gas_rate: 0.03,
            has_solar: false,
        };
        // 75.00 + 120.00
        assert!((q.total() - 195.0).abs() < 1e-9);
    }

    #[test]
    fn solar_discounts_electricity_only() {
        let mut q = QuickEstimate {
            electricity_usage_kwh: 300.0,
            electricity_rate: 0.25,
            gas_usage_mj: 4000.0,
            gas_rate: 0.03,
            has_solar: false,
        };
        let without = q.total();
        q.has_solar = true;
        // 30% off the 75.00 electricity component, gas untouched
        assert!((without - q.total() - 22.5).abs() < 1e-9);
    }

    #[test]
    fn negative_rate_suppresses_result() {
        let q = QuickEstimate {
            electricity_rate: -1.0,
            ..QuickEstimate::default()
        };
        let errors = q.estimate().expect_err("negative rate must not estimate");
        assert_eq!(errors[0].field, "electricity_rate");
    }

    #[test]
    fn all_zero_inputs_estimate_to_zero() {
        let q = QuickEstimate::default();
        let total = q.estimate().expect("zeros are valid");
        assert_eq!(total, 0.0);
    }
}
