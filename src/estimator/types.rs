//! Core estimator types: tariffs, bill inputs, and validation errors.

use std::fmt;

/// Converts a tariff rate quoted in cents into dollars.
pub(crate) fn cents(rate: f64) -> f64 {
    rate / 100.0
}

/// A consumption quantity paired with its unit price in cents.
///
/// Cost in dollars is `quantity * rate / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsageRate {
    /// Consumed quantity (kWh for electricity, MJ for gas).
    pub quantity: f64,
    /// Unit price in cents per unit.
    pub rate_cents: f64,
}

impl UsageRate {
    pub fn new(quantity: f64, rate_cents: f64) -> Self {
        Self {
            quantity,
            rate_cents,
        }
    }

    /// Cost contribution in dollars.
    pub fn cost(&self) -> f64 {
        self.quantity * cents(self.rate_cents)
    }
}

/// Fixed daily fee independent of consumption.
///
/// Contributes `rate_per_day * days` to the bill. The rate is quoted in
/// dollars per day, not cents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SupplyCharge {
    /// Daily rate in dollars.
    pub rate_per_day: f64,
    /// Number of billed days.
    pub days: f64,
}

impl SupplyCharge {
    pub fn new(rate_per_day: f64, days: f64) -> Self {
        Self { rate_per_day, days }
    }

    /// Cost contribution in dollars.
    pub fn cost(&self) -> f64 {
        self.rate_per_day * self.days
    }
}

/// Energy exported to the grid and the rebate rate it earns.
///
/// The credit, `export_kwh * credit_cents / 100` dollars, is subtracted
/// from the electricity bill total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarFeedIn {
    /// Exported energy (kWh).
    pub export_kwh: f64,
    /// Feed-in credit in cents per kWh.
    pub credit_cents: f64,
}

impl SolarFeedIn {
    pub fn new(export_kwh: f64, credit_cents: f64) -> Self {
        Self {
            export_kwh,
            credit_cents,
        }
    }

    /// Credit in dollars.
    pub fn credit(&self) -> f64 {
        self.export_kwh * cents(self.credit_cents)
    }
}

/// Electricity pricing structure.
///
/// One variant per tariff, each carrying only the fields that matter for
/// it, so a demand charge cannot be attached to a single-rate plan and a
/// half-filled time-of-use split cannot exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tariff {
    /// Flat rate applied to all consumption.
    SingleRate {
        usage_kwh: f64,
        rate_cents: f64,
    },
    /// Separate peak and off-peak consumption blocks.
    TimeOfUse {
        peak_usage_kwh: f64,
        peak_rate_cents: f64,
        off_peak_usage_kwh: f64,
        off_peak_rate_cents: f64,
    },
    /// Flat energy rate plus a charge on the billing period's peak demand.
    /// The demand charge is quoted in dollars per kW, not cents.
    Demand {
        usage_kwh: f64,
        rate_cents: f64,
        peak_demand_kw: f64,
        charge_per_kw: f64,
    },
}

impl Tariff {
    /// Energy cost in dollars for this tariff.
    pub fn cost(&self) -> f64 {
        match *self {
            Tariff::SingleRate {
                usage_kwh,
                rate_cents,
            } => usage_kwh * cents(rate_cents),
            Tariff::TimeOfUse {
                peak_usage_kwh,
                peak_rate_cents,
                off_peak_usage_kwh,
                off_peak_rate_cents,
            } => {
                peak_usage_kwh * cents(peak_rate_cents)
                    + off_peak_usage_kwh * cents(off_peak_rate_cents)
            }
            Tariff::Demand {
                usage_kwh,
                rate_cents,
                peak_demand_kw,
                charge_per_kw,
            } => usage_kwh * cents(rate_cents) + peak_demand_kw * charge_per_kw,
        }
    }

    /// Stable name for the variant, matching scenario file spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Tariff::SingleRate { .. } => "single_rate",
            Tariff::TimeOfUse { .. } => "time_of_use",
            Tariff::Demand { .. } => "demand",
        }
    }
}

/// Which utility a bill or line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utility {
    Electricity,
    Gas,
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utility::Electricity => write!(f, "electricity"),
            Utility::Gas => write!(f, "gas"),
        }
    }
}

/// One row of an itemized bill breakdown.
///
/// Credits carry a negative `cost_dollars`; the sum of all rows equals the
/// new bill.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub utility: Utility,
    /// Stable component label (`"peak_energy"`, `"supply_charge"`, ...).
    pub component: &'static str,
    /// Consumed quantity, billed days, or exported kWh depending on the row.
    pub quantity: f64,
    /// Unit rate as quoted on the bill (cents or dollars per unit).
    pub rate: f64,
    /// Signed cost contribution in dollars.
    pub cost_dollars: f64,
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<18} {:>10.3} @ {:>7.3}  ${:>9.2}",
            self.component, self.quantity, self.rate, self.cost_dollars
        )
    }
}

/// A non-negativity violation on one input field.
///
/// Validation collects every violation rather than stopping at the first,
/// so a form can surface the complete list at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field name the violation applies to (e.g. `"supply_charge.days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn negative(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "cannot be negative".to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Pushes a validation error when `value` is negative.
pub(crate) fn check_non_negative(errors: &mut Vec<ValidationError>, field: &str, value: f64) {
    if value < 0.0 {
        errors.push(ValidationError::negative(field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_rate_cost_converts_cents() {
        // 100 kWh at 20 c/kWh is twenty dollars
        let ur = UsageRate::new(100.0, 20.0);
        assert!((ur.cost() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn supply_charge_is_rate_times_days() {
        let sc = SupplyCharge::new(1.0, 90.0);
        assert!((sc.cost() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn solar_credit_converts_cents() {
        let solar = SolarFeedIn::new(200.0, 7.0);
        assert!((solar.credit() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn single_rate_tariff_cost() {
        let t = Tariff::SingleRate {
            usage_kwh: 100.0,
            rate_cents: 20.0,
        };
        assert!((t.cost() - 20.0).abs() < 1e-9);
        assert_eq!(t.name(), "single_rate");
    }

    #[test]
    fn time_of_use_tariff_sums_both_blocks() {
        let t = Tariff::TimeOfUse {
            peak_usage_kwh: 150.0,
            peak_rate_cents: 42.0,
            off_peak_usage_kwh: 300.0,
            off_peak_rate_cents: 18.0,
        };
        // 63.00 + 54.00
        assert!((t.cost() - 117.0).abs() < 1e-9);
    }

    #[test]
    fn demand_charge_is_not_divided_by_100() {
        let t = Tariff::Demand {
            usage_kwh: 0.0,
            rate_cents: 0.0,
            peak_demand_kw: 5.0,
            charge_per_kw: 12.5,
        };
        assert!((t.cost() - 62.5).abs() < 1e-9);
    }

    #[test]
    fn validation_error_display_reads_as_sentence() {
        let e = ValidationError::negative("supply_charge.days");
        assert_eq!(format!("{e}"), "supply_charge.days cannot be negative");
    }

    #[test]
    fn check_non_negative_accepts_zero() {
        let mut errors = Vec::new();
        check_non_negative(&mut errors, "usage_kwh", 0.0);
        assert!(errors.is_empty());
    }

    #[test]
    fn line_item_display_does_not_panic() {
        let item = LineItem {
            utility: Utility::Electricity,
            component: "solar_credit",
            quantity: 200.0,
            rate: 7.0,
            cost_dollars: -14.0,
        };
        let s = format!("{item}");
        assert!(s.contains("solar_credit"));
    }
}
