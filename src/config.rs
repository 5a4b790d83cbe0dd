//! TOML-based bill scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::estimator::{
    ElectricityBill, GasBill, SolarFeedIn, SupplyCharge, Tariff, UsageRate,
};

/// Recognized electricity tariff names.
pub const TARIFFS: &[&str] = &["single_rate", "time_of_use", "demand"];

/// Top-level bill scenario parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`BillScenario::from_toml_file`] or use
/// [`BillScenario::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillScenario {
    /// Electricity bill inputs.
    #[serde(default)]
    pub electricity: ElectricityScenario,
    /// Gas bill inputs.
    #[serde(default)]
    pub gas: GasScenario,
}

/// Electricity bill inputs.
///
/// The `tariff` string selects which usage/rate fields apply, the way the
/// form's selector does; fields for unselected tariffs are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElectricityScenario {
    /// Tariff type: `"single_rate"`, `"time_of_use"`, or `"demand"`.
    pub tariff: String,
    /// Consumption for single-rate and demand tariffs (kWh).
    pub usage_kwh: f64,
    /// Rate for single-rate and demand tariffs (c/kWh).
    pub rate_c_per_kwh: f64,
    /// Peak consumption for time-of-use (kWh).
    pub peak_usage_kwh: f64,
    /// Peak rate for time-of-use (c/kWh).
    pub peak_rate_c_per_kwh: f64,
    /// Off-peak consumption for time-of-use (kWh).
    pub off_peak_usage_kwh: f64,
    /// Off-peak rate for time-of-use (c/kWh).
    pub off_peak_rate_c_per_kwh: f64,
    /// Billing-period peak demand for the demand tariff (kW).
    pub peak_demand_kw: f64,
    /// Demand charge ($/kW, not cents).
    pub demand_charge_per_kw: f64,
    /// Whether a controlled-load circuit is present.
    pub controlled_load: bool,
    /// Controlled-load consumption (kWh).
    pub controlled_load_usage_kwh: f64,
    /// Controlled-load rate (c/kWh).
    pub controlled_load_rate_c_per_kwh: f64,
    /// Daily supply charge ($/day).
    pub supply_rate_per_day: f64,
    /// Billed days.
    pub supply_days: f64,
    /// Whether solar export earns a credit.
    pub solar: bool,
    /// Exported energy (kWh).
    pub solar_export_kwh: f64,
    /// Feed-in credit (c/kWh).
    pub solar_credit_c_per_kwh: f64,
    /// Whether a concession applies to the current bill.
    pub concession: bool,
    /// Concession amount ($).
    pub concession_amount: f64,
    /// Current monthly electricity bill ($).
    pub current_bill: f64,
}

impl Default for ElectricityScenario {
    fn default() -> Self {
        Self {
            tariff: "single_rate".to_string(),
            usage_kwh: 450.0,
            rate_c_per_kwh: 28.0,
            peak_usage_kwh: 0.0,
            peak_rate_c_per_kwh: 0.0,
            off_peak_usage_kwh: 0.0,
            off_peak_rate_c_per_kwh: 0.0,
            peak_demand_kw: 0.0,
            demand_charge_per_kw: 0.0,
            controlled_load: false,
            controlled_load_usage_kwh: 0.0,
            controlled_load_rate_c_per_kwh: 0.0,
            supply_rate_per_day: 1.10,
            supply_days: 30.0,
            solar: false,
            solar_export_kwh: 0.0,
            solar_credit_c_per_kwh: 0.0,
            concession: false,
            concession_amount: 0.0,
            current_bill: 180.0,
        }
    }
}

/// Gas bill inputs: three block-tariff steps plus the supply charge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GasScenario {
    /// Step 1 consumption (MJ).
    pub step1_usage_mj: f64,
    /// Step 1 rate (c/MJ).
    pub step1_rate_c_per_mj: f64,
    /// Step 2 consumption (MJ).
    pub step2_usage_mj: f64,
    /// Step 2 rate (c/MJ).
    pub step2_rate_c_per_mj: f64,
    /// Step 3 consumption (MJ).
    pub step3_usage_mj: f64,
    /// Step 3 rate (c/MJ).
    pub step3_rate_c_per_mj: f64,
    /// Daily supply charge ($/day).
    pub supply_rate_per_day: f64,
    /// Billed days.
    pub supply_days: f64,
    /// Whether a concession applies to the current bill.
    pub concession: bool,
    /// Concession amount ($).
    pub concession_amount: f64,
    /// Current monthly gas bill ($).
    pub current_bill: f64,
}

impl Default for GasScenario {
    fn default() -> Self {
        Self {
            step1_usage_mj: 1600.0,
            step1_rate_c_per_mj: 4.2,
            step2_usage_mj: 900.0,
            step2_rate_c_per_mj: 3.1,
            step3_usage_mj: 0.0,
            step3_rate_c_per_mj: 0.0,
            supply_rate_per_day: 0.75,
            supply_days: 30.0,
            concession: false,
            concession_amount: 0.0,
            current_bill: 95.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"electricity.usage_kwh"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario error: {}: {}", self.field, self.message)
    }
}

impl BillScenario {
    /// Returns the baseline scenario: a single-rate household with no
    /// optional extras on either utility.
    pub fn baseline() -> Self {
        Self {
            electricity: ElectricityScenario::default(),
            gas: GasScenario::default(),
        }
    }

    /// Returns the solar-household preset: time-of-use tariff with a
    /// controlled load and a solar feed-in credit.
    pub fn solar_household() -> Self {
        Self {
            electricity: ElectricityScenario {
                tariff: "time_of_use".to_string(),
                peak_usage_kwh: 150.0,
                peak_rate_c_per_kwh: 42.0,
                off_peak_usage_kwh: 300.0,
                off_peak_rate_c_per_kwh: 18.0,
                controlled_load: true,
                controlled_load_usage_kwh: 90.0,
                controlled_load_rate_c_per_kwh: 15.0,
                supply_rate_per_day: 0.95,
                supply_days: 30.0,
                solar: true,
                solar_export_kwh: 200.0,
                solar_credit_c_per_kwh: 7.0,
                current_bill: 210.0,
                ..ElectricityScenario::default()
            },
            gas: GasScenario {
                step1_usage_mj: 800.0,
                step1_rate_c_per_mj: 4.2,
                step2_usage_mj: 0.0,
                step2_rate_c_per_mj: 0.0,
                supply_rate_per_day: 0.6,
                current_bill: 70.0,
                ..GasScenario::default()
            },
        }
    }

    /// Returns the winter-gas preset: demand electricity tariff and heavy
    /// three-step gas usage over a quarterly period with a concession.
    pub fn winter_gas() -> Self {
        Self {
            electricity: ElectricityScenario {
                tariff: "demand".to_string(),
                usage_kwh: 380.0,
                rate_c_per_kwh: 30.0,
                peak_demand_kw: 5.0,
                demand_charge_per_kw: 12.5,
                supply_rate_per_day: 1.0,
                supply_days: 90.0,
                current_bill: 300.0,
                ..ElectricityScenario::default()
            },
            gas: GasScenario {
                step1_usage_mj: 3000.0,
                step1_rate_c_per_mj: 3.5,
                step2_usage_mj: 2000.0,
                step2_rate_c_per_mj: 2.8,
                step3_usage_mj: 1000.0,
                step3_rate_c_per_mj: 2.2,
                supply_rate_per_day: 0.8,
                supply_days: 90.0,
                concession: true,
                concession_amount: 50.0,
                current_bill: 310.0,
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "solar_household", "winter_gas"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "solar_household" => Ok(Self::solar_household()),
            "winter_gas" => Ok(Self::winter_gas()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Checks the tariff name, then runs the estimator's own non-negativity
    /// validation on both utilities, prefixing each field with its table.
    /// Returns an empty vector if the scenario is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !TARIFFS.contains(&self.electricity.tariff.as_str()) {
            errors.push(ConfigError {
                field: "electricity.tariff".into(),
                message: format!(
                    "must be one of {}, got \"{}\"",
                    TARIFFS.join(", "),
                    self.electricity.tariff
                ),
            });
        }

        for e in self.electricity_bill().validate() {
            errors.push(ConfigError {
                field: format!("electricity.{}", e.field),
                message: e.message,
            });
        }
        for e in self.gas_bill().validate() {
            errors.push(ConfigError {
                field: format!("gas.{}", e.field),
                message: e.message,
            });
        }

        errors
    }

    /// Builds electricity estimator inputs from the scenario.
    ///
    /// An unrecognized tariff name falls back to single-rate; `validate`
    /// has already rejected it by the time this matters.
    pub fn electricity_bill(&self) -> ElectricityBill {
        let e = &self.electricity;
        let tariff = match e.tariff.as_str() {
            "time_of_use" => Tariff::TimeOfUse {
                peak_usage_kwh: e.peak_usage_kwh,
                peak_rate_cents: e.peak_rate_c_per_kwh,
                off_peak_usage_kwh: e.off_peak_usage_kwh,
                off_peak_rate_cents: e.off_peak_rate_c_per_kwh,
            },
            "demand" => Tariff::Demand {
                usage_kwh: e.usage_kwh,
                rate_cents: e.rate_c_per_kwh,
                peak_demand_kw: e.peak_demand_kw,
                charge_per_kw: e.demand_charge_per_kw,
            },
            _ => Tariff::SingleRate {
                usage_kwh: e.usage_kwh,
                rate_cents: e.rate_c_per_kwh,
            },
        };

        ElectricityBill {
            tariff,
            controlled_load: e.controlled_load.then(|| {
                UsageRate::new(e.controlled_load_usage_kwh, e.controlled_load_rate_c_per_kwh)
            }),
            supply: SupplyCharge::new(e.supply_rate_per_day, e.supply_days),
            solar: e
                .solar
                .then(|| SolarFeedIn::new(e.solar_export_kwh, e.solar_credit_c_per_kwh)),
            concession: e.concession.then_some(e.concession_amount),
            current_bill: e.current_bill,
        }
    }

    /// Builds gas estimator inputs from the scenario.
    pub fn gas_bill(&self) -> GasBill {
        let g = &self.gas;
        GasBill {
            steps: [
                UsageRate::new(g.step1_usage_mj, g.step1_rate_c_per_mj),
                UsageRate::new(g.step2_usage_mj, g.step2_rate_c_per_mj),
                UsageRate::new(g.step3_usage_mj, g.step3_rate_c_per_mj),
            ],
            supply: SupplyCharge::new(g.supply_rate_per_day, g.supply_days),
            concession: g.concession.then_some(g.concession_amount),
            current_bill: g.current_bill,
        }
    }
}
