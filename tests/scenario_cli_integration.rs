//! Integration tests driving the CLI binary against scenario files.

use std::fs;
use std::process::Command;

/// Savings figures parsed from one utility section of the CLI output.
#[derive(Debug)]
struct SectionReport {
    new_bill: f64,
    monthly_savings: f64,
}

#[test]
fn baseline_scenario_reports_expected_figures() {
    let stdout = run_ok(&["--scenario", "scenarios/baseline.toml"]);

    let electricity = parse_section(&stdout, "Electricity");
    // 450 kWh at 28 c/kWh plus $1.10/day over 30 days
    assert!((electricity.new_bill - 159.0).abs() < 0.005);
    assert!((electricity.monthly_savings - 21.0).abs() < 0.005);

    let gas = parse_section(&stdout, "Gas");
    // 67.20 + 27.90 + 22.50 against a $95.00 current bill
    assert!((gas.new_bill - 117.6).abs() < 0.005);
    assert!((gas.monthly_savings + 22.6).abs() < 0.005);

    let combined = parse_section(&stdout, "Combined");
    assert!((combined.monthly_savings + 1.6).abs() < 0.005);
}

#[test]
fn scenario_files_match_their_presets() {
    for name in ["baseline", "solar_household", "winter_gas"] {
        let from_file = run_ok(&["--scenario", &format!("scenarios/{name}.toml")]);
        let from_preset = run_ok(&["--preset", name]);
        assert_eq!(
            from_file, from_preset,
            "scenario file and preset \"{name}\" should print identical reports"
        );
    }
}

#[test]
fn presets_produce_distinct_estimates() {
    let baseline = parse_section(&run_ok(&["--preset", "baseline"]), "Electricity");
    let solar = parse_section(&run_ok(&["--preset", "solar_household"]), "Electricity");
    let winter = parse_section(&run_ok(&["--preset", "winter_gas"]), "Electricity");

    assert!(
        (baseline.new_bill - solar.new_bill).abs() > 1.0,
        "expected baseline and solar_household bills to differ: {:.2} vs {:.2}",
        baseline.new_bill,
        solar.new_bill
    );
    assert!(
        (solar.new_bill - winter.new_bill).abs() > 1.0,
        "expected solar_household and winter_gas bills to differ: {:.2} vs {:.2}",
        solar.new_bill,
        winter.new_bill
    );
}

#[test]
fn default_run_uses_baseline() {
    let default_out = run_ok(&[]);
    let baseline_out = run_ok(&["--preset", "baseline"]);
    assert_eq!(default_out, baseline_out);
}

#[test]
fn unknown_preset_fails_with_message() {
    let output = Command::new(env!("CARGO_BIN_EXE_energy-bill-calc"))
        .args(["--preset", "nonexistent"])
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"), "stderr: {stderr}");
}

#[test]
fn negative_field_in_scenario_fails_validation() {
    let path = std::env::temp_dir().join("energy_bill_calc_negative_scenario.toml");
    fs::write(
        &path,
        r#"
[electricity]
tariff = "single_rate"
usage_kwh = -450.0
"#,
    )
    .expect("temp scenario should write");

    let output = Command::new(env!("CARGO_BIN_EXE_energy-bill-calc"))
        .args(["--scenario", path.to_str().expect("temp path is UTF-8")])
        .output()
        .expect("binary should run");
    fs::remove_file(&path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot be negative"),
        "expected a validation message, got: {stderr}"
    );
}

#[test]
fn export_writes_parseable_csv() {
    let path = std::env::temp_dir().join("energy_bill_calc_breakdown.csv");
    run_ok(&[
        "--scenario",
        "scenarios/baseline.toml",
        "--export-out",
        path.to_str().expect("temp path is UTF-8"),
    ]);

    let csv = fs::read_to_string(&path).expect("exported CSV should exist");
    fs::remove_file(&path).ok();

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("utility,component,quantity,rate,cost_dollars")
    );
    // electricity: energy + supply; gas: three steps + supply
    assert_eq!(lines.count(), 6);
}

fn run_ok(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_energy-bill-calc"))
        .args(args)
        .output()
        .expect("energy-bill-calc process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}

/// Parses the `New bill` and `Monthly savings` lines of one `=== name ===`
/// section.
fn parse_section(stdout: &str, name: &str) -> SectionReport {
    let header = format!("=== {name} ===");
    let mut in_section = false;
    let mut new_bill = None;
    let mut monthly_savings = None;

    for line in stdout.lines() {
        if line.starts_with("=== ") {
            in_section = line == header;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some(rest) = line.trim().strip_prefix("New bill:") {
            new_bill = Some(parse_dollars(rest, line));
        }
        if let Some(rest) = line.trim().strip_prefix("Monthly savings:") {
            monthly_savings = Some(parse_dollars(rest, line));
        }
    }

    SectionReport {
        new_bill: new_bill.unwrap_or_else(|| panic!("missing New bill in section {name}: {stdout}")),
        monthly_savings: monthly_savings
            .unwrap_or_else(|| panic!("missing Monthly savings in section {name}: {stdout}")),
    }
}

fn parse_dollars(raw: &str, line: &str) -> f64 {
    let numeric = raw.trim().trim_start_matches('$');
    numeric
        .parse::<f64>()
        .unwrap_or_else(|_| panic!("failed parsing `{numeric}` from line `{line}`"))
}
