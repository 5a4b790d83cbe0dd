//! Bill estimator entry point: CLI wiring and scenario-driven estimation.

use std::path::Path;
use std::process;

use energy_bill_calc::config::BillScenario;
use energy_bill_calc::estimator::{LineItem, SavingsReport, Utility};
use energy_bill_calc::io::export::export_csv;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("energy-bill-calc — household energy bill estimator");
    eprintln!();
    eprintln!("Usage: energy-bill-calc [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load bill scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline)");
    eprintln!("  --export-out <path>      Export the itemized breakdown to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after estimation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Prints one utility section: breakdown rows followed by the report.
fn print_section(utility: Utility, items: &[LineItem], report: &SavingsReport) {
    match utility {
        Utility::Electricity => println!("=== Electricity ==="),
        Utility::Gas => println!("=== Gas ==="),
    }
    for item in items {
        println!("  {item}");
    }
    println!("{report}");
    println!();
}

fn main() {
    let cli = parse_args();

    // Load scenario: --scenario takes priority, then --preset, then baseline default
    let scenario = if let Some(ref path) = cli.scenario_path {
        match BillScenario::from_toml_file(Path::new(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match BillScenario::from_preset(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        BillScenario::baseline()
    };

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Estimate both utilities
    let electricity_bill = scenario.electricity_bill();
    let gas_bill = scenario.gas_bill();
    let electricity = match electricity_bill.estimate() {
        Ok(report) => report,
        Err(errs) => {
            for e in &errs {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };
    let gas = match gas_bill.estimate() {
        Ok(report) => report,
        Err(errs) => {
            for e in &errs {
                eprintln!("{e}");
            }
            process::exit(1);
        }
    };

    let electricity_items = electricity_bill.breakdown();
    let gas_items = gas_bill.breakdown();

    print_section(Utility::Electricity, &electricity_items, &electricity);
    print_section(Utility::Gas, &gas_items, &gas);

    if let Some(combined) = SavingsReport::combined(Some(&electricity), Some(&gas)) {
        println!("=== Combined ===");
        println!("{combined}");
    }

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        let mut items = electricity_items;
        items.extend(gas_items);
        if let Err(e) = export_csv(&items, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Breakdown written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = match energy_bill_calc::api::AppState::from_scenario(scenario) {
            Ok(state) => Arc::new(state),
            Err(errs) => {
                for e in &errs {
                    eprintln!("{e}");
                }
                process::exit(1);
            }
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(energy_bill_calc::api::serve(state, addr));
    }
}
