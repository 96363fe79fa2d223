use anyhow::{bail, Result};
use std::env;

use device_model::{logging, run_equality_demo, DeviceCatalog, VERSION};

const USAGE: &str = "usage: device-demo [demo|details|catalog|help]";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("demo");

    match mode {
        "demo" => run_demo()?,
        "details" => run_details(),
        "catalog" => run_catalog(),
        "help" | "--help" | "-h" => println!("device-demo {}\n{}", VERSION, USAGE),
        other => {
            tracing::warn!(mode = other, "unknown mode");
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Equality checks, grouped per device kind
fn run_demo() -> Result<()> {
    let report = run_equality_demo();
    print!("{}", report);

    if !report.all_passed() {
        bail!("{} equality check(s) failed", report.failures());
    }
    Ok(())
}

/// Every demonstration device rendered through the shared contract
fn run_details() {
    let catalog = DeviceCatalog::with_demo_devices();
    for entry in catalog.all() {
        entry.device.print_details();
    }
}

/// Value duplicates among the demonstration devices
fn run_catalog() {
    let catalog = DeviceCatalog::with_demo_devices();

    println!("Registered devices: {}", catalog.count());
    println!("Distinct by value: {}", catalog.distinct_count());
    println!();

    for pair in catalog.duplicates() {
        let (Some(first), Some(second)) =
            (catalog.find_by_id(pair.first), catalog.find_by_id(pair.second))
        else {
            continue;
        };
        println!("{} {} equals {}", first.device_type(), pair.first, pair.second);
        print!("{}", first);
        print!("{}", second);
        println!();
    }
}
