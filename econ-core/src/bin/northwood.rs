//! Narrated walkthrough of a single settlement's iron ore market.
//!
//! Usage: `northwood [CONFIG_JSON]`. Without a config the builtin catalog and
//! pricing are used.

use std::error::Error;
use std::path::PathBuf;

use econ_core::{EconomyConfig, IRON_ORE, Settlement};

/// Safety cap on the fill-to-target loop
const MAX_FILL_TICKS: u32 = 20;
const SURPLUS_TICKS: u32 = 5;

fn report(settlement: &Settlement, label: &str) {
    let quantity = settlement.resource_quantity(IRON_ORE);
    match settlement.price(IRON_ORE) {
        Some(price) => println!("  {IRON_ORE} quantity: {quantity}, price ({label}): {price:.2}"),
        None => println!("  {IRON_ORE} quantity: {quantity}, unpriced ({label})"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => EconomyConfig::from_file(&PathBuf::from(path))?,
        None => EconomyConfig::builtin(),
    };

    let mut settlement = Settlement::from_config("Northwood", &config);
    println!("Created settlement: {}", settlement.name());

    let params = settlement.pricing.get(IRON_ORE).copied();
    match params {
        Some(p) => println!("Pricing parameters for {IRON_ORE}: {p:?}"),
        None => println!("{IRON_ORE} has no pricing parameters"),
    }

    settlement.set_production_rate(IRON_ORE, 10.0);
    println!("Set {IRON_ORE} production rate to 10.");
    report(&settlement, "initial");

    let target = params.map_or(100.0, |p| p.target_quantity);
    println!("Producing until {IRON_ORE} reaches {target}...");
    let mut cycles = 0;
    while settlement.resource_quantity(IRON_ORE) < target && cycles < MAX_FILL_TICKS {
        settlement.advance_production();
        cycles += 1;
    }
    println!("After {cycles} production cycles:");
    report(&settlement, "at target");

    println!("Producing {SURPLUS_TICKS} more ticks (surplus)...");
    for _ in 0..SURPLUS_TICKS {
        settlement.advance_production();
    }
    report(&settlement, "surplus");

    println!("Setting quantity to 10 (scarcity)...");
    settlement.resources.set(IRON_ORE, 10.0);
    report(&settlement, "scarce");

    println!("Setting quantity to 500 (extreme surplus)...");
    settlement.resources.set(IRON_ORE, 500.0);
    report(&settlement, "extreme surplus");

    Ok(())
}
