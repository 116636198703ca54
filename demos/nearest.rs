use airglobe::{AirportIndex, GeoPoint, ReaderOptions};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <airport-codes.csv> <latitude> <longitude>", args[0]);
        std::process::exit(1);
    }

    let target = GeoPoint::new(args[2].parse()?, args[3].parse()?);

    let mut warnings = Vec::new();
    let index = AirportIndex::from_path(&args[1], ReaderOptions::default(), &mut warnings)?;

    println!("=== Airport Dataset ===");
    println!("Airports: {}", index.len());
    println!("Skipped rows: {}", warnings.len());

    match index.nearest(target) {
        Some(airport) => println!("\nNearest to {target:?}:\n  {airport}"),
        None => println!("\nNo airports loaded"),
    }

    Ok(())
}
