use airglobe::{
    AirportIndex, FlightQuery, Globe, GlobeConfig, PickError, ReaderOptions, ScreenClick,
    SpinAngle,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use std::{env, fs, thread};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <airport-codes.csv> [config.json]", args[0]);
        std::process::exit(1);
    }

    let config: GlobeConfig = match args.get(2) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GlobeConfig::default(),
    };

    let mut warnings = Vec::new();
    let index = AirportIndex::from_path(&args[1], ReaderOptions::default(), &mut warnings)?;
    let globe = Globe::new(config, index);

    // Animation driver: publishes the spin angle while the globe turns
    let angle = Arc::new(SpinAngle::default());
    let running = Arc::new(AtomicBool::new(true));
    let driver = {
        let angle = Arc::clone(&angle);
        let running = Arc::clone(&running);
        let spin = globe.config().spin();
        thread::spawn(move || {
            let start = Instant::now();
            while running.load(Ordering::Relaxed) {
                angle.store(spin.angle_at(start.elapsed()));
                thread::sleep(Duration::from_millis(16));
            }
        })
    };

    let (width, height) = (globe.config().scene_width, globe.config().scene_height);
    let clicks = [
        (width / 2.0, height / 2.0),
        (width * 0.4, height * 0.35),
        (width * 0.6, height * 0.7),
        (0.0, 0.0),
    ];

    println!("=== Picks ===");
    for (x, y) in clicks.into_iter().cycle().take(12) {
        thread::sleep(Duration::from_millis(500));

        let rotation = angle.load();
        match globe.pick_airport(ScreenClick::at(x, y), rotation) {
            Ok(pick) => {
                println!(
                    "({x:6.1}, {y:6.1}) @ {rotation:6.2}° -> {:.3}, {:.3}: {}",
                    pick.geo.latitude, pick.geo.longitude, pick.airport
                );
                let query = FlightQuery::arrivals("<access-key>", pick.airport);
                println!("    arrivals: {}", query.url());
            }
            Err(PickError::NoIntersection) => {
                println!("({x:6.1}, {y:6.1}) @ {rotation:6.2}° -> off the globe");
            }
            Err(err) => return Err(err.into()),
        }
    }

    running.store(false, Ordering::Relaxed);
    driver.join().map_err(|_| "spin driver panicked")?;

    Ok(())
}
