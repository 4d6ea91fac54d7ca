use bin_route_planner::utils::feed::load_feed;
use bin_route_planner::utils::simulate::simulate_fleet;
use bin_route_planner::{GreedyRoutePlanner, Location, PlannerConfig, RoutePlanner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Seed used for the simulated fleet when `BIN_ROUTE_SEED` is unset
const DEFAULT_SEED: u64 = 2024;

/// Size of the simulated fleet
const SIMULATED_BINS: usize = 45;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let depot = std::env::var("BIN_ROUTE_DEPOT")
        .ok()
        .and_then(|value| parse_depot(&value))
        .unwrap_or_else(Location::default_depot);
    let config = PlannerConfig::default().with_depot(depot).with_validation(true);
    let planner = GreedyRoutePlanner::new(config);

    // Feed file from the first argument, otherwise a simulated fleet
    let points = match std::env::args().nth(1) {
        Some(path) => match load_feed(&path) {
            Ok(points) => {
                info!(path = %path, bins = points.len(), "loaded sensor feed");
                points
            }
            Err(e) => {
                eprintln!("Error loading feed {}: {}", path, e);
                eprintln!("Expected JSON of the form {{\"sensors\": [{{\"id\", \"lat\", \"lng\", \"fillLevel\", \"odor\", \"status\"}}]}}");
                return;
            }
        },
        None => {
            let seed = std::env::var("BIN_ROUTE_SEED")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_SEED);
            info!(seed, bins = SIMULATED_BINS, "no feed given, simulating fleet");
            simulate_fleet(planner.depot(), SIMULATED_BINS, seed)
        }
    };

    println!(
        "Depot at ({:.4}, {:.4}), {} bins reporting",
        depot.lat,
        depot.lng,
        points.len()
    );

    let start_time = std::time::Instant::now();
    let plan = match planner.run(&points) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Cannot plan route: {}", e);
            return;
        }
    };
    let elapsed = start_time.elapsed();

    println!("Collection route (planned in {:.2?}):", elapsed);
    println!("------------------------------------------");

    if plan.is_empty() {
        println!("{}", plan);
    } else {
        let legs = plan.legs(depot);
        for (i, (point, leg)) in plan.route.iter().zip(&legs).enumerate() {
            println!(
                "  {:>2}. {} fill {:>3}% odor {:>2} {:<8} +{:.2} km",
                i + 1,
                point.id,
                point.fill_level,
                point.odor_index,
                point.urgency_state,
                leg
            );
        }
        if let Some(last_leg) = legs.last() {
            println!("      back to depot            +{:.2} km", last_leg);
        }
        println!("Summary: {}", plan);
    }

    match serde_json::to_string_pretty(&plan) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!(error = %e, "could not serialize plan"),
    }
}

/// Parses `lat,lng`
fn parse_depot(value: &str) -> Option<Location> {
    let (lat, lng) = value.split_once(',')?;
    let depot = Location::new(lat.trim().parse().ok()?, lng.trim().parse().ok()?);
    if depot.is_finite() {
        Some(depot)
    } else {
        warn!(value, "ignoring non-finite BIN_ROUTE_DEPOT");
        None
    }
}
