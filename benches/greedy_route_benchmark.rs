use bin_route_planner::{
    algorithms::RoutePlanner,
    models::{CollectionPoint, Location},
    utils::simulate::simulate_fleet,
    GreedyRoutePlanner,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_greedy_route(c: &mut Criterion) {
    let depot = Location::default_depot();
    let planner = GreedyRoutePlanner::with_depot(depot);

    // Dashboard-sized fleet
    let fleet = simulate_fleet(depot, 45, 2024);
    c.bench_function("greedy_plan_45_bins", |b| {
        b.iter(|| planner.plan(black_box(&fleet)))
    });

    // City-wide fleet, well past the intended scale
    let city = simulate_fleet(depot, 1000, 2024);
    c.bench_function("greedy_plan_1000_bins", |b| {
        b.iter(|| planner.plan(black_box(&city)))
    });

    // Twelve districts planned in parallel
    let districts: Vec<Vec<CollectionPoint>> =
        (0..12).map(|seed| simulate_fleet(depot, 45, seed)).collect();
    c.bench_function("greedy_plan_many_12_districts", |b| {
        b.iter(|| planner.plan_many(black_box(&districts)))
    });
}

criterion_group!(benches, benchmark_greedy_route);
criterion_main!(benches);
