// Criterion benchmarks for Geoinvite

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geoinvite::core::{customers_within_radius, haversine_distance, DUBLIN_OFFICE};
use geoinvite::models::{Coordinate, Customer};

fn create_customer(id: usize, lat: f64, lon: f64) -> Customer {
    Customer {
        user_id: id as i64,
        name: format!("Customer {}", id),
        latitude: lat,
        longitude: lon,
    }
}

fn create_customers(count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| {
            // Spread customers on a rough grid around Ireland
            let lat = 51.5 + (i % 40) as f64 * 0.08;
            let lon = -10.5 + (i / 40 % 50) as f64 * 0.09;
            create_customer(i, lat, lon)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(DUBLIN_OFFICE),
                black_box(Coordinate::new(53.4692815, -9.436036)),
            )
        })
    });
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("customers_within_radius");

    for count in [100, 1_000, 10_000] {
        let customers = create_customers(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &customers,
            |b, customers| {
                b.iter(|| {
                    customers_within_radius(black_box(customers), DUBLIN_OFFICE, black_box(100.0))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_haversine_distance, bench_filter_pipeline);
criterion_main!(benches);
