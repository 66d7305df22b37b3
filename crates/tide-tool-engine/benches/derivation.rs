use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tide_tool_engine::{Feature, FeatureCollection, Geometry, Zdf};

/// A grid of `side * side` square zones, each `vertices` points around
fn zone_grid(side: usize, vertices: usize) -> FeatureCollection {
    let mut features = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let (cx, cy) = (col as f64 + 0.5, row as f64 + 0.5);
            let ring: Vec<_> = (0..vertices)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / vertices as f64;
                    (cx + 0.45 * angle.cos(), cy + 0.45 * angle.sin())
                })
                .collect();
            features.push(Feature::new(Geometry::polygon(&ring)));
        }
    }
    FeatureCollection::new(features)
}

fn station_grid(side: usize, per_cell: usize) -> FeatureCollection {
    let step = 1.0 / per_cell as f64;
    let n = side * per_cell;
    let features = (0..n * n)
        .map(|i| {
            let (x, y) = ((i % n) as f64 * step, (i / n) as f64 * step);
            Feature::new(Geometry::point(x, y))
        })
        .collect();
    FeatureCollection::new(features)
}

fn bench_derive_tide_zones(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_tide_zones");
    group.sample_size(20);

    for side in [5, 10, 20] {
        let mut zdf = Zdf::new();
        zdf.populate_zones(&zone_grid(side, 32)).unwrap();
        zdf.populate_stations(&station_grid(side, 2)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let count = zdf.derive_tide_zones().unwrap();
                black_box(count);
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let mut zdf = Zdf::new();
    zdf.populate_zones(&zone_grid(10, 32)).unwrap();
    zdf.populate_stations(&station_grid(10, 2)).unwrap();
    zdf.derive_tide_zones().unwrap();

    group.bench_function("to_text", |b| {
        b.iter(|| {
            let text = zdf.to_text();
            black_box(text);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive_tide_zones, bench_render);
criterion_main!(benches);
