//! Shared builders for unit tests

use crate::geojson::{Feature, FeatureCollection, Geometry};

/// Axis-aligned square ring with its lower-left corner at (x, y)
pub fn square(x: f64, y: f64, size: f64) -> Vec<(f64, f64)> {
    vec![
        (x, y),
        (x, y + size),
        (x + size, y + size),
        (x + size, y),
    ]
}

pub fn zones(rings: &[Vec<(f64, f64)>]) -> FeatureCollection {
    FeatureCollection::new(
        rings
            .iter()
            .map(|ring| Feature::new(Geometry::polygon(ring)))
            .collect(),
    )
}

/// Point features from (longitude, latitude) pairs
pub fn stations(points: &[(f64, f64)]) -> FeatureCollection {
    FeatureCollection::new(
        points
            .iter()
            .map(|&(x, y)| Feature::new(Geometry::point(x, y)))
            .collect(),
    )
}

pub fn create_test_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

pub fn create_test_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
