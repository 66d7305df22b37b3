pub mod geojson;
pub mod geometry;
pub mod io;
pub mod models;
pub mod zdf;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use geojson::{Feature, FeatureCollection, Geometry};
pub use geometry::{Coord, GeometryError};
pub use io::*;
pub use models::*;
pub use zdf::{Block, DocumentState, FeatureKind, Section, Zdf, ZdfError, ZdfOptions};
