//! The subset of GeoJSON (RFC 7946) the zone definition builder reads.
//!
//! Feature properties are kept as raw JSON and otherwise ignored.

use serde::Deserialize;

use crate::geometry::{Coord, GeometryError};

/// A GeoJSON position: `[x, y]` or `[x, y, z]`. Anything past `y` is ignored.
pub type Position = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            properties: None,
        }
    }

    /// The feature's geometry, or an error for a `null` geometry.
    pub fn geometry(&self) -> Result<&Geometry, GeometryError> {
        self.geometry.as_ref().ok_or(GeometryError::MissingGeometry)
    }
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point {
            coordinates: vec![x, y],
        }
    }

    /// A polygon with a single outer ring.
    pub fn polygon(ring: &[(f64, f64)]) -> Self {
        Geometry::Polygon {
            coordinates: vec![ring.iter().map(|&(x, y)| vec![x, y]).collect()],
        }
    }

    /// The GeoJSON `type` member of this geometry.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    pub fn as_point(&self) -> Result<Coord, GeometryError> {
        match self {
            Geometry::Point { coordinates } => to_coord(coordinates),
            other => Err(GeometryError::WrongType {
                expected: "Point",
                found: other.type_name().to_string(),
            }),
        }
    }

    /// The first (outer) ring of a polygon, exactly as supplied.
    ///
    /// Interior rings (holes) are discarded. A repeated closing vertex is kept
    /// so the ring round-trips into the output unchanged.
    pub fn outer_ring(&self) -> Result<Vec<Coord>, GeometryError> {
        match self {
            Geometry::Polygon { coordinates } => {
                let ring = coordinates.first().ok_or(GeometryError::EmptyRing)?;
                if ring.is_empty() {
                    return Err(GeometryError::EmptyRing);
                }
                ring.iter().map(|position| to_coord(position)).collect()
            }
            other => Err(GeometryError::WrongType {
                expected: "Polygon",
                found: other.type_name().to_string(),
            }),
        }
    }
}

fn to_coord(position: &[f64]) -> Result<Coord, GeometryError> {
    match position {
        [x, y, ..] => Ok(Coord::new(*x, *y)),
        _ => Err(GeometryError::InvalidPosition {
            len: position.len(),
        }),
    }
}
