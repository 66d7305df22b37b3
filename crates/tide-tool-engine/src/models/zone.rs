use std::fmt;

use crate::geojson::Geometry;
use crate::geometry::{self, Coord, GeometryError};

/// Sequence number of a zone within its document, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone{:03}", self.0)
    }
}

/// A named simple polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: ZoneId,
    coords: Vec<Coord>,
}

impl Zone {
    /// Create a zone from an outer ring, keeping the ring exactly as given
    pub fn new(id: ZoneId, coords: Vec<Coord>) -> Result<Self, GeometryError> {
        geometry::validate_ring(&coords)?;
        Ok(Self { id, coords })
    }

    /// Create a zone from the outer ring of a polygon geometry
    pub fn from_geometry(id: ZoneId, geometry: &Geometry) -> Result<Self, GeometryError> {
        Self::new(id, geometry.outer_ring()?)
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// `zone001`, `zone002`, ...
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Vertex count of the ring as supplied, closing vertex included
    pub fn number(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Whether `point` lies inside the zone or on its boundary
    pub fn contains(&self, point: Coord) -> Result<bool, GeometryError> {
        geometry::contains(point, &self.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_zone_names_are_zero_padded() {
        assert_eq!(ZoneId(1).to_string(), "zone001");
        assert_eq!(ZoneId(42).to_string(), "zone042");
        assert_eq!(ZoneId(1000).to_string(), "zone1000");
    }

    #[test]
    fn test_from_polygon_keeps_ring_as_supplied() {
        let geometry = Geometry::polygon(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);

        let zone = Zone::from_geometry(ZoneId(3), &geometry).unwrap();

        assert_eq!(zone.name(), "zone003");
        assert_eq!(zone.number(), 5);
        assert_eq!(zone.coords().first(), zone.coords().last());
    }

    #[rstest]
    #[case(vec![(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)], 2)]
    #[case(vec![(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 0.0)], 2)]
    #[case(vec![(3.0, 3.0), (3.0, 3.0), (3.0, 3.0), (3.0, 3.0)], 1)]
    fn test_degenerate_ring_rejected(#[case] ring: Vec<(f64, f64)>, #[case] vertices: usize) {
        let result = Zone::from_geometry(ZoneId(1), &Geometry::polygon(&ring));

        assert_eq!(result, Err(GeometryError::DegeneratePolygon { vertices }));
    }

    #[test]
    fn test_point_geometry_rejected() {
        let result = Zone::from_geometry(ZoneId(1), &Geometry::point(0.0, 0.0));
        assert!(matches!(result, Err(GeometryError::WrongType { .. })));
    }
}
