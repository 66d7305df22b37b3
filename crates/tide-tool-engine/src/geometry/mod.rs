//! Planar geometry over longitude/latitude pairs.
//!
//! Only what zone/station association needs: a coordinate type and a
//! boundary-inclusive point-in-polygon test for simple, hole-free rings.

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("expected {expected} geometry, found {found}")]
    WrongType {
        expected: &'static str,
        found: String,
    },
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("polygon has an empty outer ring")]
    EmptyRing,
    #[error("polygon ring has {vertices} distinct vertices, at least 3 are required")]
    DegeneratePolygon { vertices: usize },
    #[error("position has {len} values, at least 2 (x, y) are required")]
    InvalidPosition { len: usize },
}

/// A single (x, y) pair. For geographic data x is longitude and y latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Strip the repeated closing vertex, if the ring carries one.
///
/// Rings are implicitly closed, so `[a, b, c, a]` and `[a, b, c]` describe
/// the same polygon.
pub fn open_ring(ring: &[Coord]) -> &[Coord] {
    match ring {
        [first, rest @ .., last] if !rest.is_empty() && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

/// Check that a ring describes a polygon the containment test accepts.
pub fn validate_ring(ring: &[Coord]) -> Result<(), GeometryError> {
    if ring.is_empty() {
        return Err(GeometryError::EmptyRing);
    }
    let vertices = distinct_vertices(ring, 3);
    if vertices < 3 {
        return Err(GeometryError::DegeneratePolygon { vertices });
    }
    Ok(())
}

/// Number of distinct vertices in `ring`, counting no further than `limit`.
fn distinct_vertices(ring: &[Coord], limit: usize) -> usize {
    let mut seen: Vec<Coord> = Vec::with_capacity(limit);
    for coord in ring {
        if !seen.contains(coord) {
            seen.push(*coord);
            if seen.len() == limit {
                break;
            }
        }
    }
    seen.len()
}

/// Boundary-inclusive point-in-polygon test.
///
/// Returns `true` when `point` lies strictly inside `ring` or exactly on one
/// of its edges or vertices. The ring may or may not repeat its first vertex
/// at the end.
///
/// Rings with fewer than three distinct vertices are rejected with
/// [`GeometryError::DegeneratePolygon`] rather than reported as "not contained".
pub fn contains(point: Coord, ring: &[Coord]) -> Result<bool, GeometryError> {
    validate_ring(ring)?;
    let ring = open_ring(ring);

    if edges(ring).any(|(a, b)| on_segment(point, a, b)) {
        return Ok(true);
    }

    // Crossing number: count edges straddling the horizontal ray cast to +x.
    // Horizontal edges never straddle, so the division is always defined.
    let mut inside = false;
    for (a, b) in edges(ring) {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }
    Ok(inside)
}

/// Edges of an open ring, including the closing edge from last back to first.
fn edges(ring: &[Coord]) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

fn on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}
