use std::fmt;

use crate::geojson::Geometry;
use crate::geometry::{Coord, GeometryError};
use crate::zdf::format::{self, STATION_COORD_DIGITS, station_params};

/// Sequence number of a tide station within its document, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tidestation{:03}", self.0)
    }
}

/// A single tide station listed in a `[TIDE_STATION]` block
#[derive(Debug, Clone, PartialEq)]
pub struct TideStationDetails {
    id: StationId,
    position: Coord,
}

impl TideStationDetails {
    pub fn new(id: StationId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            position: Coord::new(longitude, latitude),
        }
    }

    /// Create a station from a point geometry (longitude, latitude order)
    pub fn from_geometry(id: StationId, geometry: &Geometry) -> Result<Self, GeometryError> {
        let position = geometry.as_point()?;
        Ok(Self { id, position })
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    /// `tidestation001`, `tidestation002`, ...
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Data file the prediction system reads for this station
    pub fn filename(&self) -> String {
        format!("{}.tid", self.id)
    }

    pub fn latitude(&self) -> f64 {
        self.position.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude()
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// `<name>,<latitude>,<longitude>,<p1>,<p2>,<filename>`
    pub fn to_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.name(),
            format::format_significant(self.latitude(), STATION_COORD_DIGITS),
            format::format_significant(self.longitude(), STATION_COORD_DIGITS),
            station_params::P1,
            station_params::P2,
            self.filename()
        )
    }
}
