use std::fmt;

use crate::geojson::FeatureCollection;
use crate::geometry::GeometryError;
use crate::models::{StationId, TideStationDetails, TideZoneDetails, Zone, ZoneId};
use crate::zdf::block::{Block, TideStationBlock, TideZoneBlock, ZdfOptions};

/// Which collection a rejected feature came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Zone,
    Station,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Zone => write!(f, "zone"),
            FeatureKind::Station => write!(f, "station"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ZdfError {
    #[error("Invalid {kind} feature at index {index}: {source}")]
    InvalidFeature {
        kind: FeatureKind,
        index: usize,
        source: GeometryError,
    },
    #[error("Containment test failed for {zone}: {source}")]
    Containment { zone: ZoneId, source: GeometryError },
}

/// How far a document has been populated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Empty,
    ZonesLoaded,
    StationsLoaded,
    /// Tide zones reflect the current zones and stations
    Derived,
}

/// In-memory zone definition file.
///
/// Built in three steps: populate zones, populate stations, then derive the
/// tide zones from which station lies in which zone. `render()` can be called
/// at any point and reflects whatever has been populated so far.
///
/// ```rust
/// # use tide_tool_engine::{FeatureCollection, Feature, Geometry, Zdf};
/// let zones = FeatureCollection::new(vec![Feature::new(Geometry::polygon(&[
///     (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0),
/// ]))]);
/// let stations = FeatureCollection::new(vec![Feature::new(Geometry::point(0.5, 0.5))]);
///
/// let mut zdf = Zdf::new();
/// zdf.populate_zones(&zones).unwrap();
/// zdf.populate_stations(&stations).unwrap();
/// assert_eq!(zdf.derive_tide_zones().unwrap(), 1);
///
/// let text = zdf.to_text();
/// assert!(text.starts_with("[ZONE_DEF_VERSION_3]\n\n[ZONE]\nzone001,4\n"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zdf {
    options: ZdfOptions,
    zones: Vec<Zone>,
    tide_zones: Option<TideZoneBlock>,
    stations: Option<TideStationBlock>,
    /// Last sequence numbers handed out; names never depend on collection sizes
    zone_counter: u32,
    station_counter: u32,
    derived: bool,
}

impl Zdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document writing `options` into its `[OPTIONS]` section
    pub fn with_options(options: ZdfOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ZdfOptions {
        &self.options
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn stations(&self) -> &[TideStationDetails] {
        self.stations
            .as_ref()
            .map(TideStationBlock::stations)
            .unwrap_or_default()
    }

    pub fn tide_zones(&self) -> &[TideZoneDetails] {
        self.tide_zones
            .as_ref()
            .map(TideZoneBlock::tide_zones)
            .unwrap_or_default()
    }

    pub fn state(&self) -> DocumentState {
        if self.derived {
            DocumentState::Derived
        } else if self.stations.is_some() {
            DocumentState::StationsLoaded
        } else if !self.zones.is_empty() {
            DocumentState::ZonesLoaded
        } else {
            DocumentState::Empty
        }
    }

    /// Append one zone per polygon feature, named `zone001`, `zone002`, ...
    /// in input order.
    ///
    /// Every feature is validated before any is added: on error the document
    /// is left as it was. Only the outer ring of each polygon is kept.
    pub fn populate_zones(&mut self, features: &FeatureCollection) -> Result<usize, ZdfError> {
        let zones = features
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let id = ZoneId(self.zone_counter + index as u32 + 1);
                feature
                    .geometry()
                    .and_then(|geometry| Zone::from_geometry(id, geometry))
                    .map_err(|source| ZdfError::InvalidFeature {
                        kind: FeatureKind::Zone,
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let added = zones.len();
        if added > 0 {
            self.zone_counter += added as u32;
            self.zones.extend(zones);
            self.mark_populated();
        }
        log::debug!("populated {added} zones ({} total)", self.zones.len());
        Ok(added)
    }

    /// Append one station per point feature, named `tidestation001`, ... in
    /// input order, all collected in a single `[TIDE_STATION]` block.
    ///
    /// Every feature is validated before any is added: on error the document
    /// is left as it was.
    pub fn populate_stations(&mut self, features: &FeatureCollection) -> Result<usize, ZdfError> {
        let stations = features
            .features
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let id = StationId(self.station_counter + index as u32 + 1);
                feature
                    .geometry()
                    .and_then(|geometry| TideStationDetails::from_geometry(id, geometry))
                    .map_err(|source| ZdfError::InvalidFeature {
                        kind: FeatureKind::Station,
                        index,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let added = stations.len();
        if added > 0 {
            self.station_counter += added as u32;
            let block = self.stations.get_or_insert_with(TideStationBlock::default);
            for details in stations {
                block.add_station_details(details);
            }
            self.mark_populated();
        }
        log::debug!("populated {added} tide stations ({} total)", self.stations().len());
        Ok(added)
    }

    /// Recompute the tide zones: one per (zone, station) pair where the
    /// station lies inside or on the boundary of the zone, zone-major.
    ///
    /// Previous tide zones are discarded first, so calling this again yields
    /// the same result rather than duplicates. Returns the number of tide zones.
    pub fn derive_tide_zones(&mut self) -> Result<usize, ZdfError> {
        let mut block = TideZoneBlock::default();
        for zone in &self.zones {
            for station in self.stations() {
                let inside = zone
                    .contains(station.position())
                    .map_err(|source| ZdfError::Containment {
                        zone: zone.id(),
                        source,
                    })?;
                if inside {
                    block.add_tide_zone_details(TideZoneDetails::new(zone.id(), station.id()));
                }
            }
        }

        let count = block.tide_zones().len();
        self.tide_zones = (count > 0).then_some(block);
        self.derived = true;
        log::debug!(
            "derived {count} tide zones from {} zones and {} stations",
            self.zones.len(),
            self.stations().len()
        );
        Ok(count)
    }

    /// Blocks in file order: header, zones, tide zones, stations, options
    pub fn blocks(&self) -> Vec<Block<'_>> {
        let mut blocks = vec![Block::Header];
        blocks.extend(self.zones.iter().map(Block::Zone));
        blocks.extend(self.tide_zones.as_ref().map(Block::TideZone));
        blocks.extend(self.stations.as_ref().map(Block::TideStation));
        blocks.push(Block::Options(&self.options));
        blocks
    }

    /// Every line of the file, each block followed by one blank line
    pub fn render(&self) -> Vec<String> {
        self.blocks()
            .iter()
            .flat_map(|block| {
                let mut lines = block.render();
                lines.push(String::new());
                lines
            })
            .collect()
    }

    /// The file contents: rendered lines joined with `\n`
    pub fn to_text(&self) -> String {
        self.render().join("\n")
    }

    fn mark_populated(&mut self) {
        if self.derived {
            log::warn!("document populated after tide zone derivation; derive again to refresh");
            self.derived = false;
        }
    }
}

impl fmt::Display for Zdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
