use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{TideStationDetails, TideZoneDetails, Zone};
use crate::zdf::format;

/// Bracketed section names, in the order they appear in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Format version marker, always the first line of the file
    Header,
    Zone,
    TideZone,
    TideStation,
    Options,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Header => "ZONE_DEF_VERSION_3",
            Section::Zone => "ZONE",
            Section::TideZone => "TIDE_ZONE",
            Section::TideStation => "TIDE_STATION",
            Section::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}

/// Values written to the `[OPTIONS]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZdfOptions {
    pub outage: u32,
    pub interval: u32,
}

impl ZdfOptions {
    pub const DEFAULT_OUTAGE: u32 = 600;
    pub const DEFAULT_INTERVAL: u32 = 10;

    pub fn new(outage: u32, interval: u32) -> Self {
        Self { outage, interval }
    }
}

impl Default for ZdfOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTAGE, Self::DEFAULT_INTERVAL)
    }
}

/// All stations of a document, rendered as one `[TIDE_STATION]` section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TideStationBlock {
    stations: Vec<TideStationDetails>,
}

impl TideStationBlock {
    pub fn add_station_details(&mut self, details: TideStationDetails) {
        self.stations.push(details);
    }

    pub fn stations(&self) -> &[TideStationDetails] {
        &self.stations
    }
}

/// All zone/station associations of a document, rendered as one `[TIDE_ZONE]` section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TideZoneBlock {
    tide_zones: Vec<TideZoneDetails>,
}

impl TideZoneBlock {
    pub fn add_tide_zone_details(&mut self, details: TideZoneDetails) {
        self.tide_zones.push(details);
    }

    pub fn tide_zones(&self) -> &[TideZoneDetails] {
        &self.tide_zones
    }
}

/// One renderable section of a zone definition file.
///
/// Blocks borrow their content from the [`Zdf`](crate::zdf::Zdf) that owns it.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    Header,
    Options(&'a ZdfOptions),
    Zone(&'a Zone),
    TideStation(&'a TideStationBlock),
    TideZone(&'a TideZoneBlock),
}

impl Block<'_> {
    pub fn section(&self) -> Section {
        match self {
            Block::Header => Section::Header,
            Block::Options(_) => Section::Options,
            Block::Zone(_) => Section::Zone,
            Block::TideStation(_) => Section::TideStation,
            Block::TideZone(_) => Section::TideZone,
        }
    }

    /// Lines of this section, starting with its bracketed name
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![self.section().to_string()];
        match self {
            Block::Header => {}
            Block::Options(options) => {
                lines.push(format!("Outage, {}", options.outage));
                lines.push(format!("Interval, {}", options.interval));
            }
            Block::Zone(zone) => {
                lines.push(format!("{},{}", zone.name(), zone.number()));
                lines.extend(zone.coords().iter().map(|coord| {
                    format!(
                        "{}, {}",
                        format::format_coordinate(coord.x),
                        format::format_coordinate(coord.y)
                    )
                }));
            }
            Block::TideStation(block) => {
                lines.extend(block.stations().iter().map(TideStationDetails::to_row));
            }
            Block::TideZone(block) => {
                lines.extend(block.tide_zones().iter().map(TideZoneDetails::to_row));
            }
        }
        lines
    }
}
