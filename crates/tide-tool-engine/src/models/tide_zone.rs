use crate::models::{StationId, ZoneId};
use crate::zdf::format::tide_zone_params;

/// Pairs a zone with a tide station lying inside it.
///
/// Holds the identities of both sides rather than the entities themselves;
/// the zone and station stay owned by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TideZoneDetails {
    pub zone: ZoneId,
    pub station: StationId,
}

impl TideZoneDetails {
    pub fn new(zone: ZoneId, station: StationId) -> Self {
        Self { zone, station }
    }

    /// `<zoneName>,<stationName>,<p1>,<p2>,<p3>,<p4>,<p5>`
    pub fn to_row(&self) -> String {
        format!(
            "{},{},{}",
            self.zone,
            self.station,
            tide_zone_params::ALL.join(",")
        )
    }
}
