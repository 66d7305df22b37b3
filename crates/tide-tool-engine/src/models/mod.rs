pub mod tide_station;
pub mod tide_zone;
pub mod zone;

pub use tide_station::{StationId, TideStationDetails};
pub use tide_zone::TideZoneDetails;
pub use zone::{Zone, ZoneId};
