//! The zone definition file: its sections, their text form, and the
//! document that assembles them.

pub mod block;
pub mod document;
pub mod format;

pub use block::{Block, Section, TideStationBlock, TideZoneBlock, ZdfOptions};
pub use document::{DocumentState, FeatureKind, Zdf, ZdfError};
