//! Core domain types for tilepath.
//!
//! This module contains the read-only descriptors the resolver consumes:
//! - `EraList` - a totally ordered list of era names
//! - `UnitProfile` / `CivProfile` - what a unit and its owner look like to the resolver
//! - `RoadKind` - enumerable road-surface kinds

mod era;
mod profile;
mod road;

pub use era::EraList;
pub use profile::{CivProfile, UnitProfile};
pub use road::RoadKind;
