//! Read-only view of the rail network.
//!
//! The locator only ever asks two questions of the network: "what track is
//! this?" and "which track sides can be reached by crossing the branches at
//! this end?". [`RailGraph`] captures exactly that, so searches can run
//! against the in-memory [`RailNetwork`] or a test double.

mod convert;
mod error;
mod file;
mod graph;
mod stations;

pub use convert::{LoadedNetwork, load_network, parse_network};
pub use error::LoadError;
pub use file::{ConnectionDto, EndDto, NetworkFile, SideDto, StationDto, TrackDto};
pub use graph::{RailGraph, RailNetwork, RailNetworkBuilder};
pub use stations::{StationDirectory, StationLookup};
