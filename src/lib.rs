pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::nominatim::NominatimGeocoder;
pub use crate::config::{cli::LocalStorage, CliConfig, Command};
pub use crate::core::session::OrderSession;
pub use crate::domain::model::{Coordinate, Direction, Member, RankedMember, RankedOrder, Roster};
pub use crate::domain::ports::{Geocoder, GeocoderConfig, Storage};
pub use crate::utils::error::{OrderError, Result};
