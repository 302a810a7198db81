pub mod flow;
pub mod interchange;
pub mod ranker;
pub mod session;

pub use crate::domain::model::{Coordinate, Direction, Member, RankedMember, RankedOrder, Roster};
pub use crate::domain::ports::{Geocoder, GeocoderConfig, Storage};
pub use crate::utils::error::Result;
