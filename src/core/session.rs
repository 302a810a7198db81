use crate::core::{flow, interchange, ranker};
use crate::domain::model::{Coordinate, Direction, Member, RankedOrder, Roster};
use crate::domain::ports::Geocoder;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::validate_non_empty_string;
use rand::Rng;

/// One user session: owns the roster and the geocoder handle. Created
/// empty, mutated by add/remove, cleared on reset. Not internally
/// locked; a caller needing shared access wraps the whole session in a
/// mutex.
pub struct OrderSession<G: Geocoder> {
    roster: Roster,
    geocoder: G,
}

impl<G: Geocoder> OrderSession<G> {
    pub fn new(geocoder: G) -> Self {
        Self::with_roster(geocoder, Roster::new())
    }

    /// Resumes a session from a previously persisted roster.
    pub fn with_roster(geocoder: G, roster: Roster) -> Self {
        Self { roster, geocoder }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Resolves the location and records the member. On a resolution
    /// failure the member is still recorded, unresolved, and the failure
    /// is returned so the caller can surface it instead of silently
    /// losing the entry.
    pub async fn add_member(&mut self, name: &str, location: &str) -> Result<Coordinate> {
        validate_non_empty_string("name", name)?;
        validate_non_empty_string("location", location)?;

        match self.geocoder.resolve(location).await {
            Ok(coordinate) => {
                tracing::info!(
                    "Resolved '{}' to ({}, {})",
                    location,
                    coordinate.latitude,
                    coordinate.longitude
                );
                self.roster.add(Member {
                    name: name.to_string(),
                    location: location.to_string(),
                    coordinate: Some(coordinate),
                });
                Ok(coordinate)
            }
            Err(error) => {
                tracing::warn!("Could not resolve '{}': {}", location, error);
                self.roster.add(Member {
                    name: name.to_string(),
                    location: location.to_string(),
                    coordinate: None,
                });
                Err(error)
            }
        }
    }

    pub fn remove_member(&mut self, name: &str) {
        self.roster.remove(name);
    }

    pub fn reset(&mut self) {
        self.roster.clear();
    }

    /// Picks a flow at random and ranks the current roster along it.
    /// Fails before drawing from the RNG when no member has a resolved
    /// coordinate. Unresolved members end up in the result's `skipped`
    /// list and never abort the request.
    pub fn generate_order<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Direction, RankedOrder)> {
        if self.roster.resolved_count() == 0 {
            return Err(OrderError::EmptyRoster);
        }

        let direction = flow::choose_direction(rng);
        tracing::info!("Selected flow: {}", direction);
        let order = ranker::rank(&self.roster.snapshot(), direction);
        Ok((direction, order))
    }

    pub fn export(&self) -> Result<Vec<u8>> {
        interchange::serialize(&self.roster)
    }

    /// All-or-nothing: the current roster is replaced only when the
    /// payload parses completely.
    pub fn import(&mut self, bytes: &[u8]) -> Result<()> {
        self.roster = interchange::deserialize(bytes)?;
        Ok(())
    }
}
