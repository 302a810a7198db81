use crate::domain::model::Direction;
use rand::Rng;

/// Uniform draw over the four directional flows. The RNG is injected so
/// callers control determinism; no flow is structurally favored.
pub fn choose_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}
