use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::movement::MovementMode;
use crate::path::Path;
use crate::provider::MoveCostProvider;
use thiserror::Error;

pub mod astar;
pub mod measure;

/// Contract violations in a [find_path](PathSolver::find_path) call. An
/// unreachable goal is not an error; it is reported as `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no movement directions were allowed for the search")]
    NoAllowedDirections,
}

/// A path search engine. Implementations keep all mutable search state local
/// to the [find_path](PathSolver::find_path) invocation, so a single solver
/// value can serve concurrent searches.
pub trait PathSolver {
    /// Searches a route from `start` to any tile within `approach_distance`
    /// (Chebyshev) of `end`, stepping only in `allowed_directions` and
    /// pricing each step through `provider`.
    ///
    /// Every step may use the primary `mode` or any of the `extra_modes`;
    /// per edge the cheapest mode the provider accepts wins, ties going to
    /// the primary. Returns `Ok(None)` when no route exists under these
    /// constraints and an error only for malformed input.
    fn find_path<P>(
        &self,
        provider: &P,
        start: Coordinate,
        end: Coordinate,
        approach_distance: u32,
        allowed_directions: &[Direction],
        mode: MovementMode,
        extra_modes: &[MovementMode],
    ) -> Result<Option<Path>, SearchError>
    where
        P: MoveCostProvider + ?Sized;
}
