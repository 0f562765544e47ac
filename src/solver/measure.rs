use log::{debug, warn};
use std::time::Instant;

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::movement::MovementMode;
use crate::path::Path;
use crate::provider::MoveCostProvider;
use crate::solver::{PathSolver, SearchError};

/// Instrumentation wrapper around any [PathSolver]: forwards the search
/// untouched and logs its outcome and wall-clock duration. The log facade
/// only formats when the level is enabled, so an inactive logger costs
/// nothing beyond reading the clock.
#[derive(Clone, Debug)]
pub struct MeasuredSolver<S> {
    pub inner: S,
}

impl<S> MeasuredSolver<S> {
    pub fn new(inner: S) -> MeasuredSolver<S> {
        MeasuredSolver { inner }
    }
}

impl<S: PathSolver> PathSolver for MeasuredSolver<S> {
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
        P: MoveCostProvider + ?Sized,
    {
        debug!("Searching a path from {} to {}", start, end);
        let begin = Instant::now();
        let result = self.inner.find_path(
            provider,
            start,
            end,
            approach_distance,
            allowed_directions,
            mode,
            extra_modes,
        );
        let elapsed = begin.elapsed();
        match &result {
            Ok(Some(path)) => debug!(
                "Path from {} to {} found in {:?}: {} steps, cost {}",
                start,
                end,
                elapsed,
                path.len(),
                path.cost()
            ),
            Ok(None) => debug!("No path from {} to {}, search took {:?}", start, end, elapsed),
            Err(e) => warn!("Path search from {} to {} rejected: {}", start, end, e),
        }
        result
    }
}
