use log::info;
use smallvec::SmallVec;

use crate::astar_core::astar_labelled;
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::movement::MovementMode;
use crate::path::{Path, PathNode};
use crate::provider::{MoveCostProvider, StepCost};
use crate::solver::{PathSolver, SearchError};
use crate::N_SMALLVEC_SIZE;

/// A* search over the tile graph spanned by the allowed directions, priced
/// edge by edge through the cost provider. The heuristic is the Chebyshev
/// step distance to the goal scaled by [heuristic_factor](Self::heuristic_factor),
/// which is admissible at the default of 1.0 for providers whose per-step
/// cost is at least 1. Factors above 1.0 trade path optimality for speed.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }

    fn heuristic(&self, node: &Coordinate, goal: &Coordinate) -> i32 {
        (node.chebyshev_distance(goal) as f32 * self.heuristic_factor) as i32
    }

    /// Prices every allowed direction out of `node`, keeping per direction
    /// the cheapest mode the provider accepts. On equal cost the mode listed
    /// first wins, which makes the primary mode the tie-break winner.
    fn successors<P>(
        &self,
        provider: &P,
        node: Coordinate,
        allowed_directions: &[Direction],
        modes: &[MovementMode],
    ) -> SmallVec<[(Coordinate, MovementMode, i32); N_SMALLVEC_SIZE]>
    where
        P: MoveCostProvider + ?Sized,
    {
        let mut succ = SmallVec::new();
        for &dir in allowed_directions {
            let mut best: Option<(MovementMode, i32)> = None;
            for &mode in modes {
                if let StepCost::Open(cost) = provider.move_cost(node, dir, mode) {
                    debug_assert!(cost >= 0, "providers return non-negative costs");
                    if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                        best = Some((mode, cost));
                    }
                }
            }
            if let Some((mode, cost)) = best {
                succ.push((node + dir, mode, cost));
            }
        }
        succ
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl PathSolver for AstarSolver {
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
        if allowed_directions.is_empty() {
            return Err(SearchError::NoAllowedDirections);
        }
        if start.layer != end.layer {
            info!(
                "{} and {} are on different layers, no path exists",
                start, end
            );
            return Ok(None);
        }
        let approach = approach_distance as i32;
        if start.chebyshev_distance(&end) <= approach {
            // Already there; a trivial path holding only the start tile.
            return Ok(Some(Path::new(vec![PathNode::new(start, mode)], 0)));
        }

        let mut modes: SmallVec<[MovementMode; 4]> = SmallVec::new();
        modes.push(mode);
        for &extra in extra_modes {
            if !modes.contains(&extra) {
                modes.push(extra);
            }
        }

        let result = astar_labelled(
            &start,
            |node| self.successors(provider, *node, allowed_directions, &modes),
            |node| self.heuristic(node, &end),
            |node| node.chebyshev_distance(&end) <= approach,
        );
        Ok(result.map(|(steps, cost)| {
            let nodes = steps
                .into_iter()
                .map(|(location, mode)| PathNode::new(location, mode))
                .collect();
            Path::new(nodes, cost)
        }))
    }
}
