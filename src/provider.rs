use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::movement::MovementMode;

/// Price of a single candidate step as answered by a [MoveCostProvider].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCost {
    /// The step is possible at the given non-negative cost.
    Open(i32),
    /// The step is impossible: target blocked, off-map, or incompatible with
    /// the requested movement mode.
    Blocked,
}

impl StepCost {
    pub fn is_open(&self) -> bool {
        matches!(self, StepCost::Open(_))
    }

    pub fn cost(&self) -> Option<i32> {
        match *self {
            StepCost::Open(cost) => Some(cost),
            StepCost::Blocked => None,
        }
    }
}

/// The collaborator owning the world model: answers how expensive (or
/// impossible) a single step is. The search queries it per candidate edge and
/// never caches answers across calls, since the world may change between
/// searches.
///
/// Implementations must be pure queries within one search invocation and must
/// surface internal failures (missing map data and the like) as
/// [StepCost::Blocked] rather than panicking, so a search can route around
/// bad data. Providers shared between concurrently running searches only need
/// to tolerate concurrent reads.
pub trait MoveCostProvider {
    /// Cost of stepping from `from` one tile towards `dir` using `mode`.
    fn move_cost(&self, from: Coordinate, dir: Direction, mode: MovementMode) -> StepCost;
}

/// Plain cost functions act as providers, which keeps simple callers and
/// tests free of wrapper types.
impl<F> MoveCostProvider for F
where
    F: Fn(Coordinate, Direction, MovementMode) -> StepCost,
{
    fn move_cost(&self, from: Coordinate, dir: Direction, mode: MovementMode) -> StepCost {
        self(from, dir, mode)
    }
}
