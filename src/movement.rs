use core::fmt;

/// The styles of traversal a character can use for a single step. Each mode
/// scales the base step cost by [cost_factor](MovementMode::cost_factor);
/// whether a mode is valid for a concrete step is decided by the cost
/// provider (e.g. running needs two consecutive clear tiles, pushing can
/// enter a tile occupied by a movable obstacle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementMode {
    Walk,
    Run,
    Push,
}

/// Denominator of the [cost_factor](MovementMode::cost_factor) scale.
pub const COST_FACTOR_SCALE: i32 = 10;

impl MovementMode {
    /// Cost multiplier of this mode in tenths: a factor of 10 leaves the base
    /// step cost unchanged. Running covers ground cheaper than walking,
    /// pushing something out of the way is dearer.
    pub fn cost_factor(self) -> i32 {
        match self {
            MovementMode::Walk => 10,
            MovementMode::Run => 7,
            MovementMode::Push => 25,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MovementMode::Walk => "walk",
            MovementMode::Run => "run",
            MovementMode::Push => "push",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_cheapest_push_is_dearest() {
        assert!(MovementMode::Run.cost_factor() < MovementMode::Walk.cost_factor());
        assert!(MovementMode::Walk.cost_factor() < MovementMode::Push.cost_factor());
    }
}
