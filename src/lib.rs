//! # tile_pathfinding
//!
//! Multi-mode pathfinding for the layered tile maps of a 2D isometric game
//! world. A character asks for a route from its tile to a goal (or to
//! anywhere within an approach distance of it, useful for walking up to an
//! NPC or object), restricted to a set of compass [directions](Direction)
//! and a set of [movement modes](MovementMode). Step costs and walkability
//! are answered per edge by an external [MoveCostProvider], so the world
//! model stays in charge of terrain, obstacles and mode rules; the search
//! itself is a deterministic A* over the 8-direction grid.
//!
//! [TileMap] is a ready-made provider backed by obstacle and terrain grids
//! which pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists. [MeasuredSolver] wraps
//! any solver with wall-clock instrumentation.
mod astar_core;
pub mod coordinate;
pub mod direction;
pub mod movement;
pub mod path;
pub mod provider;
pub mod solver;
pub mod tile_map;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use movement::MovementMode;
pub use path::{Path, PathNode};
pub use provider::{MoveCostProvider, StepCost};
pub use solver::astar::AstarSolver;
pub use solver::measure::MeasuredSolver;
pub use solver::{PathSolver, SearchError};
pub use tile_map::TileMap;

/// Base cost of a cardinal step on plain ground before mode and terrain
/// factors are applied.
pub const CARDINAL_COST: i32 = 10;
/// Base cost of a diagonal step, approximately sqrt(2) times [CARDINAL_COST].
pub const DIAGONAL_COST: i32 = 14;
/// Successor buffers are sized for the 8-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
