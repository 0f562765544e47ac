use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::movement::{MovementMode, COST_FACTOR_SCALE};
use crate::provider::{MoveCostProvider, StepCost};
use crate::{CARDINAL_COST, DIAGONAL_COST};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid, SimpleGrid};
use log::info;
use petgraph::unionfind::UnionFind;

/// A single map layer backed by grids: a [BoolGrid] of immovable obstacles, a
/// [BoolGrid] of movable ones (characters, crates) and a [SimpleGrid] of
/// per-tile terrain cost factors. Implements [MoveCostProvider] with the
/// movement-mode rules of the game world and maintains connected components
/// over the immovable obstacles in a [UnionFind] structure, so unreachable
/// goals can be rejected without flood-filling. Implements [Grid] by building
/// on [BoolGrid].
#[derive(Clone, Debug)]
pub struct TileMap {
    pub layer: i32,
    pub blocked: BoolGrid,
    pub occupied: BoolGrid,
    pub terrain: SimpleGrid<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TileMap {
    /// An empty map on the given layer.
    pub fn on_layer(width: usize, height: usize, layer: i32) -> TileMap {
        TileMap {
            layer,
            ..TileMap::new(width, height, false)
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.blocked.index_in_bounds(x as usize, y as usize)
    }

    /// Whether the tile exists on this map at all.
    pub fn contains(&self, tile: Coordinate) -> bool {
        tile.layer == self.layer && self.in_bounds(tile.x, tile.y)
    }

    /// Whether a character can stand on the tile, movable obstacles included.
    pub fn walkable(&self, tile: Coordinate) -> bool {
        self.contains(tile)
            && !self.blocked.get(tile.x as usize, tile.y as usize)
            && !self.occupied.get(tile.x as usize, tile.y as usize)
    }

    fn is_occupied(&self, tile: Coordinate) -> bool {
        self.occupied.get(tile.x as usize, tile.y as usize)
    }

    /// Marks a movable obstacle. Components are not affected: they index the
    /// immovable world only.
    pub fn set_occupied(&mut self, x: i32, y: i32, occupied: bool) {
        self.occupied.set(x as usize, y as usize, occupied);
    }

    /// Terrain cost factor of a tile, 1 being plain ground.
    pub fn set_terrain(&mut self, x: i32, y: i32, factor: u8) {
        self.terrain.set(x as usize, y as usize, factor);
    }

    /// The coordinate of a tile on this map's layer.
    pub fn coordinate(&self, x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y, self.layer)
    }

    fn open_neighbours(&self, x: i32, y: i32) -> Vec<(i32, i32)> {
        Direction::ALL
            .iter()
            .map(|dir| {
                let (dx, dy) = dir.offset();
                (x + dx, y + dy)
            })
            .filter(|&(nx, ny)| self.in_bounds(nx, ny) && !self.blocked.get(nx as usize, ny as usize))
            .collect()
    }

    /// Retrieves the component id a given tile belongs to.
    pub fn get_component(&self, tile: &Coordinate) -> usize {
        self.components.find(self.blocked.get_ix(tile.x as usize, tile.y as usize))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.contains(*start) && self.contains(*goal) {
            !self
                .components
                .equiv(self.get_component(start), self.get_component(goal))
        } else {
            true
        }
    }

    /// Checks if any neighbour of the goal is on the same component as the
    /// start, which is what an approach search needs.
    pub fn neighbours_reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.contains(*start) && self.contains(*goal) {
            let start_ix = self.get_component(start);
            Direction::ALL.iter().any(|&dir| {
                let n = *goal + dir;
                self.contains(n) && self.components.equiv(start_ix, self.get_component(&n))
            })
        } else {
            false
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.blocked.width;
        let h = self.blocked.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.blocked.get(x, y) {
                    let parent_ix = self.blocked.get_ix(x, y);
                    // Forward neighbours only; the backward ones were linked
                    // when their own tile was visited.
                    let forward = [(1, 0), (0, 1), (1, 1), (1, -1)];
                    for (dx, dy) in forward {
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        if self.in_bounds(nx, ny) && !self.blocked.get(nx as usize, ny as usize) {
                            let ix = self.blocked.get_ix(nx as usize, ny as usize);
                            self.components.union(parent_ix, ix);
                        }
                    }
                }
            }
        }
    }
}

impl MoveCostProvider for TileMap {
    fn move_cost(&self, from: Coordinate, dir: Direction, mode: MovementMode) -> StepCost {
        let target = from + dir;
        if !self.contains(target) || self.blocked.get(target.x as usize, target.y as usize) {
            return StepCost::Blocked;
        }
        match mode {
            // Walking and running never enter an occupied tile; running
            // additionally needs room to keep going behind the target.
            MovementMode::Walk | MovementMode::Run if self.is_occupied(target) => {
                return StepCost::Blocked;
            }
            MovementMode::Run if !self.walkable(target + dir) => {
                return StepCost::Blocked;
            }
            // Pushing shoves whatever occupies the target aside.
            _ => {}
        }
        let base = if dir.is_diagonal() {
            DIAGONAL_COST
        } else {
            CARDINAL_COST
        };
        let terrain = self.terrain.get(target.x as usize, target.y as usize) as i32;
        StepCost::Open(base * terrain.max(1) * mode.cost_factor() / COST_FACTOR_SCALE)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Layer {}:", self.layer)?;
        for y in (0..self.blocked.height).rev() {
            for x in 0..self.blocked.width {
                let c = if self.blocked.get(x, y) {
                    '#'
                } else if self.occupied.get(x, y) {
                    'o'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<bool> for TileMap {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        TileMap {
            layer: 0,
            blocked: BoolGrid::new(width, height, default_value),
            occupied: BoolGrid::new(width, height, false),
            terrain: SimpleGrid::new(width, height, 1),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.blocked.get(x, y)
    }
    /// Updates an immovable obstacle. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        if blocked && !self.blocked.get(x, y) {
            self.components_dirty = true;
        } else if !blocked {
            for (nx, ny) in self.open_neighbours(x as i32, y as i32) {
                self.components.union(
                    self.blocked.get_ix(x, y),
                    self.blocked.get_ix(nx as usize, ny as usize),
                );
            }
        }
        self.blocked.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.blocked.width()
    }
    fn height(&self) -> usize {
        self.blocked.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;
    use crate::solver::PathSolver;

    #[test]
    fn component_generation_splits_walled_regions() {
        let mut map = TileMap::new(3, 4, true);
        map.blocked.set(1, 1, false);
        map.generate_components();
        assert!(!map.components.equiv(0, 4));
    }

    #[test]
    fn clearing_a_wall_reconnects_components() {
        let mut map = TileMap::new(3, 3, false);
        for y in 0..3 {
            map.set(1, y, true);
        }
        map.generate_components();
        let left = map.coordinate(0, 1);
        let right = map.coordinate(2, 1);
        assert!(map.unreachable(&left, &right));

        map.set(1, 1, false);
        map.update();
        assert!(map.reachable(&left, &right));
        assert!(map.neighbours_reachable(&left, &right));
    }

    #[test]
    fn blocking_marks_components_dirty() {
        let mut map = TileMap::new(3, 3, false);
        map.generate_components();
        assert!(!map.components_dirty);
        map.set(1, 1, true);
        assert!(map.components_dirty);
    }

    #[test]
    fn walking_costs_base_times_terrain() {
        let mut map = TileMap::new(4, 4, false);
        map.set_terrain(2, 1, 3);
        let from = map.coordinate(1, 1);
        assert_eq!(
            map.move_cost(from, Direction::East, MovementMode::Walk),
            StepCost::Open(CARDINAL_COST * 3)
        );
        assert_eq!(
            map.move_cost(from, Direction::NorthEast, MovementMode::Walk),
            StepCost::Open(DIAGONAL_COST)
        );
    }

    #[test]
    fn running_needs_room_behind_the_target() {
        let map = TileMap::new(4, 1, false);
        let start = map.coordinate(0, 0);
        // Plenty of room: running beats walking.
        let run = map.move_cost(start, Direction::East, MovementMode::Run);
        let walk = map.move_cost(start, Direction::East, MovementMode::Walk);
        assert!(run.cost().unwrap() < walk.cost().unwrap());
        // The last corridor tile has nothing behind it.
        let near_wall = map.coordinate(2, 0);
        assert_eq!(
            map.move_cost(near_wall, Direction::East, MovementMode::Run),
            StepCost::Blocked
        );
        assert!(map
            .move_cost(near_wall, Direction::East, MovementMode::Walk)
            .is_open());
    }

    #[test]
    fn pushing_enters_occupied_tiles_at_a_premium() {
        let mut map = TileMap::new(3, 1, false);
        map.set_occupied(1, 0, true);
        let from = map.coordinate(0, 0);
        assert_eq!(
            map.move_cost(from, Direction::East, MovementMode::Walk),
            StepCost::Blocked
        );
        let push = map.move_cost(from, Direction::East, MovementMode::Push);
        assert!(push.is_open());
        assert!(push.cost().unwrap() > CARDINAL_COST);
    }

    #[test]
    fn off_map_and_cross_layer_queries_are_blocked() {
        let map = TileMap::on_layer(2, 2, 3);
        let edge = map.coordinate(1, 1);
        assert_eq!(
            map.move_cost(edge, Direction::East, MovementMode::Walk),
            StepCost::Blocked
        );
        let other_layer = Coordinate::new(0, 0, 0);
        assert_eq!(
            map.move_cost(other_layer, Direction::East, MovementMode::Walk),
            StepCost::Blocked
        );
    }

    #[test]
    fn solver_routes_around_map_walls() {
        let mut map = TileMap::new(5, 5, false);
        for y in 0..4 {
            map.set(2, y, true);
        }
        map.generate_components();
        let start = map.coordinate(0, 0);
        let end = map.coordinate(4, 0);
        assert!(map.reachable(&start, &end));

        let solver = AstarSolver::new();
        let path = solver
            .find_path(
                &map,
                start,
                end,
                0,
                &Direction::ALL,
                MovementMode::Walk,
                &[MovementMode::Run],
            )
            .unwrap()
            .unwrap();
        assert_eq!(path.destination(), end);
        assert!(path.iter().all(|n| n.location != map.coordinate(2, 0)));
        assert!(path.iter().any(|n| n.location.y >= 4));
    }
}
