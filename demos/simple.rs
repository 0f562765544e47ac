use grid_util::grid::Grid;
use tile_pathfinding::{AstarSolver, Direction, MovementMode, PathSolver, TileMap};

// In this demo a path is found on a 3x3 map with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Tiles have an 8-neighbourhood

fn main() {
    let mut map = TileMap::new(3, 3, false);
    map.set(1, 1, true);
    map.generate_components();
    println!("{}", map);
    let start = map.coordinate(0, 2);
    let end = map.coordinate(2, 0);
    let path = AstarSolver::new()
        .find_path(
            &map,
            start,
            end,
            0,
            &Direction::ALL,
            MovementMode::Walk,
            &[],
        )
        .unwrap()
        .unwrap();
    println!("Path:");
    for node in &path {
        println!("{} {}", node.movement_method, node.location);
    }
}
