use tile_pathfinding::{
    AstarSolver, Direction, MeasuredSolver, MovementMode, PathSolver, TileMap,
};

// Crosses a long corridor with walking as the primary mode and running
// allowed as an extra. Running is cheaper per tile but needs room behind the
// target tile, so the step onto the final tile falls back to walking. The
// solver is wrapped in a MeasuredSolver; run with RUST_LOG=debug and a logger
// backend to see the timing output.

fn main() {
    let map = TileMap::on_layer(12, 1, 0);
    let start = map.coordinate(0, 0);
    let end = map.coordinate(11, 0);
    let solver = MeasuredSolver::new(AstarSolver::new());
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
    for node in &path {
        println!("{} to {}", node.movement_method, node.location);
    }
    println!("Total cost: {}", path.cost());
}
