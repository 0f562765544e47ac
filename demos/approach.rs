use tile_pathfinding::{AstarSolver, Direction, MovementMode, PathSolver, TileMap};

// Walks up to an NPC standing at (5, 5): the NPC's tile is occupied, so the
// search is asked for any tile within approach distance 1 of it instead of
// exact arrival.

fn main() {
    let mut map = TileMap::on_layer(7, 7, 0);
    map.set_occupied(5, 5, true);
    map.generate_components();
    println!("{}", map);
    let start = map.coordinate(0, 0);
    let npc = map.coordinate(5, 5);
    let path = AstarSolver::new()
        .find_path(
            &map,
            start,
            npc,
            1,
            &Direction::ALL,
            MovementMode::Walk,
            &[],
        )
        .unwrap()
        .unwrap();
    println!(
        "Stopping at {}, next to the NPC at {}",
        path.destination(),
        npc
    );
    println!("Path: {}", path);
}
