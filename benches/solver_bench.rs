use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::grid::Grid;
use rand::prelude::*;
use std::hint::black_box;
use tile_pathfinding::{AstarSolver, Coordinate, Direction, MovementMode, PathSolver, TileMap};

fn random_map(w: usize, h: usize, rng: &mut StdRng) -> TileMap {
    let mut map = TileMap::new(w, h, false);
    for x in 0..w {
        for y in 0..h {
            map.set(x, y, rng.gen_bool(0.3));
        }
    }
    map.generate_components();
    map
}

fn random_open_tile(map: &TileMap, rng: &mut StdRng) -> Coordinate {
    loop {
        let x = rng.gen_range(0..map.width() as i32);
        let y = rng.gen_range(0..map.height() as i32);
        if !map.get(x as usize, y as usize) {
            return map.coordinate(x, y);
        }
    }
}

fn random_map_bench(c: &mut Criterion) {
    const N: usize = 64;
    const N_SCENARIOS: usize = 100;
    let mut rng = StdRng::seed_from_u64(0);
    let map = random_map(N, N, &mut rng);
    let scenarios: Vec<(Coordinate, Coordinate)> = (0..N_SCENARIOS)
        .map(|_| (random_open_tile(&map, &mut rng), random_open_tile(&map, &mut rng)))
        .collect();
    let solver = AstarSolver::new();

    for (name, extra_modes) in [("walk", &[][..]), ("walk+run", &[MovementMode::Run][..])] {
        c.bench_function(format!("64x64 random map, {name}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(solver.find_path(
                        &map,
                        *start,
                        *end,
                        0,
                        &Direction::ALL,
                        MovementMode::Walk,
                        extra_modes,
                    ))
                    .unwrap();
                }
            })
        });
    }
}

criterion_group!(benches, random_map_bench);
criterion_main!(benches);
