use maze_graph_core::{Network, NetworkConfig, Representation};
use std::collections::VecDeque;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Generator = fn(u64, Representation) -> Network<u64>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "maze_graph_core=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let room_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2_000);
    let repr_arg = args.get(3).map(|s| s.as_str()).unwrap_or("both");

    if mode == "help" || mode == "--help" {
        println!("Usage: maze-graph-bench [mode] [room_count] [representation]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  grid        Carved grid maze: spanning tree plus a few loops");
        println!("  smallworld  Ring of rooms with random shortcut corridors");
        println!("  random      Uniform random corridors");
        println!("  barbell     Two dense wings joined by a thin passage");
        println!("  dla         Organic branching caverns");
        println!();
        println!("Representations: matrix, list, both (default)");
        println!("Default room_count: 2000");
        return;
    }

    let representations: Vec<Representation> = if repr_arg == "both" {
        vec![Representation::Matrix, Representation::List]
    } else {
        match repr_arg.parse() {
            Ok(repr) => vec![repr],
            Err(e) => {
                eprintln!("{}. Use --help for options.", e);
                return;
            }
        }
    };

    println!("maze-graph-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, Generator)> = match mode {
        "grid" => vec![("Carved grid maze", gen_grid)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "random" => vec![("Uniform random", gen_random)],
        "barbell" => vec![("Barbell (wing-passage-wing)", gen_barbell)],
        "dla" => vec![("DLA caverns", gen_dla)],
        "all" => vec![
            ("Carved grid maze", gen_grid as Generator),
            ("Small-world ring", gen_small_world),
            ("Uniform random", gen_random),
            ("Barbell (wing-passage-wing)", gen_barbell),
            ("DLA caverns", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        for &repr in &representations {
            run_benchmark(name, generator, room_count, repr);
        }
    }
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: Generator, room_count: u64, repr: Representation) {
    println!("--- {} [{}] ---", name, repr);
    println!("Target: {} rooms", room_count);
    tracing::info!(generator = name, representation = %repr, room_count, "benchmark started");

    let t = Instant::now();
    let mut maze = generator(room_count, repr);
    println!(
        "Generated in {:.1}ms: {} rooms, {} corridors, capacity {}",
        ms(t),
        maze.size(),
        maze.edge_count(),
        maze.capacity()
    );
    if maze.is_empty() {
        println!();
        return;
    }

    let first = 0u64;
    let last = maze.size() as u64 - 1;

    println!();
    println!("{:>14} {:>12} {:>10}", "query", "result", "time");
    println!("{:->14} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let bfs = maze.bfs(&first);
    println!("{:>14} {:>12} {:>8.2}ms", "bfs", bfs.len(), ms(t));

    let t = Instant::now();
    let dfs = maze.dfs(&first);
    println!("{:>14} {:>12} {:>8.2}ms", "dfs", dfs.len(), ms(t));

    let t = Instant::now();
    let connected = maze.is_connected();
    println!("{:>14} {:>12} {:>8.2}ms", "connected", connected, ms(t));

    let t = Instant::now();
    let hops = maze.fewest_hops_path(&first, &last);
    println!(
        "{:>14} {:>12} {:>8.2}ms",
        "hops 0→last",
        hops.len().saturating_sub(1),
        ms(t)
    );

    let t = Instant::now();
    let path = maze.shortest_path(&first, &last);
    let weight = maze.path_weight(&first, &last);
    if path.is_empty() {
        println!("{:>14} {:>12} {:>8.2}ms", "dijkstra", "no path", ms(t));
    } else {
        println!("{:>14} {:>12.1} {:>8.2}ms", "dijkstra", weight, ms(t));
    }

    let middle = maze.size() as u64 / 2;
    let t = Instant::now();
    maze.remove_vertex(&middle);
    println!("{:>14} {:>12} {:>8.2}ms", "remove mid", maze.size(), ms(t));
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Corridor cost in 1.0..=9.0.
    fn cost(&mut self) -> f64 {
        (1 + self.next(9)) as f64
    }
}

fn rooms(room_count: u64, repr: Representation) -> Network<u64> {
    let config = NetworkConfig::new(repr);
    let mut maze = Network::with_config(config);
    for room in 0..room_count {
        maze.add_vertex(room);
    }
    maze
}

/// Carved grid maze on a `side x side` lattice.
///
/// Randomized depth-first carving yields a spanning tree (every room
/// reachable, one route between any two); ~5% extra walls are knocked out
/// afterwards to create loops.
fn gen_grid(room_count: u64, repr: Representation) -> Network<u64> {
    let side = (room_count as f64).sqrt().max(1.0) as u64;
    let total = side * side;
    let mut maze = rooms(total, repr);
    let mut rng = FastRng::new(42);

    let mut carved = vec![false; total as usize];
    let mut stack: Vec<u64> = vec![0];
    carved[0] = true;

    while let Some(&cell) = stack.last() {
        let (x, y) = (cell % side, cell / side);
        let mut options: Vec<u64> = Vec::with_capacity(4);
        if x > 0 {
            options.push(cell - 1);
        }
        if x + 1 < side {
            options.push(cell + 1);
        }
        if y > 0 {
            options.push(cell - side);
        }
        if y + 1 < side {
            options.push(cell + side);
        }
        options.retain(|&c| !carved[c as usize]);

        if options.is_empty() {
            stack.pop();
            continue;
        }
        let next = options[rng.next(options.len() as u64) as usize];
        carved[next as usize] = true;
        let cost = rng.cost();
        maze.add_weighted_edge(&cell, &next, cost);
        stack.push(next);
    }

    for _ in 0..total / 20 {
        let cell = rng.next(total);
        if cell % side + 1 < side {
            let cost = rng.cost();
            maze.add_weighted_edge(&cell, &(cell + 1), cost);
        }
    }

    maze
}

/// Small-world: ring of rooms, each joined to its K nearest neighbors,
/// with a small chance of each corridor being rewired to a random room.
fn gen_small_world(room_count: u64, repr: Representation) -> Network<u64> {
    let k = 3u64;
    let p = 0.05f64;
    let mut maze = rooms(room_count, repr);
    let mut rng = FastRng::new(67890);

    for i in 0..room_count {
        for j in 1..=k {
            let neighbor = (i + j) % room_count;
            let cost = rng.cost();
            if rng.next_f64() < p {
                let rewired = rng.next(room_count);
                let target = if rewired != i { rewired } else { neighbor };
                maze.add_weighted_edge(&i, &target, cost);
            } else {
                maze.add_weighted_edge(&i, &neighbor, cost);
            }
        }
    }

    maze
}

/// Uniform random corridors, ~3 per room on average. No structure, and
/// usually a few isolated rooms.
fn gen_random(room_count: u64, repr: Representation) -> Network<u64> {
    let target_edges = room_count * 3;
    let mut maze = rooms(room_count, repr);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(room_count);
        let to = rng.next(room_count);
        if from != to {
            let cost = rng.cost();
            maze.add_weighted_edge(&from, &to, cost);
        }
    }

    maze
}

/// Barbell: two densely linked wings joined by a single passage of ~10 rooms.
///
/// Every route between the wings goes through the passage.
fn gen_barbell(room_count: u64, repr: Representation) -> Network<u64> {
    let passage_len = 10u64.min(room_count);
    let wing = (room_count - passage_len) / 2;
    let mut maze = rooms(wing * 2 + passage_len, repr);
    let mut rng = FastRng::new(99999);

    let b_start = wing + passage_len;
    for offset in [0, b_start] {
        for i in 0..wing {
            for _ in 0..5u64.min(wing.saturating_sub(1)) {
                let target = rng.next(wing);
                if target != i {
                    let cost = rng.cost();
                    maze.add_weighted_edge(&(offset + i), &(offset + target), cost);
                }
            }
        }
    }

    // Passage: chain from the last room of wing A to the first room of wing B
    for id in wing.saturating_sub(1)..b_start.min(wing * 2 + passage_len - 1) {
        maze.add_edge(&id, &(id + 1));
    }

    maze
}

/// DLA: each new room attaches to a recent "surface" room, with occasional
/// second corridors back into older rooms.
fn gen_dla(room_count: u64, repr: Representation) -> Network<u64> {
    let mut maze = rooms(room_count, repr);
    let mut rng = FastRng::new(77777);

    // VecDeque for O(1) pop_front when evicting oldest surface rooms.
    let surface_max = 500usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for room in 1..room_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        let cost = rng.cost();
        maze.add_weighted_edge(&room, &attach_to, cost);

        // 10% chance of a second corridor (creates loops)
        if rng.next(10) == 0 && room > 1 {
            let other = rng.next(room);
            if other != attach_to {
                let cost = rng.cost();
                maze.add_weighted_edge(&room, &other, cost);
            }
        }

        surface.push_back(room);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    maze
}
