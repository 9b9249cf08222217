//! maze-graph-core: In-memory weighted network engine.
//!
//! A pure Rust library that stores an undirected, weighted graph under one
//! of two interchangeable adjacency strategies (dense matrix or sparse
//! per-vertex lists) and provides BFS/DFS traversal plus unweighted and
//! Dijkstra shortest-path queries. No I/O of its own.
//!
//! Designed as the spatial index of a maze (rooms are vertices, corridors
//! are edges, weight is traversal cost), but generic over any payload with
//! value equality.
//!
//! ```
//! use maze_graph_core::Network;
//!
//! let mut maze = Network::matrix();
//! for room in ["entrance", "hall", "vault", "crypt"] {
//!     maze.add_vertex(room);
//! }
//! maze.add_weighted_edge(&"entrance", &"hall", 1.0);
//! maze.add_weighted_edge(&"hall", &"vault", 1.0);
//! maze.add_weighted_edge(&"entrance", &"crypt", 5.0);
//!
//! assert_eq!(maze.shortest_path(&"entrance", &"vault"), vec!["entrance", "hall", "vault"]);
//! assert_eq!(maze.path_weight(&"entrance", &"vault"), 2.0);
//! assert!(maze.is_connected());
//! ```

mod config;
mod error;
mod network;
mod path;
mod store;
mod traversal;
mod vertex;

pub use config::{NetworkConfig, Representation, DEFAULT_CAPACITY};
pub use error::{Endpoint, GraphError};
pub use network::{EdgeRecord, LoadSummary, Network, DEFAULT_WEIGHT};
pub use path::{dijkstra, unweighted_path, ShortestPath};
pub use store::{AdjacencyRecord, AdjacencyStore, Edges, ListStore, MatrixStore, RowEdges, ABSENT};
pub use traversal::{is_connected, Bfs, Dfs, VisitState};
pub use vertex::{VertexIndex, VertexTable};
