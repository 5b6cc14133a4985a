//! Map graph library entry points.
//!
//! This crate turns GeoJSON point and line features into a weighted,
//! undirected graph and runs the algorithms that operate on it: A* with a
//! geodesic heuristic and full replay metadata, exhaustive Dijkstra for
//! eccentricity and diameter, and adjacency/incidence matrix derivation.
//! Every algorithm is a pure function of the snapshot it is given.
//!

#![deny(warnings)]

pub mod describe;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod map;
pub mod matrix;
pub mod output;
pub mod replay;
pub mod search;

pub use describe::{EdgeRelation, GraphDescription, VertexSummary};
pub use dijkstra::{diameter, dijkstra_distances, eccentricity, Diameter};
pub use error::{Endpoint, Error, Result};
pub use graph::{build_graph, build_graph_from_parts, Graph, Neighbor};
pub use ingest::{ingest_features, ingest_geojson, load_map, parse_map, polyline_length, read_map};
pub use map::{haversine, Coordinates, Edge, EdgeId, MapData, Vertex, VertexId, EARTH_RADIUS_M};
pub use matrix::{
    adjacency_csv, adjacency_matrix, incidence_csv, incidence_matrix, write_adjacency_csv,
    write_incidence_csv,
};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use replay::{replay_frame, replay_frames, ReplayFrame};
pub use search::{
    a_star, a_star_with_observer, reconstruct_path, CameFrom, GeodesicHeuristic, PathResult,
    SearchResult, SearchStatus, SearchStep,
};
