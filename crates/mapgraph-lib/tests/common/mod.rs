//! Common test utilities and fixture helpers.
//!
//! Provides the campus GeoJSON fixture plus builders for small synthetic
//! graphs whose weights are chosen by hand.

#![allow(dead_code)]

use std::path::PathBuf;

use mapgraph_lib::{load_map, Coordinates, Edge, MapData, Vertex};

/// Path to the fixtures directory shared by the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the six-vertex campus map.
pub fn campus_path() -> PathBuf {
    fixtures_dir().join("campus.geojson")
}

pub fn campus() -> MapData {
    load_map(&campus_path()).expect("campus fixture loads")
}

pub fn vertex(id: usize, lat: f64, lon: f64) -> Vertex {
    Vertex {
        id,
        name: format!("V{}", id + 1),
        label: format!("Vertex {}", id + 1),
        coordinates: Coordinates::new(lat, lon),
    }
}

pub fn edge(id: usize, from: usize, to: usize, weight: f64) -> Edge {
    Edge {
        id,
        name: format!("E{}", id + 1),
        label: format!("Edge {}", id + 1),
        weight,
        coordinates: Vec::new(),
        from,
        to,
    }
}

/// Vertices laid out along the equator, `edges` given as `(from, to, weight)`.
pub fn synthetic_map(vertex_count: usize, edges: &[(usize, usize, f64)]) -> MapData {
    let vertices = (0..vertex_count)
        .map(|id| vertex(id, 0.0, id as f64 * 0.001))
        .collect();
    let edges = edges
        .iter()
        .enumerate()
        .map(|(id, &(from, to, weight))| edge(id, from, to, weight))
        .collect();
    MapData::new(vertices, edges)
}

/// Path graph `0 - 1 - ... - (n-1)` with unit weights.
pub fn unit_path(vertex_count: usize) -> MapData {
    let edges: Vec<_> = (1..vertex_count).map(|to| (to - 1, to, 1.0)).collect();
    synthetic_map(vertex_count, &edges)
}
