//! Subcommand handlers.
//!
//! Each module handles one subcommand; `main.rs` parses arguments and
//! dispatches here.

pub mod describe;
pub mod diameter;
pub mod matrix;
pub mod replay;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use mapgraph_lib::{load_map, Error as LibError, MapData, VertexId};

/// Maximum number of "did you mean" suggestions for an unknown vertex.
const MAX_SUGGESTIONS: usize = 3;

/// Load and ingest the map at `path`.
pub fn load(path: &Path) -> Result<MapData> {
    let map = load_map(path).with_context(|| format!("failed to load map from {}", path.display()))?;
    info!(
        vertices = map.vertices.len(),
        edges = map.edges.len(),
        "loaded map from {}",
        path.display()
    );
    Ok(map)
}

/// Resolve a vertex argument given as name, label or numeric id.
pub fn resolve_vertex(map: &MapData, name: &str) -> Result<VertexId, LibError> {
    map.vertex_id_by_name(name)
        .ok_or_else(|| LibError::UnknownVertex {
            name: name.to_string(),
            suggestions: map.fuzzy_vertex_matches(name, MAX_SUGGESTIONS),
        })
}
