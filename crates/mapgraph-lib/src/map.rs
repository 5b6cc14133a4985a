use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Dense, 0-based vertex identifier assigned in encounter order.
pub type VertexId = usize;

/// Dense, 0-based edge identifier assigned in encounter order.
pub type EdgeId = usize;

/// Mean Earth radius used for every great-circle computation, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle (haversine) distance to another position, in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine distance between two latitude/longitude pairs, in meters.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Named point location in the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    /// Generated display tag (`V1`, `V2`, ...).
    pub name: String,
    /// Name carried by the source feature.
    pub label: String,
    pub coordinates: Coordinates,
}

/// Undirected, weighted connection between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    /// Generated display tag (`E1`, `E2`, ...).
    pub name: String,
    /// Name carried by the source feature.
    pub label: String,
    /// Length of the polyline in whole meters.
    pub weight: f64,
    pub coordinates: Vec<Coordinates>,
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    /// Whether `vertex` is one of this edge's endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }
}

/// Immutable snapshot of the ingested vertices and edges.
///
/// Every derived structure (adjacency, matrices, descriptions) is computed
/// from this snapshot and must be rebuilt when a new snapshot is produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl MapData {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id).filter(|vertex| vertex.id == id).or_else(|| {
            self.vertices.iter().find(|vertex| vertex.id == id)
        })
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges
            .get(id)
            .filter(|edge| edge.id == id)
            .or_else(|| self.edges.iter().find(|edge| edge.id == id))
    }

    /// Resolve a user-supplied vertex reference.
    ///
    /// Accepts, in order of precedence: the generated name (`V3`), the exact
    /// label, a case-insensitive label, and finally a bare numeric id.
    pub fn vertex_id_by_name(&self, name: &str) -> Option<VertexId> {
        let trimmed = name.trim();
        if let Some(vertex) = self.vertices.iter().find(|v| v.name == trimmed) {
            return Some(vertex.id);
        }
        if let Some(vertex) = self.vertices.iter().find(|v| v.label == trimmed) {
            return Some(vertex.id);
        }
        if let Some(vertex) = self
            .vertices
            .iter()
            .find(|v| v.label.eq_ignore_ascii_case(trimmed))
        {
            return Some(vertex.id);
        }
        trimmed
            .parse::<VertexId>()
            .ok()
            .filter(|id| self.vertex(*id).is_some())
    }

    /// Label of a vertex, falling back to its generated name when the label is blank.
    pub fn vertex_label(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(|vertex| {
            if vertex.label.is_empty() {
                vertex.name.as_str()
            } else {
                vertex.label.as_str()
            }
        })
    }

    /// Suggest vertex labels or names similar to `name`, best match first.
    pub fn fuzzy_vertex_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .vertices
            .iter()
            .flat_map(|vertex| [vertex.label.as_str(), vertex.name.as_str()])
            .filter(|candidate| !candidate.is_empty())
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let mut suggestions: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if suggestions.len() >= limit {
                break;
            }
            if !suggestions.iter().any(|existing| existing == candidate) {
                suggestions.push(candidate.to_string());
            }
        }
        suggestions
    }

    /// Number of edge endpoints attached to `vertex` (a self-loop counts once).
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.edges.iter().filter(|edge| edge.touches(vertex)).count()
    }
}
