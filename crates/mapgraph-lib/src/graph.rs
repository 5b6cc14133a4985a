use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::map::{Edge, EdgeId, MapData, Vertex, VertexId};

/// Entry in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub to: VertexId,
    pub weight: f64,
    pub edge_id: EdgeId,
}

/// Undirected adjacency structure used by the search algorithms.
///
/// Keys iterate in ascending vertex id and each neighbour list follows
/// ascending edge id, which is what makes search tie-breaks reproducible.
/// The adjacency is shared behind an [`Arc`], so cloning a graph is cheap.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<BTreeMap<VertexId, Vec<Neighbor>>>,
}

impl Graph {
    /// Build a graph directly from an adjacency map.
    pub fn from_adjacency(adjacency: BTreeMap<VertexId, Vec<Neighbor>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the neighbours for a given vertex identifier.
    pub fn neighbours(&self, vertex: VertexId) -> &[Neighbor] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn adjacency(&self) -> &BTreeMap<VertexId, Vec<Neighbor>> {
        &self.adjacency
    }
}

/// Build the routing graph for an ingested map snapshot.
pub fn build_graph(map: &MapData) -> Graph {
    build_graph_from_parts(&map.vertices, &map.edges)
}

/// Build the routing graph from vertex and edge lists.
///
/// Each edge contributes one entry at each endpoint. Vertices without
/// incident edges are present with an empty neighbour list.
pub fn build_graph_from_parts(vertices: &[Vertex], edges: &[Edge]) -> Graph {
    let mut adjacency: BTreeMap<VertexId, Vec<Neighbor>> = vertices
        .iter()
        .map(|vertex| (vertex.id, Vec::new()))
        .collect();

    let mut ordered: Vec<&Edge> = edges.iter().collect();
    ordered.sort_by_key(|edge| edge.id);

    for edge in ordered {
        adjacency.entry(edge.from).or_default().push(Neighbor {
            to: edge.to,
            weight: edge.weight,
            edge_id: edge.id,
        });
        adjacency.entry(edge.to).or_default().push(Neighbor {
            to: edge.from,
            weight: edge.weight,
            edge_id: edge.id,
        });
    }

    debug!(
        vertices = adjacency.len(),
        edges = edges.len(),
        "built adjacency graph"
    );

    Graph::from_adjacency(adjacency)
}
