//! Exhaustive single-source distances and the measures built on them.
//!
//! Unlike [`crate::search::a_star`], which halts when the goal is selected,
//! [`dijkstra_distances`] settles every reachable vertex. Diameter runs it
//! once per vertex, so the whole computation is `O(V · (E log V))`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::map::VertexId;
use crate::search::FloatOrd;

/// Shortest distance from `start` to every vertex of `graph`.
///
/// Unreachable vertices map to `f64::INFINITY`. When `start` is not part of
/// the graph every vertex, including `start` itself, is unreachable.
pub fn dijkstra_distances(start: VertexId, graph: &Graph) -> BTreeMap<VertexId, f64> {
    let mut distances: BTreeMap<VertexId, f64> =
        graph.vertices().map(|vertex| (vertex, f64::INFINITY)).collect();

    if !graph.contains(start) {
        distances.insert(start, f64::INFINITY);
        return distances;
    }

    let mut settled: HashSet<VertexId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node) {
            continue;
        }
        let current_distance = entry.cost.0;

        for neighbor in graph.neighbours(entry.node) {
            let next_distance = current_distance + neighbor.weight;
            let known = distances
                .get(&neighbor.to)
                .copied()
                .unwrap_or(f64::INFINITY);
            if next_distance < known {
                distances.insert(neighbor.to, next_distance);
                queue.push(QueueEntry::new(neighbor.to, next_distance));
            }
        }
    }

    distances
}

/// Largest shortest-path distance from `vertex` to any other vertex.
///
/// Infinite when some vertex cannot be reached.
pub fn eccentricity(vertex: VertexId, graph: &Graph) -> f64 {
    dijkstra_distances(vertex, graph)
        .into_values()
        .fold(0.0, f64::max)
}

/// Graph diameter and the pair of vertices that realises it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Diameter {
    /// The graph has no vertices.
    Empty,
    /// Some vertex is unreachable from another one.
    NotConnected,
    Connected {
        distance: f64,
        from: VertexId,
        to: VertexId,
    },
}

impl Diameter {
    pub fn distance(&self) -> Option<f64> {
        match self {
            Diameter::Connected { distance, .. } => Some(*distance),
            _ => None,
        }
    }
}

/// Compute the diameter by running [`dijkstra_distances`] from every vertex.
///
/// The reported pair is the first one, scanning sources and then targets in
/// ascending id, whose distance is strictly greater than all before it.
pub fn diameter(graph: &Graph) -> Diameter {
    if graph.is_empty() {
        return Diameter::Empty;
    }

    let mut best: Option<(f64, VertexId, VertexId)> = None;

    for source in graph.vertices() {
        let distances = dijkstra_distances(source, graph);
        for (target, distance) in distances {
            if distance.is_infinite() {
                debug!(source, target, "graph is not connected");
                return Diameter::NotConnected;
            }
            let improves = best.map_or(true, |(current, _, _)| distance > current);
            if improves {
                best = Some((distance, source, target));
            }
        }
    }

    best.map_or(Diameter::Empty, |(distance, from, to)| Diameter::Connected {
        distance,
        from,
        to,
    })
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: VertexId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: VertexId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
