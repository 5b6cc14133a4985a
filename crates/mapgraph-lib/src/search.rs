//! Point-to-point A* search that keeps its full bookkeeping.
//!
//! Besides the path itself, a [`SearchResult`] records every vertex in the
//! order it was settled and the predecessor link of every vertex that was
//! ever relaxed, so a caller can replay the search step by step.
//!
//! # Tie-breaking
//!
//! When several frontier members share the smallest `f = g + h`, the one that
//! entered the frontier first is selected. A member whose score improves while
//! it is still open keeps its original position; a vertex that re-enters the
//! frontier after being selected counts as newly seen. The frontier is a
//! binary heap keyed by `(f, first-seen sequence)` with lazy invalidation of
//! stale entries.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{trace, warn};

use crate::graph::Graph;
use crate::map::{Coordinates, EdgeId, MapData, VertexId};

/// Predecessor link recorded when a vertex's cost improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameFrom {
    pub prev: VertexId,
    pub edge_id: EdgeId,
}

/// Vertices and edges along a reconstructed path, start first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub vertex_path: Vec<VertexId>,
    pub edge_path: Vec<EdgeId>,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.edge_path.len()
    }

    /// Whether the reconstruction reached `start`; a truncated path means the
    /// predecessor map was inconsistent.
    pub fn is_complete(&self, start: VertexId) -> bool {
        self.vertex_path.first() == Some(&start)
    }

    /// Sum of the weights of the traversed edges.
    pub fn total_weight(&self, map: &MapData) -> f64 {
        self.edge_path
            .iter()
            .filter_map(|edge_id| map.edge(*edge_id))
            .map(|edge| edge.weight)
            .sum()
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The goal was selected from the frontier.
    Found,
    /// The frontier emptied before the goal was reached.
    Exhausted,
    /// The observer asked the search to stop.
    Cancelled,
}

/// Outcome of a single A* invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub path: Option<PathResult>,
    /// Vertices in the order they were selected from the frontier.
    pub visited_order: Vec<VertexId>,
    pub came_from: BTreeMap<VertexId, CameFrom>,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}

/// Progress reported to a search observer after each selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep {
    pub vertex: VertexId,
    /// Number of selections so far, including this one.
    pub settled: usize,
    /// Best known cost from the start to `vertex`.
    pub cost: f64,
}

/// Straight-line geodesic distance to a fixed goal.
///
/// Estimates are floored to whole meters so they share the integer-meter
/// scale of ingested edge weights. Vertices without known coordinates, or
/// a goal that does not exist, estimate zero.
///
/// Edge weights are rounded to the nearest meter, so an edge can weigh up to
/// 0.5 m less than its geodesic length. On long chains of nearly collinear
/// edges the estimate may then exceed the remaining weight, and returned
/// paths are only guaranteed optimal to within about 0.5 m per edge.
#[derive(Debug, Clone)]
pub struct GeodesicHeuristic<'a> {
    map: &'a MapData,
    goal: Option<Coordinates>,
}

impl<'a> GeodesicHeuristic<'a> {
    pub fn new(map: &'a MapData, goal: VertexId) -> Self {
        Self {
            map,
            goal: map.vertex(goal).map(|vertex| vertex.coordinates),
        }
    }

    pub fn estimate(&self, vertex: VertexId) -> f64 {
        let Some(goal) = self.goal else {
            return 0.0;
        };
        self.map
            .vertex(vertex)
            .map(|vertex| vertex.coordinates.distance_to(&goal).floor())
            .unwrap_or(0.0)
    }
}

/// Run A* from `start` to `goal`, stopping as soon as the goal is selected.
///
/// `heuristic` must never overestimate the remaining cost for the returned
/// path to be optimal. A disconnected goal is not an error: the result has
/// no path and status [`SearchStatus::Exhausted`].
pub fn a_star<H>(start: VertexId, goal: VertexId, graph: &Graph, heuristic: H) -> SearchResult
where
    H: FnMut(VertexId) -> f64,
{
    a_star_with_observer(start, goal, graph, heuristic, |_| ControlFlow::Continue(()))
}

/// Run A* while reporting every selection to `observer`.
///
/// Returning [`ControlFlow::Break`] stops the search with status
/// [`SearchStatus::Cancelled`], unless the selected vertex is the goal.
pub fn a_star_with_observer<H, O>(
    start: VertexId,
    goal: VertexId,
    graph: &Graph,
    mut heuristic: H,
    mut observer: O,
) -> SearchResult
where
    H: FnMut(VertexId) -> f64,
    O: FnMut(SearchStep) -> ControlFlow<()>,
{
    let mut g_score: HashMap<VertexId, f64> = HashMap::new();
    let mut f_score: HashMap<VertexId, f64> = HashMap::new();
    let mut open: HashMap<VertexId, u64> = HashMap::new();
    let mut came_from: BTreeMap<VertexId, CameFrom> = BTreeMap::new();
    let mut visited_order: Vec<VertexId> = Vec::new();
    let mut frontier = BinaryHeap::new();
    let mut next_seq: u64 = 1;

    let start_estimate = heuristic(start);
    g_score.insert(start, 0.0);
    f_score.insert(start, start_estimate);
    open.insert(start, 0);
    frontier.push(FrontierEntry::new(start, start_estimate, 0));

    while let Some(entry) = frontier.pop() {
        if open.get(&entry.node) != Some(&entry.seq) {
            continue;
        }
        let current_estimate = f_score.get(&entry.node).copied().unwrap_or(f64::INFINITY);
        if current_estimate.total_cmp(&entry.estimate.0) != Ordering::Equal {
            continue;
        }

        let current = entry.node;
        let current_cost = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        open.remove(&current);
        visited_order.push(current);
        trace!(vertex = current, cost = current_cost, estimate = current_estimate, "settled");

        let flow = observer(SearchStep {
            vertex: current,
            settled: visited_order.len(),
            cost: current_cost,
        });

        if current == goal {
            return SearchResult {
                status: SearchStatus::Found,
                path: Some(reconstruct_path(start, goal, &came_from)),
                visited_order,
                came_from,
            };
        }

        if flow.is_break() {
            return SearchResult {
                status: SearchStatus::Cancelled,
                path: None,
                visited_order,
                came_from,
            };
        }

        for neighbor in graph.neighbours(current) {
            let tentative = current_cost + neighbor.weight;
            let known = g_score.get(&neighbor.to).copied().unwrap_or(f64::INFINITY);
            if tentative < known {
                came_from.insert(
                    neighbor.to,
                    CameFrom {
                        prev: current,
                        edge_id: neighbor.edge_id,
                    },
                );
                g_score.insert(neighbor.to, tentative);
                let estimate = tentative + heuristic(neighbor.to);
                f_score.insert(neighbor.to, estimate);
                let seq = *open.entry(neighbor.to).or_insert_with(|| {
                    let seq = next_seq;
                    next_seq += 1;
                    seq
                });
                frontier.push(FrontierEntry::new(neighbor.to, estimate, seq));
            }
        }
    }

    SearchResult {
        status: SearchStatus::Exhausted,
        path: None,
        visited_order,
        came_from,
    }
}

/// Walk `came_from` back from `goal` to `start`.
///
/// Stops early, returning a path that does not begin at `start`, when a
/// vertex has no predecessor entry or the chain loops back on itself.
pub fn reconstruct_path(
    start: VertexId,
    goal: VertexId,
    came_from: &BTreeMap<VertexId, CameFrom>,
) -> PathResult {
    let mut vertex_path = vec![goal];
    let mut edge_path = Vec::new();
    let mut current = goal;

    while current != start {
        let Some(step) = came_from.get(&current) else {
            warn!(start, goal, stuck_at = current, "predecessor chain ended before start");
            break;
        };
        if edge_path.len() > came_from.len() {
            warn!(start, goal, "predecessor chain contains a cycle");
            break;
        }
        edge_path.push(step.edge_id);
        current = step.prev;
        vertex_path.push(current);
    }

    vertex_path.reverse();
    edge_path.reverse();
    PathResult {
        vertex_path,
        edge_path,
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    node: VertexId,
    estimate: FloatOrd,
    seq: u64,
}

impl FrontierEntry {
    fn new(node: VertexId, estimate: f64, seq: u64) -> Self {
        Self {
            node,
            estimate: FloatOrd(estimate),
            seq,
        }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate, then first-seen.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
