//! Step-by-step replay of a finished search.
//!
//! Frame `n` describes the search after its `n`-th selection: the vertex just
//! settled, the partial path leading to it and every edge revealed so far.
//! Frames are derived from the final predecessor map of the search.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::map::{EdgeId, MapData, VertexId};
use crate::search::{reconstruct_path, PathResult, SearchResult};

/// Search state after a given number of selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    /// 1-based count of settled vertices.
    pub step: usize,
    pub vertex: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Edge through which `vertex` was reached, absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<EdgeId>,
    /// Weight of `edge_id`, or 0.
    pub weight: f64,
    /// Sum of `weight` over all frames up to this one.
    pub explored_weight: f64,
    /// Path from the start to `vertex`, when the predecessor map reaches it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_path: Option<PathResult>,
    /// Edges used to reach any vertex settled so far, ascending.
    pub revealed_edges: Vec<EdgeId>,
}

/// Build every frame of a search, in settle order.
pub fn replay_frames(map: &MapData, start: VertexId, result: &SearchResult) -> Vec<ReplayFrame> {
    let mut frames = Vec::with_capacity(result.visited_order.len());
    let mut revealed: BTreeSet<EdgeId> = BTreeSet::new();
    let mut explored_weight = 0.0;

    for (index, &vertex) in result.visited_order.iter().enumerate() {
        let link = result.came_from.get(&vertex);
        let edge_id = link.map(|step| step.edge_id);
        let weight = edge_id
            .and_then(|id| map.edge(id))
            .map(|edge| edge.weight)
            .unwrap_or(0.0);
        explored_weight += weight;
        if let Some(edge_id) = edge_id {
            revealed.insert(edge_id);
        }

        let partial_path = if vertex == start {
            Some(PathResult {
                vertex_path: vec![start],
                edge_path: Vec::new(),
            })
        } else if link.is_some() {
            Some(reconstruct_path(start, vertex, &result.came_from))
        } else {
            None
        };

        frames.push(ReplayFrame {
            step: index + 1,
            vertex,
            label: map.vertex_label(vertex).map(str::to_string),
            edge_id,
            weight,
            explored_weight,
            partial_path,
            revealed_edges: revealed.iter().copied().collect(),
        });
    }

    frames
}

/// Frame after `settled` selections, if the search got that far.
pub fn replay_frame(
    map: &MapData,
    start: VertexId,
    result: &SearchResult,
    settled: usize,
) -> Option<ReplayFrame> {
    if settled == 0 || settled > result.visited_order.len() {
        return None;
    }
    replay_frames(map, start, result).into_iter().nth(settled - 1)
}
