use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::map::{EdgeId, MapData, VertexId};
use crate::search::PathResult;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Edge used to arrive at this vertex; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<EdgeId>,
    /// Weight of the incoming edge (0 for the first step).
    pub weight: f64,
    /// Running total of weights up to and including this step.
    pub cumulative: f64,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a found path that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub hops: usize,
    pub total_weight: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`PathResult`] into a summary with resolved labels and weights.
    pub fn from_path(map: &MapData, path: &PathResult) -> Result<Self> {
        let (Some(&first), Some(&last)) = (path.vertex_path.first(), path.vertex_path.last())
        else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut cumulative = 0.0;
        let steps = path
            .vertex_path
            .iter()
            .enumerate()
            .map(|(index, vertex_id)| {
                let edge_id = index
                    .checked_sub(1)
                    .and_then(|previous| path.edge_path.get(previous))
                    .copied();
                let weight = edge_id
                    .and_then(|id| map.edge(id))
                    .map(|edge| edge.weight)
                    .unwrap_or(0.0);
                cumulative += weight;
                RouteStep {
                    index,
                    id: *vertex_id,
                    label: map.vertex_label(*vertex_id).map(str::to_string),
                    edge_id,
                    weight,
                    cumulative,
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            hops: path.hop_count(),
            total_weight: cumulative,
            start: RouteEndpoint {
                id: first,
                label: map.vertex_label(first).map(str::to_string),
            },
            goal: RouteEndpoint {
                id: last,
                label: map.vertex_label(last).map(str::to_string),
            },
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {} m)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_weight
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}. {} ({}) {:>8}",
                step.index + 1,
                step.display_name(),
                step.id,
                step.weight
            );
        }
        let _ = writeln!(buffer, "Total: {} m", self.total_weight);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, `{} m`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.total_weight
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`) +{} m",
                step.index + 1,
                step.display_name(),
                step.id,
                step.weight
            );
        }
        buffer
    }
}
