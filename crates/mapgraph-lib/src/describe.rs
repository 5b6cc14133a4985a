//! Formal description of a map graph: vertex set, edge set, relations and degrees.

use std::fmt::Write;

use serde::Serialize;

use crate::map::MapData;

/// An edge written as the unordered pair of its endpoint names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRelation {
    pub edge: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexSummary {
    pub name: String,
    pub label: String,
    pub degree: usize,
}

/// Snapshot of the graph's sets, ready for display or serialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexSummary>,
    pub edges: Vec<String>,
    pub relations: Vec<EdgeRelation>,
}

impl GraphDescription {
    pub fn from_map(map: &MapData) -> Self {
        let name_of = |id| {
            map.vertex(id)
                .map(|vertex| vertex.name.clone())
                .unwrap_or_else(|| format!("#{id}"))
        };

        Self {
            vertex_count: map.vertices.len(),
            edge_count: map.edges.len(),
            vertices: map
                .vertices
                .iter()
                .map(|vertex| VertexSummary {
                    name: vertex.name.clone(),
                    label: vertex.label.clone(),
                    degree: map.degree(vertex.id),
                })
                .collect(),
            edges: map.edges.iter().map(|edge| edge.name.clone()).collect(),
            relations: map
                .edges
                .iter()
                .map(|edge| EdgeRelation {
                    edge: edge.name.clone(),
                    from: name_of(edge.from),
                    to: name_of(edge.to),
                })
                .collect(),
        }
    }

    pub fn render(&self, set_name: &str) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} vertices, {} edges",
            self.vertex_count, self.edge_count
        );
        let names = self
            .vertices
            .iter()
            .map(|vertex| vertex.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(buffer, "{set_name}(V) = {{ {names} }}");
        let _ = writeln!(buffer, "{set_name}(E) = {{ {} }}", self.edges.join(", "));

        let _ = writeln!(buffer, "\nRelations:");
        for relation in &self.relations {
            let _ = writeln!(
                buffer,
                "  {} = {{ {}, {} }}",
                relation.edge, relation.from, relation.to
            );
        }

        let _ = writeln!(buffer, "\nVertices:");
        for vertex in &self.vertices {
            let _ = writeln!(
                buffer,
                "  {} ({}) grd = {}",
                vertex.name, vertex.label, vertex.degree
            );
        }
        buffer
    }
}
