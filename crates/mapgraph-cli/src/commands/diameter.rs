//! Diameter command handler.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use mapgraph_lib::{build_graph, diameter, Diameter, MapData};

use super::load;
use crate::output::{print_json, OutputFormat};
use crate::terminal::format_meters;

#[derive(Debug, Serialize)]
struct DiameterReport<'a> {
    diameter: Diameter,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_label: Option<&'a str>,
}

pub fn handle_diameter(map_path: &Path, format: OutputFormat) -> Result<()> {
    let map = load(map_path)?;
    let result = diameter(&build_graph(&map));

    if format.is_json() {
        let (from_label, to_label) = match result {
            Diameter::Connected { from, to, .. } => (map.vertex_label(from), map.vertex_label(to)),
            _ => (None, None),
        };
        return print_json(&DiameterReport {
            diameter: result,
            from_label,
            to_label,
        });
    }

    println!("{}", render_diameter(&map, &result));
    Ok(())
}

pub fn render_diameter(map: &MapData, diameter: &Diameter) -> String {
    match *diameter {
        Diameter::Empty => "Diameter: map has no vertices".to_string(),
        Diameter::NotConnected => "Diameter: infinite (graph is not connected)".to_string(),
        Diameter::Connected { distance, from, to } => format!(
            "Diameter: {} between {} and {}",
            format_meters(distance),
            map.vertex_label(from).unwrap_or("?"),
            map.vertex_label(to).unwrap_or("?")
        ),
    }
}
