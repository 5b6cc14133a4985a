//! Describe command handler: vertex and edge sets, relations and degrees.

use std::path::Path;

use anyhow::Result;

use mapgraph_lib::GraphDescription;

use super::load;
use crate::output::{print_json, OutputFormat};

/// Name given to the graph in the set notation.
const GRAPH_SET_NAME: &str = "G";

pub fn handle_describe(map_path: &Path, format: OutputFormat) -> Result<()> {
    let map = load(map_path)?;
    let description = GraphDescription::from_map(&map);

    if format.is_json() {
        print_json(&description)
    } else {
        print!("{}", description.render(GRAPH_SET_NAME));
        Ok(())
    }
}
