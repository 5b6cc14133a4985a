//! Matrix command handler.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use mapgraph_lib::{
    adjacency_matrix, incidence_matrix, write_adjacency_csv, write_incidence_csv, MapData,
};

use super::load;
use crate::output::{write_json, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixKind {
    /// Vertex-by-vertex edge weights.
    Adjacency,
    /// Vertex-by-edge membership.
    Incidence,
}

#[derive(Debug, Serialize)]
struct MatrixReport<T> {
    kind: MatrixKind,
    rows: Vec<String>,
    columns: Vec<String>,
    values: Vec<Vec<T>>,
}

pub fn handle_matrix(
    map_path: &Path,
    kind: MatrixKind,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let map = load(map_path)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_matrix(&map, kind, format, &mut writer)?;
            writer.flush()?;
            info!("wrote {kind:?} matrix to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_matrix(&map, kind, format, &mut writer)?;
            if !format.is_json() {
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

/// Write the requested matrix as CSV, or as JSON with row and column names.
pub fn write_matrix<W: Write>(
    map: &MapData,
    kind: MatrixKind,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    let rows: Vec<String> = map.vertices.iter().map(|v| v.name.clone()).collect();

    match (kind, format) {
        (MatrixKind::Adjacency, OutputFormat::Text) => write_adjacency_csv(map, writer)?,
        (MatrixKind::Incidence, OutputFormat::Text) => write_incidence_csv(map, writer)?,
        (MatrixKind::Adjacency, OutputFormat::Json) => write_json(
            &MatrixReport {
                kind,
                columns: rows.clone(),
                rows,
                values: adjacency_matrix(map),
            },
            writer,
        )?,
        (MatrixKind::Incidence, OutputFormat::Json) => write_json(
            &MatrixReport {
                kind,
                rows,
                columns: map.edges.iter().map(|e| e.name.clone()).collect(),
                values: incidence_matrix(map),
            },
            writer,
        )?,
    }
    Ok(())
}
