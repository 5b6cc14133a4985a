//! Dense incidence and adjacency matrices plus their CSV rendering.
//!
//! Both builders are pure functions of the vertex and edge lists and are
//! recomputed on every call.

use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::error::Result;
use crate::map::{MapData, Vertex};

/// `|V| × |E|` matrix with a 1 where the vertex is an endpoint of the edge.
///
/// Rows follow vertex id and columns follow edge id. Edges that reference a
/// vertex or carry an id outside the dense range are ignored.
pub fn incidence_matrix(map: &MapData) -> Vec<Vec<u8>> {
    let mut matrix = vec![vec![0u8; map.edges.len()]; map.vertices.len()];

    for edge in &map.edges {
        for endpoint in [edge.from, edge.to] {
            if let Some(cell) = matrix
                .get_mut(endpoint)
                .and_then(|row| row.get_mut(edge.id))
            {
                *cell = 1;
            }
        }
    }

    matrix
}

/// `|V| × |V|` matrix holding the weight of the edge between two vertices.
///
/// Assignment is symmetric. When several edges join the same pair, the edge
/// processed last (highest position in the edge list) overwrites the others.
pub fn adjacency_matrix(map: &MapData) -> Vec<Vec<f64>> {
    let size = map.vertices.len();
    let mut matrix = vec![vec![0.0; size]; size];

    for edge in &map.edges {
        if edge.from >= size || edge.to >= size {
            continue;
        }
        matrix[edge.from][edge.to] = edge.weight;
        matrix[edge.to][edge.from] = edge.weight;
    }

    matrix
}

/// Write the incidence matrix as CSV: a header of edge names and one row per vertex.
pub fn write_incidence_csv<W: Write>(map: &MapData, writer: W) -> Result<()> {
    let header = map.edges.iter().map(|edge| edge.name.as_str());
    let rows = incidence_matrix(map)
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    write_labelled_csv(&map.vertices, header, rows, writer)
}

/// Write the adjacency matrix as CSV: a header of vertex names and one row per vertex.
pub fn write_adjacency_csv<W: Write>(map: &MapData, writer: W) -> Result<()> {
    let header = map.vertices.iter().map(|vertex| vertex.name.as_str());
    let rows = adjacency_matrix(map)
        .into_iter()
        .map(|row| row.into_iter().map(format_number).collect::<Vec<_>>());
    write_labelled_csv(&map.vertices, header, rows, writer)
}

/// Incidence matrix rendered to a CSV string.
pub fn incidence_csv(map: &MapData) -> Result<String> {
    let mut buffer = Vec::new();
    write_incidence_csv(map, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Adjacency matrix rendered to a CSV string.
pub fn adjacency_csv(map: &MapData) -> Result<String> {
    let mut buffer = Vec::new();
    write_adjacency_csv(map, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_labelled_csv<'a, W, H, R>(
    vertices: &[Vertex],
    header: H,
    rows: R,
    mut writer: W,
) -> Result<()>
where
    W: Write,
    H: Iterator<Item = &'a str>,
    R: Iterator<Item = Vec<String>>,
{
    let mut rendered: Vec<u8> = Vec::new();
    {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut rendered);

        let mut header_record = vec![String::new()];
        header_record.extend(header.map(str::to_string));
        if header_record.len() == 1 {
            // A record holding one empty field is written as `""`.
            header_record.push(String::new());
        }
        csv_writer.write_record(&header_record)?;

        for (index, row) in rows.enumerate() {
            let name = vertices
                .get(index)
                .map(|vertex| vertex.name.clone())
                .unwrap_or_default();
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(name);
            record.extend(row);
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
    }

    // The csv writer terminates every record; the export keeps the last row unterminated.
    if rendered.last() == Some(&b'\n') {
        rendered.pop();
    }

    writer.write_all(&rendered)?;
    writer.flush()?;
    Ok(())
}

/// Render whole numbers without a fractional part (`10` rather than `10.0`).
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
