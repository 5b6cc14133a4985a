//! GeoJSON ingestion.
//!
//! Point features become [`Vertex`] records and line features become [`Edge`]
//! records. Ids follow encounter order within each geometry kind, edge weights
//! are the rounded great-circle length of the polyline, and edge endpoints are
//! resolved to vertices by exact coordinate equality. Any unresolved endpoint
//! aborts the whole ingestion.

use std::fs;
use std::io::Read;
use std::path::Path;

use geojson::{Feature, GeoJson, Value};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{Endpoint, Error, Result};
use crate::map::{Coordinates, Edge, MapData, Vertex, VertexId};

/// Load and ingest a GeoJSON file from disk.
pub fn load_map(path: &Path) -> Result<MapData> {
    if !path.exists() {
        return Err(Error::MapNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "loaded map file");
    parse_map(&contents)
}

/// Ingest a GeoJSON document read from `reader`.
pub fn read_map<R: Read>(mut reader: R) -> Result<MapData> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_map(&contents)
}

/// Parse and ingest a GeoJSON document held in memory.
pub fn parse_map(input: &str) -> Result<MapData> {
    let document: GeoJson = input.parse()?;
    ingest_geojson(&document)
}

/// Ingest any GeoJSON root object.
///
/// A bare geometry is treated as a single feature without properties.
pub fn ingest_geojson(document: &GeoJson) -> Result<MapData> {
    match document {
        GeoJson::FeatureCollection(collection) => ingest_features(&collection.features),
        GeoJson::Feature(feature) => ingest_features(std::slice::from_ref(feature)),
        GeoJson::Geometry(geometry) => {
            let feature = Feature {
                bbox: None,
                geometry: Some(geometry.clone()),
                id: None,
                properties: None,
                foreign_members: None,
            };
            ingest_features(&[feature])
        }
    }
}

/// Ingest a list of features into a [`MapData`] snapshot.
pub fn ingest_features(features: &[Feature]) -> Result<MapData> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut lines: Vec<(usize, Option<String>, Vec<Coordinates>)> = Vec::new();

    for (index, feature) in features.iter().enumerate() {
        let Some(geometry) = feature.geometry.as_ref() else {
            debug!(index, "skipping feature without geometry");
            continue;
        };

        match &geometry.value {
            Value::Point(position) => {
                let id = vertices.len();
                let name = format!("V{}", id + 1);
                let label = feature_name(feature).unwrap_or_else(|| name.clone());
                vertices.push(Vertex {
                    id,
                    name,
                    label,
                    coordinates: to_coordinates(index, position)?,
                });
            }
            Value::LineString(positions) => {
                if positions.len() < 2 {
                    return Err(Error::InvalidGeometry {
                        index,
                        message: format!(
                            "line string needs at least two positions, found {}",
                            positions.len()
                        ),
                    });
                }
                let coordinates = positions
                    .iter()
                    .map(|position| to_coordinates(index, position))
                    .collect::<Result<Vec<_>>>()?;
                lines.push((index, feature_name(feature), coordinates));
            }
            other => {
                debug!(index, kind = geometry_kind(other), "skipping unsupported geometry");
            }
        }
    }

    let edges = lines
        .into_iter()
        .enumerate()
        .map(|(id, (index, label, coordinates))| {
            build_edge(&vertices, id, index, label, coordinates)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        "ingested map features"
    );

    Ok(MapData { vertices, edges })
}

/// Sum of the great-circle distances between consecutive polyline points, in meters.
pub fn polyline_length(points: &[Coordinates]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}

fn build_edge(
    vertices: &[Vertex],
    id: usize,
    index: usize,
    label: Option<String>,
    coordinates: Vec<Coordinates>,
) -> Result<Edge> {
    let name = format!("E{}", id + 1);
    let label = label.unwrap_or_else(|| name.clone());

    let (Some(first), Some(last)) = (coordinates.first(), coordinates.last()) else {
        return Err(Error::InvalidGeometry {
            index,
            message: "line string has no positions".to_string(),
        });
    };

    let from = match_vertex(vertices, first).ok_or_else(|| Error::MissingEndpoint {
        edge: id,
        label: label.clone(),
        endpoint: Endpoint::From,
        lat: first.lat,
        lon: first.lon,
    })?;
    let to = match_vertex(vertices, last).ok_or_else(|| Error::MissingEndpoint {
        edge: id,
        label: label.clone(),
        endpoint: Endpoint::To,
        lat: last.lat,
        lon: last.lon,
    })?;

    Ok(Edge {
        id,
        name,
        label,
        weight: polyline_length(&coordinates).round(),
        coordinates,
        from,
        to,
    })
}

/// First vertex (lowest id) sitting exactly on `point`.
fn match_vertex(vertices: &[Vertex], point: &Coordinates) -> Option<VertexId> {
    vertices
        .iter()
        .find(|vertex| vertex.coordinates.lat == point.lat && vertex.coordinates.lon == point.lon)
        .map(|vertex| vertex.id)
}

fn to_coordinates(index: usize, position: &[f64]) -> Result<Coordinates> {
    match position {
        [lon, lat, ..] => Ok(Coordinates::new(*lat, *lon)),
        _ => Err(Error::InvalidGeometry {
            index,
            message: format!(
                "position needs longitude and latitude, found {} value(s)",
                position.len()
            ),
        }),
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn feature_name(feature: &Feature) -> Option<String> {
    match feature.property("name")? {
        JsonValue::Null => None,
        JsonValue::String(name) => Some(name.clone()),
        other => Some(other.to_string()),
    }
}
