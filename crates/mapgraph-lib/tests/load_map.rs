mod common;

use mapgraph_lib::{parse_map, read_map, Coordinates, Endpoint, Error, MapData};

use common::{campus, campus_path};

#[test]
fn loads_points_and_lines_from_fixture() {
    let map = campus();

    assert_eq!(map.vertices.len(), 6, "polygon features are skipped");
    assert_eq!(map.edges.len(), 6);

    let names: Vec<_> = map.vertices.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["V1", "V2", "V3", "V4", "V5", "V6"]);
    assert_eq!(map.vertices[0].label, "Main Gate");
    assert_eq!(map.vertices[0].coordinates, Coordinates::new(-33.0, -70.0));
    assert!(map.vertices.iter().enumerate().all(|(i, v)| v.id == i));

    let edge_names: Vec<_> = map.edges.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(edge_names, vec!["E1", "E2", "E3", "E4", "E5", "E6"]);
    assert_eq!(map.edges[0].label, "Main path");
}

#[test]
fn edge_endpoints_follow_polyline_direction() {
    let map = campus();

    let endpoints: Vec<_> = map.edges.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(
        endpoints,
        vec![(0, 1), (1, 2), (3, 2), (0, 3), (1, 4), (4, 2)]
    );
}

#[test]
fn edge_weights_are_rounded_polyline_lengths() {
    let map = campus();

    let weights: Vec<_> = map.edges.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![93.0, 111.0, 93.0, 111.0, 109.0, 109.0]);
    assert!(map.edges.iter().all(|e| e.weight.fract() == 0.0));
}

#[test]
fn multi_segment_weight_uses_every_segment() {
    let input = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "name": "A" }, "geometry": { "type": "Point", "coordinates": [0.0, 0.0] } },
            { "type": "Feature", "properties": { "name": "B" }, "geometry": { "type": "Point", "coordinates": [0.001, 0.001] } },
            { "type": "Feature", "properties": { "name": "Dogleg" }, "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [0.001, 0.0], [0.001, 0.001]] } }
        ]
    }"#;
    let map = parse_map(input).expect("valid map");

    // Two legs of ~111.19 m each, not the ~157 m diagonal.
    assert_eq!(map.edges[0].weight, 222.0);
}

#[test]
fn missing_to_endpoint_aborts_ingestion() {
    let path = common::fixtures_dir().join("broken_endpoint.geojson");
    let err = mapgraph_lib::load_map(&path).expect_err("dangling edge");

    match &err {
        Error::MissingEndpoint {
            edge,
            endpoint,
            label,
            ..
        } => {
            assert_eq!(*edge, 0);
            assert_eq!(*endpoint, Endpoint::To);
            assert_eq!(label, "Dangling path");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("'to' vertex not found"));
}

#[test]
fn missing_from_endpoint_is_reported() {
    let input = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "name": "A" }, "geometry": { "type": "Point", "coordinates": [1.0, 1.0] } },
            { "type": "Feature", "properties": { "name": "L" }, "geometry": { "type": "LineString", "coordinates": [[1.0000001, 1.0], [1.0, 1.0]] } }
        ]
    }"#;
    let err = parse_map(input).expect_err("no tolerance is applied");
    assert!(matches!(
        err,
        Error::MissingEndpoint {
            endpoint: Endpoint::From,
            ..
        }
    ));
}

#[test]
fn coincident_vertices_resolve_to_lowest_id() {
    let input = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "name": "First" }, "geometry": { "type": "Point", "coordinates": [2.0, 2.0] } },
            { "type": "Feature", "properties": { "name": "Twin" }, "geometry": { "type": "Point", "coordinates": [2.0, 2.0] } },
            { "type": "Feature", "properties": { "name": "Loop" }, "geometry": { "type": "LineString", "coordinates": [[2.0, 2.0], [2.0, 2.0]] } }
        ]
    }"#;
    let map = parse_map(input).expect("valid map");

    assert_eq!(map.vertices.len(), 2, "no deduplication");
    assert_eq!((map.edges[0].from, map.edges[0].to), (0, 0));
    assert_eq!(map.edges[0].weight, 0.0, "zero-length edges are kept");
}

#[test]
fn short_line_string_is_invalid() {
    let input = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "name": "Stub" }, "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0]] } }
        ]
    }"#;
    let err = parse_map(input).expect_err("single-point line");
    assert!(matches!(err, Error::InvalidGeometry { index: 0, .. }));
}

#[test]
fn missing_name_falls_back_to_generated_name() {
    let input = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": {}, "geometry": { "type": "Point", "coordinates": [0.0, 0.0] } },
            { "type": "Feature", "properties": null, "geometry": null }
        ]
    }"#;
    let map = parse_map(input).expect("valid map");
    assert_eq!(map.vertices.len(), 1);
    assert_eq!(map.vertices[0].label, "V1");
}

#[test]
fn bare_geometry_becomes_single_vertex() {
    let map = parse_map(r#"{ "type": "Point", "coordinates": [10.5, 20.25] }"#).expect("point");
    assert_eq!(map.vertices.len(), 1);
    assert_eq!(map.vertices[0].coordinates, Coordinates::new(20.25, 10.5));
}

#[test]
fn reader_and_path_loading_agree() {
    let file = std::fs::File::open(campus_path()).expect("open fixture");
    let from_reader = read_map(file).expect("reader loads");
    assert_eq!(from_reader, campus());
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = mapgraph_lib::load_map(&dir.path().join("nope.geojson")).expect_err("missing");
    assert!(matches!(err, Error::MapNotFound { .. }));
}

#[test]
fn invalid_json_is_an_error() {
    let err = parse_map("{ not json").expect_err("garbage");
    assert!(matches!(err, Error::GeoJson(_)));
}

#[test]
fn empty_collection_is_an_empty_map() {
    let map = parse_map(r#"{ "type": "FeatureCollection", "features": [] }"#).expect("empty");
    assert_eq!(map, MapData::default());
}
