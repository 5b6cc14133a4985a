mod common;

use common::campus;

#[test]
fn vertex_lookup_accepts_names_labels_and_ids() {
    let map = campus();

    assert_eq!(map.vertex_id_by_name("V3"), Some(2));
    assert_eq!(map.vertex_id_by_name("Library"), Some(1));
    assert_eq!(map.vertex_id_by_name("  library "), Some(1));
    assert_eq!(map.vertex_id_by_name("4"), Some(4));
    assert_eq!(map.vertex_id_by_name("40"), None);
    assert_eq!(map.vertex_id_by_name("Planetarium"), None);
}

#[test]
fn fuzzy_matches_returns_similar_labels() {
    let map = campus();

    let typo = map.fuzzy_vertex_matches("Libary", 3);
    assert!(typo.contains(&"Library".to_string()), "got {typo:?}");

    let partial = map.fuzzy_vertex_matches("Cafeteri", 3);
    assert_eq!(partial.first().map(String::as_str), Some("Cafeteria"));
}

#[test]
fn fuzzy_matches_respects_limit() {
    let map = campus();
    assert!(map.fuzzy_vertex_matches("V", 2).len() <= 2);
}

#[test]
fn fuzzy_matches_filters_low_similarity() {
    let map = campus();
    assert!(map.fuzzy_vertex_matches("CompletelyWrongXYZ", 3).is_empty());
}

#[test]
fn unknown_vertex_error_includes_suggestions() {
    let map = campus();
    let name = "Libary";
    let err = mapgraph_lib::Error::UnknownVertex {
        name: name.to_string(),
        suggestions: map.fuzzy_vertex_matches(name, 3),
    };

    let message = err.to_string();
    assert!(message.contains("unknown vertex: Libary"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Library"));
}
