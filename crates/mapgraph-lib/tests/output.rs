mod common;

use mapgraph_lib::{
    a_star, build_graph, replay_frame, replay_frames, Error, GeodesicHeuristic, GraphDescription,
    PathResult, RouteRenderMode, RouteSummary, SearchResult,
};

use common::campus;

fn campus_search(start: usize, goal: usize) -> (mapgraph_lib::MapData, SearchResult) {
    let map = campus();
    let graph = build_graph(&map);
    let heuristic = GeodesicHeuristic::new(&map, goal);
    let result = a_star(start, goal, &graph, |id| heuristic.estimate(id));
    (map, result)
}

#[test]
fn summary_lists_steps_with_weights() {
    let (map, result) = campus_search(0, 4);
    let path = result.path.as_ref().expect("path exists");
    let summary = RouteSummary::from_path(&map, path).expect("summary");

    assert_eq!(summary.hops, 2);
    assert_eq!(summary.total_weight, 202.0);
    assert_eq!(summary.start.label.as_deref(), Some("Main Gate"));
    assert_eq!(summary.goal.label.as_deref(), Some("Lab"));

    let steps: Vec<_> = summary
        .steps
        .iter()
        .map(|s| (s.id, s.edge_id, s.weight, s.cumulative))
        .collect();
    assert_eq!(
        steps,
        vec![
            (0, None, 0.0, 0.0),
            (1, Some(0), 93.0, 93.0),
            (4, Some(4), 109.0, 202.0)
        ]
    );
}

#[test]
fn plain_rendering_mentions_every_label() {
    let (map, result) = campus_search(0, 4);
    let summary = RouteSummary::from_path(&map, result.path.as_ref().expect("path")).expect("summary");
    let text = summary.render(RouteRenderMode::PlainText);

    assert!(text.starts_with("Route: Main Gate -> Lab (2 hops, 202 m)"));
    assert!(text.contains("Library"));
    assert!(text.contains("Total: 202 m"));

    let rich = summary.render(RouteRenderMode::RichText);
    assert!(rich.contains("**Route**"));
}

#[test]
fn empty_path_cannot_be_summarised() {
    let err = RouteSummary::from_path(&campus(), &PathResult::default()).expect_err("empty");
    assert!(matches!(err, Error::EmptyRoutePlan));
}

#[test]
fn replay_walks_the_visitation_order() {
    let (map, result) = campus_search(0, 2);
    let frames = replay_frames(&map, 0, &result);

    let settled: Vec<_> = frames.iter().map(|f| f.vertex).collect();
    assert_eq!(settled, result.visited_order);

    let first = &frames[0];
    assert_eq!(first.step, 1);
    assert_eq!(first.edge_id, None);
    assert_eq!(first.partial_path.as_ref().map(|p| p.vertex_path.clone()), Some(vec![0]));
    assert!(first.revealed_edges.is_empty());

    let gym = &frames[2];
    assert_eq!(gym.vertex, 3);
    assert_eq!(gym.edge_id, Some(3));
    assert_eq!(gym.explored_weight, 93.0 + 111.0);
    assert_eq!(gym.revealed_edges, vec![0, 3]);
    assert_eq!(
        gym.partial_path.as_ref().map(|p| p.vertex_path.clone()),
        Some(vec![0, 3])
    );

    let last = frames.last().expect("frames");
    assert_eq!(last.vertex, 2);
    assert_eq!(last.partial_path.as_ref(), result.path.as_ref());
}

#[test]
fn replay_frame_bounds() {
    let (map, result) = campus_search(0, 2);

    assert!(replay_frame(&map, 0, &result, 0).is_none());
    assert!(replay_frame(&map, 0, &result, 5).is_none());
    let second = replay_frame(&map, 0, &result, 2).expect("second frame");
    assert_eq!(second.vertex, 1);
    assert_eq!(second.label.as_deref(), Some("Library"));
}

#[test]
fn description_counts_degrees() {
    let description = GraphDescription::from_map(&campus());

    assert_eq!(description.vertex_count, 6);
    assert_eq!(description.edge_count, 6);
    let degrees: Vec<_> = description.vertices.iter().map(|v| v.degree).collect();
    assert_eq!(degrees, vec![2, 3, 3, 2, 2, 0]);

    let relation = &description.relations[2];
    assert_eq!(
        (relation.edge.as_str(), relation.from.as_str(), relation.to.as_str()),
        ("E3", "V4", "V3")
    );

    let text = description.render("UPA");
    assert!(text.contains("UPA(V) = { V1, V2, V3, V4, V5, V6 }"));
    assert!(text.contains("E3 = { V4, V3 }"));
    assert!(text.contains("V2 (Library) grd = 3"));
}

#[test]
fn search_result_serialises() {
    let (_, result) = campus_search(0, 2);
    let json = serde_json::to_value(&result).expect("serialise");

    assert_eq!(json["status"], "found");
    assert_eq!(json["visited_order"], serde_json::json!([0, 1, 3, 2]));
    assert_eq!(json["path"]["edge_path"], serde_json::json!([0, 1]));
}
