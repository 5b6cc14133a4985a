//! Route command handler.

use std::ops::ControlFlow;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use tracing::debug;

use mapgraph_lib::{
    a_star_with_observer, build_graph, Error as LibError, GeodesicHeuristic, MapData,
    RouteRenderMode, RouteSummary, SearchResult, SearchStatus, VertexId,
};

use super::{load, resolve_vertex};
use crate::output::{print_json, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    /// Wall-clock budget for the search; unlimited when absent.
    pub budget_ms: Option<u64>,
}

pub fn handle_route(map_path: &Path, args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let map = load(map_path)?;
    let summary = plan_route(&map, args)?;

    if format.is_json() {
        print_json(&summary)?;
    } else {
        print!("{}", summary.render(RouteRenderMode::PlainText));
    }
    Ok(())
}

/// Resolve the endpoints, run A* and summarise the path.
pub fn plan_route(map: &MapData, args: &RouteCommandArgs) -> Result<RouteSummary> {
    let start = resolve_vertex(map, &args.from)?;
    let goal = resolve_vertex(map, &args.to)?;
    let budget = args.budget_ms.map(Duration::from_millis);

    let result = search(map, start, goal, budget);
    match result.status {
        SearchStatus::Found => {}
        SearchStatus::Exhausted => {
            return Err(LibError::RouteNotFound {
                start: args.from.clone(),
                goal: args.to.clone(),
            }
            .into())
        }
        SearchStatus::Cancelled => bail!(
            "search budget of {} ms exhausted after {} vertices",
            args.budget_ms.unwrap_or_default(),
            result.visited_order.len()
        ),
    }

    let path = result.path.unwrap_or_default();
    Ok(RouteSummary::from_path(map, &path)?)
}

/// Run A* with the geodesic heuristic, stopping once `budget` has elapsed.
pub fn search(
    map: &MapData,
    start: VertexId,
    goal: VertexId,
    budget: Option<Duration>,
) -> SearchResult {
    let graph = build_graph(map);
    let heuristic = GeodesicHeuristic::new(map, goal);
    let started = Instant::now();

    let result = a_star_with_observer(
        start,
        goal,
        &graph,
        |vertex| heuristic.estimate(vertex),
        |_| match budget {
            Some(limit) if started.elapsed() >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        },
    );
    debug!(
        status = ?result.status,
        visited = result.visited_order.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );
    result
}
