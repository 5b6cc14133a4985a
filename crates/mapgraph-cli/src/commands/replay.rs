//! Replay command handler: shows the order in which A* settled vertices.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use mapgraph_lib::{replay_frames, MapData, ReplayFrame, SearchStatus, VertexId};

use super::route::search;
use super::{load, resolve_vertex};
use crate::output::{print_json, OutputFormat};
use crate::terminal::{format_meters, ColorPalette};

#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    start: VertexId,
    goal: VertexId,
    status: SearchStatus,
    frames: &'a [ReplayFrame],
}

pub fn handle_replay(map_path: &Path, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let map = load(map_path)?;
    let start = resolve_vertex(&map, from)?;
    let goal = resolve_vertex(&map, to)?;

    let result = search(&map, start, goal, None);
    let frames = replay_frames(&map, start, &result);

    if format.is_json() {
        return print_json(&ReplayReport {
            start,
            goal,
            status: result.status,
            frames: &frames,
        });
    }

    print!(
        "{}",
        render_replay(&map, start, goal, result.status, &frames, ColorPalette::detect())
    );
    Ok(())
}

/// One line per settled vertex, followed by the outcome.
pub fn render_replay(
    map: &MapData,
    start: VertexId,
    goal: VertexId,
    status: SearchStatus,
    frames: &[ReplayFrame],
    palette: ColorPalette,
) -> String {
    let mut buffer = String::new();
    for frame in frames {
        let (tag, color) = if frame.vertex == start {
            ("START", palette.tag_start)
        } else if frame.vertex == goal {
            ("GOAL ", palette.tag_goal)
        } else {
            ("VISIT", palette.tag_visit)
        };
        let name = map
            .vertex(frame.vertex)
            .map(|vertex| vertex.name.as_str())
            .unwrap_or("?");
        let label = frame.label.as_deref().unwrap_or(name);
        let path_length = frame
            .partial_path
            .as_ref()
            .map(|path| path.total_weight(map))
            .unwrap_or(f64::INFINITY);

        let _ = writeln!(
            buffer,
            "{color}{tag}{reset} {:>3}. {bold}{label}{reset} {gray}({name}){reset} path {}",
            frame.step,
            format_meters(path_length),
            reset = palette.reset,
            bold = palette.white_bold,
            gray = palette.gray,
        );
    }

    let outcome = match status {
        SearchStatus::Found => "goal reached",
        SearchStatus::Exhausted => "goal not reachable",
        SearchStatus::Cancelled => "search cancelled",
    };
    let _ = writeln!(buffer, "{} vertices settled, {outcome}", frames.len());
    buffer
}
