use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::map::EdgeId;

/// Convenient result alias for the map graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of an edge polyline failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Endpoint::From => "from",
            Endpoint::To => "to",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge polyline starts or ends at a position where no vertex exists.
    #[error("invalid edge data: '{endpoint}' vertex not found for edge {edge} ({label}) at ({lat}, {lon})")]
    MissingEndpoint {
        edge: EdgeId,
        label: String,
        endpoint: Endpoint,
        lat: f64,
        lon: f64,
    },

    /// A feature geometry could not be turned into a vertex or edge.
    #[error("invalid geometry in feature {index}: {message}")]
    InvalidGeometry { index: usize, message: String },

    /// Raised when a vertex reference could not be resolved.
    #[error("unknown vertex: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route connects the two vertices.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a summary is requested for a search that produced no path.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when the map file could not be opened.
    #[error("map not found at {path}")]
    MapNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for GeoJSON parsing errors.
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// Wrapper for CSV writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
