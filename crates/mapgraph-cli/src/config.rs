//! Resolution of the map file the CLI operates on.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Environment variable consulted when `--map` is not given.
pub const MAP_ENV_VAR: &str = "MAPGRAPH_MAP";

/// Resolve the map path from the command-line flag, then [`MAP_ENV_VAR`].
pub fn resolve_map_path(flag: Option<&Path>) -> Result<PathBuf> {
    resolve_map_path_from(flag, std::env::var_os(MAP_ENV_VAR))
}

/// Same as [`resolve_map_path`] with the environment value passed in.
pub fn resolve_map_path_from(flag: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => bail!("no map file configured; pass --map <PATH> or set {MAP_ENV_VAR}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_environment() {
        let resolved = resolve_map_path_from(
            Some(Path::new("flag.geojson")),
            Some(OsString::from("env.geojson")),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("flag.geojson"));
    }

    #[test]
    fn environment_used_without_flag() {
        let resolved = resolve_map_path_from(None, Some(OsString::from("env.geojson"))).unwrap();
        assert_eq!(resolved, PathBuf::from("env.geojson"));
    }

    #[test]
    fn missing_configuration_is_an_error() {
        let err = resolve_map_path_from(None, None).unwrap_err();
        assert!(err.to_string().contains(MAP_ENV_VAR));

        let empty = resolve_map_path_from(None, Some(OsString::new())).unwrap_err();
        assert!(empty.to_string().contains("--map"));
    }
}
