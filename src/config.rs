use serde::{Deserialize, Serialize};
use std::path::Path;

/// Knobs for the pairwise collision resolver. All three fields are always
/// in effect; there is no defaulting inside the resolver itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Relaxation pass budget. Zero or negative disables resolution.
    pub max_iterations: i32,
    /// Minimum padded overlap area (square pixels) that counts as a
    /// collision.
    pub overlap_threshold: f32,
    /// Extra spacing added around every node before overlap is computed.
    pub margin: f32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 32,
            overlap_threshold: 0.5,
            margin: 8.0,
        }
    }
}

/// Knobs for the initial grid placement of unpositioned nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub column_gap: f32,
    pub row_gap: f32,
    /// Spacing dimensions for nodes that report no size at all.
    pub default_width: f32,
    pub default_height: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            column_gap: 80.0,
            row_gap: 40.0,
            default_width: 150.0,
            default_height: 60.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub resolve: ResolveConfig,
    pub placement: PlacementConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveConfigFile {
    max_iterations: Option<i32>,
    overlap_threshold: Option<f32>,
    margin: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlacementConfigFile {
    column_gap: Option<f32>,
    row_gap: Option<f32>,
    default_width: Option<f32>,
    default_height: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    resolve: Option<ResolveConfigFile>,
    placement: Option<PlacementConfigFile>,
}

/// Load a config file over the defaults. The file is JSON5 (comments and
/// trailing commas allowed) with camelCase keys; every field is optional.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(resolve) = parsed.resolve {
        if let Some(v) = resolve.max_iterations {
            config.resolve.max_iterations = v;
        }
        if let Some(v) = resolve.overlap_threshold {
            config.resolve.overlap_threshold = v;
        }
        if let Some(v) = resolve.margin {
            config.resolve.margin = v;
        }
    }
    if let Some(placement) = parsed.placement {
        if let Some(v) = placement.column_gap {
            config.placement.column_gap = v;
        }
        if let Some(v) = placement.row_gap {
            config.placement.row_gap = v;
        }
        if let Some(v) = placement.default_width {
            config.placement.default_width = v;
        }
        if let Some(v) = placement.default_height {
            config.placement.default_height = v;
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.resolve.max_iterations, 32);
        assert_eq!(config.resolve.overlap_threshold, 0.5);
        assert_eq!(config.resolve.margin, 8.0);
        assert_eq!(config.placement.column_gap, 80.0);
    }

    #[test]
    fn partial_file_layers_over_defaults() {
        let config = parse_config(
            r#"{
                // tighter packing for dense consoles
                resolve: { margin: 4, maxIterations: 64 },
                placement: { rowGap: 24 },
            }"#,
        )
        .unwrap();
        assert_eq!(config.resolve.margin, 4.0);
        assert_eq!(config.resolve.max_iterations, 64);
        assert_eq!(config.resolve.overlap_threshold, 0.5);
        assert_eq!(config.placement.row_gap, 24.0);
        assert_eq!(config.placement.column_gap, 80.0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_config("{ resolve: [1, 2, 3] }").is_err());
    }
}
