use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, DocsmithError};
use crate::utils::fs::read_file;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_docsmith.yml", "_docsmith.yaml", "_docsmith.toml"];

/// Load configuration from the working directory or explicit files.
///
/// Without explicit paths, the first candidate found in the working
/// directory is used; with explicit paths, files are loaded in order and
/// each later file replaces the previous result wholesale.
pub fn load_config<P: AsRef<Path>>(
    working_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    match config_files {
        Some(paths) => {
            for path in paths {
                debug!("Loading configuration from {}", path.display());
                config = parse_config_file(&path)?;
            }
        }
        None => {
            if let Some(path) = find_default_config_file(&working_dir) {
                debug!("Loading configuration from {}", path.display());
                config = parse_config_file(&path)?;
            } else {
                debug!("No configuration file found, using defaults");
            }
        }
    }

    validation::validate_config(&config)?;
    Ok(config)
}

/// Find the first candidate configuration file in the working directory
fn find_default_config_file<P: AsRef<Path>>(working_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| working_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<Config> {
    if !path.exists() {
        return Err(DocsmithError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = read_file(path)?;
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let config = match ext.as_str() {
        "yml" | "yaml" | "" => serde_yaml::from_str(&content).map_err(|e| {
            DocsmithError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        "toml" => toml::from_str(&content).map_err(|e| {
            DocsmithError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        "json" => serde_json::from_str(&content).map_err(|e| {
            DocsmithError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?,
        other => {
            return Err(DocsmithError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            ))
            .into());
        }
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.toc.container_id, "toc");
    }

    #[test]
    fn test_loads_yaml_candidate() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("_docsmith.yml"),
            "site_dir: public\nignore_class: no-toc\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.site_dir, PathBuf::from("public"));
        assert_eq!(config.ignore_class, "no-toc");
    }

    #[test]
    fn test_loads_toml_candidate() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("_docsmith.toml"),
            "site_dir = \"public\"\n\n[toc]\nlevels = \"h2,h4\"\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.site_dir, PathBuf::from("public"));
        assert_eq!(config.toc.levels, "h2,h4");
    }

    #[test]
    fn test_explicit_file_wins_over_candidates() {
        let dir = tempdir().unwrap();
        write_file(dir.path().join("_docsmith.yml"), "site_dir: ignored\n").unwrap();
        let custom = dir.path().join("custom.yaml");
        write_file(&custom, "site_dir: explicit\n").unwrap();

        let config = load_config(dir.path(), Some(vec![custom])).unwrap();

        assert_eq!(config.site_dir, PathBuf::from("explicit"));
    }

    #[test]
    fn test_invalid_config_rejected_at_load() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path().join("_docsmith.yml"),
            "toc:\n  levels: h9\n",
        )
        .unwrap();

        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yml");

        assert!(load_config(dir.path(), Some(vec![missing])).is_err());
    }
}
