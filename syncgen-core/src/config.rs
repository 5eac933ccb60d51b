//! Project configuration — `ansvia-vscode.yaml`.
//!
//! # File layout
//!
//! ```yaml
//! sync_gen:
//!   error_code:
//!     src: src/error_code.rs
//!     outs:
//!       - "js:out/error_code.js"
//!       - "dart:lib/error_code.dart"
//! ```
//!
//! A missing file or a missing `sync_gen.error_code` section means the
//! feature is simply not configured for this workspace — that is `Ok(None)`,
//! not an error. Only unreadable or malformed YAML is surfaced.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::TargetSpec;

/// Name of the config file, looked up directly under the workspace root.
pub const CONFIG_FILE: &str = "ansvia-vscode.yaml";

// ---------------------------------------------------------------------------
// Raw file shape (serde)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ConfigFile {
    sync_gen: Option<SyncGenSection>,
}

#[derive(Debug, Deserialize)]
struct SyncGenSection {
    error_code: Option<ErrorCodeSection>,
}

#[derive(Debug, Deserialize)]
struct ErrorCodeSection {
    src: PathBuf,
    #[serde(default)]
    outs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Resolved `sync_gen.error_code` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncGenConfig {
    /// Source file to scan, relative to the workspace root.
    pub source: PathBuf,
    /// Output targets in declaration order; unrecognized prefixes are dropped.
    pub targets: Vec<TargetSpec>,
}

/// Load `<root>/ansvia-vscode.yaml` and resolve the `sync_gen.error_code`
/// section.
pub fn load_at(root: &Path) -> Result<Option<SyncGenConfig>, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let file: ConfigFile =
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })?;

    let Some(section) = file.sync_gen.and_then(|s| s.error_code) else {
        return Ok(None);
    };

    let targets = section
        .outs
        .iter()
        .filter_map(|raw| match TargetSpec::parse(raw) {
            Some(spec) => Some(spec),
            None => {
                tracing::debug!("ignoring output entry with unknown prefix: {raw}");
                None
            }
        })
        .collect();

    Ok(Some(SyncGenConfig {
        source: section.src,
        targets,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TargetKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(root: &Path, yaml: &str) {
        fs::write(root.join(CONFIG_FILE), yaml).expect("write config");
    }

    #[test]
    fn missing_file_is_not_configured() {
        let root = TempDir::new().expect("root");
        let loaded = load_at(root.path()).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn missing_section_is_not_configured() {
        let root = TempDir::new().expect("root");
        write_config(root.path(), "page_gen:\n  enabled: true\n");
        let loaded = load_at(root.path()).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn full_section_resolves_source_and_targets() {
        let root = TempDir::new().expect("root");
        write_config(
            root.path(),
            concat!(
                "sync_gen:\n",
                "  error_code:\n",
                "    src: src/error_code.rs\n",
                "    outs:\n",
                "      - \"js:out/error_code.js\"\n",
                "      - \"dart:lib/error_code.dart\"\n",
            ),
        );
        let cfg = load_at(root.path()).expect("load").expect("configured");
        assert_eq!(cfg.source, PathBuf::from("src/error_code.rs"));
        assert_eq!(cfg.targets.len(), 2);
        assert_eq!(cfg.targets[0].kind, TargetKind::Js);
        assert_eq!(cfg.targets[1].kind, TargetKind::Dart);
        assert_eq!(cfg.targets[1].out_path, PathBuf::from("lib/error_code.dart"));
    }

    #[test]
    fn unknown_out_prefixes_are_dropped_not_fatal() {
        let root = TempDir::new().expect("root");
        write_config(
            root.path(),
            concat!(
                "sync_gen:\n",
                "  error_code:\n",
                "    src: src/error_code.rs\n",
                "    outs:\n",
                "      - \"kotlin:src/ErrorCode.kt\"\n",
                "      - \"js:out/error_code.js\"\n",
            ),
        );
        let cfg = load_at(root.path()).expect("load").expect("configured");
        assert_eq!(cfg.targets.len(), 1);
        assert_eq!(cfg.targets[0].kind, TargetKind::Js);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let root = TempDir::new().expect("root");
        write_config(root.path(), "sync_gen: [not, a, mapping\n");
        let err = load_at(root.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
