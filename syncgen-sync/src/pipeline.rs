//! Sync pass pipeline: read source, extract, render, write all targets.

use std::path::{Path, PathBuf};

use syncgen_core::{SyncGenConfig, TargetSpec};

use crate::error::SyncError;
use crate::writer::{write_target, WriteOutcome};

/// Outcome of one complete sync pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassResult {
    /// One entry per configured target, in configuration order.
    pub writes: Vec<WriteOutcome>,
}

impl PassResult {
    /// True when at least one target write failed.
    pub fn has_failures(&self) -> bool {
        self.writes.iter().any(WriteOutcome::is_failure)
    }

    pub fn failed(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.writes.iter().filter(|w| w.is_failure())
    }
}

/// Extract the enum from `source_text` and render every target.
///
/// Pure planning half of the pass: returns `(relative output path, content)`
/// pairs in target order without touching the filesystem. An input with no
/// `ErrorCode` block still yields wrapper-only outputs for every target.
pub fn render_targets(source_text: &str, targets: &[TargetSpec]) -> Vec<(PathBuf, String)> {
    let def = syncgen_extract::extract(source_text);
    if def.is_empty() {
        tracing::warn!("no ErrorCode enum block found in source; emitting empty wrappers");
    }
    targets
        .iter()
        .map(|t| (t.out_path.clone(), syncgen_emit::render(&def, t.kind)))
        .collect()
}

/// Run one full sync pass for the workspace at `root`.
///
/// Reads `root/<source>`, renders every configured target, and writes each
/// result to `root/<out_path>`. An unreadable source aborts the pass before
/// any write; a failed target write is recorded in the result and does not
/// stop the remaining targets.
pub fn run_pass(
    root: &Path,
    config: &SyncGenConfig,
    dry_run: bool,
) -> Result<PassResult, SyncError> {
    let source_path = root.join(&config.source);
    let source_text =
        std::fs::read_to_string(&source_path).map_err(|e| SyncError::SourceUnreadable {
            path: source_path.clone(),
            source: e,
        })?;

    tracing::debug!("generating error codes from {}", source_path.display());

    let rendered = render_targets(&source_text, &config.targets);
    let mut writes = Vec::with_capacity(rendered.len());
    for (out_path, content) in rendered {
        writes.push(write_target(&root.join(out_path), &content, dry_run));
    }

    Ok(PassResult { writes })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SOURCE: &str = concat!(
        "pub enum ErrorCode {\n",
        "    /// Not found error\n",
        "    NOT_FOUND = 404,\n",
        "    SERVER_ERROR = 500,\n",
        "}\n",
    );

    const EXPECTED_JS: &str = concat!(
        "// This file is autogenerated by ansvia-vscode\n",
        "// don't edit by hand or your changes will lost without you knowing\n",
        "export default class ErrorCode {\n",
        "  / Not found error\n",
        "  static NOT_FOUND = 404;\n",
        "  static SERVER_ERROR = 500;\n",
        "}",
    );

    const EXPECTED_DART: &str = concat!(
        "// This file is autogenerated by ansvia-vscode\n",
        "// don't edit by hand or your changes will lost without you knowing\n",
        "class ErrorCode {\n",
        "  / Not found error\n",
        "  static const int notFound = 404;\n",
        "  static const int serverError = 500;\n",
        "}",
    );

    fn test_config() -> SyncGenConfig {
        SyncGenConfig {
            source: PathBuf::from("src/error_code.rs"),
            targets: vec![
                TargetSpec::parse("js:out/error_code.js").unwrap(),
                TargetSpec::parse("dart:lib/error_code.dart").unwrap(),
            ],
        }
    }

    fn seed_workspace(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("out")).unwrap();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::write(root.join("src/error_code.rs"), SOURCE).unwrap();
    }

    #[test]
    fn full_pass_writes_both_targets_byte_exact() {
        let tmp = TempDir::new().unwrap();
        seed_workspace(tmp.path());

        let result = run_pass(tmp.path(), &test_config(), false).expect("pass");
        assert!(!result.has_failures());
        assert_eq!(result.writes.len(), 2);

        let js = fs::read_to_string(tmp.path().join("out/error_code.js")).unwrap();
        let dart = fs::read_to_string(tmp.path().join("lib/error_code.dart")).unwrap();
        assert_eq!(js, EXPECTED_JS);
        assert_eq!(dart, EXPECTED_DART);
    }

    #[test]
    fn second_pass_on_unchanged_input_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        seed_workspace(tmp.path());
        let cfg = test_config();

        run_pass(tmp.path(), &cfg, false).expect("first pass");
        let js_1 = fs::read(tmp.path().join("out/error_code.js")).unwrap();
        run_pass(tmp.path(), &cfg, false).expect("second pass");
        let js_2 = fs::read(tmp.path().join("out/error_code.js")).unwrap();
        assert_eq!(js_1, js_2);
    }

    #[test]
    fn missing_source_aborts_before_any_write() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("out")).unwrap();
        fs::create_dir_all(tmp.path().join("lib")).unwrap();

        let err = run_pass(tmp.path(), &test_config(), false).expect_err("should abort");
        assert!(matches!(err, SyncError::SourceUnreadable { .. }));
        assert!(!tmp.path().join("out/error_code.js").exists());
        assert!(!tmp.path().join("lib/error_code.dart").exists());
    }

    #[test]
    fn one_failing_target_does_not_block_the_other() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::create_dir_all(tmp.path().join("lib")).unwrap();
        // `out/` is deliberately missing, so the JS write must fail.
        fs::write(tmp.path().join("src/error_code.rs"), SOURCE).unwrap();

        let result = run_pass(tmp.path(), &test_config(), false).expect("pass");
        assert!(result.has_failures());
        assert!(result.writes[0].is_failure(), "js target should fail");
        assert!(
            matches!(result.writes[1], WriteOutcome::Written { .. }),
            "dart target should still be written"
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("lib/error_code.dart")).unwrap(),
            EXPECTED_DART
        );
    }

    #[test]
    fn dry_run_reports_targets_without_writing() {
        let tmp = TempDir::new().unwrap();
        seed_workspace(tmp.path());

        let result = run_pass(tmp.path(), &test_config(), true).expect("pass");
        assert!(result
            .writes
            .iter()
            .all(|w| matches!(w, WriteOutcome::WouldWrite { .. })));
        assert!(!tmp.path().join("out/error_code.js").exists());
        assert!(!tmp.path().join("lib/error_code.dart").exists());
    }

    #[test]
    fn source_without_enum_writes_wrapper_only_outputs() {
        let tmp = TempDir::new().unwrap();
        seed_workspace(tmp.path());
        fs::write(tmp.path().join("src/error_code.rs"), "fn main() {}\n").unwrap();

        let result = run_pass(tmp.path(), &test_config(), false).expect("pass");
        assert!(!result.has_failures());
        let js = fs::read_to_string(tmp.path().join("out/error_code.js")).unwrap();
        assert_eq!(
            js.lines().count(),
            4,
            "header, wrapper open, wrapper close only"
        );
        assert!(js.contains("export default class ErrorCode {"));
    }

    #[test]
    fn render_targets_is_pure_and_ordered() {
        let targets = test_config().targets;
        let rendered_1 = render_targets(SOURCE, &targets);
        let rendered_2 = render_targets(SOURCE, &targets);
        assert_eq!(rendered_1, rendered_2);
        assert_eq!(rendered_1[0].0, PathBuf::from("out/error_code.js"));
        assert_eq!(rendered_1[1].0, PathBuf::from("lib/error_code.dart"));
        assert_eq!(rendered_1[0].1, EXPECTED_JS);
        assert_eq!(rendered_1[1].1, EXPECTED_DART);
    }
}
