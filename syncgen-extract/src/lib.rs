//! `ErrorCode` enum extraction for `syncgen-extract`.
//!
//! `extract(source)` scans the source text line by line with a two-state
//! scanner (seeking → inside) and returns the ordered doc/variant records of
//! the first `enum ErrorCode` block. Absence of a block is not an error —
//! the file may simply not be written yet — so the result is an empty
//! definition rather than a failure.
//!
//! The scanner is deliberately tolerant: source files contain syntax the
//! patterns do not model (attributes, braces, derives), and any such line
//! inside the block is skipped silently.

use std::sync::LazyLock;

use regex::Regex;

use syncgen_core::{EnumDefinition, EnumEntry};

/// Enum header: optional visibility keyword, the literal name `ErrorCode`,
/// optional opening brace. Matched against trimmed lines, case-sensitive.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(pub)? ?enum ErrorCode ?\{?$").expect("header pattern"));

/// Variant declaration: identifier, `=`, integer literal, optional comma.
static VARIANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*(\d+),?$").expect("variant pattern"));

const DOC_MARKER: &str = "///";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the enum header; lines before it are discarded.
    Seeking,
    /// Inside the block, collecting entries until the closing brace.
    Inside,
}

/// Extract the first `ErrorCode` enum block from `source`.
///
/// Lines are trimmed for matching only; the recorded doc text and identifiers
/// are taken from the trimmed line as written. Scanning stops at the first
/// line consisting solely of `}` — later blocks are never examined.
pub fn extract(source: &str) -> EnumDefinition {
    let mut def = EnumDefinition::default();
    let mut state = ScanState::Seeking;

    for line in source.lines() {
        let trimmed = line.trim();
        match state {
            ScanState::Seeking => {
                if HEADER_RE.is_match(trimmed) {
                    state = ScanState::Inside;
                }
            }
            ScanState::Inside => {
                if trimmed == "}" {
                    break;
                }
                if trimmed.starts_with(DOC_MARKER) {
                    // Keep one slash of the marker: `/// text` renders as `/ text`.
                    def.push(EnumEntry::Doc {
                        text: trimmed[2..].to_string(),
                    });
                } else if let Some(caps) = VARIANT_RE.captures(trimmed) {
                    // A literal too large for u64 fails the parse and is
                    // dropped like any other malformed entry.
                    if let Ok(value) = caps[2].parse::<u64>() {
                        def.push(EnumEntry::Variant {
                            ident: caps[1].to_string(),
                            value,
                        });
                    }
                }
            }
        }
    }

    def
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
