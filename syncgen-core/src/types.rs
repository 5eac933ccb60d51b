//! Domain types for the error-code sync engine.
//!
//! An [`EnumDefinition`] is rebuilt from the source file on every sync pass
//! and discarded after emission; nothing here is cached between passes.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Enum data model
// ---------------------------------------------------------------------------

/// One record extracted from the `ErrorCode` enum block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumEntry {
    /// A documentation line attached to the variant that follows it.
    /// The text keeps one leading slash of the `///` marker, so it renders
    /// as a `/`-prefixed comment line in the generated output.
    Doc { text: String },
    /// A named integer constant, value exactly as declared in the source.
    Variant { ident: String, value: u64 },
}

/// Ordered sequence of entries from a single enum block.
///
/// Order matches source declaration order; values are never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumDefinition {
    entries: Vec<EnumEntry>,
}

impl EnumDefinition {
    pub fn push(&mut self, entry: EnumEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// True when no enum block was found (or the block had no usable lines).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Output targets
// ---------------------------------------------------------------------------

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Js,
    Dart,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Js => write!(f, "js"),
            TargetKind::Dart => write!(f, "dart"),
        }
    }
}

/// One configured output: a language plus a destination path relative to the
/// workspace root. Several specs may share a kind (fan-out to many files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub kind: TargetKind,
    pub out_path: PathBuf,
}

impl TargetSpec {
    /// Parse a `"<kind>:<relative path>"` config entry.
    ///
    /// Returns `None` for unrecognized prefixes; callers drop those entries
    /// rather than treating them as errors.
    pub fn parse(raw: &str) -> Option<TargetSpec> {
        let (prefix, path) = raw.split_once(':')?;
        let kind = match prefix {
            "js" => TargetKind::Js,
            "dart" => TargetKind::Dart,
            _ => return None,
        };
        Some(TargetSpec {
            kind,
            out_path: PathBuf::from(path),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
