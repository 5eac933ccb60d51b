//! Multi-target declaration rendering for `syncgen-emit`.
//!
//! # Rendering rules
//!
//! | Target | Wrapper                             | Variant line                              |
//! |--------|-------------------------------------|-------------------------------------------|
//! | JS     | `export default class ErrorCode {`  | `  static <ident> = <value>;`             |
//! | Dart   | `class ErrorCode {`                 | `  static const int <lowerCamel> = <value>;` |
//!
//! Both targets share the two-line generated-file header and emit doc lines
//! as `  ` + recorded text, interleaved with variants in source order.
//!
//! [`render`] is a pure function of the definition and target kind: identical
//! input produces byte-identical output, so re-running on every save is safe.

use syncgen_core::{EnumDefinition, EnumEntry, TargetKind};

/// Warning header prepended to every generated file.
pub const GENERATED_HEADER: [&str; 2] = [
    "// This file is autogenerated by ansvia-vscode",
    "// don't edit by hand or your changes will lost without you knowing",
];

fn open_line(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Js => "export default class ErrorCode {",
        TargetKind::Dart => "class ErrorCode {",
    }
}

fn variant_line(kind: TargetKind, ident: &str, value: u64) -> String {
    match kind {
        TargetKind::Js => format!("  static {ident} = {value};"),
        TargetKind::Dart => format!("  static const int {} = {value};", lower_camel(ident)),
    }
}

/// Render one complete declaration block for `kind`.
///
/// The output has no trailing newline after the closing brace, matching the
/// files historically produced by the generator.
pub fn render(def: &EnumDefinition, kind: TargetKind) -> String {
    let mut lines: Vec<String> = GENERATED_HEADER.iter().map(|s| (*s).to_string()).collect();
    lines.push(open_line(kind).to_string());
    for entry in def.entries() {
        match entry {
            EnumEntry::Doc { text } => lines.push(format!("  {text}")),
            EnumEntry::Variant { ident, value } => {
                lines.push(variant_line(kind, ident, *value));
            }
        }
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Convert an identifier to lower-camel-case for Dart members.
///
/// Word boundaries are underscores and lower-to-upper case transitions:
/// `NOT_FOUND` → `notFound`, `NotFound` → `notFound`.
fn lower_camel(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut capitalize_next = false;
    let mut prev_lower = false;

    for ch in ident.chars() {
        if ch == '_' {
            capitalize_next = !out.is_empty();
            prev_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && prev_lower {
            capitalize_next = true;
        }
        if capitalize_next {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
        prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
