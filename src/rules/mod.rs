//! Rule implementations for marklint.
//!
//! Each rule is a thin consumer of the marker core: it queries the
//! [`MarkerSet`](crate::markers::MarkerSet) attached to each declaration
//! and emits issues. Rules declare the marker identifiers they care about
//! via [`Checker::identifiers`]; those are registered into the registry
//! before any parsing runs, which is what lets the tokenizer resolve
//! identifier/argument boundaries for them.
//!
//! ## Module Structure
//!
//! - `known`: well-known marker vocabulary seeded into the registry
//! - `duplicate_markers`: repeated identical directives on one declaration
//! - `conflicting_modifiers`: optional + required on one declaration
//! - `missing_value`: value-carrying markers written without a value
//! - `unknown_marker`: unregistered identifiers under reserved namespaces

pub mod conflicting_modifiers;
pub mod duplicate_markers;
pub mod known;
pub mod missing_value;
pub mod unknown_marker;

use crate::collect::Declaration;
use crate::config::Config;
use crate::issue::{Issue, SourceLocation};
use crate::markers::{Marker, Registry};
use crate::utils::line_col;

pub use conflicting_modifiers::ConflictingModifiersRule;
pub use duplicate_markers::DuplicateMarkersRule;
pub use missing_value::MissingValueRule;
pub use unknown_marker::UnknownMarkerRule;

/// Everything a rule needs to check one file.
pub struct FileContext<'a> {
    pub file_path: &'a str,
    pub source: &'a str,
    pub declarations: &'a [Declaration],
    pub config: &'a Config,
    /// Read-only view of the registry the file was parsed against.
    pub registry: &'a Registry,
}

/// A single lint rule.
pub trait Checker: Send + Sync {
    fn name(&self) -> &'static str;

    /// Marker identifiers this rule cares about. Registered into the
    /// registry during setup, before any parsing.
    fn identifiers(&self) -> &'static [&'static str] {
        &[]
    }

    fn check(&self, ctx: &FileContext) -> Vec<Issue>;
}

/// All rules, in reporting order.
pub fn all_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(DuplicateMarkersRule),
        Box::new(ConflictingModifiersRule),
        Box::new(MissingValueRule),
        Box::new(UnknownMarkerRule),
    ]
}

/// Register every identifier the rules and the well-known vocabulary care
/// about. Must run before any file is parsed.
pub fn register_identifiers(registry: &Registry) {
    registry.register(known::all());
    for checker in all_checkers() {
        registry.register(checker.identifiers().iter().copied());
    }
}

/// Location of a marker's `+` within its comment line.
pub(crate) fn marker_location(ctx: &FileContext, marker: &Marker) -> SourceLocation {
    let (line, _) = line_col(ctx.source, marker.span.start);
    let col = marker
        .raw_comment
        .find('+')
        .map(|i| marker.raw_comment[..i].chars().count() + 1)
        .unwrap_or(1);
    SourceLocation::new(ctx.file_path, line).with_col(col)
}
