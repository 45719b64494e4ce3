//! Issue types for marker analysis results.
//!
//! Each issue is self-contained with everything needed by:
//! - Reporter: to display the issue (severity, message, location, context)
//! - Action: to fix the issue (spans into the original source)

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::markers::Span;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DuplicateMarkers,
    ConflictingModifiers,
    MissingValue,
    UnknownMarker,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DuplicateMarkers => write!(f, "duplicate-markers"),
            Rule::ConflictingModifiers => write!(f, "conflicting-modifiers"),
            Rule::MissingValue => write!(f, "missing-value"),
            Rule::UnknownMarker => write!(f, "unknown-marker"),
        }
    }
}

// ============================================================
// Source location
// ============================================================

/// A file/line/column position, 1-based, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }

    pub fn with_col(mut self, col: usize) -> Self {
        self.col = col;
        self
    }
}

impl PartialOrd for SourceLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then(self.line.cmp(&other.line))
            .then(self.col.cmp(&other.col))
    }
}

// ============================================================
// Issue trait and enum
// ============================================================

#[enum_dispatch]
pub trait Diagnostic {
    fn severity(&self) -> Severity;
    fn rule(&self) -> Rule;
    fn message(&self) -> String;
    fn location(&self) -> &SourceLocation;
    /// The source line shown as context under the diagnostic.
    fn source_line(&self) -> &str;
}

#[enum_dispatch(Diagnostic)]
#[derive(Debug, Clone)]
pub enum Issue {
    DuplicateMarker(DuplicateMarkerIssue),
    ConflictingModifiers(ConflictingModifiersIssue),
    MissingValue(MissingValueIssue),
    UnknownMarker(UnknownMarkerIssue),
}

// ============================================================
// Issue types
// ============================================================

/// The same directive (identifier and arguments) appears more than once on
/// one declaration. Carries the duplicate occurrence's span so the fix can
/// delete exactly that comment line.
#[derive(Debug, Clone)]
pub struct DuplicateMarkerIssue {
    pub location: SourceLocation,
    pub declaration: String,
    pub identifier: String,
    pub expressions: String,
    /// Span of the duplicate occurrence's comment line.
    pub span: Span,
    pub source_line: String,
}

impl Diagnostic for DuplicateMarkerIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::DuplicateMarkers
    }

    fn message(&self) -> String {
        if self.expressions.is_empty() {
            format!(
                "marker '{}' is declared more than once on '{}'",
                self.identifier, self.declaration
            )
        } else {
            format!(
                "marker '{}' with arguments '{}' is declared more than once on '{}'",
                self.identifier, self.expressions, self.declaration
            )
        }
    }

    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn source_line(&self) -> &str {
        &self.source_line
    }
}

/// A declaration is marked both optional and required.
#[derive(Debug, Clone)]
pub struct ConflictingModifiersIssue {
    pub location: SourceLocation,
    pub declaration: String,
    pub optional_marker: String,
    pub required_marker: String,
    pub source_line: String,
}

impl Diagnostic for ConflictingModifiersIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ConflictingModifiers
    }

    fn message(&self) -> String {
        format!(
            "'{}' is marked both '{}' and '{}'",
            self.declaration, self.optional_marker, self.required_marker
        )
    }

    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn source_line(&self) -> &str {
        &self.source_line
    }
}

/// A marker that requires a value was written without one.
#[derive(Debug, Clone)]
pub struct MissingValueIssue {
    pub location: SourceLocation,
    pub declaration: String,
    pub identifier: String,
    pub source_line: String,
}

impl Diagnostic for MissingValueIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::MissingValue
    }

    fn message(&self) -> String {
        format!("marker '{}' requires a value", self.identifier)
    }

    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn source_line(&self) -> &str {
        &self.source_line
    }
}

/// A directive under a reserved namespace whose identifier is not
/// registered; usually a typo in a well-known marker.
#[derive(Debug, Clone)]
pub struct UnknownMarkerIssue {
    pub location: SourceLocation,
    pub declaration: String,
    pub identifier: String,
    pub source_line: String,
}

impl Diagnostic for UnknownMarkerIssue {
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn rule(&self) -> Rule {
        Rule::UnknownMarker
    }

    fn message(&self) -> String {
        format!("unknown marker '{}'", self.identifier)
    }

    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn source_line(&self) -> &str {
        &self.source_line
    }
}
