//! Marker directive parsing core.
//!
//! Markers are structured annotations embedded in declaration doc comments,
//! of the form `+<namespaced.identifier><separator><value-or-key=value,...>`,
//! e.g. `// +kubebuilder:validation:MaxLength=10`. This module owns the one
//! piece of real parsing engineering in the tool:
//!
//! - `registry`: the set of known identifiers, consulted to disambiguate
//!   where an identifier ends and argument keys begin
//! - `parse`: the tokenizer that strips markup, finds the unquoted
//!   `=`/`:=` separator and resolves the identifier boundary
//! - `expressions`: the quote-aware argument extractor
//! - `collection`: the immutable [`Marker`]/[`MarkerSet`] model every rule
//!   checker queries
//! - `span`: byte ranges into the original source for corrective edits
//!
//! Parsing one directive is a pure function of its text and the registry
//! snapshot; it performs no I/O and cannot fail. Malformed directives
//! degrade to best-effort markers rather than aborting a file's analysis.

mod collection;
mod expressions;
mod parse;
mod registry;
mod scan;
mod span;

pub use collection::{Marker, MarkerSet};
pub use parse::parse_marker;
pub use registry::{Registry, shared};
pub use span::Span;
