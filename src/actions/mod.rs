//! Actions for processing marker issues.
//!
//! Actions convert Issues into Operations and execute them.
//! This module provides a type-safe way to handle different issue types.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level file operation)
//!     ↓
//! execute (file modification)
//! ```
//!
//! ## Actions
//!
//! - [`DeleteDuplicateMarker`]: Delete duplicate marker comments (fix)

mod delete_duplicate;
mod operation;
mod traits;

// Re-export public types
pub use delete_duplicate::DeleteDuplicateMarker;
pub use operation::{Operation, apply_to_source, execute_all};
pub use traits::{Action, ActionStats};
