//! Registry of known marker identifiers.
//!
//! The tokenizer cannot tell where a namespaced identifier ends and named
//! arguments begin without knowing which identifiers exist: in
//! `kubebuilder:validation:XValidation:rule=...` the trailing `rule` is an
//! argument key, not an identifier segment. Rules declare the identifiers
//! they care about here before any parsing runs, and the tokenizer resolves
//! the boundary by longest registered prefix.

use std::collections::{BTreeSet, HashSet};
use std::sync::{LazyLock, RwLock};

/// A concurrency-safe, grow-only set of fully-qualified marker identifiers.
///
/// Registration is idempotent: registering the same identifier twice is a
/// no-op. Rules register during setup, possibly from parallel init paths;
/// parsing afterwards only reads.
#[derive(Debug, Default)]
pub struct Registry {
    known: RwLock<HashSet<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert each identifier. Safe to call repeatedly with overlapping sets
    /// and from concurrent callers.
    pub fn register<I>(&self, identifiers: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut known = self.known.write().expect("registry lock poisoned");
        for identifier in identifiers {
            known.insert(identifier.into());
        }
    }

    /// Exact membership test. No wildcard or prefix matching happens here;
    /// prefix resolution belongs to the tokenizer.
    pub fn contains(&self, identifier: &str) -> bool {
        self.known
            .read()
            .expect("registry lock poisoned")
            .contains(identifier)
    }

    /// Sorted snapshot of every registered identifier.
    pub fn all(&self) -> BTreeSet<String> {
        self.known
            .read()
            .expect("registry lock poisoned")
            .iter()
            .cloned()
            .collect()
    }
}

static SHARED: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry used by production wiring.
///
/// Tests that need isolation construct their own [`Registry`]; nothing in
/// the parsing path depends on this instance.
pub fn shared() -> &'static Registry {
    &SHARED
}
