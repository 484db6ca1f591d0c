//! URL substitution against an origin → replacement table.
//!
//! The table is exact-match only: no prefix matching, no patterns, no TTL.
//! Lookups never fail; a miss means "leave the value alone".

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// Shared handle to the origin → replacement URL table.
///
/// Cloning shares the underlying table: installed wrappers hold clones and
/// observe updates made by the owning configuration layer. Call sites only
/// read; mutation belongs to whoever loaded the rules.
#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl UrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(origin, replacement)` pairs. Later duplicates
    /// of a key win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<HashMap<_, _>>();
        Self {
            inner: Rc::new(RefCell::new(map)),
        }
    }

    /// Registers (or replaces) a redirect.
    pub fn insert(&self, origin: impl Into<String>, replacement: impl Into<String>) {
        self.inner
            .borrow_mut()
            .insert(origin.into(), replacement.into());
    }

    /// Removes a redirect, returning the replacement it pointed at.
    pub fn remove(&self, origin: &str) -> Option<String> {
        self.inner.borrow_mut().remove(origin)
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Looks up the replacement for an exact origin URL.
    pub fn resolve(&self, origin: &str) -> Option<String> {
        self.inner.borrow().get(origin).cloned()
    }

    /// Applies the table to one call argument.
    ///
    /// A textual value present as a key comes back as the mapped
    /// replacement; everything else comes back unchanged (object handles
    /// keep their identity). Never fails: a miss, a non-text value, and an
    /// empty table all mean "no rewrite".
    pub fn rewrite(&self, value: &Value) -> Value {
        let origin = match value.as_str() {
            Some(s) => s,
            None => return value.clone(),
        };
        match self.resolve(origin) {
            Some(replacement) => {
                tracing::debug!(origin, %replacement, "redirecting url");
                Value::Str(replacement)
            }
            None => value.clone(),
        }
    }
}
