//! Exported-name table standing in for the host module's namespace object.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;

use crate::value::Value;

/// A callable export: a verb implementation over positional call arguments.
///
/// Callables receive the full argument sequence and see any mutation an
/// interceptor performed before delegation. A failure is surfaced to the
/// caller exactly as returned.
pub type VerbFn = Box<dyn Fn(&mut Vec<Value>) -> Result<Value>>;

/// One slot in a [`Namespace`]: plain data or a callable.
pub enum Export {
    Data(Value),
    Callable(VerbFn),
}

impl fmt::Debug for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Data(v) => f.debug_tuple("Data").field(v).finish(),
            Export::Callable(_) => f.debug_tuple("Callable").field(&"..").finish(),
        }
    }
}

/// The set of names a module exposes to scripts.
///
/// Interceptors replace callable slots by name, once, at setup time; after
/// that the namespace is only read. Iteration order is the name order, so
/// listings are stable.
#[derive(Debug, Default)]
pub struct Namespace {
    exports: BTreeMap<String, Export>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposes a plain value under `name`.
    pub fn set_value(&mut self, name: impl Into<String>, value: Value) {
        self.exports.insert(name.into(), Export::Data(value));
    }

    /// Exposes a callable under `name`.
    pub fn set_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Vec<Value>) -> Result<Value> + 'static,
    {
        self.exports
            .insert(name.into(), Export::Callable(Box::new(f)));
    }

    pub fn get(&self, name: &str) -> Option<&Export> {
        self.exports.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exports.contains_key(name)
    }

    /// Exported names in stable order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    /// Invokes the callable export `name` with `args`.
    ///
    /// Callers that already hold an [`Export`] can invoke it directly; this
    /// is the lookup-and-call convenience used by replay tooling and tests.
    pub fn call(&self, name: &str, args: &mut Vec<Value>) -> Result<Value> {
        match self.get(name) {
            Some(Export::Callable(f)) => f(args),
            Some(Export::Data(_)) => anyhow::bail!("export `{}` is not callable", name),
            None => anyhow::bail!("no export named `{}`", name),
        }
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<Export> {
        self.exports.remove(name)
    }

    pub(crate) fn put(&mut self, name: &str, export: Export) {
        self.exports.insert(name.to_string(), export);
    }
}
