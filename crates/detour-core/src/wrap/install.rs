//! Wrapper installation: composing interception around verb exports.

use crate::body::normalize_body;
use crate::rewrite::UrlMap;
use crate::value::Value;

use super::error::SetupError;
use super::namespace::{Export, Namespace, VerbFn};

/// Verbs whose URL (or request description) is the first argument.
pub const URL_FIRST_VERBS: &[&str] =
    &["get", "head", "post", "put", "patch", "options", "delete"];

/// Verbs that take an explicit verb-name argument first, so the URL (or
/// request description) sits second.
pub const URL_SECOND_VERBS: &[&str] = &["request", "asyncRequest"];

/// Installs interception wrappers around a namespace's verb exports.
///
/// Every wrapper installed through the same `Interceptor` shares one
/// redirect table handle, so rule updates made by the configuration layer
/// are visible to calls already wired up.
#[derive(Debug, Clone, Default)]
pub struct Interceptor {
    table: UrlMap,
}

impl Interceptor {
    pub fn new(table: UrlMap) -> Self {
        Self { table }
    }

    /// The redirect table this interceptor applies.
    pub fn table(&self) -> &UrlMap {
        &self.table
    }

    /// Replaces the callable export `name` with an intercepting wrapper.
    ///
    /// When a call carries more arguments than `arg_index`, the wrapper
    /// rewrites the argument at that index through the redirect table
    /// (write-back into the slot) and round-trips its body attribute, then
    /// delegates to the original callable with the possibly-mutated
    /// arguments. Shorter calls skip both steps and reach the original with
    /// the argument list as given. The rewrite applies to bare URL strings
    /// and request-description objects alike; only textual values are
    /// actually substituted.
    ///
    /// The original's return value and failure both pass through untouched.
    /// A missing or non-callable export is a fatal [`SetupError`].
    pub fn wrap(
        &self,
        ns: &mut Namespace,
        name: &str,
        arg_index: usize,
    ) -> Result<(), SetupError> {
        let original: VerbFn = match ns.take(name) {
            None => return Err(SetupError::MissingExport(name.to_string())),
            Some(Export::Data(value)) => {
                // Put the slot back as found before failing.
                ns.put(name, Export::Data(value));
                return Err(SetupError::NotCallable(name.to_string()));
            }
            Some(Export::Callable(f)) => f,
        };

        let table = self.table.clone();
        let wrapper = move |args: &mut Vec<Value>| {
            if args.len() > arg_index {
                let rewritten = table.rewrite(&args[arg_index]);
                args[arg_index] = rewritten;
                normalize_body(args, arg_index);
            }
            original(args)
        };
        ns.put(name, Export::Callable(Box::new(wrapper)));
        tracing::debug!(verb = name, arg_index, "installed interception wrapper");
        Ok(())
    }

    /// Wraps the default verb registry on `ns`.
    ///
    /// Url-first verbs are wrapped at index 0 and url-second verbs at
    /// index 1. The first setup failure aborts installation.
    pub fn wrap_defaults(&self, ns: &mut Namespace) -> Result<(), SetupError> {
        for verb in URL_FIRST_VERBS {
            self.wrap(ns, verb, 0)?;
        }
        for verb in URL_SECOND_VERBS {
            self.wrap(ns, verb, 1)?;
        }
        Ok(())
    }
}
