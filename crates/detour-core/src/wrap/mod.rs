//! Call interception over a module namespace.
//!
//! The host runtime exposes HTTP verbs to scripts as named exports on a
//! module namespace. This module models that namespace as an explicit
//! name → export table and installs, once at setup time, a wrapper around
//! each verb: redirect the URL-bearing argument, round-trip the body
//! attribute, then delegate to the original callable. Call-time failures
//! belong to the original; only installation itself can fail here.

mod error;
mod install;
mod namespace;

pub use error::SetupError;
pub use install::{Interceptor, URL_FIRST_VERBS, URL_SECOND_VERBS};
pub use namespace::{Export, Namespace, VerbFn};
