//! Core interception shim for the Detour load-test mock redirector.
//!
//! Test scripts call HTTP verbs through a module namespace. Detour replaces
//! those exports with wrappers that redirect origin URLs to their configured
//! mock endpoints and round-trip text request bodies, then delegate to the
//! real implementation. The transport underneath is untouched; so are calls
//! whose shape the shim does not recognize.

pub mod config;
pub mod logging;

pub mod body;
pub mod rewrite;
pub mod value;
pub mod wrap;
