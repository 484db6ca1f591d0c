//! Fake transport backend for integration tests.
//!
//! Implements every default verb as a callable that records the arguments
//! it was invoked with and returns a canned response, standing in for the
//! real HTTP client underneath the shim.

use std::cell::RefCell;
use std::rc::Rc;

use detour_core::value::Value;
use detour_core::wrap::{Namespace, URL_FIRST_VERBS, URL_SECOND_VERBS};

/// One delegated call as the backend observed it.
#[derive(Debug, Clone)]
pub struct CallRecord {
    pub verb: String,
    pub args: Vec<Value>,
}

/// Shared log of delegated calls.
pub type CallLog = Rc<RefCell<Vec<CallRecord>>>;

/// Builds a namespace exposing all default verbs, each recording into the
/// returned log and answering with `Value::Str("ok")`.
pub fn namespace() -> (Namespace, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut ns = Namespace::new();

    for verb in URL_FIRST_VERBS.iter().chain(URL_SECOND_VERBS) {
        let verb = verb.to_string();
        let log = log.clone();
        ns.set_fn(verb.clone(), move |args: &mut Vec<Value>| {
            log.borrow_mut().push(CallRecord {
                verb: verb.clone(),
                args: args.clone(),
            });
            Ok(Value::Str("ok".into()))
        });
    }

    (ns, log)
}
