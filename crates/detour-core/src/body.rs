//! Body attribute handling for request-description arguments.
//!
//! A request description is an object argument that may carry a `body`
//! attribute. Only plain-text bodies participate; every other shape is left
//! exactly as found. None of these operations can fail: callers with call
//! shapes we do not recognize must keep working untouched.

use crate::value::Value;

/// Outcome of looking up the `body` attribute on a request description.
///
/// Replaces duck-typed inspection with explicit branches so each case is
/// handled on purpose rather than falling through reflection.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyLookup {
    /// Attribute absent, or explicitly set to no value.
    Missing,
    /// Attribute present but not text (object, number, list, ...).
    NonText(Value),
    /// Attribute present and textual.
    Text(String),
}

/// Classifies the `body` attribute of one call argument.
///
/// Returns `None` when the argument does not support attribute access at
/// all (primitives, text, missing values).
pub fn lookup_body(arg: &Value) -> Option<BodyLookup> {
    if !arg.is_object() {
        return None;
    }
    match arg.get_attr("body") {
        None | Some(Value::Missing) => Some(BodyLookup::Missing),
        Some(Value::Str(text)) => Some(BodyLookup::Text(text)),
        Some(other) => Some(BodyLookup::NonText(other)),
    }
}

/// Re-sets a text `body` attribute to its own content.
///
/// The argument at `index` is inspected as a request description. A text
/// body is written back verbatim; a content-aware transform would slot in
/// at that write. All other shapes are silent no-ops: an out-of-range
/// index, a non-object argument, an absent body, and a non-text body leave
/// `args` untouched.
pub fn normalize_body(args: &[Value], index: usize) {
    let arg = match args.get(index) {
        Some(arg) => arg,
        None => return,
    };
    match lookup_body(arg) {
        Some(BodyLookup::Text(text)) => {
            arg.set_attr("body", Value::Str(text));
        }
        Some(BodyLookup::NonText(_)) => {
            tracing::trace!("non-text body left untouched");
        }
        Some(BodyLookup::Missing) | None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_body(body: Value) -> Value {
        let req = Value::object();
        req.set_attr("body", body);
        req
    }

    #[test]
    fn lookup_classifies_all_shapes() {
        assert_eq!(lookup_body(&Value::Str("bare url".into())), None);
        assert_eq!(lookup_body(&Value::Missing), None);

        assert_eq!(lookup_body(&Value::object()), Some(BodyLookup::Missing));
        assert_eq!(
            lookup_body(&request_with_body(Value::Missing)),
            Some(BodyLookup::Missing)
        );
        assert_eq!(
            lookup_body(&request_with_body(Value::Str("raw".into()))),
            Some(BodyLookup::Text("raw".into()))
        );
        assert_eq!(
            lookup_body(&request_with_body(Value::Int(5))),
            Some(BodyLookup::NonText(Value::Int(5)))
        );
    }

    #[test]
    fn text_body_round_trips_unchanged() {
        let req = request_with_body(Value::Str("raw body content".into()));
        let args = vec![req.clone()];

        normalize_body(&args, 0);
        assert_eq!(req.get_attr("body"), Some(Value::Str("raw body content".into())));

        // Repeated application stays idempotent.
        normalize_body(&args, 0);
        normalize_body(&args, 0);
        assert_eq!(req.get_attr("body"), Some(Value::Str("raw body content".into())));
    }

    #[test]
    fn json_and_xml_shaped_text_is_still_text() {
        let json = r#"{"name": "John Doe", "age": 30}"#;
        let xml = "<person><name>John Doe</name><age>30</age></person>";

        for raw in [json, xml] {
            let req = request_with_body(Value::Str(raw.into()));
            normalize_body(&[req.clone()], 0);
            assert_eq!(req.get_attr("body"), Some(Value::Str(raw.into())));
        }
    }

    #[test]
    fn absent_body_is_a_silent_no_op() {
        let req = Value::object();
        normalize_body(&[req.clone()], 0);
        assert_eq!(req.get_attr("body"), None);
    }

    #[test]
    fn missing_body_is_left_missing() {
        let req = request_with_body(Value::Missing);
        normalize_body(&[req.clone()], 0);
        assert_eq!(req.get_attr("body"), Some(Value::Missing));
    }

    #[test]
    fn object_body_keeps_its_identity() {
        let inner = Value::object();
        inner.set_attr("nested", Value::Bool(true));
        let req = request_with_body(inner.clone());

        normalize_body(&[req.clone()], 0);

        let stored = req.get_attr("body").unwrap();
        assert!(stored.same_object(&inner), "non-text body must not be replaced");
        assert_eq!(stored.get_attr("nested"), Some(Value::Bool(true)));
    }

    #[test]
    fn non_object_argument_is_ignored() {
        let args = vec![Value::Str("https://example.com".into())];
        normalize_body(&args, 0);
        assert_eq!(args[0], Value::Str("https://example.com".into()));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let args = vec![Value::Str("https://example.com".into())];
        normalize_body(&args, 5);
        normalize_body(&[], 0);
    }
}
