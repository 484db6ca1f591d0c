use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use detour_core::config::RedirectRules;
use detour_core::value::Value;
use detour_core::wrap::{Interceptor, Namespace, URL_FIRST_VERBS, URL_SECOND_VERBS};

/// One recorded call: verb name plus positional arguments as JSON.
#[derive(Debug, Deserialize)]
struct TraceEntry {
    verb: String,
    #[serde(default)]
    args: Vec<serde_json::Value>,
}

/// Index of the URL-bearing argument for a known verb.
fn arg_index_for(verb: &str) -> Option<usize> {
    if URL_FIRST_VERBS.contains(&verb) {
        Some(0)
    } else if URL_SECOND_VERBS.contains(&verb) {
        Some(1)
    } else {
        None
    }
}

/// Namespace whose verbs do nothing: the wrappers installed around them do
/// all the observable work in a dry run.
fn passthrough_namespace() -> Namespace {
    let mut ns = Namespace::new();
    for verb in URL_FIRST_VERBS.iter().chain(URL_SECOND_VERBS) {
        ns.set_fn(verb.to_string(), |_args: &mut Vec<Value>| Ok(Value::Missing));
    }
    ns
}

/// Replays a JSON-lines call trace through a wrapped namespace, printing
/// what each call's URL argument looked like before and after redirection.
/// Unknown verbs are reported and skipped; malformed lines abort the run.
pub fn run_trace(rules: &RedirectRules, path: &Path) -> Result<()> {
    let interceptor = Interceptor::new(rules.to_url_map());
    let mut ns = passthrough_namespace();
    interceptor.wrap_defaults(&mut ns)?;

    let data = fs::read_to_string(path)?;
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: TraceEntry = serde_json::from_str(line)
            .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;

        let index = match arg_index_for(&entry.verb) {
            Some(index) => index,
            None => {
                println!("{}  (unknown verb, skipped)", entry.verb);
                continue;
            }
        };

        let mut args: Vec<Value> = entry.args.into_iter().map(Value::from).collect();
        let before = args
            .get(index)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());

        ns.call(&entry.verb, &mut args)?;

        let after = args
            .get(index)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}  {}  =>  {}", entry.verb, before, after);
    }

    Ok(())
}
