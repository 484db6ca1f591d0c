use detour_core::config::RedirectRules;

/// Prints the redirected form of one URL, or the URL itself when no rule
/// matches.
pub fn run_apply(rules: &RedirectRules, url: &str) {
    let map = rules.to_url_map();
    match map.resolve(url) {
        Some(replacement) => println!("{}", replacement),
        None => println!("{}", url),
    }
}
