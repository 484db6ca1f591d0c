use anyhow::Result;
use detour_core::config;
use std::path::Path;

/// Loads a rules file, printing the rules it contains.
///
/// Load failures (unreadable file, invalid TOML) propagate so the CLI
/// exits nonzero.
pub fn run_check(path: &Path) -> Result<()> {
    let rules = config::load(path)?;
    println!("{}: {} redirect rule(s)", path.display(), rules.targets.len());
    for (origin, replacement) in &rules.targets {
        println!("  {} => {}", origin, replacement);
    }
    Ok(())
}
