//! Redirect rules loading from `~/.config/detour/rules.toml`.
//!
//! The rules file is the only producer of the call-time lookup table; the
//! interception core never writes it.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::rewrite::UrlMap;

/// On-disk redirect rules.
///
/// `targets` maps an origin URL to the replacement it should be redirected
/// to, exact match only. A BTreeMap keeps the serialized file diff-friendly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectRules {
    #[serde(default)]
    pub targets: BTreeMap<String, String>,
}

impl RedirectRules {
    /// Builds the call-time lookup table from these rules.
    pub fn to_url_map(&self) -> UrlMap {
        UrlMap::from_pairs(self.targets.clone())
    }
}

pub fn rules_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("detour")?;
    Ok(xdg_dirs.place_config_file("rules.toml")?)
}

/// Loads rules from `path`.
///
/// Keys that do not parse as absolute URLs are accepted (exact-match
/// semantics make them harmless) but logged at warn level, since they are
/// usually typos that will never match a real call.
pub fn load(path: &Path) -> Result<RedirectRules> {
    let data = fs::read_to_string(path)?;
    let rules: RedirectRules = toml::from_str(&data)?;
    for origin in rules.targets.keys() {
        if url::Url::parse(origin).is_err() {
            tracing::warn!(key = %origin, "redirect rule key is not an absolute url");
        }
    }
    tracing::debug!(rules = rules.targets.len(), path = %path.display(), "loaded redirect rules");
    Ok(rules)
}

/// Loads rules from the default path, creating an empty rules file if none
/// exists.
pub fn load_or_init() -> Result<RedirectRules> {
    let path = rules_path()?;
    if !path.exists() {
        let default_rules = RedirectRules::default();
        let toml = toml::to_string_pretty(&default_rules)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default rules file at {}", path.display());
        return Ok(default_rules);
    }

    load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rules_build_empty_map() {
        let rules = RedirectRules::default();
        let map = rules.to_url_map();
        assert!(map.is_empty());
    }

    #[test]
    fn rules_toml_roundtrip() {
        let mut rules = RedirectRules::default();
        rules.targets.insert(
            "https://example.com".to_string(),
            "https://example.net".to_string(),
        );
        let toml = toml::to_string_pretty(&rules).unwrap();
        let parsed: RedirectRules = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.targets, rules.targets);
    }

    #[test]
    fn rules_toml_targets_table() {
        let toml = r#"
            [targets]
            "https://api.example.com" = "http://127.0.0.1:8080"
            "https://auth.example.com" = "http://127.0.0.1:8081"
        "#;
        let rules: RedirectRules = toml::from_str(toml).unwrap();
        assert_eq!(rules.targets.len(), 2);
        assert_eq!(
            rules.targets.get("https://api.example.com").map(String::as_str),
            Some("http://127.0.0.1:8080")
        );

        let map = rules.to_url_map();
        assert_eq!(
            map.resolve("https://auth.example.com").as_deref(),
            Some("http://127.0.0.1:8081")
        );
    }

    #[test]
    fn rules_file_without_targets_section_is_empty() {
        let rules: RedirectRules = toml::from_str("").unwrap();
        assert!(rules.targets.is_empty());
    }

    #[test]
    fn load_reads_rules_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(
            &path,
            "[targets]\n\"https://example.com\" = \"https://example.net\"\n",
        )
        .unwrap();

        let rules = load(&path).unwrap();
        assert_eq!(
            rules.targets.get("https://example.com").map(String::as_str),
            Some("https://example.net")
        );
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        fs::write(&path, "not toml [").unwrap();
        assert!(load(&path).is_err());
    }
}
