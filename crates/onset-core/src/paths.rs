//! Filesystem locations for storefront data.
//!
//! The catalog database lives under a per-user data directory by default;
//! `ONSET_DATA_DIR` overrides it (useful for deployments and tests).

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "ONSET_DATA_DIR";

/// Resolve the directory holding storefront data.
///
/// Order: `ONSET_DATA_DIR` if set and non-empty, then the platform data
/// directory (e.g., `~/.local/share/onset`), then the current directory.
pub fn data_root() -> PathBuf {
    resolve_data_root(env::var(DATA_DIR_ENV).ok().as_deref())
}

/// Default path of the catalog database file.
pub fn database_path() -> PathBuf {
    data_root().join("catalog.db")
}

fn resolve_data_root(env_override: Option<&str>) -> PathBuf {
    if let Some(dir) = env_override {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join("onset"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let root = resolve_data_root(Some("/srv/onset-data"));
        assert_eq!(root, PathBuf::from("/srv/onset-data"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let root = resolve_data_root(Some("  "));
        assert_ne!(root, PathBuf::from("  "));
    }

    #[test]
    fn test_database_path_is_under_data_root() {
        assert!(database_path().ends_with("catalog.db"));
    }
}
