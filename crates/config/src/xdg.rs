//! XDG Base Directory support for termpad.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "termpad";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/termpad` or `~/.config/termpad`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/termpad` or `~/.cache/termpad`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_are_app_scoped() {
        if let (Ok(config), Ok(cache)) = (get_config_dir(), get_cache_dir()) {
            assert!(config.ends_with("termpad"));
            assert!(cache.ends_with("termpad"));
            assert_ne!(config, cache);
        }
    }
}
