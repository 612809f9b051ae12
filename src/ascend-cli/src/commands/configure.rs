//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting ascend defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::Path;

/// Handle the configure command
///
/// # Arguments
/// * `show_champion_cost` - Optional new value for the per-champion breakdown
/// * `show` - If true, show current configuration
pub fn handle(show_champion_cost: Option<bool>, show: bool) -> Result<()> {
    handle_at(&Config::config_path()?, show_champion_cost, show)
}

/// Same as [`handle`], against the config file at `path`
pub fn handle_at(path: &Path, show_champion_cost: Option<bool>, show: bool) -> Result<()> {
    let mut config = Config::load_from(path)?;

    if show {
        show_config(&config, path);
        return Ok(());
    }

    if let Some(value) = show_champion_cost {
        set_show_champion_cost(&mut config, path, value)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config, path: &Path) {
    println!("Show champion cost: {}", config.show_champion_cost);
    println!("Config file: {}", path.display());
}

fn set_show_champion_cost(config: &mut Config, path: &Path, value: bool) -> Result<()> {
    config.show_champion_cost = value;
    config.save_to(path)?;

    println!("Show champion cost configured: {}", value);
    println!("Config saved to: {}", path.display());

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: ascend configure --show-champion-cost <true|false>");
    println!("   or: ascend configure --show");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_show_champion_cost_writes_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ascend").join("config.toml");

        handle_at(&path, Some(true), false).unwrap();
        assert!(Config::load_from(&path).unwrap().show_champion_cost);

        handle_at(&path, Some(false), false).unwrap();
        assert!(!Config::load_from(&path).unwrap().show_champion_cost);
    }

    #[test]
    fn test_show_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        handle_at(&path, Some(true), true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_no_value_leaves_config_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        handle_at(&path, None, false).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_config_path_is_toml() {
        if let Ok(path) = Config::config_path() {
            assert!(path.ends_with("ascend/config.toml"));
        }
    }
}
