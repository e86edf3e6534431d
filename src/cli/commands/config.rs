//! Config Command
//!
//! Manage metafixer configuration.
//!
//! Usage:
//!   metafixer config show [-g] [-f json]
//!   metafixer config path
//!   metafixer config init [-g] [--force]

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show configuration
pub fn show(global: bool, format: &str) -> Result<()> {
    let as_json = format == "json";

    if global {
        match ConfigLoader::global_config_path() {
            Some(global_path) if global_path.exists() => {
                let config = ConfigLoader::load_from_file(&global_path)?;
                println!("# Global Config: {}\n", global_path.display());
                println!("{}", ConfigLoader::render_config(&config, as_json)?);
            }
            Some(_) => {
                println!("No global config found.");
                println!("Run 'metafixer config init --global' to create one.");
            }
            None => println!("Cannot determine global config directory."),
        }
    } else {
        // Show merged effective config
        ConfigLoader::show_config(as_json)?;
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(force: bool) -> Result<()> {
    let path = ConfigLoader::init_project(force)?;
    println!("✓ Initialized project configuration");
    println!("  Config: {}", path.display());
    Ok(())
}
