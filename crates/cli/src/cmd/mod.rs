pub mod doctor;
pub mod edit;
pub mod list_files;

use docpen_core::config::loader::{default_config_path, ConfigLoader};
use docpen_core::config::ResolvedConfig;
use std::path::Path;

/// Load config or exit with the usual `FAIL docpen <cmd>` report.
pub fn load_config_or_exit(
    config: Option<&Path>,
    profile: Option<&str>,
    cmd_name: &str,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL docpen {cmd_name}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
