use docpen_core::config::loader::{default_config_path, ConfigLoader};
use docpen_core::markdown::discover_markdown_files;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL docpen doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&rc.logging);
    tracing::debug!(profile = %rc.active_profile, "running doctor");

    let files = discover_markdown_files(&rc.docs_root, &rc.excluded_folders);

    println!("{}   docpen doctor", if files.is_ok() { "OK" } else { "FAIL" });
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("docs_root: {}", rc.docs_root.display());
    for folder in &rc.excluded_folders {
        println!("excluded: {}", folder.display());
    }
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }

    match files {
        Ok(list) => println!("markdown files: {}", list.len()),
        Err(e) => {
            println!("{e}");
            crate::logging::flush();
            std::process::exit(1);
        }
    }
    crate::logging::flush();
}
