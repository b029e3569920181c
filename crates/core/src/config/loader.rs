use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;
use tracing::debug;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;
        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        Self::resolve(cf, profile_override)
    }

    fn resolve(
        cf: ConfigFile,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        debug!(profile = %active, "resolving config profile");
        Self::resolve_profile(&active, prof, &cf.logging)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let docs_root = expand_path(&prof.docs_root)?;
        let sub = |s: &str| s.replace("{{docs_root}}", &docs_root.to_string_lossy());

        let excluded_folders = prof
            .excluded_folders
            .iter()
            .map(|f| {
                let p = expand_path(&sub(f))?;
                Ok(if p.is_absolute() { p } else { docs_root.join(p) })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let logging = match log_cfg.file {
            Some(ref file) => LoggingConfig {
                file: Some(expand_path(&sub(&file.to_string_lossy()))?),
                ..log_cfg.clone()
            },
            None => log_cfg.clone(),
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            docs_root,
            excluded_folders,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("docpen").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("docpen").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> ConfigFile {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn excluded_folders_resolve_against_docs_root() {
        let cf = parse(
            r#"
version = 1
[profiles.default]
docs_root = "/srv/docs"
excluded_folders = ["drafts", "{{docs_root}}/archive"]
"#,
        );
        let rc = ConfigLoader::resolve(cf, None).unwrap();
        assert_eq!(
            rc.excluded_folders,
            vec![PathBuf::from("/srv/docs/drafts"), PathBuf::from("/srv/docs/archive")]
        );
    }

    #[test]
    fn log_file_substitutes_docs_root() {
        let cf = parse(
            r#"
version = 1
[profiles.default]
docs_root = "/srv/docs"

[logging]
level = "debug"
file = "{{docs_root}}/.docpen/docpen.log"
"#,
        );
        let rc = ConfigLoader::resolve(cf, None).unwrap();
        assert_eq!(rc.logging.level, "debug");
        assert_eq!(rc.logging.file, Some(PathBuf::from("/srv/docs/.docpen/docpen.log")));
    }

    #[test]
    fn profile_override_wins() {
        let cf = parse(
            r#"
version = 1
profile = "a"
[profiles.a]
docs_root = "/a"
[profiles.b]
docs_root = "/b"
"#,
        );
        let rc = ConfigLoader::resolve(cf, Some("b")).unwrap();
        assert_eq!(rc.active_profile, "b");
        assert_eq!(rc.docs_root, PathBuf::from("/b"));
    }
}
