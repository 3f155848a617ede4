use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "F95_NOTIFY_CONFIG";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("f95-notify"))
}

/// Path of the credentials file. `F95_NOTIFY_CONFIG` replaces the whole path.
pub fn config_path() -> Result<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
}

/// The runtime log sits next to whichever config file is in use.
pub fn log_path_beside(config_path: &Path) -> PathBuf {
    config_path.with_file_name("runtime.log")
}

fn resolve_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => config_dir().map(|p| p.join("config.json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_have_correct_suffixes() {
        let cases: Vec<(Result<PathBuf>, &str)> = vec![
            (config_dir(), "f95-notify"),
            (resolve_config_path(None), "f95-notify/config.json"),
        ];

        for (result, expected_suffix) in cases {
            let path = result.unwrap();
            assert!(path.ends_with(expected_suffix), "path {:?} should end with {}", path, expected_suffix);
        }
    }

    #[test]
    fn log_path_follows_config_path() {
        let cases = [
            ("/home/user/.config/f95-notify/config.json", "/home/user/.config/f95-notify/runtime.log"),
            ("/srv/f95/custom.json", "/srv/f95/runtime.log"),
            ("config.json", "runtime.log"),
        ];

        for (config, expected) in cases {
            assert_eq!(log_path_beside(Path::new(config)), PathBuf::from(expected), "config: {}", config);
        }
    }

    #[test]
    fn override_replaces_default_config_path() {
        let path = resolve_config_path(Some(PathBuf::from("/tmp/custom.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let path = resolve_config_path(Some(PathBuf::new())).unwrap();
        assert!(path.ends_with("f95-notify/config.json"));
    }
}
