use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TOKEN_PLACEHOLDER: &str = "Your XF Token";
pub const COOKIE_PLACEHOLDER: &str = "Your Cookie";

/// The token/cookie pair sent with every poll. Read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub cookie: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(rename = "_xfToken", default)]
    xf_token: String,
    #[serde(default)]
    cookie: String,
}

impl ConfigFile {
    fn template() -> Self {
        Self {
            xf_token: TOKEN_PLACEHOLDER.to_string(),
            cookie: COOKIE_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("created template config at {}; fill in your token and cookie, then restart", .0.display())]
    TemplateCreated(PathBuf),
    #[error("config at {} still has empty or placeholder values for _xfToken/cookie", .0.display())]
    Unconfigured(PathBuf),
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("failed to write template config {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
}

impl ConfigError {
    /// Writing the template on first run is not a failure; everything else is.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::TemplateCreated(_) => 0,
            _ => 2,
        }
    }
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the credentials. A missing file is replaced with a template and
    /// reported as `TemplateCreated` so the caller can stop before polling.
    pub fn load(&self) -> Result<Credentials, ConfigError> {
        if !self.path.exists() {
            self.write_template()?;
            return Err(ConfigError::TemplateCreated(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: ConfigFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let token = file.xf_token.trim();
        let cookie = file.cookie.trim();
        if is_unset(token, TOKEN_PLACEHOLDER) || is_unset(cookie, COOKIE_PLACEHOLDER) {
            return Err(ConfigError::Unconfigured(self.path.clone()));
        }

        Ok(Credentials {
            token: token.to_string(),
            cookie: cookie.to_string(),
        })
    }

    fn write_template(&self) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&ConfigFile::template())
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        std::fs::write(&self.path, content).map_err(write_err)?;

        log::info!("Default config created at {}", self.path.display());
        Ok(())
    }
}

fn is_unset(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value == placeholder
}
