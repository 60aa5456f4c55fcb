//! Runtime configuration.
//!
//! The configuration lives in a `bigbox.toml` file in the current directory
//! or its parent:
//!
//! ```toml
//! [database]
//! url = "env:DATABASE_URL"
//!
//! [media]
//! url = "https://cdn.example.com/media/"
//! ```
//!
//! A database url of the form `env:NAME` is read from the environment
//! variable `NAME` when the connection string is requested.

use crate::{Error, Result, SerializerContext, serializer::MediaStorage};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const CONFIG_FILE_NAME: &str = "bigbox.toml";

pub const DEFAULT_MEDIA_URL: &str = "/media/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_media_url")]
    pub url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            url: default_media_url(),
        }
    }
}

fn default_media_url() -> String {
    DEFAULT_MEDIA_URL.to_owned()
}

impl Config {
    /// Locate and parse `bigbox.toml` in the current directory or its
    /// parent. `Ok(None)` when there is no such file; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn load() -> Result<Option<Self>> {
        let current_dir = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;
        Self::load_from(&current_dir)
    }

    pub fn load_from(dir: &Path) -> Result<Option<Self>> {
        find_config_file(dir).map(Self::from_path).transpose()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        content
            .parse()
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Build a configuration from `DATABASE_URL` and the optional `MEDIA_URL`
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| Error::Config("Environment variable 'DATABASE_URL' not set".to_owned()))?;
        Ok(Self::with_database_url(url))
    }

    /// A configuration for `url`, with the media url from `MEDIA_URL` when set
    pub fn with_database_url(url: impl Into<String>) -> Self {
        let media = env::var("MEDIA_URL")
            .map(|url| MediaConfig { url })
            .unwrap_or_default();
        Self {
            database: DatabaseConfig { url: url.into() },
            media,
        }
    }

    pub fn serializer_context(&self) -> SerializerContext {
        SerializerContext::new(MediaStorage::new(&self.media.url))
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl DatabaseConfig {
    /// The connection string, with any `env:` indirection resolved
    pub fn url(&self) -> Result<String> {
        match self.url.strip_prefix("env:") {
            Some(var) => env::var(var)
                .map_err(|_| Error::Config(format!("Environment variable '{var}' not set"))),
            None => Ok(self.url.clone()),
        }
    }
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    [Some(dir), dir.parent()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.exists())
}
