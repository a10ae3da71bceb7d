use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4221";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
}

/// Startup configuration, built once and shared read-only by every connection.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Root for `/files` requests. `None` turns every file request into a 404.
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_parts(std::env::args().skip(1), std::env::var("LISTEN").ok())
    }

    /// Builds a config from command line arguments (program name excluded)
    /// and an optional listen address override.
    pub fn from_parts<I>(args: I, listen: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut directory = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--directory" => {
                    let dir = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--directory"))?;
                    directory = Some(PathBuf::from(dir));
                }
                other => {
                    tracing::warn!(arg = other, "Ignoring unknown argument");
                }
            }
        }

        Ok(Self {
            listen_addr: listen.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            directory,
        })
    }
}
