use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CATALOG_PATH: &str = "data/data.json";
pub const DEFAULT_LOG_PATH: &str = "quiz.log";
pub const CATALOG_ENV: &str = "QUIZ_CATALOG";
pub const LOG_ENV: &str = "QUIZ_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unexpected argument '{0}' (usage: paged-quiz [CATALOG.json])")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    /// `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env_and_args() -> Result<Self, ConfigError> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Catalog: first argument, then `QUIZ_CATALOG`, then the bundled sample.
    /// Log file: `QUIZ_LOG` (empty disables), then `quiz.log`.
    pub fn resolve<I, F>(args: I, env: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let cli_catalog = args.next();
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        let catalog_path = cli_catalog
            .or_else(|| env(CATALOG_ENV).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let log_path = match env(LOG_ENV) {
            Some(v) if v.is_empty() => None,
            Some(v) => Some(PathBuf::from(v)),
            None => Some(PathBuf::from(DEFAULT_LOG_PATH)),
        };

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            log_path,
        })
    }
}
