use std::{collections::HashMap, env, path::PathBuf, str::FromStr};
use thiserror::Error;
use tripsettle_application::TripId;

pub const OUTPUT_VAR: &str = "TRIPSETTLE_OUTPUT";
pub const TRIP_ID_VAR: &str = "TRIPSETTLE_TRIP_ID";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownOutputFormat(value.to_owned())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: tripsettle <export.json> [trip-id]")]
    MissingExportPath,
    #[error("TRIPSETTLE_OUTPUT must be `text` or `json`, got '{0}'")]
    UnknownOutputFormat(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub export_path: PathBuf,
    /// `None` selects the first trip of the export.
    pub trip_id: Option<TripId>,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Reads `.env` and the process environment; positional args win.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let vars: HashMap<String, String> = [OUTPUT_VAR, TRIP_ID_VAR]
            .into_iter()
            .filter_map(|key| env::var(key).ok().map(|value| (key.to_owned(), value)))
            .collect();
        Self::from_sources(args, &vars)
    }

    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        vars: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let export_path = args
            .next()
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingExportPath)?;

        let trip_id = args
            .next()
            .or_else(|| vars.get(TRIP_ID_VAR).cloned())
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .map(TripId);

        let output = match vars.get(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            export_path,
            trip_id,
            output,
        })
    }
}
