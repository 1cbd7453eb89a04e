use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::app_err::AppResult;

const APP_DIR: &str = "aws-context";
const ENV_PREFIX: &str = "AWS_CONTEXT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    #[serde(default)]
    pub default_region: Option<String>,
}

impl Settings {
    /// User settings file, then `extra`, then `AWS_CONTEXT_*` environment variables.
    pub fn load(extra: Option<&Path>) -> AppResult<Self> {
        let mut builder = Config::builder();

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join(APP_DIR).join("settings.toml");
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
