use std::env;
use std::path::{Path, PathBuf};

use crate::app_err::{AppResult, ApplicationError};
use crate::aws_files::IniStore;

const AWS_DIR: &str = ".aws";
const CREDENTIALS_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";
const CONFIG_ENV: &str = "AWS_CONFIG_FILE";

/// Locations of the shared credentials and config files.
#[derive(Debug, Clone)]
pub struct AwsPaths {
    credentials_file: PathBuf,
    config_file: PathBuf,
}

impl AwsPaths {
    pub fn new<C: Into<PathBuf>, F: Into<PathBuf>>(credentials_file: C, config_file: F) -> Self {
        AwsPaths {
            credentials_file: credentials_file.into(),
            config_file: config_file.into(),
        }
    }

    /// Explicit overrides win, then the standard AWS environment variables, then `~/.aws`.
    pub fn discover(
        credentials_override: Option<PathBuf>,
        config_override: Option<PathBuf>,
    ) -> AppResult<Self> {
        Ok(AwsPaths {
            credentials_file: shared_file(credentials_override, CREDENTIALS_ENV, "credentials")?,
            config_file: shared_file(config_override, CONFIG_ENV, "config")?,
        })
    }

    pub fn credentials_file(&self) -> &Path {
        &self.credentials_file
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn credentials_store(&self) -> IniStore {
        IniStore::private(&self.credentials_file)
    }

    pub fn config_store(&self) -> IniStore {
        IniStore::new(&self.config_file)
    }
}

fn shared_file(
    override_path: Option<PathBuf>,
    env_var: &str,
    file_name: &str,
) -> AppResult<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    if let Some(path) = env::var_os(env_var).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| ApplicationError::Config("unable to resolve home directory".to_string()))?;
    Ok(home.join(AWS_DIR).join(file_name))
}
