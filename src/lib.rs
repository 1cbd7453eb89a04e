pub mod app_err;
pub mod aws_authentication;
pub mod aws_files;
pub mod aws_profiles;
pub mod aws_region;
pub mod cli;
pub mod context;
pub mod settings;
pub mod tui;

pub use app_err::{AppResult, ApplicationError};
pub use context::{AwsContext, ContextCreateHelper, ContextParams};
