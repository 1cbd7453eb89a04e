use std::path::PathBuf;

use clap::{ArgAction, Parser, command};

use crate::context::ContextParams;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// AWS profile to use, must already exist unless it is "default"
    #[arg(long, short('p'))]
    pub profile: Option<String>,

    /// Region to use instead of prompting for one
    #[arg(long, short('r'))]
    pub region: Option<String>,

    /// Description of the context
    #[arg(long, short('d'), default_value = "")]
    pub description: String,

    /// Shared credentials file, defaults to ~/.aws/credentials
    #[arg(long)]
    pub credentials_file: Option<PathBuf>,

    /// Shared config file, defaults to ~/.aws/config
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Additional settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long, short('v'), action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn context_params(&self) -> ContextParams {
        ContextParams {
            profile: self.profile.clone(),
            region: self.region.clone(),
            description: self.description.clone(),
        }
    }
}
