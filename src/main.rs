use aws_config::environment::EnvironmentVariableRegionProvider;
use aws_config::meta::region::RegionProviderChain;
use aws_context::aws_files::AwsPaths;
use aws_context::cli::Args;
use aws_context::settings::Settings;
use aws_context::tui::InquirePrompt;
use aws_context::{AppResult, ApplicationError, ContextCreateHelper};
use clap::Parser;
use log::LevelFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

// Environment only: the full default chain reads ~/.aws/config regardless of
// --config-file and may block on instance metadata off EC2.
async fn default_region() -> String {
    RegionProviderChain::first_try(EnvironmentVariableRegionProvider::new())
        .region()
        .await
        .map(|region| region.as_ref().to_string())
        .unwrap_or_default()
}

async fn run(args: Args) -> AppResult<()> {
    let settings = Settings::load(args.settings.as_deref())?;
    let paths = AwsPaths::discover(
        args.credentials_file.clone().or(settings.credentials_file),
        args.config_file.clone().or(settings.config_file),
    )?;

    let region_suggestion = match settings.default_region {
        Some(region) => region,
        None if args.region.is_none() => default_region().await,
        None => String::new(),
    };

    let prompt = InquirePrompt;
    let helper =
        ContextCreateHelper::new(&prompt, paths).with_region_suggestion(region_suggestion);
    let (context, description) = helper.create_context_data(args.context_params())?;

    println!("{}", serde_json::to_string_pretty(&context)?);
    println!("{description}");
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => {}
        Err(ApplicationError::Canceled) => std::process::exit(130),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
