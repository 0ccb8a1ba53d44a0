use std::path::PathBuf;
use std::sync::Arc;

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use tracing::{debug, info};

mod adapters;
mod cache;
mod config;
mod download;
mod error;
mod list;
mod model;
mod output;
mod pattern;
mod util;

use adapters::ObjectStore;
use config::Config;
use error::CatError;

#[tokio::main]
async fn main() {
    let matches = clap::Command::new("s3cat")
        .version(clap::crate_version!())
        .about("Concatenate S3 objects, gunzipping as needed, to stdout")
        .arg(
            clap::Arg::new("PATTERN")
                .required(true)
                .num_args(1..)
                .help("Objects to print, as /bucket/prefix"),
        )
        .arg(
            clap::Arg::new("region")
                .short('r')
                .long("region")
                .help("AWS region, otherwise resolved from the environment"),
        )
        .arg(
            clap::Arg::new("temp")
                .short('t')
                .long("temp")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory holding downloaded objects"),
        )
        .arg(
            clap::Arg::new("concurrency")
                .short('c')
                .long("concurrency")
                .default_value("1")
                .value_parser(clap::value_parser!(u16).range(1..))
                .help("Concurrent downloads"),
        )
        .arg(
            clap::Arg::new("timeout")
                .short('e')
                .long("timeout")
                .default_value("0")
                .value_parser(clap::value_parser!(u64))
                .help("Overall timeout in seconds, 0 for none"),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Log debug detail to stderr"),
        )
        .get_matches();

    let patterns: Vec<String> = matches
        .get_many::<String>("PATTERN")
        .expect("PATTERN is required")
        .cloned()
        .collect();

    let config = Config::new(
        matches.get_one::<String>("region").cloned(),
        matches.get_one::<PathBuf>("temp").cloned(),
        usize::from(*matches.get_one::<u16>("concurrency").expect("has default")),
        *matches.get_one::<u64>("timeout").expect("has default"),
        matches.get_flag("verbose"),
    );

    let filter = if config.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(?config, ?patterns, "options");

    if let Err(err) = run(&patterns, &config).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(args: &[String], config: &Config) -> Result<(), CatError> {
    let patterns = pattern::parse_all(args)?;

    let region = RegionProviderChain::first_try(config.region.clone().map(Region::new))
        .or_default_provider();
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;
    let store: Arc<dyn ObjectStore> = Arc::new(aws_sdk_s3::Client::new(&sdk_config));

    let objects = list::list_objects(store.as_ref(), &patterns, config.deadline).await?;
    let total: u64 = objects.iter().map(|o| o.size).sum();
    info!(objects = objects.len(), bytes = total, "matched");

    download::download_all(store.clone(), &objects, config).await?;

    output::emit(&objects, &config.temp_root)
}
