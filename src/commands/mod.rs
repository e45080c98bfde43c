mod fetch_cmd;
mod serve_cmd;

use crate::{
    batch::BatchCoordinator,
    config::Config,
    source::{FetchCache, PageFetcher, RemoteSource},
};
use anyhow::Result;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[async_trait]
pub(crate) trait CliCommand {
    async fn run(&self) -> Result<()>;
}

#[derive(clap::Parser)]
struct GlobalOptions {
    /// YAML config file. Built-in defaults are used when omitted
    #[arg(long, short, value_parser)]
    #[arg(help_heading = "GLOBAL OPTIONS", global = true)]
    config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Loads the config and sets up logging. Must run once per process.
    fn prepare(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        SimpleLogger::new()
            .with_level(config.log_level)
            .env()
            .init()?;

        Ok(config)
    }
}

fn build_coordinator(config: &Config) -> Result<BatchCoordinator> {
    let source = RemoteSource::new(&config.fetch)?;
    let cache = FetchCache::new(config.cache.invalidate_after);

    Ok(BatchCoordinator::new(PageFetcher::new(source, cache)))
}

#[derive(clap::Parser)]
#[clap(version)]
pub(crate) enum Command {
    /// Serve the metadata API over HTTP
    #[clap(disable_version_flag = true)]
    Serve(serve_cmd::Command),

    /// Fetch metadata for the given URLs and print it as JSON
    #[clap(disable_version_flag = true)]
    Fetch(fetch_cmd::Command),
}
