use super::{build_coordinator, CliCommand, GlobalOptions};
use anyhow::Result;

#[derive(clap::Parser)]
pub(crate) struct Command {
    #[clap(flatten)]
    global_options: GlobalOptions,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[arg(required = true)]
    urls: Vec<String>,
}

#[async_trait]
impl CliCommand for Command {
    async fn run(&self) -> Result<()> {
        let config = self.global_options.prepare()?;
        let coordinator = build_coordinator(&config)?;

        let results = coordinator.process(self.urls.clone()).await;
        let failed = results.iter().filter(|result| !result.is_success()).count();

        let output = if self.pretty {
            serde_json::to_string_pretty(&results)?
        } else {
            serde_json::to_string(&results)?
        };
        println!("{output}");

        if failed > 0 {
            log::warn!("{failed} of {} urls failed", results.len());
        }

        Ok(())
    }
}
