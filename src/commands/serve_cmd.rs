use super::{build_coordinator, CliCommand, GlobalOptions};
use crate::server;
use anyhow::Result;
use tokio::net::TcpListener;

#[derive(clap::Parser)]
pub(crate) struct Command {
    #[clap(flatten)]
    global_options: GlobalOptions,
}

#[async_trait]
impl CliCommand for Command {
    async fn run(&self) -> Result<()> {
        let config = self.global_options.prepare()?;
        let app = server::router(build_coordinator(&config)?);

        let shutdown = tokio_shutdown::Shutdown::new()?;
        let listener = TcpListener::bind(config.server.listen).await?;
        log::info!("Starting server on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.handle().await;
                log::info!("Got shutdown signal. Exiting...");
            })
            .await?;

        Ok(())
    }
}
