use clap::Parser;
use infrastructure::config::Config;
use presentation::cli::{Cli, CliApp};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().with_backend_url(cli.backend_url);

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!(backend = %config.backend_url, "starting kora");
    let app = CliApp::new(config, cli.copy);
    app.run(cli.command).await
}
