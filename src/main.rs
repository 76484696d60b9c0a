use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stablecoin_utility::cli::Cli;
use stablecoin_utility::commands;

#[tokio::main]
async fn main() -> Result<()> {
	dotenvy::dotenv().ok();
	init_tracing();

	let cli = Cli::parse();
	commands::run(&cli).await
}

/// Log to stderr so stdout only carries command output. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
