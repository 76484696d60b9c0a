pub mod coin;
pub mod deny;

use std::io;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::rpc::RpcClient;
use crate::submit::Submitter;
use crate::tx_builder::{self, Operation};

pub async fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Command::Help => print_help(),
		Command::DenyListAdd { .. } | Command::DenyListRemove { .. } => {
			deny::run(&resolve_config(cli)?, &cli.command).await
		}
		Command::MintAndTransfer { .. } | Command::Burn { .. } | Command::Transfer { .. } => {
			coin::run(&resolve_config(cli)?, &cli.command).await
		}
	}
}

fn print_help() -> Result<()> {
	println!("Help for stablecoin-utility");
	Cli::command().print_help()?;
	Ok(())
}

/// Load config from file and environment, then apply CLI overrides.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
	let mut config = Config::load()?;
	if let Some(url) = &cli.rpc_url {
		config.network.rpc_url = url.clone();
	}
	if let Some(package_id) = &cli.package_id {
		config.coin.package_id = Some(package_id.clone());
	}
	if let Some(module) = &cli.module {
		config.coin.module = module.clone();
	}
	Ok(config)
}

/// Build the call for `op`, sign it with the admin key and submit it,
/// printing the node's verdict.
///
/// Missing capabilities and keys are reported before anything is sent.
pub async fn submit_operation(config: &Config, op: &Operation) -> Result<()> {
	let call = tx_builder::build_call(op, config)?;
	let signer = crate::signer::from_config(config)?;

	println!("Connecting to SUI network: {}", config.network.rpc_url);
	let rpc = RpcClient::new(&config.network.rpc_url);
	let result = Submitter::new(&rpc, signer.as_ref()).submit(&call).await?;

	result.report(&mut io::stdout().lock())?;
	Ok(())
}
