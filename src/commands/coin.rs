use anyhow::Result;

use crate::cli::Command;
use crate::commands::submit_operation;
use crate::config::Config;
use crate::tx_builder::Operation;

pub async fn run(config: &Config, cmd: &Command) -> Result<()> {
	let op = match *cmd {
		Command::MintAndTransfer { amount, address } => {
			println!("Executing Mint new coins and transfer to address");
			println!("Amount to mint: {amount}");
			println!("Address to send coins: {address}");
			Operation::MintAndTransfer {
				amount,
				recipient: address,
			}
		}
		Command::Burn { coin } => {
			println!("Executing Burn coin");
			println!("Coin to burn: {coin}");
			Operation::Burn(coin)
		}
		Command::Transfer { coin, address } => {
			println!("Executing Transfer coin");
			println!("Coin to transfer: {coin}");
			println!("Address to send coin: {address}");
			Operation::Transfer {
				coin,
				recipient: address,
			}
		}
		_ => anyhow::bail!("not a coin command"),
	};

	submit_operation(config, &op).await
}
