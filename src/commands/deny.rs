use anyhow::Result;

use crate::cli::Command;
use crate::commands::submit_operation;
use crate::config::Config;
use crate::tx_builder::Operation;

pub async fn run(config: &Config, cmd: &Command) -> Result<()> {
	let op = match *cmd {
		Command::DenyListAdd { address } => {
			println!("Executing Addition to Deny List");
			println!("Address to add in deny list: {address}");
			Operation::DenyListAdd(address)
		}
		Command::DenyListRemove { address, deny_list } => {
			println!("Executing Removal from Deny List");
			println!("Address to remove from deny list: {address}");
			Operation::DenyListRemove { address, deny_list }
		}
		_ => anyhow::bail!("not a deny list command"),
	};

	submit_operation(config, &op).await
}
