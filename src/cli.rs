use clap::{Parser, Subcommand};

use crate::types::{ObjectId, SuiAddress};

#[derive(Parser)]
#[command(
	name = "stablecoin-utility",
	about = "CLI to manage your Stablecoin",
	version,
	disable_help_subcommand = true,
	arg_required_else_help = true
)]
pub struct Cli {
	/// Override the Sui full node URL (SUI_NETWORK).
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	/// Package that issued the coin, used to derive the coin type when
	/// COIN_TYPE is not set.
	#[arg(long, short = 'p', global = true)]
	pub package_id: Option<String>,

	/// Module that issues the coin [default: regulated_coin].
	#[arg(long, short = 'm', global = true)]
	pub module: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Adds an address to the deny list.
	DenyListAdd {
		/// Address to add.
		#[arg(long)]
		address: SuiAddress,
	},

	/// Removes an address from the deny list.
	DenyListRemove {
		/// Address to remove.
		#[arg(long)]
		address: SuiAddress,

		/// Deny list object ID.
		#[arg(long = "deny_list", visible_alias = "deny-list")]
		deny_list: ObjectId,
	},

	/// Mints coins and transfers them to an address.
	MintAndTransfer {
		/// How many coins to mint, in base units.
		#[arg(long)]
		amount: u64,

		/// Address to send coins to.
		#[arg(long)]
		address: SuiAddress,
	},

	/// Burns a coin object.
	Burn {
		/// The coin to burn.
		#[arg(long)]
		coin: ObjectId,
	},

	/// Transfers a coin object to an address.
	Transfer {
		/// The coin to transfer.
		#[arg(long)]
		coin: ObjectId,

		/// Recipient address.
		#[arg(long)]
		address: SuiAddress,
	},

	/// Prints help.
	Help,
}
