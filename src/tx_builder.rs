use serde_json::Value;

use crate::config::Config;
use crate::contracts::{self, MoveTarget};
use crate::error::Result;
use crate::types::{ObjectId, SuiAddress};

/// One administrative action requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
	DenyListAdd(SuiAddress),
	DenyListRemove {
		address: SuiAddress,
		deny_list: ObjectId,
	},
	MintAndTransfer {
		amount: u64,
		recipient: SuiAddress,
	},
	Burn(ObjectId),
	Transfer {
		coin: ObjectId,
		recipient: SuiAddress,
	},
}

/// A typed argument to a Move call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallArg {
	Object(ObjectId),
	Address(SuiAddress),
	U64(u64),
}

impl CallArg {
	/// The JSON form the node accepts for move-call arguments. Integers are
	/// passed as decimal strings so u64 values survive JSON number limits.
	pub fn to_json(&self) -> Value {
		match self {
			Self::Object(id) | Self::Address(id) => Value::String(id.to_string()),
			Self::U64(n) => Value::String(n.to_string()),
		}
	}
}

/// A single Move call: target, type arguments and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
	pub target: MoveTarget,
	pub type_arguments: Vec<String>,
	pub arguments: Vec<CallArg>,
}

impl MoveCall {
	pub fn arguments_json(&self) -> Vec<Value> {
		self.arguments.iter().map(CallArg::to_json).collect()
	}
}

/// Build the one Move call that carries out `op`.
///
/// Fails before producing anything if a capability the call needs is not
/// configured.
pub fn build_call(op: &Operation, config: &Config) -> Result<MoveCall> {
	let call = match *op {
		Operation::DenyListAdd(address) => {
			let deny_cap = config.deny_cap()?;
			MoveCall {
				target: contracts::DENY_LIST_ADD,
				type_arguments: vec![config.coin_type()?],
				arguments: vec![
					CallArg::Object(config.deny_list()?),
					CallArg::Object(deny_cap),
					CallArg::Address(address),
				],
			}
		}
		Operation::DenyListRemove { address, deny_list } => {
			let deny_cap = config.deny_cap()?;
			MoveCall {
				target: contracts::DENY_LIST_REMOVE,
				type_arguments: vec![config.coin_type()?],
				arguments: vec![
					CallArg::Object(deny_list),
					CallArg::Object(deny_cap),
					CallArg::Address(address),
				],
			}
		}
		Operation::MintAndTransfer { amount, recipient } => {
			let treasury_cap = config.treasury_cap()?;
			MoveCall {
				target: contracts::MINT_AND_TRANSFER,
				type_arguments: vec![config.coin_type()?],
				arguments: vec![
					CallArg::Object(treasury_cap),
					CallArg::U64(amount),
					CallArg::Address(recipient),
				],
			}
		}
		Operation::Burn(coin) => {
			let treasury_cap = config.treasury_cap()?;
			MoveCall {
				target: contracts::BURN,
				type_arguments: vec![config.coin_type()?],
				arguments: vec![CallArg::Object(treasury_cap), CallArg::Object(coin)],
			}
		}
		Operation::Transfer { coin, recipient } => MoveCall {
			target: contracts::PUBLIC_TRANSFER,
			type_arguments: vec![contracts::coin_object_type(&config.coin_type()?)],
			arguments: vec![CallArg::Object(coin), CallArg::Address(recipient)],
		},
	};
	Ok(call)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	const COIN: &str = "0xc0::regulated_coin::REGULATED_COIN";

	fn id(b: u8) -> ObjectId {
		ObjectId::from_single_byte(b)
	}

	fn configured() -> Config {
		let mut c = Config::default();
		c.coin.coin_type = Some(COIN.into());
		c.admin.deny_cap_id = Some("0xd0".into());
		c.admin.treasury_cap_id = Some("0xe0".into());
		c
	}

	#[test]
	fn mint_and_transfer_targets_mint_with_cap_amount_recipient() {
		let op = Operation::MintAndTransfer {
			amount: 1_000_000,
			recipient: id(0xaa),
		};
		let call = build_call(&op, &configured()).unwrap();

		assert_eq!(call.target, contracts::MINT_AND_TRANSFER);
		assert_eq!(call.type_arguments, vec![COIN.to_string()]);
		assert_eq!(
			call.arguments,
			vec![CallArg::Object(id(0xe0)), CallArg::U64(1_000_000), CallArg::Address(id(0xaa))]
		);
	}

	#[test]
	fn burn_targets_burn_with_cap_and_coin() {
		let call = build_call(&Operation::Burn(id(0xbb)), &configured()).unwrap();

		assert_eq!(call.target, contracts::BURN);
		assert_eq!(call.type_arguments, vec![COIN.to_string()]);
		assert_eq!(call.arguments, vec![CallArg::Object(id(0xe0)), CallArg::Object(id(0xbb))]);
	}

	#[test]
	fn deny_list_add_uses_configured_deny_list() {
		let call = build_call(&Operation::DenyListAdd(id(0xaa)), &configured()).unwrap();

		assert_eq!(call.target, contracts::DENY_LIST_ADD);
		assert_eq!(
			call.arguments,
			vec![
				CallArg::Object(contracts::SUI_DENY_LIST.parse().unwrap()),
				CallArg::Object(id(0xd0)),
				CallArg::Address(id(0xaa)),
			]
		);
	}

	#[test]
	fn deny_list_remove_uses_given_deny_list() {
		let op = Operation::DenyListRemove {
			address: id(0xaa),
			deny_list: id(0x77),
		};
		let call = build_call(&op, &configured()).unwrap();

		assert_eq!(call.target, contracts::DENY_LIST_REMOVE);
		assert_eq!(call.arguments[0], CallArg::Object(id(0x77)));
		assert_eq!(call.arguments[1], CallArg::Object(id(0xd0)));
	}

	#[test]
	fn deny_list_remove_without_deny_cap_fails() {
		let mut c = configured();
		c.admin.deny_cap_id = None;
		let op = Operation::DenyListRemove {
			address: id(0xaa),
			deny_list: id(0x77),
		};
		assert!(matches!(build_call(&op, &c), Err(Error::MissingSetting("DENY_CAP_ID"))));
	}

	#[test]
	fn mint_and_burn_without_treasury_cap_fail() {
		let mut c = configured();
		c.admin.treasury_cap_id = None;

		let mint = Operation::MintAndTransfer {
			amount: 1,
			recipient: id(0xaa),
		};
		assert!(matches!(build_call(&mint, &c), Err(Error::MissingSetting("TREASURY_CAP_ID"))));
		assert!(matches!(
			build_call(&Operation::Burn(id(0xbb)), &c),
			Err(Error::MissingSetting("TREASURY_CAP_ID"))
		));
	}

	#[test]
	fn transfer_wraps_coin_type() {
		let mut c = configured();
		c.admin = Default::default();
		let op = Operation::Transfer {
			coin: id(0xbb),
			recipient: id(0xaa),
		};
		let call = build_call(&op, &c).unwrap();

		assert_eq!(call.target, contracts::PUBLIC_TRANSFER);
		assert_eq!(call.type_arguments, vec![format!("0x2::coin::Coin<{COIN}>")]);
	}

	#[test]
	fn arguments_serialize_as_strings() {
		let call = build_call(&Operation::Burn(id(0xbb)), &configured()).unwrap();
		let json = call.arguments_json();
		assert_eq!(json.len(), 2);
		assert!(json.iter().all(Value::is_string));

		assert_eq!(CallArg::U64(u64::MAX).to_json(), Value::String(u64::MAX.to_string()));
	}
}
