use crate::types::ObjectId;

/// A fully-qualified Move function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
	pub package: ObjectId,
	pub module: &'static str,
	pub function: &'static str,
}

impl MoveTarget {
	const fn framework(module: &'static str, function: &'static str) -> Self {
		Self {
			package: SUI_FRAMEWORK,
			module,
			function,
		}
	}
}

impl std::fmt::Display for MoveTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}::{}::{}", self.package, self.module, self.function)
	}
}

/// The Sui framework package (`0x2`).
pub const SUI_FRAMEWORK: ObjectId = ObjectId::from_single_byte(0x2);

/// The system deny list shared object (`0x403`).
pub const SUI_DENY_LIST: &str = "0x403";

pub const DENY_LIST_ADD: MoveTarget = MoveTarget::framework("coin", "deny_list_add");
pub const DENY_LIST_REMOVE: MoveTarget = MoveTarget::framework("coin", "deny_list_remove");
pub const MINT_AND_TRANSFER: MoveTarget = MoveTarget::framework("coin", "mint_and_transfer");
pub const BURN: MoveTarget = MoveTarget::framework("coin", "burn");
pub const PUBLIC_TRANSFER: MoveTarget = MoveTarget::framework("transfer", "public_transfer");

/// Wrap a coin type in the framework `Coin<T>` struct.
pub fn coin_object_type(coin_type: &str) -> String {
	format!("0x2::coin::Coin<{coin_type}>")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn targets_live_in_the_framework() {
		for t in [DENY_LIST_ADD, DENY_LIST_REMOVE, MINT_AND_TRANSFER, BURN] {
			assert_eq!(t.package, SUI_FRAMEWORK);
			assert_eq!(t.module, "coin");
		}
		assert_eq!(PUBLIC_TRANSFER.module, "transfer");
	}

	#[test]
	fn target_display_is_fully_qualified() {
		assert!(BURN.to_string().ends_with("0002::coin::burn"));
	}

	#[test]
	fn deny_list_id_is_valid() {
		assert!(SUI_DENY_LIST.parse::<ObjectId>().is_ok());
	}
}
