use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 32-byte Sui account address.
///
/// Parsed from `0x`-prefixed hex. Short forms such as `0x2` are left-padded
/// with zeros, so `0x2` and `0x00..02` name the same account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiAddress([u8; 32]);

/// Object IDs share the address representation on Sui.
pub type ObjectId = SuiAddress;

impl SuiAddress {
	pub const LENGTH: usize = 32;

	pub const fn new(bytes: [u8; 32]) -> Self {
		Self(bytes)
	}

	/// Shorthand for framework addresses like `0x2`.
	pub const fn from_single_byte(b: u8) -> Self {
		let mut bytes = [0u8; 32];
		bytes[31] = b;
		Self(bytes)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

impl FromStr for SuiAddress {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = |reason: &str| Error::InvalidHex {
			input: s.to_owned(),
			reason: reason.to_owned(),
		};

		let digits = s
			.strip_prefix("0x")
			.or_else(|| s.strip_prefix("0X"))
			.unwrap_or(s);
		if digits.is_empty() {
			return Err(invalid("no hex digits"));
		}
		if digits.len() > Self::LENGTH * 2 {
			return Err(invalid("longer than 32 bytes"));
		}

		let padded = format!("{digits:0>64}");
		let mut bytes = [0u8; 32];
		hex::decode_to_slice(&padded, &mut bytes).map_err(|e| invalid(&e.to_string()))?;
		Ok(Self(bytes))
	}
}

impl fmt::Display for SuiAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_form_is_left_padded() {
		let addr: SuiAddress = "0x2".parse().unwrap();
		assert_eq!(addr, SuiAddress::from_single_byte(2));
		assert_eq!(
			addr.to_string(),
			"0x0000000000000000000000000000000000000000000000000000000000000002"
		);
	}

	#[test]
	fn full_length_parses_without_prefix() {
		let hex = "ab".repeat(32);
		let addr: SuiAddress = hex.parse().unwrap();
		assert_eq!(addr.as_bytes(), &[0xab; 32]);
	}

	#[test]
	fn rejects_bad_input() {
		assert!("".parse::<SuiAddress>().is_err());
		assert!("0x".parse::<SuiAddress>().is_err());
		assert!("0xzz".parse::<SuiAddress>().is_err());
		assert!(format!("0x{}", "1".repeat(65)).parse::<SuiAddress>().is_err());
	}
}
