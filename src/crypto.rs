use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer as _, SigningKey};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::SuiAddress;

type Blake2b256 = Blake2b<U32>;

/// Signature scheme flag for Ed25519 keys and signatures.
pub const ED25519_FLAG: u8 = 0x00;

/// Intent prefix for transaction data: scope TransactionData, version V0,
/// app Sui.
pub const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

// -- Keys --

/// Ed25519 signing key decoded from the configured admin secret.
pub struct Keypair {
	signing: SigningKey,
}

impl Keypair {
	/// Decode a base64 secret in the `flag || 32-byte secret` layout used by
	/// Sui keystores. The leading byte is always dropped.
	pub fn from_base64(encoded: &str) -> Result<Self> {
		let raw = STANDARD.decode(encoded.trim())?;
		let (flag, secret) = raw
			.split_first()
			.ok_or_else(|| Error::InvalidSecretKey("key is empty".into()))?;
		if *flag != ED25519_FLAG {
			warn!(flag, "secret key flag is not Ed25519, using the remaining bytes as an Ed25519 key");
		}
		let secret: [u8; 32] = secret.try_into().map_err(|_| {
			Error::InvalidSecretKey(format!(
				"expected 32 bytes after the scheme flag, got {}",
				secret.len()
			))
		})?;
		Ok(Self::from_secret_bytes(secret))
	}

	pub fn from_secret_bytes(secret: [u8; 32]) -> Self {
		Self {
			signing: SigningKey::from_bytes(&secret),
		}
	}

	pub fn public_key(&self) -> [u8; 32] {
		self.signing.verifying_key().to_bytes()
	}

	/// `blake2b256(flag || public_key)`
	pub fn address(&self) -> SuiAddress {
		let mut h = Blake2b256::new();
		h.update([ED25519_FLAG]);
		h.update(self.public_key());
		SuiAddress::new(h.finalize().into())
	}

	/// Sign BCS transaction bytes and return the serialized signature
	/// `flag || signature || public_key`, base64-encoded.
	pub fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
		let digest = intent_digest(tx_bytes);
		let sig = self.signing.sign(&digest);

		let mut out = Vec::with_capacity(1 + 64 + 32);
		out.push(ED25519_FLAG);
		out.extend_from_slice(&sig.to_bytes());
		out.extend_from_slice(&self.public_key());
		STANDARD.encode(out)
	}
}

// -- Hashing --

/// The digest a transaction signature commits to:
/// `blake2b256(intent || tx_bytes)`.
pub fn intent_digest(tx_bytes: &[u8]) -> [u8; 32] {
	let mut h = Blake2b256::new();
	h.update(TRANSACTION_INTENT);
	h.update(tx_bytes);
	h.finalize().into()
}
