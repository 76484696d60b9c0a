pub mod keypair;

use anyhow::Result;

use crate::config::Config;
use crate::crypto::Keypair;
use crate::types::SuiAddress;

/// Anything that can authorize a transaction for a Sui address.
#[async_trait::async_trait]
pub trait Signer: Send + Sync {
	/// The address transactions are sent from.
	fn address(&self) -> SuiAddress;

	/// Sign BCS transaction bytes and return the serialized, base64-encoded
	/// signature the node expects.
	async fn sign_transaction(&self, tx_bytes: &[u8]) -> Result<String>;
}

/// Build the signer for the configured admin key. The key is decoded on
/// every call and never stored.
pub fn from_config(config: &Config) -> Result<Box<dyn Signer>> {
	let keypair = Keypair::from_base64(config.secret_key()?)?;
	Ok(Box::new(keypair::KeypairSigner::new(keypair)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use base64::engine::general_purpose::STANDARD;
	use base64::Engine;

	#[test]
	fn missing_key_is_a_config_error() {
		let err = from_config(&Config::default()).err().unwrap();
		assert_eq!(err.to_string(), "ADMIN_SECRET_KEY is not set");
	}

	#[tokio::test]
	async fn configured_key_signs_for_its_address() {
		let mut raw = vec![0u8];
		raw.extend_from_slice(&[3u8; 32]);
		let mut config = Config::default();
		config.admin.secret_key = Some(STANDARD.encode(raw));

		let signer = from_config(&config).unwrap();
		let expected = Keypair::from_secret_bytes([3u8; 32]);
		assert_eq!(signer.address(), expected.address());

		let sig = signer.sign_transaction(b"tx").await.unwrap();
		assert_eq!(sig, expected.sign_transaction(b"tx"));
	}
}
