use anyhow::Result;

use crate::crypto::Keypair;
use crate::types::SuiAddress;

/// Signs with an Ed25519 key held in memory for the lifetime of one
/// command.
pub struct KeypairSigner {
	keypair: Keypair,
	address: SuiAddress,
}

impl KeypairSigner {
	pub fn new(keypair: Keypair) -> Self {
		let address = keypair.address();
		Self { keypair, address }
	}
}

#[async_trait::async_trait]
impl super::Signer for KeypairSigner {
	fn address(&self) -> SuiAddress {
		self.address
	}

	async fn sign_transaction(&self, tx_bytes: &[u8]) -> Result<String> {
		Ok(self.keypair.sign_transaction(tx_bytes))
	}
}
