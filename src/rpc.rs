use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::tx_builder::MoveCall;
use crate::types::SuiAddress;

/// Minimal JSON-RPC client for a Sui full node.
///
/// Only the two calls needed to get a single Move call on chain are
/// exposed: building transaction bytes and executing a signed transaction.
pub struct RpcClient {
	url: String,
	http: reqwest::Client,
}

impl RpcClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.to_owned(),
			http: reqwest::Client::new(),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Send one JSON-RPC request and return its `result`.
	pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": method,
			"params": params,
		});
		debug!(method, url = %self.url, "sending JSON-RPC request");

		let resp: Value = self
			.http
			.post(&self.url)
			.json(&body)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;

		if let Some(err) = resp.get("error") {
			return Err(Error::Rpc {
				code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
				message: err
					.get("message")
					.and_then(Value::as_str)
					.unwrap_or("unknown error")
					.to_owned(),
			});
		}

		resp.get("result")
			.cloned()
			.ok_or_else(|| Error::UnexpectedResponse(format!("{method}: no result in {resp}")))
	}

	// -- Transaction helpers --

	/// Have the node build transaction data holding exactly `call`, paid by
	/// `sender` with a node-selected gas coin. Returns the BCS bytes.
	pub async fn unsafe_move_call(
		&self,
		sender: SuiAddress,
		call: &MoveCall,
		gas_budget: u64,
	) -> Result<Vec<u8>> {
		let params = json!([
			sender.to_string(),
			call.target.package.to_string(),
			call.target.module,
			call.target.function,
			call.type_arguments,
			call.arguments_json(),
			Value::Null,
			gas_budget.to_string(),
		]);

		let result = self.call("unsafe_moveCall", params).await?;
		let tx_bytes = result
			.get("txBytes")
			.and_then(Value::as_str)
			.ok_or_else(|| Error::UnexpectedResponse(format!("unsafe_moveCall: no txBytes in {result}")))?;
		Ok(STANDARD.decode(tx_bytes)?)
	}

	/// Submit signed transaction bytes and wait until the node has executed
	/// them locally.
	pub async fn execute_transaction_block(&self, tx_bytes: &[u8], signature: &str) -> Result<Value> {
		let params = json!([
			STANDARD.encode(tx_bytes),
			[signature],
			{
				"showInput": true,
				"showEffects": true,
				"showEvents": true,
				"showObjectChanges": true,
				"showBalanceChanges": true,
			},
			"WaitForLocalExecution",
		]);
		self.call("sui_executeTransactionBlock", params).await
	}
}
