//! Integration tests that hit the Sui testnet full node.
//!
//! These are marked `#[ignore]` by default because they require network
//! access. Run them explicitly with:
//!
//!   cargo test --test integration -- --ignored

use serde_json::{json, Value};
use stablecoin_utility::config::NetworkConfig;
use stablecoin_utility::contracts;
use stablecoin_utility::rpc::RpcClient;
use stablecoin_utility::Error;

fn testnet() -> RpcClient {
	RpcClient::new(&NetworkConfig::default().rpc_url)
}

#[tokio::test]
#[ignore]
async fn chain_identifier_is_returned() {
	let id = testnet()
		.call("sui_getChainIdentifier", json!([]))
		.await
		.expect("RPC call failed");
	assert!(id.as_str().is_some_and(|s| !s.is_empty()), "got {id}");
}

#[tokio::test]
#[ignore]
async fn system_deny_list_object_exists() {
	let obj = testnet()
		.call("sui_getObject", json!([contracts::SUI_DENY_LIST, { "showType": true }]))
		.await
		.expect("RPC call failed");

	assert!(
		obj.pointer("/data/objectId").and_then(Value::as_str).is_some(),
		"deny list {} should exist on testnet: {obj}",
		contracts::SUI_DENY_LIST
	);
}

#[tokio::test]
#[ignore]
async fn unknown_method_is_an_rpc_error() {
	let err = testnet()
		.call("stablecoin_noSuchMethod", json!([]))
		.await
		.unwrap_err();
	assert!(matches!(err, Error::Rpc { .. }), "got {err:?}");
}
