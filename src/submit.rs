use std::io::{self, Write};

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Error;
use crate::rpc::RpcClient;
use crate::signer::Signer;
use crate::tx_builder::MoveCall;

/// Gas budget attached to every transaction, in MIST.
pub const GAS_BUDGET: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
	Success,
	Failure,
}

impl ExecutionStatus {
	pub fn as_str(&self) -> &str {
		match self {
			Self::Success => "success",
			Self::Failure => "failure",
		}
	}
}

/// What the node reported back for one executed transaction.
#[derive(Debug, Clone)]
pub struct SubmissionResult {
	pub digest: String,
	pub status: ExecutionStatus,
	/// The `effects.status` object when execution failed.
	pub failure: Option<Value>,
	pub raw: Value,
}

impl SubmissionResult {
	/// Pull digest and execution status out of a
	/// `sui_executeTransactionBlock` response.
	pub fn from_response(raw: Value) -> Result<Self, Error> {
		let digest = raw
			.get("digest")
			.and_then(Value::as_str)
			.ok_or_else(|| Error::UnexpectedResponse(format!("no digest in {raw}")))?
			.to_owned();

		let status_obj = raw
			.pointer("/effects/status")
			.cloned()
			.ok_or_else(|| Error::UnexpectedResponse(format!("no effects status for {digest}")))?;

		let (status, failure) = match status_obj.get("status").and_then(Value::as_str) {
			Some("success") => (ExecutionStatus::Success, None),
			Some("failure") => (ExecutionStatus::Failure, Some(status_obj)),
			other => {
				return Err(Error::UnexpectedResponse(format!(
					"unknown execution status {other:?} for {digest}"
				)))
			}
		};

		Ok(Self {
			digest,
			status,
			failure,
			raw,
		})
	}

	/// Print digest and status, then the confirmation or the failure detail.
	pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
		writeln!(out, "TxDigest = {}", self.digest)?;
		writeln!(out, "Status = {}", self.status.as_str())?;
		match (&self.status, &self.failure) {
			(ExecutionStatus::Success, _) => writeln!(out, "Transaction executed successfully"),
			(ExecutionStatus::Failure, Some(detail)) => writeln!(out, "Transaction Error = {detail}"),
			(ExecutionStatus::Failure, None) => writeln!(out, "Transaction Error = unknown"),
		}
	}

	pub fn is_success(&self) -> bool {
		self.status == ExecutionStatus::Success
	}
}

/// Turns one Move call into one signed, executed transaction.
pub struct Submitter<'a> {
	rpc: &'a RpcClient,
	signer: &'a dyn Signer,
	gas_budget: u64,
}

impl<'a> Submitter<'a> {
	pub fn new(rpc: &'a RpcClient, signer: &'a dyn Signer) -> Self {
		Self {
			rpc,
			signer,
			gas_budget: GAS_BUDGET,
		}
	}

	/// Build, sign and execute `call`. A failed execution is returned as a
	/// result, not an error; only RPC and transport problems are errors.
	pub async fn submit(&self, call: &MoveCall) -> Result<SubmissionResult> {
		let sender = self.signer.address();
		info!(%sender, target = %call.target, "building transaction");

		let tx_bytes = self
			.rpc
			.unsafe_move_call(sender, call, self.gas_budget)
			.await?;
		let signature = self.signer.sign_transaction(&tx_bytes).await?;

		info!(url = self.rpc.url(), "executing transaction");
		let response = self
			.rpc
			.execute_transaction_block(&tx_bytes, &signature)
			.await?;
		debug!(%response, "node response");

		Ok(SubmissionResult::from_response(response)?)
	}
}
