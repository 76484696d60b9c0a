use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	/// A required setting is absent from both the config file and the
	/// environment.
	#[error("{0} is not set")]
	MissingSetting(&'static str),

	#[error("invalid {name}: {reason}")]
	InvalidSetting { name: &'static str, reason: String },

	#[error("invalid hex identifier {input:?}: {reason}")]
	InvalidHex { input: String, reason: String },

	#[error("invalid secret key: {0}")]
	InvalidSecretKey(String),

	#[error("RPC error {code}: {message}")]
	Rpc { code: i64, message: String },

	#[error(transparent)]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Base64(#[from] base64::DecodeError),

	#[error("unexpected response from node: {0}")]
	UnexpectedResponse(String),
}
