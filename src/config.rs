use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::contracts::SUI_DENY_LIST;
use crate::error::{Error, Result};
use crate::types::ObjectId;

// -- Environment variable names --

pub const ENV_NETWORK: &str = "SUI_NETWORK";
pub const ENV_COIN_TYPE: &str = "COIN_TYPE";
pub const ENV_PACKAGE_ID: &str = "PACKAGE_ID";
pub const ENV_DENY_LIST: &str = "SUI_DENY_LIST_OBJECT_ID";
pub const ENV_DENY_CAP: &str = "DENY_CAP_ID";
pub const ENV_TREASURY_CAP: &str = "TREASURY_CAP_ID";
pub const ENV_SECRET_KEY: &str = "ADMIN_SECRET_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	pub network: NetworkConfig,
	pub coin: CoinConfig,
	pub admin: AdminConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
	pub rpc_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
	/// Full coin type tag, e.g. `0xabc::regulated_coin::REGULATED_COIN`.
	pub coin_type: Option<String>,
	/// Package that issued the coin. Used with `module` when `coin_type` is
	/// not set.
	pub package_id: Option<String>,
	pub module: String,
	pub deny_list_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
	pub deny_cap_id: Option<String>,
	pub treasury_cap_id: Option<String>,
	/// Base64 `flag || secret`.
	pub secret_key: Option<String>,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			rpc_url: "https://fullnode.testnet.sui.io:443".into(),
		}
	}
}

impl Default for CoinConfig {
	fn default() -> Self {
		Self {
			coin_type: None,
			package_id: None,
			module: "regulated_coin".into(),
			deny_list_id: SUI_DENY_LIST.into(),
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.stablecoin-utility/).
	pub fn dir() -> Option<PathBuf> {
		dirs::home_dir().map(|home| home.join(".stablecoin-utility"))
	}

	/// Path to the config file.
	pub fn path() -> Option<PathBuf> {
		Self::dir().map(|dir| dir.join("config.toml"))
	}

	/// Load config from disk, falling back to defaults if no file exists,
	/// then overlay the process environment.
	pub fn load() -> anyhow::Result<Self> {
		let mut config = match Self::path() {
			Some(path) if path.exists() => {
				let content = std::fs::read_to_string(&path)?;
				toml::from_str(&content)?
			}
			_ => Self::default(),
		};
		config.apply_env(|key| std::env::var(key).ok());
		Ok(config)
	}

	/// Overlay settings from an environment lookup. Empty values count as
	/// unset.
	pub fn apply_env<F>(&mut self, lookup: F)
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

		if let Some(v) = get(ENV_NETWORK) {
			self.network.rpc_url = v;
		}
		if let Some(v) = get(ENV_COIN_TYPE) {
			self.coin.coin_type = Some(v);
		}
		if let Some(v) = get(ENV_PACKAGE_ID) {
			self.coin.package_id = Some(v);
		}
		if let Some(v) = get(ENV_DENY_LIST) {
			self.coin.deny_list_id = v;
		}
		if let Some(v) = get(ENV_DENY_CAP) {
			self.admin.deny_cap_id = Some(v);
		}
		if let Some(v) = get(ENV_TREASURY_CAP) {
			self.admin.treasury_cap_id = Some(v);
		}
		if let Some(v) = get(ENV_SECRET_KEY) {
			self.admin.secret_key = Some(v);
		}
	}

	// -- Resolution helpers --

	/// The coin type tag: `coin_type` if set, otherwise
	/// `<package_id>::<module>::<MODULE>`.
	pub fn coin_type(&self) -> Result<String> {
		if let Some(tag) = &self.coin.coin_type {
			if tag.split("::").count() < 3 {
				return Err(Error::InvalidSetting {
					name: ENV_COIN_TYPE,
					reason: format!("{tag:?} is not of the form <package>::<module>::<name>"),
				});
			}
			return Ok(tag.clone());
		}

		let package = self
			.coin
			.package_id
			.as_deref()
			.ok_or(Error::MissingSetting(ENV_COIN_TYPE))?;
		let package: ObjectId = package.parse()?;
		let module = &self.coin.module;
		Ok(format!("{package}::{module}::{}", module.to_uppercase()))
	}

	pub fn deny_list(&self) -> Result<ObjectId> {
		self.coin.deny_list_id.parse()
	}

	pub fn deny_cap(&self) -> Result<ObjectId> {
		required_id(self.admin.deny_cap_id.as_deref(), ENV_DENY_CAP)
	}

	pub fn treasury_cap(&self) -> Result<ObjectId> {
		required_id(self.admin.treasury_cap_id.as_deref(), ENV_TREASURY_CAP)
	}

	pub fn secret_key(&self) -> Result<&str> {
		self.admin
			.secret_key
			.as_deref()
			.ok_or(Error::MissingSetting(ENV_SECRET_KEY))
	}
}

fn required_id(value: Option<&str>, name: &'static str) -> Result<ObjectId> {
	value.ok_or(Error::MissingSetting(name))?.parse()
}
