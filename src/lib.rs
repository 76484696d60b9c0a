pub mod cli;
pub mod commands;
pub mod config;
pub mod contracts;
pub mod crypto;
pub mod error;
pub mod rpc;
pub mod signer;
pub mod submit;
pub mod tx_builder;
pub mod types;

pub use error::{Error, Result};
