//! Client for a deployed PERC20 sample token.
//!
//! This crate wraps the small amount of plumbing the `perc20-cli` workflows
//! need: the token's interface description, an amount-scaling helper for the
//! token's 18-decimal convention, and a [`TokenClient`] that binds a JSON-RPC
//! endpoint to the deployed contract address and submits single write
//! transactions.
//!
//! Signing is the connected node's concern. The client asks the node for its
//! unlocked accounts and submits from the first one; it never holds keys.

pub mod abi;
pub mod amount;
pub mod error;

mod client;

pub use self::client::TokenClient;
pub use self::error::Error;

// re-exporting external types used in the public API
pub use alloy::primitives::{Address, TxHash, U256};
pub use alloy::rpc::types::TransactionReceipt;
