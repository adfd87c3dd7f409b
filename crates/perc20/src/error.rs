//! Errors

use thiserror::Error;

/// Token client error
#[derive(Debug, Error)]
pub enum Error {
    /// The connected node exposes no unlocked accounts
    #[error("No accounts available on the connected node")]
    NoAccounts,
    /// RPC transport error
    #[error(transparent)]
    Rpc(#[from] alloy::transports::TransportError),
    /// Contract call rejected or failed to encode
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    /// Failed while waiting for the transaction receipt
    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
}
