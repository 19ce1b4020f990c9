//! Capability seams over the two external systems this client delegates to:
//! the wallet (account authority and signing) and the token contract
//! (ABI encoding, call dispatch, broadcast). The traits are what the rest of
//! the workspace programs against; the alloy-backed implementations live in
//! [`local_wallet`] and [`gateway`].

use alloy::primitives::{Address, B256, U256};
use anyhow::Result;
use async_trait::async_trait;

pub mod erc20;
mod gateway;
mod local_wallet;

pub use gateway::Erc20Gateway;
pub use local_wallet::LocalKeyWallet;

/// Outcome of a confirmed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub tx_hash: B256,
    pub succeeded: bool,
    pub block_number: Option<u64>,
}

/// Account access provided by the user's wallet.
///
/// Requesting accounts may perform the wallet's native authorization work
/// (key unlock, account derivation) as a side effect.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request_accounts(&self) -> Result<Vec<Address>>;
}

/// A submitted transfer awaiting confirmation. Owned by the caller until the
/// ledger accepts or rejects it; there is no cancellation.
#[async_trait]
pub trait PendingTransfer: Send + Sync {
    fn tx_hash(&self) -> B256;
    async fn confirmed(self: Box<Self>) -> Result<TransferReceipt>;
}

/// Typed proxy for the fixed token contract.
#[async_trait]
pub trait TokenGateway: Send + Sync {
    /// Read-only balance query in base units.
    async fn balance_of(&self, account: Address) -> Result<U256>;

    /// Submit a transfer of `amount` base units to `to`. Returns once the
    /// transaction is broadcast; confirmation is awaited on the handle.
    async fn transfer(&self, to: Address, amount: U256) -> Result<Box<dyn PendingTransfer>>;
}

#[cfg(test)]
#[path = "tests/local_wallet_tests.rs"]
mod tests;
