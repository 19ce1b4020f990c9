//! Claim client: wallet connect, balance read, claim submission.
//!
//! Three thin components over the external capabilities in
//! `chain_integration`, composed behind [`ClaimClient`]. Session state is an
//! explicit [`WalletSession`] constructed at connect time and threaded
//! through every later call; nothing here reads ambient environment.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chain_integration::{PendingTransfer, TokenGateway, TransferReceipt, WalletProvider};
use shared::units;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub mod error;

pub use error::ClaimError;

/// The wallet seam as the environment presents it: either no wallet exists
/// at all, or one is available and may still refuse an account request.
pub enum WalletCapability {
    Absent,
    Available(Arc<dyn WalletProvider>),
}

/// Session established by a successful connect; holds the only shared state
/// of the claim flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletSession {
    pub address: Address,
}

/// Result of a connect attempt. Absence and refusal are distinct outcomes,
/// and neither is an error: the user retries manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(WalletSession),
    NoWallet,
    Failed,
}

/// Placeholder gateway wired when no wallet is present; every call reports
/// unavailability.
pub struct MissingTokenGateway;

#[async_trait]
impl TokenGateway for MissingTokenGateway {
    async fn balance_of(&self, _account: Address) -> Result<U256> {
        Err(anyhow!("token gateway is unavailable"))
    }

    async fn transfer(&self, _to: Address, _amount: U256) -> Result<Box<dyn PendingTransfer>> {
        Err(anyhow!("token gateway is unavailable"))
    }
}

pub struct ClaimClient {
    wallet: WalletCapability,
    token: Arc<dyn TokenGateway>,
    claim_gate: Mutex<()>,
}

impl ClaimClient {
    pub fn new(wallet: WalletCapability, token: Arc<dyn TokenGateway>) -> Self {
        Self {
            wallet,
            token,
            claim_gate: Mutex::new(()),
        }
    }

    /// Request account access from the wallet. Never fails: absence and
    /// refusal are reported as outcomes, with the refusal cause logged.
    pub async fn connect_wallet(&self) -> ConnectOutcome {
        let provider = match &self.wallet {
            WalletCapability::Absent => {
                warn!("wallet: no provider present in environment");
                return ConnectOutcome::NoWallet;
            }
            WalletCapability::Available(provider) => provider,
        };

        match provider.request_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(address) => {
                    info!(address = %address, "wallet: connected");
                    ConnectOutcome::Connected(WalletSession { address: *address })
                }
                None => {
                    error!("wallet: provider authorized zero accounts");
                    ConnectOutcome::Failed
                }
            },
            Err(err) => {
                error!("wallet: account request failed: {err:#}");
                ConnectOutcome::Failed
            }
        }
    }

    /// Read the session account's token balance as a display string.
    /// Failures propagate to the caller, which surfaces them.
    pub async fn display_balance(&self, session: &WalletSession) -> Result<String> {
        let raw = self.token.balance_of(session.address).await?;
        Ok(units::from_base_units(raw)?)
    }

    /// Submit a self-transfer of `amount` whole tokens and wait for the
    /// ledger to confirm it. A claim started while another is unconfirmed is
    /// rejected instead of racing it onto the chain.
    pub async fn claim(
        &self,
        session: &WalletSession,
        amount: &str,
    ) -> Result<TransferReceipt, ClaimError> {
        let _in_flight = self
            .claim_gate
            .try_lock()
            .map_err(|_| ClaimError::AlreadyInFlight)?;

        let base_units =
            units::to_base_units(amount).map_err(|source| ClaimError::InvalidAmount {
                amount: amount.to_string(),
                source,
            })?;

        info!(amount, base_units = %base_units, to = %session.address, "claim: submitting self-transfer");
        let pending = self
            .token
            .transfer(session.address, base_units)
            .await
            .map_err(ClaimError::Submission)?;

        let receipt = pending.confirmed().await.map_err(ClaimError::Confirmation)?;
        if !receipt.succeeded {
            return Err(ClaimError::Reverted {
                tx_hash: receipt.tx_hash,
            });
        }

        info!(tx_hash = %receipt.tx_hash, block = ?receipt.block_number, "claim: transfer confirmed");
        Ok(receipt)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
