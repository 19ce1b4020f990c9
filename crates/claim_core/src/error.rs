use alloy::primitives::B256;
use shared::units::AmountError;
use thiserror::Error;

/// Everything that can go wrong on the claim path. Callers log the specific
/// variant; the user only ever sees the generic claim-failed notification.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("another claim is already in flight")]
    AlreadyInFlight,
    #[error("invalid claim amount {amount:?}")]
    InvalidAmount {
        amount: String,
        #[source]
        source: AmountError,
    },
    #[error("transfer submission failed")]
    Submission(#[source] anyhow::Error),
    #[error("transfer confirmation failed")]
    Confirmation(#[source] anyhow::Error),
    #[error("transfer reverted on chain: {tx_hash}")]
    Reverted { tx_hash: B256 },
}
