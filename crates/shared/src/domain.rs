use std::fmt;

/// Display symbol of the claimable token.
pub const TOKEN_SYMBOL: &str = "CODE";

/// User-facing notification texts for the claim flow.
///
/// Every message the user sees goes through this enum so the wording stays in
/// one place; the specific failure cause is logged, never rendered here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    WalletMissing,
    ConnectFailed,
    ClaimSucceeded { amount: String },
    ClaimFailed,
    ClaimInProgress,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::WalletMissing => {
                write!(f, "No wallet found. Please configure a signing key to connect.")
            }
            Notification::ConnectFailed => write!(f, "Wallet connection failed."),
            Notification::ClaimSucceeded { amount } => {
                write!(f, "✅ Claimed {amount} {TOKEN_SYMBOL}!")
            }
            Notification::ClaimFailed => write!(f, "❌ Claim failed."),
            Notification::ClaimInProgress => write!(f, "A claim is already in progress."),
        }
    }
}
