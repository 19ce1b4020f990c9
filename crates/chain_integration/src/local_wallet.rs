use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use zeroize::Zeroize;

use crate::WalletProvider;

/// Wallet backed by a signing key provisioned through the environment.
///
/// Discovery and authorization are two distinct steps, mirroring how an
/// injected wallet behaves: an unset (or empty) variable means no wallet is
/// present at all, while key material that fails to parse surfaces later as
/// a failed account request.
pub struct LocalKeyWallet {
    key: String,
}

impl LocalKeyWallet {
    /// Discover a wallet from `var`. `None` means no wallet exists in this
    /// environment; the key is not validated here.
    pub fn from_env(var: &str) -> Option<Self> {
        let key = std::env::var(var).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Some(Self { key })
    }

    #[cfg(test)]
    pub(crate) fn from_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Parse the key material into a signer. Fails if the user's key is not
    /// a valid private key.
    pub fn signer(&self) -> Result<PrivateKeySigner> {
        self.key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|err| anyhow!("wallet key material is not a valid private key: {err}"))
    }
}

impl Drop for LocalKeyWallet {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

#[async_trait]
impl WalletProvider for LocalKeyWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        let signer = self.signer()?;
        Ok(vec![signer.address()])
    }
}
