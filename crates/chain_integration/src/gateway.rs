use std::sync::Arc;

use alloy::{
    network::{Ethereum, EthereumWallet, ReceiptResponse},
    primitives::{Address, B256, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::{erc20::ERC20, LocalKeyWallet, PendingTransfer, TokenGateway, TransferReceipt};

/// Alloy-backed [`TokenGateway`] for the fixed claimable-token contract.
///
/// The provider is assembled per call from the wallet's key material, so a
/// key that cannot be unlocked fails at the call that needs it rather than
/// at construction.
pub struct Erc20Gateway {
    rpc_url: Url,
    token: Address,
    wallet: Arc<LocalKeyWallet>,
}

impl Erc20Gateway {
    pub fn new(rpc_url: Url, token: Address, wallet: Arc<LocalKeyWallet>) -> Self {
        Self {
            rpc_url,
            token,
            wallet,
        }
    }

    fn provider(&self) -> Result<DynProvider> {
        let signer = self.wallet.signer()?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(self.rpc_url.clone());
        Ok(provider.erased())
    }
}

#[async_trait]
impl TokenGateway for Erc20Gateway {
    async fn balance_of(&self, account: Address) -> Result<U256> {
        let provider = self.provider()?;
        let balance = ERC20::new(self.token, provider)
            .balanceOf(account)
            .call()
            .await
            .with_context(|| format!("balanceOf({account}) call failed"))?;
        debug!(%account, %balance, "token: balance read");
        Ok(balance)
    }

    async fn transfer(&self, to: Address, amount: U256) -> Result<Box<dyn PendingTransfer>> {
        let provider = self.provider()?;
        let pending = ERC20::new(self.token, provider)
            .transfer(to, amount)
            .send()
            .await
            .context("transfer submission failed")?;
        debug!(%to, %amount, tx_hash = %pending.tx_hash(), "token: transfer broadcast");
        Ok(Box::new(AlloyPendingTransfer { inner: pending }))
    }
}

struct AlloyPendingTransfer {
    inner: PendingTransactionBuilder<Ethereum>,
}

#[async_trait]
impl PendingTransfer for AlloyPendingTransfer {
    fn tx_hash(&self) -> B256 {
        *self.inner.tx_hash()
    }

    async fn confirmed(self: Box<Self>) -> Result<TransferReceipt> {
        let receipt = self
            .inner
            .get_receipt()
            .await
            .context("transfer confirmation failed")?;
        Ok(TransferReceipt {
            tx_hash: receipt.transaction_hash(),
            succeeded: receipt.status(),
            block_number: receipt.block_number(),
        })
    }
}
