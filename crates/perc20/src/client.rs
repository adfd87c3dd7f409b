//! Token contract client.

use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use url::Url;

use crate::abi::IPERC20;
use crate::error::Error;

/// Handle on a deployed token contract reachable over JSON-RPC.
///
/// Construction binds the endpoint and the contract address without touching
/// the network; only the explicit submission methods perform I/O.
#[derive(Debug, Clone)]
pub struct TokenClient {
    provider: DynProvider,
    contract: Address,
}

impl TokenClient {
    /// Creates a client for the contract at `contract` behind the JSON-RPC
    /// endpoint at `rpc_url`.
    pub fn new(rpc_url: Url, contract: Address) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        Self::from_provider(provider, contract)
    }

    /// Creates a client over an existing provider.
    pub fn from_provider(provider: DynProvider, contract: Address) -> Self {
        Self { provider, contract }
    }

    /// Address of the deployed contract this client is bound to.
    pub fn contract_address(&self) -> Address {
        self.contract
    }

    /// First unlocked account exposed by the connected node.
    ///
    /// The workflows submit from this account unconditionally. Fails with
    /// [`Error::NoAccounts`] before any submission when the node exposes
    /// none.
    pub async fn first_account(&self) -> Result<Address, Error> {
        let accounts = self.provider.get_accounts().await?;
        pick_sender(&accounts)
    }

    /// Submits the token's zero-argument `mint` call from `from` and waits
    /// for the receipt. Single attempt, no retry.
    pub async fn mint(&self, from: Address) -> Result<TransactionReceipt, Error> {
        let token = IPERC20::new(self.contract, self.provider.clone());

        tracing::debug!("Submitting mint to {} from {}", self.contract, from);

        let receipt = token.mint().from(from).send().await?.get_receipt().await?;

        Ok(receipt)
    }

    /// Submits `transfer(to, value)` from `from` and waits for the receipt.
    /// Single attempt, no retry.
    pub async fn transfer(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<TransactionReceipt, Error> {
        let token = IPERC20::new(self.contract, self.provider.clone());

        tracing::debug!(
            "Submitting transfer of {} base units to {} from {}",
            value,
            to,
            from
        );

        let receipt = token
            .transfer(to, value)
            .from(from)
            .send()
            .await?
            .get_receipt()
            .await?;

        Ok(receipt)
    }
}

fn pick_sender(accounts: &[Address]) -> Result<Address, Error> {
    accounts.first().copied().ok_or(Error::NoAccounts)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use alloy::providers::RootProvider;
    use alloy::rpc::client::RpcClient;
    use alloy::transports::mock::Asserter;

    use super::*;

    const CONTRACT: Address = address!("0x3D8589Eb557AD1988B512b8B83C89A8E5ff1e0dC");

    // A bare `RootProvider` keeps the mocked call sequence exact: no fillers,
    // so a submission is a single `eth_sendTransaction` round.
    fn mocked_client(asserter: &Asserter) -> TokenClient {
        let provider: RootProvider = RootProvider::new(RpcClient::mocked(asserter.clone()));
        TokenClient::from_provider(provider.erased(), CONTRACT)
    }

    #[test]
    fn construction_performs_no_network_call() {
        // Nothing is listening on this endpoint; construction must still
        // succeed because only submission triggers I/O.
        let url = Url::parse("http://127.0.0.1:1").expect("valid url");
        let client = TokenClient::new(url, CONTRACT);

        assert_eq!(client.contract_address(), CONTRACT);
    }

    #[tokio::test]
    async fn first_account_fails_on_empty_account_list() {
        let asserter = Asserter::new();
        asserter.push_success(&Vec::<Address>::new());

        let client = mocked_client(&asserter);

        assert!(matches!(
            client.first_account().await,
            Err(Error::NoAccounts)
        ));
    }

    #[tokio::test]
    async fn first_account_uses_the_first_entry() {
        let first = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let second = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

        let asserter = Asserter::new();
        asserter.push_success(&vec![first, second]);

        let client = mocked_client(&asserter);

        assert_eq!(client.first_account().await.expect("accounts"), first);
    }

    #[test]
    fn picking_from_an_empty_list_never_reaches_submission() {
        assert!(matches!(pick_sender(&[]), Err(Error::NoAccounts)));
    }

    #[tokio::test]
    async fn mint_surfaces_a_rejected_submission() {
        let from = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

        let asserter = Asserter::new();
        asserter.push_failure_msg("execution reverted");

        let client = mocked_client(&asserter);

        assert!(matches!(client.mint(from).await, Err(Error::Contract(_))));
    }

    #[tokio::test]
    async fn transfer_surfaces_a_rejected_submission() {
        let from = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let to = address!("0x16af037878a6cAce2Ea29d39A3757aC2F6F7aac1");

        let asserter = Asserter::new();
        asserter.push_failure_msg("transfer amount exceeds balance");

        let client = mocked_client(&asserter);

        assert!(matches!(
            client.transfer(from, to, U256::from(1)).await,
            Err(Error::Contract(_))
        ));
    }
}
