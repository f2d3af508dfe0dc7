//! Runs [`WalletEffect`]s against a provider and reports the outcome as the
//! matching [`WalletEvent`].

use super::flow::WalletEffect;
use super::flow::WalletEvent;
use crate::eip1193::Eip1193;
use crate::eip1193::ProviderError;
use crate::web3_provider::Web3Provider;

pub async fn run_effect<T: Eip1193>(provider: &Web3Provider<T>, effect: WalletEffect) -> WalletEvent {
    match effect {
        WalletEffect::CheckAuthorizedAccounts => {
            let result = provider
                .accounts()
                .await
                .map(|accounts| accounts.into_iter().next());
            WalletEvent::AuthorizedAccountsLoaded(result)
        }
        WalletEffect::RequestAccounts => {
            WalletEvent::AccountsRequested(provider.request_accounts().await)
        }
        WalletEffect::LoadConnection { account } => {
            let result = async {
                let network = provider.get_network().await?;
                let balance = provider.get_balance(account).await?;
                Ok::<_, ProviderError>((network, balance))
            }
            .await;
            WalletEvent::ConnectionLoaded { account, result }
        }
        WalletEffect::SendTransaction(tx) => {
            let result = provider
                .signer(tx.from)
                .send_transaction(tx.to, tx.value)
                .await;
            WalletEvent::PurchaseSubmitted(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::prefs::purchase_prefs::PurchasePrefs;
    use crate::wallet::flow::ConnectionPhase;
    use crate::wallet::flow::WalletFlow;
    use crate::mock_wallet::MockWallet;
    use serde_json::json;

    const ACCOUNT: &str = "0x2222222222222222222222222222222222222222";

    /// Feeds events through the flow, running every effect it asks for.
    async fn drive(flow: &mut WalletFlow, provider: &Web3Provider<MockWallet>, event: WalletEvent) {
        let mut next = flow.apply(event);
        while let Some(effect) = next {
            let outcome = run_effect(provider, effect).await;
            next = flow.apply(outcome);
        }
    }

    #[tokio::test]
    async fn full_connection_and_purchase() {
        let provider = Web3Provider::new(
            MockWallet::new()
                .respond("eth_accounts", Ok(json!([])))
                .respond("eth_requestAccounts", Ok(json!([ACCOUNT])))
                .respond("eth_chainId", Ok(json!("0x1")))
                .respond("eth_getBalance", Ok(json!("0x1bc16d674ec80000")))
                .respond("eth_sendTransaction", Ok(json!("0xhash"))),
        );
        let mut flow = WalletFlow::new(&PurchasePrefs::default());

        drive(&mut flow, &provider, WalletEvent::ExtensionDetected(true)).await;
        assert_eq!(flow.phase(), ConnectionPhase::Unauthorized);

        drive(&mut flow, &provider, WalletEvent::ConnectRequested).await;
        assert_eq!(flow.phase(), ConnectionPhase::Ready);
        assert_eq!(flow.wallet().account, ACCOUNT.parse::<Address>().unwrap());
        assert_eq!(flow.wallet().balance, "2.0");
        assert_eq!(flow.wallet().network.as_ref().unwrap().name, "homestead");

        drive(&mut flow, &provider, WalletEvent::PurchaseRequested).await;
        assert_eq!(
            flow.purchase().last_transaction.as_ref().map(|h| h.0.as_str()),
            Some("0xhash")
        );

        assert_eq!(
            provider.transport().methods(),
            [
                "eth_accounts",
                "eth_requestAccounts",
                "eth_chainId",
                "eth_getBalance",
                "eth_sendTransaction"
            ]
        );
    }

    #[tokio::test]
    async fn failed_balance_keeps_page_authorized() {
        let provider = Web3Provider::new(
            MockWallet::new()
                .respond("eth_accounts", Ok(json!([ACCOUNT])))
                .respond("eth_chainId", Ok(json!("0x5")))
                .respond(
                    "eth_getBalance",
                    Err(ProviderError::Rpc {
                        code: -32603,
                        message: "Internal JSON-RPC error.".to_string(),
                    }),
                ),
        );
        let mut flow = WalletFlow::new(&PurchasePrefs::default());

        drive(&mut flow, &provider, WalletEvent::ExtensionDetected(true)).await;
        assert_eq!(flow.phase(), ConnectionPhase::Authorized);
        assert_eq!(flow.wallet().network, None);
        assert_eq!(flow.wallet().balance, "0");
        assert!(!flow.shows_account_details());

        // already authorized, so no prompt is shown
        drive(&mut flow, &provider, WalletEvent::ConnectRequested).await;
        assert!(!provider
            .transport()
            .methods()
            .contains(&"eth_requestAccounts".to_string()));
    }

    #[tokio::test]
    async fn missing_method_is_an_error_outcome() {
        let provider = Web3Provider::new(MockWallet::new());
        let event = run_effect(&provider, WalletEffect::RequestAccounts).await;
        assert!(matches!(
            event,
            WalletEvent::AccountsRequested(Err(ProviderError::Rpc { code: -32601, .. }))
        ));
    }
}
