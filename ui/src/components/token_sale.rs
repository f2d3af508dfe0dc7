use api::wallet::purchase::StepDirection;
use api::wallet::ConnectionPhase;
use api::wallet::WalletEvent;
use dioxus::prelude::*;

use crate::components::ether_amount_input::EtherAmountInput;
use crate::components::pico::Badge;
use crate::components::pico::BadgeTone;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Spinner;
use crate::hooks::use_wallet::use_wallet;

/// Wallet status, account details and the token purchase form.
#[component]
pub fn TokenSale() -> Element {
    let wallet = use_wallet();
    let flow = wallet.flow().cloned();
    let phase = flow.phase();
    let state = flow.wallet();
    let purchase = flow.purchase();

    let network_name = state
        .network
        .as_ref()
        .map(|n| n.name.clone())
        .unwrap_or_default();
    let quote = purchase
        .token_quote()
        .map(|q| q.to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        Card {
            h3 { "and buy New tokens during our ICO" }

            match phase {
                ConnectionPhase::Unknown | ConnectionPhase::Checking => rsx! {
                    Spinner { label: "Looking for a wallet..." }
                },
                ConnectionPhase::NoExtension => rsx! {
                    p { "Please install MetaMask" }
                },
                _ => rsx! {
                    p {
                        "Wallet status: "
                        if state.authorized {
                            Badge { tone: BadgeTone::Positive, "connected" }
                        } else {
                            Badge { tone: BadgeTone::Negative, "disconnected" }
                        }
                    }
                },
            }

            if flow.shows_account_details() {
                ul {
                    li { "Your account: " strong { title: "{state.account}", "{state.account.abbreviated()}" } }
                    li { "Your balance: " strong { "{state.balance} ETH" } }
                    li { "You are connected to the network: " strong { "{network_name}" } }
                }
                EtherAmountInput {
                    value: purchase.purchase_amount.clone(),
                    max: flow.balance(),
                    on_input: move |amount: String| wallet.send(WalletEvent::PurchaseAmountChanged(amount)),
                    on_step: move |direction: StepDirection| wallet.send(WalletEvent::PurchaseAmountStepped(direction)),
                }
                Button {
                    button_type: ButtonType::Contrast,
                    disabled: !flow.can_purchase(),
                    on_click: move |_| wallet.send(WalletEvent::PurchaseRequested),
                    "click to buy New tokens for {purchase.purchase_amount} ETH"
                }
                p {
                    em { "1 ether for {purchase.tokens_per_ether} New tokens" }
                    br {}
                    small { "You will receive {quote} New tokens" }
                }
                if let Some(hash) = &purchase.last_transaction {
                    p {
                        small { "Transaction submitted: " code { "{hash}" } }
                    }
                }
            }

            if flow.can_connect() {
                Button {
                    busy: phase.is_requesting(),
                    on_click: move |_| wallet.send(WalletEvent::ConnectRequested),
                    "Connect"
                }
            }
        }
    }
}
