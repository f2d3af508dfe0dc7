//! The wallet connection sequence as an explicit state machine.
//!
//! Each [`WalletEvent`] moves the machine and yields at most one
//! [`WalletEffect`] for the caller to run. The effect's outcome comes back as
//! another event. Outcomes that no longer apply (for an account that is no
//! longer current, or a prompt nobody is waiting on) are dropped.

use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use super::purchase::PurchaseAction;
use super::purchase::PurchaseState;
use super::purchase::StepDirection;
use super::state::WalletAction;
use super::state::WalletState;
use crate::address::Address;
use crate::eip1193::ProviderError;
use crate::ether_amount::EtherAmount;
use crate::network::Network;
use crate::prefs::purchase_prefs::PurchasePrefs;
use crate::web3_provider::TransactionRequest;
use crate::web3_provider::TxHash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs, strum::Display)]
pub enum ConnectionPhase {
    /// Extension detection has not run yet.
    Unknown,
    NoExtension,
    /// Looking for an account the wallet already authorized.
    Checking,
    Unauthorized,
    /// The wallet prompt is open.
    Requesting,
    /// Authorized, network and balance not (yet) known.
    Authorized,
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletEvent {
    ExtensionDetected(bool),
    AuthorizedAccountsLoaded(Result<Option<Address>, ProviderError>),
    ConnectRequested,
    AccountsRequested(Result<Address, ProviderError>),
    ConnectionLoaded {
        account: Address,
        result: Result<(Network, EtherAmount), ProviderError>,
    },
    PurchaseAmountChanged(String),
    PurchaseAmountStepped(StepDirection),
    PurchaseRequested,
    PurchaseSubmitted(Result<TxHash, ProviderError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEffect {
    /// `eth_accounts`, no prompt.
    CheckAuthorizedAccounts,
    /// `eth_requestAccounts`, shows the wallet prompt.
    RequestAccounts,
    /// Network identity and balance for `account`.
    LoadConnection { account: Address },
    SendTransaction(TransactionRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletFlow {
    wallet: WalletState,
    purchase: PurchaseState,
    detected: bool,
    checking: bool,
}

impl WalletFlow {
    pub fn new(prefs: &PurchasePrefs) -> Self {
        Self {
            wallet: WalletState::default(),
            purchase: PurchaseState::new(prefs),
            detected: false,
            checking: false,
        }
    }

    pub fn wallet(&self) -> &WalletState {
        &self.wallet
    }

    pub fn purchase(&self) -> &PurchaseState {
        &self.purchase
    }

    pub fn phase(&self) -> ConnectionPhase {
        if !self.detected {
            ConnectionPhase::Unknown
        } else if !self.wallet.extension_present {
            ConnectionPhase::NoExtension
        } else if self.checking {
            ConnectionPhase::Checking
        } else if self.purchase.is_requesting_connection {
            ConnectionPhase::Requesting
        } else if !self.wallet.authorized {
            ConnectionPhase::Unauthorized
        } else if self.wallet.is_ready() {
            ConnectionPhase::Ready
        } else {
            ConnectionPhase::Authorized
        }
    }

    /// The connect button is offered only when a wallet exists, has not
    /// authorized this page, and the silent account check has finished.
    pub fn can_connect(&self) -> bool {
        self.wallet.extension_present && !self.wallet.authorized && !self.checking
    }

    /// Account, balance and network are shown (with the purchase controls)
    /// only once all of them are known.
    pub fn shows_account_details(&self) -> bool {
        self.wallet.extension_present && self.wallet.is_ready()
    }

    pub fn can_purchase(&self) -> bool {
        self.shows_account_details() && self.affordable_amount().is_some()
    }

    /// The typed amount, if it parses and does not exceed the balance.
    fn affordable_amount(&self) -> Option<EtherAmount> {
        let amount = self.purchase.amount().ok()?;
        let balance = self.balance()?;
        (amount <= balance).then_some(amount)
    }

    /// Balance as an amount, for clamping the purchase input.
    pub fn balance(&self) -> Option<EtherAmount> {
        if !self.wallet.is_ready() {
            return None;
        }
        EtherAmount::parse_ether(&self.wallet.balance).ok()
    }

    pub fn apply(&mut self, event: WalletEvent) -> Option<WalletEffect> {
        match event {
            WalletEvent::ExtensionDetected(present) => {
                if self.detected {
                    return None;
                }
                self.detected = true;
                self.wallet.apply(WalletAction::SetExtensionPresent(present));
                if present {
                    self.checking = true;
                    Some(WalletEffect::CheckAuthorizedAccounts)
                } else {
                    info!("no browser wallet detected");
                    None
                }
            }

            WalletEvent::AuthorizedAccountsLoaded(result) => {
                if !self.checking {
                    return None;
                }
                self.checking = false;
                match result {
                    Ok(Some(account)) if !self.wallet.authorized => self.authorize(account),
                    Ok(Some(_)) => None,
                    Ok(None) => {
                        self.wallet.apply(WalletAction::SetAuthorized(false));
                        None
                    }
                    Err(e) => {
                        warn!("checking authorized accounts failed: {}", e);
                        None
                    }
                }
            }

            WalletEvent::ConnectRequested => {
                if self.wallet.authorized {
                    self.purchase
                        .apply(PurchaseAction::SetRequestingConnection(false));
                    return None;
                }
                if !self.wallet.extension_present || self.purchase.is_requesting_connection {
                    return None;
                }
                self.purchase
                    .apply(PurchaseAction::SetRequestingConnection(true));
                Some(WalletEffect::RequestAccounts)
            }

            WalletEvent::AccountsRequested(result) => {
                if !self.purchase.is_requesting_connection {
                    return None;
                }
                self.purchase
                    .apply(PurchaseAction::SetRequestingConnection(false));
                match result {
                    Ok(account) => self.authorize(account),
                    Err(e) => {
                        if e.is_user_rejection() {
                            info!("wallet connection declined");
                        } else {
                            error!("connect to wallet error: {}", e);
                        }
                        self.wallet.reset_authorization();
                        None
                    }
                }
            }

            WalletEvent::ConnectionLoaded { account, result } => {
                if !self.wallet.authorized || account != self.wallet.account {
                    return None;
                }
                match result {
                    Ok((network, balance)) => {
                        info!("connected to {} with balance {}", network, balance);
                        self.wallet.apply(WalletAction::SetNetwork(Some(network)));
                        self.wallet.apply(WalletAction::SetBalance(balance.to_string()));
                    }
                    Err(e) => {
                        error!("connect to provider error: {}", e);
                        self.wallet.reset_connection();
                    }
                }
                None
            }

            WalletEvent::PurchaseAmountChanged(amount) => {
                self.purchase.apply(PurchaseAction::SetPurchaseAmount(amount));
                None
            }

            WalletEvent::PurchaseAmountStepped(direction) => {
                let max = self.balance();
                self.purchase
                    .apply(PurchaseAction::StepPurchaseAmount { direction, max });
                None
            }

            WalletEvent::PurchaseRequested => {
                if !self.shows_account_details() {
                    return None;
                }
                let value = match self.purchase.amount() {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("not buying, bad amount {:?}: {}", self.purchase.purchase_amount, e);
                        return None;
                    }
                };
                if self.affordable_amount().is_none() {
                    warn!("not buying, {} ETH exceeds the balance of {} ETH", value, self.wallet.balance);
                    return None;
                }
                Some(WalletEffect::SendTransaction(TransactionRequest {
                    from: self.wallet.account,
                    to: self.purchase.recipient,
                    value,
                }))
            }

            WalletEvent::PurchaseSubmitted(result) => {
                match result {
                    Ok(hash) => {
                        info!("purchase transaction submitted: {}", hash);
                        self.purchase
                            .apply(PurchaseAction::SetLastTransaction(Some(hash)));
                    }
                    Err(e) => error!("purchase transaction failed: {}", e),
                }
                None
            }
        }
    }

    fn authorize(&mut self, account: Address) -> Option<WalletEffect> {
        self.wallet.apply(WalletAction::SetAuthorized(true));
        self.wallet.apply(WalletAction::SetAccount(account));
        if account.is_zero() {
            None
        } else {
            Some(WalletEffect::LoadConnection { account })
        }
    }
}
