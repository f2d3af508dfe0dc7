use crate::address::Address;
use crate::network::Network;

/// What the page knows about the browser wallet.
///
/// `network` and `balance` only mean something while `authorized` is set and
/// `account` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletState {
    pub extension_present: bool,
    pub authorized: bool,
    pub account: Address,
    pub network: Option<Network>,
    /// Balance in ether, formatted for display.
    pub balance: String,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            extension_present: false,
            authorized: false,
            account: Address::ZERO,
            network: None,
            balance: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletAction {
    SetExtensionPresent(bool),
    SetAuthorized(bool),
    SetAccount(Address),
    SetNetwork(Option<Network>),
    SetBalance(String),
}

impl WalletState {
    pub fn apply(&mut self, action: WalletAction) {
        match action {
            WalletAction::SetExtensionPresent(present) => self.extension_present = present,
            WalletAction::SetAuthorized(authorized) => self.authorized = authorized,
            WalletAction::SetAccount(account) => self.account = account,
            WalletAction::SetNetwork(network) => self.network = network,
            WalletAction::SetBalance(balance) => self.balance = balance,
        }
    }

    /// Authorized with a real account.
    pub fn has_account(&self) -> bool {
        self.authorized && !self.account.is_zero()
    }

    /// Account, network and balance are all known.
    pub fn is_ready(&self) -> bool {
        self.has_account() && self.network.is_some()
    }

    /// Drops network and balance back to their defaults.
    pub fn reset_connection(&mut self) {
        let defaults = Self::default();
        self.apply(WalletAction::SetNetwork(defaults.network));
        self.apply(WalletAction::SetBalance(defaults.balance));
    }

    /// Drops the authorization and account back to their defaults.
    pub fn reset_authorization(&mut self) {
        self.apply(WalletAction::SetAuthorized(false));
        self.apply(WalletAction::SetAccount(Address::ZERO));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_needs_account_and_network() {
        let mut state = WalletState::default();
        assert!(!state.is_ready());

        state.apply(WalletAction::SetAuthorized(true));
        assert!(!state.has_account());

        state.apply(WalletAction::SetAccount(Address::new([7; 20])));
        assert!(state.has_account());
        assert!(!state.is_ready());

        state.apply(WalletAction::SetNetwork(Some(Network::from_chain_id(1))));
        assert!(state.is_ready());

        state.reset_connection();
        assert_eq!(state.network, None);
        assert_eq!(state.balance, "0");

        state.reset_authorization();
        assert_eq!(state.account, Address::ZERO);
        assert!(!state.authorized);
    }
}
