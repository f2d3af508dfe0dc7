use num_traits::CheckedAdd;

use crate::address::Address;
use crate::ether_amount::EtherAmount;
use crate::ether_amount::ParseEtherError;
use crate::prefs::purchase_prefs::PurchasePrefs;
use crate::web3_provider::TxHash;

/// Increment of the amount stepper, in wei (0.05 ether).
pub const PURCHASE_STEP: EtherAmount = EtherAmount::from_wei(50_000_000_000_000_000);

/// Fractional digits shown by the amount stepper.
pub const PURCHASE_PRECISION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// State of the token sale form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseState {
    /// The user asked to connect and the wallet prompt is pending.
    pub is_requesting_connection: bool,
    /// Amount of ether to spend, as typed.
    pub purchase_amount: String,
    pub recipient: Address,
    pub tokens_per_ether: u32,
    pub last_transaction: Option<TxHash>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseAction {
    SetRequestingConnection(bool),
    SetPurchaseAmount(String),
    /// Moves the amount by one step, keeping it within `[0, max]`.
    StepPurchaseAmount {
        direction: StepDirection,
        max: Option<EtherAmount>,
    },
    SetLastTransaction(Option<TxHash>),
}

impl PurchaseState {
    pub fn new(prefs: &PurchasePrefs) -> Self {
        Self {
            is_requesting_connection: false,
            purchase_amount: prefs.default_amount.to_fixed(PURCHASE_PRECISION),
            recipient: prefs.recipient,
            tokens_per_ether: prefs.tokens_per_ether,
            last_transaction: None,
        }
    }

    pub fn apply(&mut self, action: PurchaseAction) {
        match action {
            PurchaseAction::SetRequestingConnection(requesting) => {
                self.is_requesting_connection = requesting
            }
            PurchaseAction::SetPurchaseAmount(amount) => self.purchase_amount = amount,
            PurchaseAction::StepPurchaseAmount { direction, max } => {
                let current = self.amount().unwrap_or_default();
                let next = match direction {
                    StepDirection::Up => current
                        .checked_add(&PURCHASE_STEP)
                        .unwrap_or(current),
                    StepDirection::Down => current.saturating_sub(PURCHASE_STEP),
                };
                let next = match max {
                    Some(max) if next > max => max,
                    _ => next,
                };
                self.purchase_amount = next.to_fixed(PURCHASE_PRECISION);
            }
            PurchaseAction::SetLastTransaction(hash) => self.last_transaction = hash,
        }
    }

    pub fn amount(&self) -> Result<EtherAmount, ParseEtherError> {
        EtherAmount::parse_ether(&self.purchase_amount)
    }

    /// Tokens bought for the current amount, if it parses.
    pub fn token_quote(&self) -> Option<EtherAmount> {
        self.amount()
            .ok()?
            .checked_mul_u128(u128::from(self.tokens_per_ether))
    }
}
