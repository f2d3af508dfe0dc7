use super::purchase_prefs::PurchasePrefs;
use super::search_prefs::SearchPrefs;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    search: SearchPrefs,
    purchase: PurchasePrefs,
}

impl UserPrefs {
    pub fn from_env() -> Self {
        Self {
            search: SearchPrefs::from_env(),
            purchase: PurchasePrefs::from_env(),
        }
    }

    pub fn search(&self) -> &SearchPrefs {
        &self.search
    }

    pub fn purchase(&self) -> &PurchasePrefs {
        &self.purchase
    }
}
