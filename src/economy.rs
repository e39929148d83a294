//! Gold bookkeeping boundary.
//!
//! The turn engine spends and accrues gold but does not own the purse; a
//! surrounding game loop usually supplies its own implementation (shop,
//! rewards, and forge all share it). `Wallet` is the reference
//! implementation used by tests and the run snapshot.

use serde::{Deserialize, Serialize};

pub trait Economy {
    /// Deducts `amount` if affordable, returning whether the spend
    /// happened. A refusal mutates nothing.
    fn spend_gold(&mut self, amount: u32) -> bool;

    fn add_gold(&mut self, amount: u32);

    fn gold(&self) -> u32;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    gold: u32,
}

impl Wallet {
    pub fn new(gold: u32) -> Self {
        Self { gold }
    }
}

impl Economy for Wallet {
    fn spend_gold(&mut self, amount: u32) -> bool {
        if amount > self.gold {
            return false;
        }
        self.gold -= amount;
        true
    }

    fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    fn gold(&self) -> u32 {
        self.gold
    }
}
