use crate::items::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STARTING_COINS: u32 = 500;

/// Item quantities and coins held by the player.
///
/// Every mutating call either applies fully or leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<Item, u32>,
    coins: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        let items = BTreeMap::from([(Item::Potion, 5), (Item::BasicBall, 10), (Item::BerrySnack, 5)]);
        Self {
            items,
            coins: STARTING_COINS,
        }
    }
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            items: BTreeMap::new(),
            coins: 0,
        }
    }

    pub fn quantity(&self, item: Item) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn has(&self, item: Item, quantity: u32) -> bool {
        self.quantity(item) >= quantity
    }

    pub fn add_item(&mut self, item: Item, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item).or_insert(0) += quantity;
    }

    /// Returns false, changing nothing, when fewer than `quantity` are held.
    pub fn remove_item(&mut self, item: Item, quantity: u32) -> bool {
        let held = self.quantity(item);
        if held < quantity {
            return false;
        }
        if held == quantity {
            self.items.remove(&item);
        } else {
            self.items.insert(item, held - quantity);
        }
        true
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub fn spend_coins(&mut self, amount: u32) -> bool {
        if self.coins < amount {
            return false;
        }
        self.coins -= amount;
        true
    }

    pub fn buy_item(&mut self, item: Item, quantity: u32) -> bool {
        let Some(total) = item.price().checked_mul(quantity) else {
            return false;
        };
        if !self.spend_coins(total) {
            return false;
        }
        self.add_item(item, quantity);
        true
    }

    /// Owned balls with their quantities, in item order.
    pub fn balls(&self) -> Vec<(Item, u32)> {
        self.items
            .iter()
            .filter(|(item, _)| item.is_ball())
            .map(|(item, quantity)| (*item, *quantity))
            .collect()
    }
}
