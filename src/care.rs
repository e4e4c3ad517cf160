//! Out-of-battle care actions on an owned creature.

use crate::catalog::Catalog;
use crate::crafture::{Crafture, MAX_HUNGER};
use crate::errors::DataResult;
use crate::inventory::Inventory;
use crate::items::{Item, ItemKind};
use crate::progression::LevelUpReport;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_FEED_AMOUNT: u8 = 20;
const FEED_HAPPINESS: u8 = 5;
const PET_HAPPINESS: u8 = 15;
const PLAY_HAPPINESS: u8 = 25;
const PLAY_HUNGER_COST: u8 = 10;
const PLAY_EXPERIENCE: u32 = 10;

impl Crafture {
    pub fn feed(&mut self, amount: u8) {
        self.set_hunger(self.hunger().saturating_add(amount));
        self.set_happiness(self.happiness().saturating_add(FEED_HAPPINESS));
    }

    pub fn drain_hunger(&mut self, amount: u8) {
        self.set_hunger(self.hunger().saturating_sub(amount));
    }

    pub fn pet(&mut self) {
        self.set_happiness(self.happiness().saturating_add(PET_HAPPINESS));
    }

    /// Playing is tiring: it costs hunger and grants a little experience, which
    /// can trigger a level-up.
    pub fn play(&mut self, catalog: &Catalog) -> DataResult<LevelUpReport> {
        let report = self.gain_experience(PLAY_EXPERIENCE, catalog)?;
        self.set_happiness(self.happiness().saturating_add(PLAY_HAPPINESS));
        self.drain_hunger(PLAY_HUNGER_COST);
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemUseError {
    #[error("{0} cannot be used on a Crafture")]
    NotUsable(Item),
    #[error("no {0} left")]
    NotOwned(Item),
    #[error("{0} would have no effect")]
    NoEffect(Item),
}

/// What an item did to the creature it was used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Healed(u32),
    Fed(u8),
    Revived(u32),
}

impl Inventory {
    /// Uses `item` on an owned creature outside battle. The item is spent only
    /// when it takes effect; revives work on fainted creatures only.
    pub fn use_item_on(
        &mut self,
        item: Item,
        crafture: &mut Crafture,
    ) -> Result<ItemEffect, ItemUseError> {
        if item.kind() == ItemKind::Ball {
            return Err(ItemUseError::NotUsable(item));
        }
        if !self.has(item, 1) {
            return Err(ItemUseError::NotOwned(item));
        }

        let effect = match item.kind() {
            ItemKind::Potion => {
                let amount = item.heal_amount().ok_or(ItemUseError::NotUsable(item))?;
                if crafture.is_fainted() || crafture.hp() == crafture.max_hp() {
                    return Err(ItemUseError::NoEffect(item));
                }
                ItemEffect::Healed(crafture.heal(amount))
            }
            ItemKind::Food => {
                let amount = item.hunger_restore().ok_or(ItemUseError::NotUsable(item))?;
                if crafture.hunger() >= MAX_HUNGER {
                    return Err(ItemUseError::NoEffect(item));
                }
                let before = crafture.hunger();
                crafture.feed(amount);
                ItemEffect::Fed(crafture.hunger() - before)
            }
            ItemKind::Revive => {
                let fraction = item.revive_fraction().ok_or(ItemUseError::NotUsable(item))?;
                if !crafture.is_fainted() {
                    return Err(ItemUseError::NoEffect(item));
                }
                let hp = ((crafture.max_hp() as f64 * fraction).floor() as u32).max(1);
                crafture.set_hp(hp);
                ItemEffect::Revived(crafture.hp())
            }
            ItemKind::Ball => return Err(ItemUseError::NotUsable(item)),
        };

        self.remove_item(item, 1);
        debug!(%item, crafture = %crafture.id, ?effect, "item used");
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn petalfae() -> Crafture {
        let catalog = Catalog::builtin().unwrap();
        Crafture::new("c1", catalog.species("petalfae").unwrap(), 3, catalog).unwrap()
    }

    #[test]
    fn feeding_caps_at_one_hundred() {
        let mut crafture = petalfae();
        crafture.set_hunger(90);
        crafture.set_happiness(97);
        crafture.feed(DEFAULT_FEED_AMOUNT);
        assert_eq!(crafture.hunger(), 100);
        assert_eq!(crafture.happiness(), 100);
    }

    #[test]
    fn draining_stops_at_zero() {
        let mut crafture = petalfae();
        crafture.set_hunger(12);
        crafture.drain_hunger(40);
        assert_eq!(crafture.hunger(), 0);
    }

    #[test]
    fn petting_raises_happiness() {
        let mut crafture = petalfae();
        crafture.set_happiness(10);
        crafture.pet();
        assert_eq!(crafture.happiness(), 25);
    }

    #[test]
    fn playing_trades_hunger_for_experience() {
        let catalog = Catalog::builtin().unwrap();
        let mut crafture = petalfae();
        crafture.set_hunger(50);
        crafture.set_happiness(20);

        let report = crafture.play(catalog).unwrap();

        assert!(!report.leveled_up());
        assert_eq!(crafture.hunger(), 40);
        assert_eq!(crafture.happiness(), 45);
        assert_eq!(crafture.experience, 10);
    }

    #[test]
    fn playing_can_level_up() {
        let catalog = Catalog::builtin().unwrap();
        let mut crafture = petalfae();
        crafture.experience = 295;
        crafture.take_damage(5);

        let report = crafture.play(catalog).unwrap();

        assert_eq!(report.new_level, 4);
        assert_eq!(crafture.experience, 5);
        assert_eq!(crafture.hp(), crafture.max_hp());
    }

    #[test]
    fn potion_heals_a_hurt_creature_and_is_spent() {
        let mut inventory = Inventory::default();
        let mut crafture = petalfae();
        crafture.set_hp(crafture.max_hp() - 10);

        assert_eq!(
            inventory.use_item_on(Item::Potion, &mut crafture),
            Ok(ItemEffect::Healed(10))
        );
        assert_eq!(crafture.hp(), crafture.max_hp());
        assert_eq!(inventory.quantity(Item::Potion), 4);
    }

    #[test]
    fn potion_is_kept_when_it_would_do_nothing() {
        let mut inventory = Inventory::default();
        let mut crafture = petalfae();
        assert_eq!(
            inventory.use_item_on(Item::Potion, &mut crafture),
            Err(ItemUseError::NoEffect(Item::Potion))
        );

        crafture.set_hp(0);
        assert_eq!(
            inventory.use_item_on(Item::Potion, &mut crafture),
            Err(ItemUseError::NoEffect(Item::Potion))
        );
        assert_eq!(crafture.hp(), 0);
        assert_eq!(inventory.quantity(Item::Potion), 5);
    }

    #[test]
    fn food_restores_hunger() {
        let mut inventory = Inventory::default();
        let mut crafture = petalfae();
        crafture.set_hunger(50);

        assert_eq!(
            inventory.use_item_on(Item::BerrySnack, &mut crafture),
            Ok(ItemEffect::Fed(30))
        );
        assert_eq!(crafture.hunger(), 80);
        assert_eq!(inventory.quantity(Item::BerrySnack), 4);

        crafture.set_hunger(100);
        assert_eq!(
            inventory.use_item_on(Item::BerrySnack, &mut crafture),
            Err(ItemUseError::NoEffect(Item::BerrySnack))
        );
        assert_eq!(inventory.quantity(Item::BerrySnack), 4);
    }

    #[test]
    fn revive_only_works_on_a_fainted_creature() {
        let mut inventory = Inventory::empty();
        inventory.add_item(Item::Revive, 1);
        inventory.add_item(Item::MaxRevive, 1);
        let mut crafture = petalfae();

        assert_eq!(
            inventory.use_item_on(Item::Revive, &mut crafture),
            Err(ItemUseError::NoEffect(Item::Revive))
        );
        assert_eq!(inventory.quantity(Item::Revive), 1);

        crafture.set_hp(0);
        let half = crafture.max_hp() / 2;
        assert_eq!(
            inventory.use_item_on(Item::Revive, &mut crafture),
            Ok(ItemEffect::Revived(half))
        );
        assert_eq!(crafture.hp(), half);
        assert_eq!(inventory.quantity(Item::Revive), 0);

        crafture.set_hp(0);
        let max_hp = crafture.max_hp();
        assert_eq!(
            inventory.use_item_on(Item::MaxRevive, &mut crafture),
            Ok(ItemEffect::Revived(max_hp))
        );
    }

    #[test]
    fn balls_and_missing_items_are_refused() {
        let mut inventory = Inventory::default();
        let mut crafture = petalfae();
        crafture.set_hp(1);

        assert_eq!(
            inventory.use_item_on(Item::BasicBall, &mut crafture),
            Err(ItemUseError::NotUsable(Item::BasicBall))
        );
        assert_eq!(
            inventory.use_item_on(Item::SuperPotion, &mut crafture),
            Err(ItemUseError::NotOwned(Item::SuperPotion))
        );
        assert_eq!(crafture.hp(), 1);
        assert_eq!(inventory, Inventory::default());
    }
}
