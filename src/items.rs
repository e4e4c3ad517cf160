use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Potion,
    Revive,
    Ball,
    Food,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
    Potion,
    SuperPotion,
    HyperPotion,
    FullRestore,
    Revive,
    MaxRevive,
    BasicBall,
    GreatBall,
    UltraBall,
    MasterBall,
    BerrySnack,
    GourmetMeal,
}

impl Item {
    pub const ALL: [Item; 12] = [
        Item::Potion,
        Item::SuperPotion,
        Item::HyperPotion,
        Item::FullRestore,
        Item::Revive,
        Item::MaxRevive,
        Item::BasicBall,
        Item::GreatBall,
        Item::UltraBall,
        Item::MasterBall,
        Item::BerrySnack,
        Item::GourmetMeal,
    ];

    pub fn kind(self) -> ItemKind {
        match self {
            Item::Potion | Item::SuperPotion | Item::HyperPotion | Item::FullRestore => {
                ItemKind::Potion
            }
            Item::Revive | Item::MaxRevive => ItemKind::Revive,
            Item::BasicBall | Item::GreatBall | Item::UltraBall | Item::MasterBall => ItemKind::Ball,
            Item::BerrySnack | Item::GourmetMeal => ItemKind::Food,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Item::Potion => "Potion",
            Item::SuperPotion => "Super Potion",
            Item::HyperPotion => "Hyper Potion",
            Item::FullRestore => "Full Restore",
            Item::Revive => "Revive",
            Item::MaxRevive => "Max Revive",
            Item::BasicBall => "Basic Ball",
            Item::GreatBall => "Great Ball",
            Item::UltraBall => "Ultra Ball",
            Item::MasterBall => "Master Ball",
            Item::BerrySnack => "Berry Snack",
            Item::GourmetMeal => "Gourmet Meal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Item::Potion => "Restores 20 HP",
            Item::SuperPotion => "Restores 50 HP",
            Item::HyperPotion => "Restores 100 HP",
            Item::FullRestore => "Fully restores HP",
            Item::Revive => "Revives a fainted Crafture to 50% HP",
            Item::MaxRevive => "Revives a fainted Crafture to full HP",
            Item::BasicBall => "A standard ball for catching Craftures",
            Item::GreatBall => "Better catch rate than Basic Ball",
            Item::UltraBall => "High catch rate ball",
            Item::MasterBall => "Never fails to catch!",
            Item::BerrySnack => "Restores 30 hunger",
            Item::GourmetMeal => "Fully restores hunger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Item::Potion => "🧪",
            Item::SuperPotion => "🧴",
            Item::HyperPotion => "💉",
            Item::FullRestore => "✨",
            Item::Revive => "💫",
            Item::MaxRevive => "⭐",
            Item::BasicBall => "⚪",
            Item::GreatBall => "🔵",
            Item::UltraBall => "🟡",
            Item::MasterBall => "🟣",
            Item::BerrySnack => "🍇",
            Item::GourmetMeal => "🍖",
        }
    }

    /// Shop price in coins.
    pub fn price(self) -> u32 {
        match self {
            Item::Potion => 100,
            Item::SuperPotion => 300,
            Item::HyperPotion => 600,
            Item::FullRestore => 1500,
            Item::Revive => 500,
            Item::MaxRevive => 1200,
            Item::BasicBall => 50,
            Item::GreatBall => 150,
            Item::UltraBall => 400,
            Item::MasterBall => 10000,
            Item::BerrySnack => 75,
            Item::GourmetMeal => 250,
        }
    }

    /// HP restored by a potion.
    pub fn heal_amount(self) -> Option<u32> {
        match self {
            Item::Potion => Some(20),
            Item::SuperPotion => Some(50),
            Item::HyperPotion => Some(100),
            Item::FullRestore => Some(9999),
            _ => None,
        }
    }

    /// Fraction of max HP a revive restores.
    pub fn revive_fraction(self) -> Option<f64> {
        match self {
            Item::Revive => Some(0.5),
            Item::MaxRevive => Some(1.0),
            _ => None,
        }
    }

    /// Capture multiplier of a ball.
    pub fn catch_bonus(self) -> Option<f64> {
        match self {
            Item::BasicBall => Some(1.0),
            Item::GreatBall => Some(1.5),
            Item::UltraBall => Some(2.0),
            Item::MasterBall => Some(999.0),
            _ => None,
        }
    }

    /// Hunger restored by food.
    pub fn hunger_restore(self) -> Option<u8> {
        match self {
            Item::BerrySnack => Some(30),
            Item::GourmetMeal => Some(100),
            _ => None,
        }
    }

    pub fn is_ball(self) -> bool {
        self.kind() == ItemKind::Ball
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
