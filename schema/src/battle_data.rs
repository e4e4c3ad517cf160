use crate::CraftureType;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Catalog key for a move, e.g. `"vine-whip"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveId(pub String);

impl MoveId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MoveId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for MoveId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusEffect {
    Burn,
    Freeze,
    Stun,
    Poison,
    Sleep,
}

/// A status a move may inflict, with its probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusInfliction {
    pub effect: StatusEffect,
    pub chance: f64,
}

/// Fixed effect of a power-0 move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilityEffect {
    Heal { amount: u32 },
    RaiseDefense { amount: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: MoveId,
    pub name: String,
    pub move_type: CraftureType,
    pub power: u32,
    pub accuracy: u32,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub status: Option<StatusInfliction>,
    #[serde(default)]
    pub utility: Option<UtilityEffect>,
}

impl MoveData {
    /// Power-0 moves never go through the damage formula.
    pub fn is_utility(&self) -> bool {
        self.power == 0
    }
}
