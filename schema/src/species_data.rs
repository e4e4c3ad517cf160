use crate::CraftureType;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Catalog key for a species, e.g. `"leafling"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub String);

impl SpeciesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpeciesId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for SpeciesId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// Hunger band a branching evolution may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvolutionCondition {
    /// hunger >= 70
    HighHunger,
    /// hunger < 30
    LowHunger,
}

impl EvolutionCondition {
    pub const HIGH_HUNGER_THRESHOLD: u8 = 70;
    pub const LOW_HUNGER_THRESHOLD: u8 = 30;

    pub fn holds(self, hunger: u8) -> bool {
        match self {
            EvolutionCondition::HighHunger => hunger >= Self::HIGH_HUNGER_THRESHOLD,
            EvolutionCondition::LowHunger => hunger < Self::LOW_HUNGER_THRESHOLD,
        }
    }

    /// Short player-facing label for the condition.
    pub fn label(self) -> &'static str {
        match self {
            EvolutionCondition::HighHunger => "Well Fed",
            EvolutionCondition::LowHunger => "Hungry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionPath {
    pub target: SpeciesId,
    pub level_required: u32,
    #[serde(default)]
    pub condition: Option<EvolutionCondition>,
}

impl EvolutionPath {
    pub fn is_met(&self, level: u32, hunger: u8) -> bool {
        level >= self.level_required && self.condition.map_or(true, |c| c.holds(hunger))
    }
}

/// A single, unconditional evolution reached at `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearEvolution {
    pub target: SpeciesId,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub name: String,
    pub crafture_type: CraftureType,
    pub description: String,
    pub rarity: Rarity,
    pub base_happiness: u8,
    pub base_hunger: u8,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub evolution: Option<LinearEvolution>,
    #[serde(default)]
    pub evolution_paths: Vec<EvolutionPath>,
    #[serde(default = "default_stage")]
    pub evolution_stage: u8,
}

fn default_stage() -> u8 {
    1
}

impl SpeciesData {
    /// Every species id this species can evolve into, linear and branching.
    pub fn evolution_targets(&self) -> impl Iterator<Item = &SpeciesId> {
        self.evolution
            .iter()
            .map(|e| &e.target)
            .chain(self.evolution_paths.iter().map(|p| &p.target))
    }
}
