use crate::catalog::Catalog;
use crate::errors::DataResult;
use crate::progression::learned_move_ids_for_level;
use schema::{BaseStats, MoveId, SpeciesData, SpeciesId};
use serde::{Deserialize, Serialize};

pub const MAX_HUNGER: u8 = 100;
pub const MAX_HAPPINESS: u8 = 100;

/// Hunger below this weakens a creature in battle and triggers a warning.
pub const HUNGRY_THRESHOLD: u8 = 30;

/// Level-scaled battle stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftureStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl CraftureStats {
    /// hp = 50 + def + 5L, atk = atk + 2L, def = def + 1.5L (floored), spd = spd + L.
    pub fn at_level(base: &BaseStats, level: u32) -> Self {
        let hp_base = 50 + base.defense;
        Self {
            max_hp: hp_base.saturating_add(level.saturating_mul(5)),
            attack: base.attack.saturating_add(level.saturating_mul(2)),
            defense: base
                .defense
                .saturating_add((level as u64 * 3 / 2).min(u32::MAX as u64) as u32),
            speed: base.speed.saturating_add(level),
        }
    }
}

/// A creature instance: owned by the player or synthesised for one wild encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crafture {
    pub id: String,
    pub species_id: SpeciesId,
    pub nickname: String,
    pub level: u32,
    pub experience: u32,
    stats: CraftureStats,
    hp: u32,
    hunger: u8,
    happiness: u8,
    learned_move_ids: Vec<MoveId>,
}

impl Crafture {
    /// A freshly obtained creature at full HP with its species' default mood.
    pub fn new(
        id: impl Into<String>,
        species: &SpeciesData,
        level: u32,
        catalog: &Catalog,
    ) -> DataResult<Self> {
        let level = level.max(1);
        let pool = catalog.move_pool(species.crafture_type)?;
        let stats = CraftureStats::at_level(&species.base_stats, level);

        Ok(Self {
            id: id.into(),
            species_id: species.id.clone(),
            nickname: species.name.clone(),
            level,
            experience: 0,
            stats,
            hp: stats.max_hp,
            hunger: species.base_hunger.min(MAX_HUNGER),
            happiness: species.base_happiness.min(MAX_HAPPINESS),
            learned_move_ids: learned_move_ids_for_level(pool, level),
        })
    }

    /// An ephemeral opponent for a single encounter.
    pub fn wild(species: &SpeciesData, level: u32, catalog: &Catalog) -> DataResult<Self> {
        let mut wild = Self::new(format!("wild-{}", species.id), species, level, catalog)?;
        wild.nickname = format!("Wild {}", species.name);
        wild.hunger = 50;
        wild.happiness = 50;
        Ok(wild)
    }

    pub fn stats(&self) -> CraftureStats {
        self.stats
    }

    /// Replaces the battle stats; current HP is clamped to the new maximum.
    pub fn set_stats(&mut self, stats: CraftureStats) {
        self.stats = stats;
        self.hp = self.hp.min(stats.max_hp);
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.stats.max_hp);
    }

    pub fn heal_fully(&mut self) {
        self.hp = self.stats.max_hp;
    }

    /// Restores up to `amount` HP and returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.set_hp(self.hp.saturating_add(amount));
        self.hp - before
    }

    /// Removes `amount` HP, stopping at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }

    pub fn set_hunger(&mut self, hunger: u8) {
        self.hunger = hunger.min(MAX_HUNGER);
    }

    pub fn is_hungry(&self) -> bool {
        self.hunger < HUNGRY_THRESHOLD
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn set_happiness(&mut self, happiness: u8) {
        self.happiness = happiness.min(MAX_HAPPINESS);
    }

    pub fn learned_move_ids(&self) -> &[MoveId] {
        &self.learned_move_ids
    }

    pub(crate) fn replace_learned_move_ids(&mut self, ids: Vec<MoveId>) {
        self.learned_move_ids = ids;
    }
}
