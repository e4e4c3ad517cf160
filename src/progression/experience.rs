use crate::catalog::Catalog;
use crate::crafture::{Crafture, CraftureStats};
use crate::errors::DataResult;
use schema::MoveId;
use tracing::debug;

/// Experience needed to leave `level`.
pub fn experience_to_next_level(level: u32) -> u32 {
    level.saturating_mul(100)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpReport {
    pub old_level: u32,
    pub new_level: u32,
    pub learned_moves: Vec<MoveId>,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

impl Crafture {
    /// Adds experience, applying every level-up it pays for.
    ///
    /// Each level recomputes stats and learned moves; HP is fully restored when at
    /// least one level was gained.
    pub fn gain_experience(&mut self, amount: u32, catalog: &Catalog) -> DataResult<LevelUpReport> {
        let species = catalog.species(self.species_id.as_str())?;
        // Resolved up front so a missing pool cannot leave a half-applied level-up.
        catalog.move_pool(species.crafture_type)?;

        let old_level = self.level;
        self.level = self.level.max(1);
        self.experience = self.experience.saturating_add(amount);

        let mut learned_moves = Vec::new();
        while self.experience >= experience_to_next_level(self.level) {
            self.experience -= experience_to_next_level(self.level);
            self.level = self.level.saturating_add(1);
            self.set_stats(CraftureStats::at_level(&species.base_stats, self.level));
            learned_moves.extend(self.refresh_learned_moves(catalog)?);
        }

        if self.level > old_level {
            self.heal_fully();
            debug!(
                crafture = %self.nickname,
                old_level,
                new_level = self.level,
                "level up"
            );
        }

        Ok(LevelUpReport {
            old_level,
            new_level: self.level,
            learned_moves,
        })
    }
}
