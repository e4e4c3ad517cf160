use crate::catalog::Catalog;
use crate::crafture::Crafture;
use crate::errors::DataResult;
use schema::{MoveData, MoveId};

/// Level at which each pool slot becomes known, by pool order.
pub const MOVE_LEARN_LEVELS: [u32; 4] = [1, 4, 8, 12];

/// At most this many moves are offered in battle at once.
pub const MAX_OFFERED_MOVES: usize = 4;

/// Slots past the table reuse its last level.
pub fn learn_level_for_slot(slot: usize) -> u32 {
    MOVE_LEARN_LEVELS
        .get(slot)
        .or(MOVE_LEARN_LEVELS.last())
        .copied()
        .unwrap_or(1)
}

/// Moves a creature of `level` knows from `pool`, never empty for a non-empty pool.
pub fn learned_move_ids_for_level(pool: &[MoveData], level: u32) -> Vec<MoveId> {
    let mut learned: Vec<MoveId> = pool
        .iter()
        .enumerate()
        .filter(|(slot, _)| level >= learn_level_for_slot(*slot))
        .map(|(_, move_data)| move_data.id.clone())
        .collect();

    if learned.is_empty() {
        if let Some(first) = pool.first() {
            learned.push(first.id.clone());
        }
    }
    learned
}

/// Merges what a creature already knows with what its level grants, then drops
/// anything that is not in `pool`. Existing ids keep their position.
pub fn ensure_learned_move_ids(pool: &[MoveData], level: u32, existing: &[MoveId]) -> Vec<MoveId> {
    let mut merged: Vec<MoveId> = Vec::with_capacity(pool.len());
    for id in existing
        .iter()
        .chain(learned_move_ids_for_level(pool, level).iter())
    {
        if !merged.contains(id) && pool.iter().any(|m| &m.id == id) {
            merged.push(id.clone());
        }
    }
    merged
}

/// The moves offered in battle: learned moves in pool order, capped, falling back
/// to the first pool move.
pub fn known_moves(pool: &[MoveData], level: u32, learned: &[MoveId]) -> Vec<MoveData> {
    let learned = ensure_learned_move_ids(pool, level, learned);
    let offered: Vec<MoveData> = pool
        .iter()
        .filter(|m| learned.contains(&m.id))
        .take(MAX_OFFERED_MOVES)
        .cloned()
        .collect();

    if offered.is_empty() {
        pool.iter().take(1).cloned().collect()
    } else {
        offered
    }
}

impl Crafture {
    /// Re-derives the learned set for the current species and level.
    /// Returns the ids that were not known before.
    pub fn refresh_learned_moves(&mut self, catalog: &Catalog) -> DataResult<Vec<MoveId>> {
        let species = catalog.species(self.species_id.as_str())?;
        let pool = catalog.move_pool(species.crafture_type)?;

        let updated = ensure_learned_move_ids(pool, self.level, self.learned_move_ids());
        let newly_learned = updated
            .iter()
            .filter(|id| !self.learned_move_ids().contains(id))
            .cloned()
            .collect();
        self.replace_learned_move_ids(updated);
        Ok(newly_learned)
    }

    /// Battle-ready moves for this creature.
    pub fn known_moves(&self, catalog: &Catalog) -> DataResult<Vec<MoveData>> {
        let species = catalog.species(self.species_id.as_str())?;
        let pool = catalog.move_pool(species.crafture_type)?;
        Ok(known_moves(pool, self.level, self.learned_move_ids()))
    }
}
