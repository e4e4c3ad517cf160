//! Random wild encounters.

use crate::battle::rng::BattleRng;
use crate::catalog::Catalog;
use crate::errors::{DataResult, SpeciesDataError};
use schema::{Rarity, SpeciesId};
use tracing::debug;

pub const MAX_WILD_LEVEL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildEncounter {
    pub species_id: SpeciesId,
    pub level: u32,
}

/// Relative chance of meeting a species of each rarity.
pub fn encounter_weight(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 50,
        Rarity::Uncommon => 30,
        Rarity::Rare => 15,
        Rarity::Legendary => 5,
    }
}

/// Picks a wild species weighted by rarity, then a level in `1..=10`.
///
/// Uses two draws: species first, then level.
pub fn roll_wild_encounter(catalog: &Catalog, rng: &mut dyn BattleRng) -> DataResult<WildEncounter> {
    let candidates = catalog.wild_species();
    let total: u32 = candidates.iter().map(|s| encounter_weight(s.rarity)).sum();
    if total == 0 {
        return Err(SpeciesDataError::NoWildSpecies.into());
    }

    let target = ((rng.next_uniform("encounter species") * total as f64) as u32).min(total - 1);
    let mut cumulative = 0;
    let mut picked = candidates[candidates.len() - 1];
    for &species in &candidates {
        cumulative += encounter_weight(species.rarity);
        if target < cumulative {
            picked = species;
            break;
        }
    }

    let level = ((rng.next_uniform("encounter level") * MAX_WILD_LEVEL as f64) as u32 + 1).min(MAX_WILD_LEVEL);
    debug!(species = %picked.id, level, "wild encounter rolled");
    Ok(WildEncounter {
        species_id: picked.id.clone(),
        level,
    })
}
