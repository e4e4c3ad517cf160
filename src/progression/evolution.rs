use crate::catalog::Catalog;
use crate::crafture::{Crafture, CraftureStats};
use crate::errors::{DataResult, ProgressionError};
use crate::progression::ensure_learned_move_ids;
use schema::{EvolutionCondition, MoveId, SpeciesId};
use tracing::info;

/// An evolution the creature qualifies for right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOption {
    pub target: SpeciesId,
    pub target_name: String,
    pub level_required: u32,
    pub condition: Option<EvolutionCondition>,
}

impl EvolutionOption {
    /// "Well Fed" / "Hungry" for conditional branches.
    pub fn condition_label(&self) -> Option<&'static str> {
        self.condition.map(EvolutionCondition::label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionReport {
    pub from: SpeciesId,
    pub to: SpeciesId,
    pub learned_moves: Vec<MoveId>,
    pub forgotten_moves: Vec<MoveId>,
}

/// Lists the evolutions currently available.
///
/// Branching paths take precedence: when a species declares any, every path whose
/// level and hunger band hold is returned so the caller can offer a choice.
/// Otherwise the single linear evolution is returned once its level is reached.
pub fn evolution_options(crafture: &Crafture, catalog: &Catalog) -> DataResult<Vec<EvolutionOption>> {
    let species = catalog.species(crafture.species_id.as_str())?;

    let mut options = Vec::new();
    if !species.evolution_paths.is_empty() {
        for path in &species.evolution_paths {
            if path.is_met(crafture.level, crafture.hunger()) {
                let target = catalog.species(path.target.as_str())?;
                options.push(EvolutionOption {
                    target: target.id.clone(),
                    target_name: target.name.clone(),
                    level_required: path.level_required,
                    condition: path.condition,
                });
            }
        }
    } else if let Some(linear) = &species.evolution {
        if crafture.level >= linear.level {
            let target = catalog.species(linear.target.as_str())?;
            options.push(EvolutionOption {
                target: target.id.clone(),
                target_name: target.name.clone(),
                level_required: linear.level,
                condition: None,
            });
        }
    }
    Ok(options)
}

/// Evolves into `target`, which must be one of [`evolution_options`].
///
/// Stats are recomputed at the current level, HP is restored, and the learned set
/// is re-derived for the new species' pool. A nickname equal to the old species
/// name follows the species.
pub fn evolve(crafture: &mut Crafture, target: &str, catalog: &Catalog) -> DataResult<EvolutionReport> {
    let eligible = evolution_options(crafture, catalog)?
        .iter()
        .any(|option| option.target.as_str() == target);
    if !eligible {
        return Err(ProgressionError::NotEligible {
            species: crafture.species_id.clone(),
            target: SpeciesId::new(target),
        }
        .into());
    }

    let old_species = catalog.species(crafture.species_id.as_str())?;
    let new_species = catalog.species(target)?;
    let new_pool = catalog.move_pool(new_species.crafture_type)?;

    let previous = crafture.learned_move_ids().to_vec();
    let updated = ensure_learned_move_ids(new_pool, crafture.level, &previous);
    let learned_moves = updated
        .iter()
        .filter(|id| !previous.contains(id))
        .cloned()
        .collect();
    let forgotten_moves = previous
        .iter()
        .filter(|id| !updated.contains(id))
        .cloned()
        .collect();

    if crafture.nickname == old_species.name {
        crafture.nickname = new_species.name.clone();
    }
    crafture.species_id = new_species.id.clone();
    crafture.set_stats(CraftureStats::at_level(&new_species.base_stats, crafture.level));
    crafture.heal_fully();
    crafture.replace_learned_move_ids(updated);

    info!(from = %old_species.id, to = %new_species.id, "evolution");

    Ok(EvolutionReport {
        from: old_species.id.clone(),
        to: new_species.id.clone(),
        learned_moves,
        forgotten_moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BattleEngineError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn crafture(species: &str, level: u32, hunger: u8) -> Crafture {
        let catalog = Catalog::builtin().unwrap();
        let mut crafture =
            Crafture::new("c1", catalog.species(species).unwrap(), level, catalog).unwrap();
        crafture.set_hunger(hunger);
        crafture
    }

    #[rstest]
    #[case(80, &["grovemaw"])]
    #[case(10, &["witherwisp"])]
    #[case(50, &[])]
    fn branching_paths_follow_hunger(#[case] hunger: u8, #[case] expected: &[&str]) {
        let catalog = Catalog::builtin().unwrap();
        let mossbud = crafture("mossbud", 15, hunger);
        let options = evolution_options(&mossbud, catalog).unwrap();
        let targets: Vec<&str> = options.iter().map(|o| o.target.as_str()).collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn branching_paths_respect_level() {
        let catalog = Catalog::builtin().unwrap();
        let mossbud = crafture("mossbud", 14, 90);
        assert!(evolution_options(&mossbud, catalog).unwrap().is_empty());
    }

    #[test]
    fn condition_labels() {
        let catalog = Catalog::builtin().unwrap();
        let options = evolution_options(&crafture("mossbud", 20, 75), catalog).unwrap();
        assert_eq!(options[0].condition_label(), Some("Well Fed"));
        assert_eq!(options[0].target_name, "Grovemaw");
    }

    #[test]
    fn linear_evolution_unlocks_at_level() {
        let catalog = Catalog::builtin().unwrap();
        assert!(evolution_options(&crafture("emberpup", 15, 50), catalog)
            .unwrap()
            .is_empty());

        let options = evolution_options(&crafture("emberpup", 16, 50), catalog).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].target, SpeciesId::new("blazehound"));
        assert_eq!(options[0].condition_label(), None);
    }

    #[test]
    fn evolving_recomputes_stats_and_renames() {
        let catalog = Catalog::builtin().unwrap();
        let mut pup = crafture("emberpup", 17, 50);
        pup.take_damage(30);

        let report = evolve(&mut pup, "blazehound", catalog).unwrap();

        let hound = catalog.species("blazehound").unwrap();
        assert_eq!(report.to, SpeciesId::new("blazehound"));
        assert_eq!(pup.nickname, "Blazehound");
        assert_eq!(pup.stats(), CraftureStats::at_level(&hound.base_stats, 17));
        assert_eq!(pup.hp(), pup.max_hp());
        assert!(report.forgotten_moves.is_empty());
    }

    #[test]
    fn custom_nickname_survives_evolution() {
        let catalog = Catalog::builtin().unwrap();
        let mut pup = crafture("emberpup", 16, 50);
        pup.nickname = "Sparky".to_string();
        evolve(&mut pup, "blazehound", catalog).unwrap();
        assert_eq!(pup.nickname, "Sparky");
    }

    #[test]
    fn type_change_swaps_the_move_set() {
        let catalog = Catalog::builtin().unwrap();
        let mut mossbud = crafture("mossbud", 15, 5);
        let report = evolve(&mut mossbud, "witherwisp", catalog).unwrap();

        let ghost_moves: Vec<MoveId> = ["lick", "shadow-ball", "curse", "phantom-force"]
            .iter()
            .map(|id| MoveId::new(*id))
            .collect();
        assert_eq!(mossbud.learned_move_ids(), ghost_moves.as_slice());
        assert_eq!(report.learned_moves, ghost_moves);
        assert_eq!(report.forgotten_moves.len(), 4);
    }

    #[test]
    fn ineligible_target_is_rejected_without_change() {
        let catalog = Catalog::builtin().unwrap();
        let mut mossbud = crafture("mossbud", 15, 50);
        let before = mossbud.clone();

        let err = evolve(&mut mossbud, "grovemaw", catalog).unwrap_err();

        assert_eq!(
            err,
            BattleEngineError::Progression(ProgressionError::NotEligible {
                species: SpeciesId::new("mossbud"),
                target: SpeciesId::new("grovemaw"),
            })
        );
        assert_eq!(mossbud, before);
    }
}
