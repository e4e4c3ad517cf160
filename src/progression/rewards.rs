use crate::battle::state::BattleRewards;
use crate::catalog::Catalog;
use crate::crafture::Crafture;
use crate::errors::DataResult;
use crate::progression::LevelUpReport;

const EXP_PER_OPPONENT_LEVEL: u32 = 20;
const LEVEL_GAP_OFFSET: i64 = 5;
const BASE_HUNGER_COST: u32 = 15;
const HUNGER_COST_PER_LEVEL: u32 = 2;

/// Calculator for what a battle pays out and costs.
pub struct RewardCalculator;

impl RewardCalculator {
    /// Experience for beating an opponent.
    /// Formula: floor(oppLevel × 20 × max(1, oppLevel − playerLevel + 5) / 5)
    pub fn battle_experience(&self, opponent_level: u32, player_level: u32) -> u32 {
        let gap = (opponent_level as i64 - player_level as i64 + LEVEL_GAP_OFFSET).max(1) as u64;
        let exp = (opponent_level as u64)
            .saturating_mul(EXP_PER_OPPONENT_LEVEL as u64)
            .saturating_mul(gap)
            / LEVEL_GAP_OFFSET as u64;
        exp.min(u32::MAX as u64) as u32
    }

    /// Hunger lost by the player's creature, win or lose.
    pub fn hunger_cost(&self, opponent_level: u32) -> u32 {
        BASE_HUNGER_COST.saturating_add(opponent_level.saturating_mul(HUNGER_COST_PER_LEVEL))
    }
}

/// Writes a finished battle back onto the player's owned creature: remaining HP
/// first, then the hunger cost, then experience.
pub fn apply_battle_rewards(
    crafture: &mut Crafture,
    rewards: &BattleRewards,
    catalog: &Catalog,
) -> DataResult<LevelUpReport> {
    let species = catalog.species(crafture.species_id.as_str())?;
    catalog.move_pool(species.crafture_type)?;

    crafture.set_hp(rewards.player_hp);
    crafture.drain_hunger(rewards.hunger_lost.min(u8::MAX as u32) as u8);
    crafture.gain_experience(rewards.exp_gained, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(5, 5, 100)]
    #[case(10, 3, 480)]
    #[case(2, 10, 8)]
    #[case(7, 9, 84)]
    #[case(1, 1, 20)]
    fn experience_reward(#[case] opponent: u32, #[case] player: u32, #[case] expected: u32) {
        assert_eq!(RewardCalculator.battle_experience(opponent, player), expected);
    }

    #[rstest]
    #[case(1, 17)]
    #[case(5, 25)]
    #[case(10, 35)]
    fn hunger_cost(#[case] opponent: u32, #[case] expected: u32) {
        assert_eq!(RewardCalculator.hunger_cost(opponent), expected);
    }

    #[test]
    fn extreme_levels_saturate() {
        assert_eq!(RewardCalculator.battle_experience(u32::MAX, 1), u32::MAX);
        assert_eq!(RewardCalculator.hunger_cost(u32::MAX), u32::MAX);
    }

    #[test]
    fn rewards_are_applied_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut pup =
            Crafture::new("c1", catalog.species("emberpup").unwrap(), 2, catalog).unwrap();
        pup.set_hunger(40);

        let rewards = BattleRewards {
            won: true,
            exp_gained: 80,
            hunger_lost: 25,
            player_hp: 12,
        };
        let report = apply_battle_rewards(&mut pup, &rewards, catalog).unwrap();

        assert!(!report.leveled_up());
        assert_eq!(pup.hp(), 12);
        assert_eq!(pup.hunger(), 15);
        assert_eq!(pup.experience, 80);
    }

    #[test]
    fn level_up_from_rewards_restores_hp() {
        let catalog = Catalog::builtin().unwrap();
        let mut pup =
            Crafture::new("c1", catalog.species("emberpup").unwrap(), 1, catalog).unwrap();

        let rewards = BattleRewards {
            won: true,
            exp_gained: 100,
            hunger_lost: 17,
            player_hp: 3,
        };
        let report = apply_battle_rewards(&mut pup, &rewards, catalog).unwrap();

        assert_eq!(report.new_level, 2);
        assert_eq!(pup.hp(), pup.max_hp());
    }
}
