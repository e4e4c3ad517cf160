use crate::battle::rng::BattleRng;
use crate::battle::state::{BattleCombatant, Side};
use schema::{CraftureType, MoveData, StatusEffect};

/// Attack multiplier while burned.
pub const BURN_ATTACK_PENALTY: f64 = 0.75;
/// Move power is normalised around this value.
pub const MOVE_POWER_BASELINE: f64 = 50.0;
pub const RANDOM_FACTOR_MIN: f64 = 0.85;
pub const RANDOM_FACTOR_SPREAD: f64 = 0.3;

/// 0.5 at hunger 0 up to 1.0 at hunger 100.
pub fn hunger_multiplier(hunger: u8) -> f64 {
    0.5 + hunger.min(100) as f64 / 200.0
}

/// Draws the damage spread factor in `[0.85, 1.15)`.
pub fn roll_random_factor(rng: &mut dyn BattleRng) -> f64 {
    RANDOM_FACTOR_MIN + rng.next_uniform("damage spread") * RANDOM_FACTOR_SPREAD
}

/// A move hits unless the accuracy roll (scaled to 0..100) exceeds its accuracy.
pub fn move_hits(move_data: &MoveData, rng: &mut dyn BattleRng) -> bool {
    rng.next_uniform("accuracy") * 100.0 <= move_data.accuracy as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub damage: u32,
    pub type_multiplier: f64,
}

/// Inputs of the damage formula, independent of any session.
#[derive(Debug, Clone, Copy)]
pub struct DamageInput {
    pub attack: u32,
    pub defense: u32,
    pub power: u32,
    pub move_type: CraftureType,
    pub defender_type: CraftureType,
    /// Hunger of the attacker when it is the player's creature; `None` for the opponent.
    pub player_hunger: Option<u8>,
    pub attacker_status: Option<StatusEffect>,
}

/// Damage of a non-utility move. Always at least 1.
pub fn calculate_damage(input: &DamageInput, random_factor: f64) -> DamageResult {
    let type_multiplier = CraftureType::type_effectiveness(input.move_type, input.defender_type);
    let hunger = input.player_hunger.map_or(1.0, hunger_multiplier);
    let burn = match input.attacker_status {
        Some(StatusEffect::Burn) => BURN_ATTACK_PENALTY,
        _ => 1.0,
    };

    let effective_attack = input.attack as f64 * hunger * burn;
    let power_factor = input.power as f64 / MOVE_POWER_BASELINE;
    let defense = input.defense.max(1) as f64;
    let base_damage = (((effective_attack * power_factor * 2.0) / defense) * 10.0 + 5.0).floor();

    let damage = (base_damage * type_multiplier * random_factor).floor().max(1.0) as u32;
    DamageResult {
        damage,
        type_multiplier,
    }
}

/// Builds the formula inputs for `attacker` (on `attacker_side`) hitting `defender`.
pub fn damage_input(
    attacker: &BattleCombatant,
    attacker_side: Side,
    defender: &BattleCombatant,
    move_data: &MoveData,
) -> DamageInput {
    DamageInput {
        attack: attacker.crafture.attack(),
        defense: defender.effective_defense(),
        power: move_data.power,
        move_type: move_data.move_type,
        defender_type: defender.crafture_type,
        player_hunger: (attacker_side == Side::Player).then(|| attacker.crafture.hunger()),
        attacker_status: attacker.status_effect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::TurnRng;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn input(attack: u32, defense: u32, power: u32) -> DamageInput {
        DamageInput {
            attack,
            defense,
            power,
            move_type: CraftureType::Cube,
            defender_type: CraftureType::Flower,
            player_hunger: None,
            attacker_status: None,
        }
    }

    #[rstest]
    #[case(0, 0.5)]
    #[case(50, 0.75)]
    #[case(100, 1.0)]
    fn hunger_multiplier_bounds(#[case] hunger: u8, #[case] expected: f64) {
        assert_eq!(hunger_multiplier(hunger), expected);
    }

    #[test]
    fn hunger_multiplier_is_monotonic() {
        for hunger in 0..100u8 {
            assert!(hunger_multiplier(hunger) <= hunger_multiplier(hunger + 1));
        }
    }

    #[test]
    fn neutral_hit_follows_the_formula() {
        // ((40 * 2 * 2) / 20) * 10 + 5 = 85
        let result = calculate_damage(&input(40, 20, 100), 1.0);
        assert_eq!(result.damage, 85);
        assert_eq!(result.type_multiplier, 1.0);
    }

    #[test]
    fn damage_is_never_zero() {
        for power in [1, 5, 10, 40, 85] {
            for factor in [0.85, 1.0, 1.1499] {
                let result = calculate_damage(&input(1, 10_000, power), factor);
                assert!(result.damage >= 1, "power {} factor {}", power, factor);
            }
        }
        let weak = DamageInput {
            move_type: CraftureType::Forest,
            defender_type: CraftureType::Fire,
            ..input(1, 500, 1)
        };
        assert_eq!(calculate_damage(&weak, 0.85).damage, 2);
    }

    #[test]
    fn type_multiplier_scales_damage() {
        let strong = DamageInput {
            move_type: CraftureType::Fire,
            defender_type: CraftureType::Forest,
            ..input(40, 20, 100)
        };
        let result = calculate_damage(&strong, 1.0);
        assert_eq!(result.type_multiplier, 1.5);
        assert_eq!(result.damage, 127);
    }

    #[test]
    fn hunger_only_weakens_the_player() {
        let starving_player = DamageInput {
            player_hunger: Some(0),
            ..input(40, 20, 100)
        };
        // effective attack 20: ((20 * 4) / 20) * 10 + 5 = 45
        assert_eq!(calculate_damage(&starving_player, 1.0).damage, 45);
        assert_eq!(calculate_damage(&input(40, 20, 100), 1.0).damage, 85);
    }

    #[test]
    fn burn_cuts_attack() {
        let burned = DamageInput {
            attacker_status: Some(StatusEffect::Burn),
            ..input(40, 20, 100)
        };
        // effective attack 30: ((30 * 4) / 20) * 10 + 5 = 65
        assert_eq!(calculate_damage(&burned, 1.0).damage, 65);

        let stunned = DamageInput {
            attacker_status: Some(StatusEffect::Stun),
            ..input(40, 20, 100)
        };
        assert_eq!(calculate_damage(&stunned, 1.0).damage, 85);
    }

    #[test]
    fn random_factor_spans_its_range() {
        let mut rng = TurnRng::new_for_test(vec![0.0, 0.5]);
        assert_eq!(roll_random_factor(&mut rng), 0.85);
        assert!((roll_random_factor(&mut rng) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn accuracy_roll_is_scaled_to_percent() {
        let mut rng = TurnRng::new_for_test(vec![0.75, 0.76]);
        let move_data = MoveData {
            id: "stone-edge".into(),
            name: "Stone Edge".to_string(),
            move_type: CraftureType::Rock,
            power: 75,
            accuracy: 75,
            description: String::new(),
            icon: String::new(),
            status: None,
            utility: None,
        };
        assert!(move_hits(&move_data, &mut rng));
        assert!(!move_hits(&move_data, &mut rng));
    }
}
