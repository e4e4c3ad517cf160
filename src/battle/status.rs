use schema::StatusEffect;
use serde::{Deserialize, Serialize};

/// Static contract of a status effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    pub name: &'static str,
    /// Used in narration: "is now burned", "is frozen and can't move".
    pub adjective: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Fraction of max HP lost at the start of each of the holder's turns.
    pub damage_per_turn: f64,
    pub skip_turn_chance: f64,
    pub duration: u32,
}

pub fn status_info(effect: StatusEffect) -> StatusInfo {
    match effect {
        StatusEffect::Burn => StatusInfo {
            name: "Burn",
            adjective: "burned",
            description: "Takes damage each turn",
            icon: "🔥",
            damage_per_turn: 0.0625,
            skip_turn_chance: 0.0,
            duration: 5,
        },
        StatusEffect::Freeze => StatusInfo {
            name: "Freeze",
            adjective: "frozen",
            description: "Cannot move",
            icon: "❄️",
            damage_per_turn: 0.0,
            skip_turn_chance: 1.0,
            duration: 2,
        },
        StatusEffect::Stun => StatusInfo {
            name: "Stun",
            adjective: "stunned",
            description: "May skip turn",
            icon: "⚡",
            damage_per_turn: 0.0,
            skip_turn_chance: 0.5,
            duration: 3,
        },
        StatusEffect::Poison => StatusInfo {
            name: "Poison",
            adjective: "poisoned",
            description: "Takes damage each turn",
            icon: "☠️",
            damage_per_turn: 0.0833,
            skip_turn_chance: 0.0,
            duration: 4,
        },
        StatusEffect::Sleep => StatusInfo {
            name: "Sleep",
            adjective: "asleep",
            description: "Cannot move",
            icon: "💤",
            damage_per_turn: 0.0,
            skip_turn_chance: 1.0,
            duration: 3,
        },
    }
}

/// HP lost to `effect` per turn; at least 1 for damaging statuses.
pub fn status_damage(effect: StatusEffect, max_hp: u32) -> u32 {
    let fraction = status_info(effect).damage_per_turn;
    if fraction <= 0.0 {
        return 0;
    }
    ((max_hp as f64 * fraction).floor() as u32).max(1)
}

/// A status currently held by a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatus {
    pub effect: StatusEffect,
    pub turns_remaining: u32,
}

impl ActiveStatus {
    /// Freshly applied, with the table's full duration.
    pub fn new(effect: StatusEffect) -> Self {
        Self {
            effect,
            turns_remaining: status_info(effect).duration,
        }
    }

    /// One turn-start tick. Returns `None` once the duration is used up.
    pub fn tick(self) -> Option<ActiveStatus> {
        let turns_remaining = self.turns_remaining.saturating_sub(1);
        (turns_remaining > 0).then_some(ActiveStatus {
            effect: self.effect,
            turns_remaining,
        })
    }

    pub fn info(&self) -> StatusInfo {
        status_info(self.effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(StatusEffect::Burn, 160, 10)]
    #[case(StatusEffect::Burn, 10, 1)]
    #[case(StatusEffect::Poison, 120, 9)]
    #[case(StatusEffect::Freeze, 120, 0)]
    #[case(StatusEffect::Sleep, 500, 0)]
    fn damage_per_turn(#[case] effect: StatusEffect, #[case] max_hp: u32, #[case] expected: u32) {
        assert_eq!(status_damage(effect, max_hp), expected);
    }

    #[rstest]
    #[case(StatusEffect::Burn)]
    #[case(StatusEffect::Freeze)]
    #[case(StatusEffect::Stun)]
    #[case(StatusEffect::Poison)]
    #[case(StatusEffect::Sleep)]
    fn expires_after_exactly_its_duration(#[case] effect: StatusEffect) {
        let duration = status_info(effect).duration;
        let mut status = Some(ActiveStatus::new(effect));
        for _ in 0..duration - 1 {
            status = status.and_then(ActiveStatus::tick);
            assert!(status.is_some());
        }
        assert_eq!(status.and_then(ActiveStatus::tick), None);
    }
}
