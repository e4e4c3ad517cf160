use crate::battle::state::{BattleCombatant, BattleEvent, BattlePhase, BattleSession, Side};
use crate::battle::status::ActiveStatus;
use schema::StatusEffect;
use tracing::trace;

/// Atomic commands representing final state changes.
///
/// Actions read the session, roll whatever they need, and describe the outcome as a
/// batch of commands; only [`execute_command_batch`] mutates the session.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    // Flow
    SetTurn(Side),
    SetPhase(BattlePhase),
    IncrementTurnNumber,

    // Combatant changes
    DealDamage {
        target: Side,
        amount: u32,
    },
    Heal {
        target: Side,
        amount: u32,
    },
    RaiseDefense {
        target: Side,
        amount: u32,
    },
    /// Applies a fresh status; refused when the target already has one.
    InflictStatus {
        target: Side,
        effect: StatusEffect,
    },
    /// Overwrites the status slot. Used for turn-start ticks and switching.
    SetStatus {
        target: Side,
        status: Option<ActiveStatus>,
    },
    ReplaceCombatant {
        target: Side,
        combatant: Box<BattleCombatant>,
    },

    EmitEvent(BattleEvent),
}

impl BattleCommand {
    fn execute(self, session: &mut BattleSession) {
        match self {
            BattleCommand::SetTurn(side) => session.turn = side,
            BattleCommand::SetPhase(phase) => session.phase = phase,
            BattleCommand::IncrementTurnNumber => session.turn_number += 1,
            BattleCommand::DealDamage { target, amount } => {
                session.combatant_mut(target).crafture.take_damage(amount);
            }
            BattleCommand::Heal { target, amount } => {
                session.combatant_mut(target).crafture.heal(amount);
            }
            BattleCommand::RaiseDefense { target, amount } => {
                session.combatant_mut(target).defense_bonus += amount;
            }
            BattleCommand::InflictStatus { target, effect } => {
                let combatant = session.combatant_mut(target);
                if combatant.status.is_none() {
                    combatant.status = Some(ActiveStatus::new(effect));
                }
            }
            BattleCommand::SetStatus { target, status } => {
                session.combatant_mut(target).status = status;
            }
            BattleCommand::ReplaceCombatant { target, combatant } => {
                *session.combatant_mut(target) = *combatant;
            }
            BattleCommand::EmitEvent(event) => session.push_event(event),
        }
    }
}

/// Applies `commands` in order.
pub fn execute_command_batch(commands: Vec<BattleCommand>, session: &mut BattleSession) {
    for command in commands {
        trace!(?command, "execute");
        command.execute(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::{create_test_session, TestCraftureBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn existing_status_is_never_overwritten() {
        let mut session = create_test_session(
            TestCraftureBuilder::new("leafling", 10).build(),
            TestCraftureBuilder::new("emberpup", 10).build(),
        );
        session.opponent.status = Some(ActiveStatus {
            effect: StatusEffect::Poison,
            turns_remaining: 2,
        });

        execute_command_batch(
            vec![BattleCommand::InflictStatus {
                target: Side::Opponent,
                effect: StatusEffect::Freeze,
            }],
            &mut session,
        );

        assert_eq!(
            session.opponent.status,
            Some(ActiveStatus {
                effect: StatusEffect::Poison,
                turns_remaining: 2
            })
        );
    }

    #[test]
    fn damage_and_healing_stay_within_bounds() {
        let mut session = create_test_session(
            TestCraftureBuilder::new("leafling", 10).with_hp(30).build(),
            TestCraftureBuilder::new("emberpup", 10).build(),
        );
        let max_hp = session.player.max_hp();

        execute_command_batch(
            vec![
                BattleCommand::Heal {
                    target: Side::Player,
                    amount: 10_000,
                },
                BattleCommand::DealDamage {
                    target: Side::Opponent,
                    amount: 10_000,
                },
                BattleCommand::SetTurn(Side::Opponent),
                BattleCommand::EmitEvent(BattleEvent::FleeFailed),
            ],
            &mut session,
        );

        assert_eq!(session.player.hp(), max_hp);
        assert_eq!(session.opponent.hp(), 0);
        assert_eq!(session.turn, Side::Opponent);
        assert_eq!(session.log_lines().last().map(String::as_str), Some("Couldn't escape!"));
    }
}
