//! Battle actions.
//!
//! Every action takes the session by `&mut` and returns an [`ActionOutcome`].
//! Misuse (acting out of turn, acting on a finished or locked session, naming a
//! move slot that does not exist) is ignored and leaves the session untouched.
//! Only missing catalog data is reported as an error.

use crate::battle::calculators::{calculate_damage, damage_input, move_hits, roll_random_factor};
use crate::battle::commands::{execute_command_batch, BattleCommand};
use crate::battle::rng::BattleRng;
use crate::battle::state::{
    BattleCombatant, BattleEvent, BattlePhase, BattleRewards, BattleSession, Side,
};
use crate::battle::status::status_damage;
use crate::catalog::Catalog;
use crate::crafture::Crafture;
use crate::errors::{BattleResult, DataResult};
use crate::inventory::Inventory;
use crate::items::Item;
use crate::progression::RewardCalculator;
use schema::{MoveData, UtilityEffect};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    BattleOver,
    TurnLocked,
    NotYourTurn,
    NoSuchMove(usize),
    /// Switching is only possible after the active creature fainted.
    NoReplacementNeeded,
    ReplacementFainted,
    NotAPotion,
    ItemNotOwned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Resolved,
    Ignored(IgnoreReason),
}

impl ActionOutcome {
    pub fn is_resolved(self) -> bool {
        self == ActionOutcome::Resolved
    }
}

fn ignored(reason: IgnoreReason) -> ActionOutcome {
    debug!(?reason, "battle action ignored");
    ActionOutcome::Ignored(reason)
}

fn check_can_act(session: &BattleSession, side: Side) -> Option<IgnoreReason> {
    if session.is_over() {
        Some(IgnoreReason::BattleOver)
    } else if session.is_turn_locked() {
        Some(IgnoreReason::TurnLocked)
    } else if session.turn != side {
        Some(IgnoreReason::NotYourTurn)
    } else {
        None
    }
}

/// Creates a session against a wild `opponent_species` of `opponent_level`.
///
/// The faster creature moves first; ties go to the player.
pub fn start_battle(
    catalog: &Catalog,
    player: Crafture,
    opponent_species: &str,
    opponent_level: u32,
) -> DataResult<BattleSession> {
    let opponent_data = catalog.species(opponent_species)?;
    let player_data = catalog.species(player.species_id.as_str())?;
    let wild = Crafture::wild(opponent_data, opponent_level, catalog)?;
    let player_moves = player.known_moves(catalog)?;
    let opponent_moves = wild.known_moves(catalog)?;

    let first = if player.speed() >= wild.speed() {
        Side::Player
    } else {
        Side::Opponent
    };

    let mut commands = vec![
        BattleCommand::EmitEvent(BattleEvent::WildAppeared {
            species_name: opponent_data.name.clone(),
        }),
        BattleCommand::EmitEvent(BattleEvent::TurnOrder {
            first,
            opponent_species: opponent_data.name.clone(),
        }),
    ];
    if player.is_hungry() {
        commands.push(BattleCommand::EmitEvent(BattleEvent::HungerWarning {
            name: player.nickname.clone(),
        }));
    }

    info!(
        player = %player.species_id,
        player_level = player.level,
        opponent = %opponent_data.id,
        opponent_level = wild.level,
        ?first,
        "battle started"
    );

    let player = BattleCombatant::new(
        player,
        player_data.crafture_type,
        player_data.name.clone(),
        player_moves,
    );
    let opponent = BattleCombatant::new(
        wild,
        opponent_data.crafture_type,
        opponent_data.name.clone(),
        opponent_moves,
    );
    let mut session = BattleSession::new(player, opponent, first);
    execute_command_batch(commands, &mut session);
    Ok(session)
}

/// The player uses the move in `move_index` of their offered moves.
pub fn player_attack(
    session: &mut BattleSession,
    move_index: usize,
    rng: &mut dyn BattleRng,
) -> ActionOutcome {
    if let Some(reason) = check_can_act(session, Side::Player) {
        return ignored(reason);
    }
    let Some(move_data) = session.player.moves.get(move_index).cloned() else {
        return ignored(IgnoreReason::NoSuchMove(move_index));
    };

    let skipped = roll_status_skip(session, Side::Player, rng);
    if begin_turn(session, Side::Player, skipped) == TurnStart::Act {
        resolve_move(session, Side::Player, &move_data, rng);
    }
    ActionOutcome::Resolved
}

/// The opponent acts with a uniformly chosen move. Safe to call at any time; it
/// is ignored unless it is actually the opponent's turn.
pub fn trigger_opponent_turn(session: &mut BattleSession, rng: &mut dyn BattleRng) -> ActionOutcome {
    if let Some(reason) = check_can_act(session, Side::Opponent) {
        return ignored(reason);
    }
    if session.opponent.moves.is_empty() {
        return ignored(IgnoreReason::NoSuchMove(0));
    }

    let skipped = roll_status_skip(session, Side::Opponent, rng);
    if begin_turn(session, Side::Opponent, skipped) == TurnStart::Act {
        let moves = &session.opponent.moves;
        let pick = (rng.next_uniform("opponent move") * moves.len() as f64) as usize;
        let move_data = moves[pick.min(moves.len() - 1)].clone();
        resolve_move(session, Side::Opponent, &move_data, rng);
    }
    ActionOutcome::Resolved
}

/// Attempts to run. Succeeds when the draw is below `0.5 + (playerSpeed - opponentSpeed) / 100`.
pub fn flee(session: &mut BattleSession, rng: &mut dyn BattleRng) -> ActionOutcome {
    if let Some(reason) = check_can_act(session, Side::Player) {
        return ignored(reason);
    }
    if begin_turn(session, Side::Player, false) == TurnStart::Ended {
        return ActionOutcome::Resolved;
    }

    let chance = flee_chance(session);
    let commands = if rng.next_uniform("flee") < chance {
        vec![
            BattleCommand::EmitEvent(BattleEvent::FleeSucceeded),
            BattleCommand::SetPhase(BattlePhase::Fled),
        ]
    } else {
        vec![
            BattleCommand::EmitEvent(BattleEvent::FleeFailed),
            BattleCommand::SetTurn(Side::Opponent),
        ]
    };
    execute_command_batch(commands, session);
    ActionOutcome::Resolved
}

/// Not clamped: a large speed gap simply saturates the draw.
pub fn flee_chance(session: &BattleSession) -> f64 {
    let player_speed = session.player.crafture.speed() as f64;
    let opponent_speed = session.opponent.crafture.speed() as f64;
    0.5 + (player_speed - opponent_speed) / 100.0
}

/// Sends in `replacement` after the active creature fainted. The battle resumes
/// with the player to move.
pub fn switch_combatant(
    session: &mut BattleSession,
    catalog: &Catalog,
    replacement: Crafture,
) -> BattleResult<ActionOutcome> {
    if session.is_turn_locked() {
        return Ok(ignored(IgnoreReason::TurnLocked));
    }
    if session.phase != BattlePhase::Lost || !session.player.crafture.is_fainted() {
        return Ok(ignored(IgnoreReason::NoReplacementNeeded));
    }
    if replacement.is_fainted() {
        return Ok(ignored(IgnoreReason::ReplacementFainted));
    }

    let species = catalog.species(replacement.species_id.as_str())?;
    let moves = replacement.known_moves(catalog)?;
    let name = replacement.nickname.clone();
    let combatant = BattleCombatant::new(
        replacement,
        species.crafture_type,
        species.name.clone(),
        moves,
    );

    execute_command_batch(
        vec![
            BattleCommand::ReplaceCombatant {
                target: Side::Player,
                combatant: Box::new(combatant),
            },
            BattleCommand::SetPhase(BattlePhase::InProgress),
            BattleCommand::SetTurn(Side::Player),
            BattleCommand::EmitEvent(BattleEvent::CombatantSwitched { name }),
        ],
        session,
    );
    Ok(ActionOutcome::Resolved)
}

/// Heals the player's creature by `amount` (capped at max HP) and passes the turn.
pub fn heal_in_battle(session: &mut BattleSession, amount: u32) -> ActionOutcome {
    match heal_turn(session, amount) {
        Ok(_) => ActionOutcome::Resolved,
        Err(reason) => ignored(reason),
    }
}

/// Uses a potion from `inventory`. The potion is only consumed when its heal is
/// actually applied; a status knockout at the start of the turn keeps it.
pub fn use_potion_in_battle(
    session: &mut BattleSession,
    inventory: &mut Inventory,
    item: Item,
) -> ActionOutcome {
    let Some(amount) = item.heal_amount() else {
        return ignored(IgnoreReason::NotAPotion);
    };
    if !inventory.has(item, 1) {
        return ignored(IgnoreReason::ItemNotOwned);
    }

    match heal_turn(session, amount) {
        Ok(true) => {
            inventory.remove_item(item, 1);
            ActionOutcome::Resolved
        }
        Ok(false) => {
            debug!(?item, "status ended the battle before the potion was used");
            ActionOutcome::Resolved
        }
        Err(reason) => ignored(reason),
    }
}

/// Takes the player's turn as a heal. `Ok(false)` when status damage ended the
/// battle before the heal landed.
fn heal_turn(session: &mut BattleSession, amount: u32) -> Result<bool, IgnoreReason> {
    if let Some(reason) = check_can_act(session, Side::Player) {
        return Err(reason);
    }
    if begin_turn(session, Side::Player, false) == TurnStart::Ended {
        return Ok(false);
    }

    let restored = amount.min(session.player.max_hp() - session.player.hp());
    execute_command_batch(
        vec![
            BattleCommand::Heal {
                target: Side::Player,
                amount,
            },
            BattleCommand::EmitEvent(BattleEvent::ItemHealed {
                target: session.player.name().to_string(),
                amount: restored,
            }),
            BattleCommand::SetTurn(Side::Opponent),
        ],
        session,
    );
    Ok(true)
}

/// Consumes a session and reports what the caller should apply to the player's
/// creature. Hunger is spent win or lose.
pub fn end_battle(session: BattleSession) -> BattleRewards {
    let won = session.phase == BattlePhase::Won;
    let exp_gained = if won {
        RewardCalculator.battle_experience(session.opponent.crafture.level, session.player.crafture.level)
    } else {
        0
    };
    let rewards = BattleRewards {
        won,
        exp_gained,
        hunger_lost: RewardCalculator.hunger_cost(session.opponent.crafture.level),
        player_hp: session.player.hp(),
    };
    info!(phase = ?session.phase, ?rewards, "battle ended");
    rewards
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnStart {
    Act,
    Skipped,
    Ended,
}

/// Whether the acting side's status stops it from attacking this turn.
fn roll_status_skip(session: &BattleSession, side: Side, rng: &mut dyn BattleRng) -> bool {
    let Some(status) = session.combatant(side).status else {
        return false;
    };
    let chance = status.info().skip_turn_chance;
    if chance <= 0.0 {
        false
    } else if chance >= 1.0 {
        true
    } else {
        rng.next_uniform("status skip") < chance
    }
}

/// Turn-start processing for `side`: skip notice, damage over time, duration
/// tick. Ends the battle when the damage knocks the holder out.
fn begin_turn(session: &mut BattleSession, side: Side, skipped: bool) -> TurnStart {
    let actor = session.combatant(side);
    let mut commands = vec![
        BattleCommand::IncrementTurnNumber,
        BattleCommand::EmitEvent(BattleEvent::TurnStarted {
            turn_number: session.turn_number + 1,
            side,
        }),
    ];

    let mut start = TurnStart::Act;
    if let Some(status) = actor.status {
        if skipped {
            commands.push(BattleCommand::EmitEvent(BattleEvent::StatusPreventedMove {
                target: actor.name().to_string(),
                status: status.effect,
            }));
            start = TurnStart::Skipped;
        }

        let damage = status_damage(status.effect, actor.max_hp()).min(actor.hp());
        if damage > 0 {
            commands.push(BattleCommand::DealDamage {
                target: side,
                amount: damage,
            });
            commands.push(BattleCommand::EmitEvent(BattleEvent::StatusDamage {
                target: actor.name().to_string(),
                status: status.effect,
                damage,
                remaining_hp: actor.hp() - damage,
            }));
        }

        let next = status.tick();
        commands.push(BattleCommand::SetStatus {
            target: side,
            status: next,
        });
        if next.is_none() {
            commands.push(BattleCommand::EmitEvent(BattleEvent::StatusWoreOff {
                target: actor.name().to_string(),
                status: status.effect,
            }));
        }

        if damage > 0 && damage == actor.hp() {
            commands.extend(faint_commands(session, side));
            start = TurnStart::Ended;
        } else if skipped {
            commands.push(BattleCommand::SetTurn(side.other()));
        }
    }

    execute_command_batch(commands, session);
    start
}

/// Accuracy, then either the utility effect or damage plus a possible status.
fn resolve_move(
    session: &mut BattleSession,
    side: Side,
    move_data: &MoveData,
    rng: &mut dyn BattleRng,
) {
    let defender_side = side.other();
    let attacker = session.combatant(side);
    let defender = session.combatant(defender_side);
    let mut commands = Vec::new();

    if !move_hits(move_data, rng) {
        commands.push(BattleCommand::EmitEvent(BattleEvent::MoveMissed {
            user: attacker.name().to_string(),
            move_name: move_data.name.clone(),
        }));
        commands.push(BattleCommand::SetTurn(defender_side));
        execute_command_batch(commands, session);
        return;
    }

    commands.push(BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        user: attacker.name().to_string(),
        move_name: move_data.name.clone(),
        icon: move_data.icon.clone(),
    }));

    if move_data.is_utility() {
        commands.extend(utility_commands(attacker, side, move_data));
        commands.push(BattleCommand::SetTurn(defender_side));
        execute_command_batch(commands, session);
        return;
    }

    let random_factor = roll_random_factor(rng);
    let result = calculate_damage(
        &damage_input(attacker, side, defender, move_data),
        random_factor,
    );
    let remaining_hp = defender.hp().saturating_sub(result.damage);
    commands.push(BattleCommand::DealDamage {
        target: defender_side,
        amount: result.damage,
    });
    commands.push(BattleCommand::EmitEvent(BattleEvent::DamageDealt {
        target: defender.name().to_string(),
        damage: result.damage,
        remaining_hp,
    }));
    commands.push(BattleCommand::EmitEvent(BattleEvent::AttackTypeEffectiveness {
        multiplier: result.type_multiplier,
    }));

    if let Some(infliction) = move_data.status {
        if defender.status.is_none() && rng.next_uniform("status chance") < infliction.chance {
            commands.push(BattleCommand::InflictStatus {
                target: defender_side,
                effect: infliction.effect,
            });
            commands.push(BattleCommand::EmitEvent(BattleEvent::StatusApplied {
                target: defender.name().to_string(),
                status: infliction.effect,
            }));
        }
    }

    if remaining_hp == 0 {
        commands.extend(faint_commands(session, defender_side));
    } else {
        commands.push(BattleCommand::SetTurn(defender_side));
    }
    execute_command_batch(commands, session);
}

fn utility_commands(user: &BattleCombatant, side: Side, move_data: &MoveData) -> Vec<BattleCommand> {
    match move_data.utility {
        Some(UtilityEffect::Heal { amount }) => vec![
            BattleCommand::Heal {
                target: side,
                amount,
            },
            BattleCommand::EmitEvent(BattleEvent::MoveHealed {
                target: user.name().to_string(),
                amount: amount.min(user.max_hp() - user.hp()),
            }),
        ],
        Some(UtilityEffect::RaiseDefense { amount }) => vec![
            BattleCommand::RaiseDefense {
                target: side,
                amount,
            },
            BattleCommand::EmitEvent(BattleEvent::DefenseRaised {
                target: user.name().to_string(),
                amount,
            }),
        ],
        None => vec![BattleCommand::EmitEvent(BattleEvent::MoveHadNoEffect {
            user: user.name().to_string(),
            move_name: move_data.name.clone(),
        })],
    }
}

/// Faint narration and the terminal phase for `fainted`'s opponent.
fn faint_commands(session: &BattleSession, fainted: Side) -> Vec<BattleCommand> {
    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::Fainted {
        side: fainted,
        name: session.combatant(fainted).name().to_string(),
    })];

    let winner = fainted.other();
    if winner == Side::Player {
        commands.push(BattleCommand::EmitEvent(BattleEvent::Victory {
            exp_gained: RewardCalculator.battle_experience(
                session.opponent.crafture.level,
                session.player.crafture.level,
            ),
        }));
    }
    commands.push(BattleCommand::SetPhase(BattlePhase::victory_for(winner)));
    commands
}
