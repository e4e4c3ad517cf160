use crate::battle::status::{status_info, ActiveStatus};
use crate::crafture::Crafture;
use crate::errors::{BattleResult, BattleStateError};
use schema::{CraftureType, MoveData, StatusEffect};
use serde::{Deserialize, Serialize};

/// One of the two sides of an encounter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    InProgress,
    Won,
    Lost,
    Fled,
}

impl BattlePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, BattlePhase::InProgress)
    }

    /// `None` while in progress and after a successful flee.
    pub fn winner(self) -> Option<Side> {
        match self {
            BattlePhase::Won => Some(Side::Player),
            BattlePhase::Lost => Some(Side::Opponent),
            BattlePhase::InProgress | BattlePhase::Fled => None,
        }
    }

    /// The terminal phase in which `side` has won.
    pub fn victory_for(side: Side) -> BattlePhase {
        match side {
            Side::Player => BattlePhase::Won,
            Side::Opponent => BattlePhase::Lost,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Encounter
    WildAppeared {
        species_name: String,
    },
    TurnOrder {
        first: Side,
        opponent_species: String,
    },
    HungerWarning {
        name: String,
    },
    TurnStarted {
        turn_number: u32,
        side: Side,
    },

    // Moves
    MoveUsed {
        user: String,
        move_name: String,
        icon: String,
    },
    MoveMissed {
        user: String,
        move_name: String,
    },
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    AttackTypeEffectiveness {
        multiplier: f64,
    },
    MoveHealed {
        target: String,
        amount: u32,
    },
    DefenseRaised {
        target: String,
        amount: u32,
    },
    MoveHadNoEffect {
        user: String,
        move_name: String,
    },

    // Status effects
    StatusApplied {
        target: String,
        status: StatusEffect,
    },
    StatusPreventedMove {
        target: String,
        status: StatusEffect,
    },
    StatusDamage {
        target: String,
        status: StatusEffect,
        damage: u32,
        remaining_hp: u32,
    },
    StatusWoreOff {
        target: String,
        status: StatusEffect,
    },

    // Player actions
    ItemHealed {
        target: String,
        amount: u32,
    },
    FleeSucceeded,
    FleeFailed,
    CombatantSwitched {
        name: String,
    },

    // Battle end
    Fainted {
        side: Side,
        name: String,
    },
    Victory {
        exp_gained: u32,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::WildAppeared { species_name } => {
                Some(format!("A wild {} appeared!", species_name))
            }
            BattleEvent::TurnOrder {
                first,
                opponent_species,
            } => match first {
                Side::Player => Some("You attack first!".to_string()),
                Side::Opponent => Some(format!("{} is faster!", opponent_species)),
            },
            BattleEvent::HungerWarning { name } => Some(format!(
                "Warning: {} is hungry! Stats are weakened!",
                name
            )),
            BattleEvent::TurnStarted { .. } => None,

            BattleEvent::MoveUsed {
                user,
                move_name,
                icon,
            } => Some(format!("{} used {}! {}", user, move_name, icon)),
            BattleEvent::MoveMissed { user, move_name } => {
                Some(format!("{} used {} but missed!", user, move_name))
            }
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("Dealt {} damage to {}!", damage, target))
            }
            BattleEvent::AttackTypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None,
            },
            BattleEvent::MoveHealed { target, amount } => {
                Some(format!("{} healed {} HP! 💚", target, amount))
            }
            BattleEvent::DefenseRaised { target, amount } => {
                Some(format!("{}'s defense rose by {}! 🛡️", target, amount))
            }
            BattleEvent::MoveHadNoEffect { user, move_name } => {
                Some(format!("{} used {}, but nothing happened.", user, move_name))
            }

            BattleEvent::StatusApplied { target, status } => {
                let info = status_info(*status);
                Some(format!("{} is now {}! {}", target, info.adjective, info.icon))
            }
            BattleEvent::StatusPreventedMove { target, status } => {
                let info = status_info(*status);
                Some(format!(
                    "{} is {} and can't move! {}",
                    target, info.adjective, info.icon
                ))
            }
            BattleEvent::StatusDamage {
                target,
                status,
                damage,
                ..
            } => {
                let info = status_info(*status);
                Some(format!(
                    "{} took {} damage from {}! {}",
                    target, damage, info.name, info.icon
                ))
            }
            BattleEvent::StatusWoreOff { target, status } => Some(format!(
                "{} is no longer {}.",
                target,
                status_info(*status).adjective
            )),

            BattleEvent::ItemHealed { target, amount } => {
                Some(format!("{} restored {} HP!", target, amount))
            }
            BattleEvent::FleeSucceeded => Some("Got away safely!".to_string()),
            BattleEvent::FleeFailed => Some("Couldn't escape!".to_string()),
            BattleEvent::CombatantSwitched { name } => Some(format!("Go, {}!", name)),

            BattleEvent::Fainted { name, .. } => Some(format!("{} fainted!", name)),
            BattleEvent::Victory { exp_gained } => {
                Some(format!("You won! Gained {} XP!", exp_gained))
            }
        }
    }
}

/// Ordered narration of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Formatted text of every non-silent event, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Debug format of all events, one per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// One side's creature together with its battle-only state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleCombatant {
    pub crafture: Crafture,
    pub crafture_type: CraftureType,
    pub species_name: String,
    pub status: Option<ActiveStatus>,
    /// Offered moves, in pool order.
    pub moves: Vec<MoveData>,
    /// Defense gained from shield moves; lasts for the encounter.
    pub defense_bonus: u32,
}

impl BattleCombatant {
    pub fn new(
        crafture: Crafture,
        crafture_type: CraftureType,
        species_name: String,
        moves: Vec<MoveData>,
    ) -> Self {
        Self {
            crafture,
            crafture_type,
            species_name,
            status: None,
            moves,
            defense_bonus: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.crafture.nickname
    }

    pub fn hp(&self) -> u32 {
        self.crafture.hp()
    }

    pub fn max_hp(&self) -> u32 {
        self.crafture.max_hp()
    }

    pub fn effective_defense(&self) -> u32 {
        self.crafture.defense() + self.defense_bonus
    }

    pub fn status_effect(&self) -> Option<StatusEffect> {
        self.status.map(|s| s.effect)
    }
}

/// What the caller gets back from a finished session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleRewards {
    pub won: bool,
    pub exp_gained: u32,
    pub hunger_lost: u32,
    /// HP the player's creature ended the battle with.
    pub player_hp: u32,
}

/// The authoritative state of one encounter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleSession {
    pub player: BattleCombatant,
    pub opponent: BattleCombatant,
    pub turn: Side,
    pub phase: BattlePhase,
    pub turn_number: u32,
    turn_locked: bool,
    log: EventBus,
}

impl BattleSession {
    pub(crate) fn new(player: BattleCombatant, opponent: BattleCombatant, first: Side) -> Self {
        Self {
            player,
            opponent,
            turn: first,
            phase: BattlePhase::InProgress,
            turn_number: 0,
            turn_locked: false,
            log: EventBus::new(),
        }
    }

    pub fn combatant(&self, side: Side) -> &BattleCombatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut BattleCombatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn winner(&self) -> Option<Side> {
        self.phase.winner()
    }

    pub fn is_turn_locked(&self) -> bool {
        self.turn_locked
    }

    /// Holds the session while the caller animates; every action is ignored
    /// until the lock is released.
    pub fn set_turn_lock(&mut self, locked: bool) {
        self.turn_locked = locked;
    }

    pub fn events(&self) -> &[BattleEvent] {
        self.log.events()
    }

    pub fn log(&self) -> &EventBus {
        &self.log
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log.lines()
    }

    pub(crate) fn push_event(&mut self, event: BattleEvent) {
        self.log.push(event);
    }

    /// Snapshot for a caller that wants to resume after an interruption.
    pub fn to_json(&self) -> BattleResult<String> {
        serde_json::to_string(self)
            .map_err(|e| BattleStateError::Serialization(e.to_string()).into())
    }

    pub fn from_json(json: &str) -> BattleResult<BattleSession> {
        serde_json::from_str(json)
            .map_err(|e| BattleStateError::Deserialization(e.to_string()).into())
    }
}
