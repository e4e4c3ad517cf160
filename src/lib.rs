//! Crafture Battle Engine
//!
//! Turn-based battles between two creatures: damage with type matchups and a
//! hunger penalty, timed status effects, fleeing, switching and healing, plus the
//! progression, capture and inventory rules a caller needs around a battle.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod care;
pub mod catalog;
pub mod config;
pub mod crafture;
pub mod encounter;
pub mod errors;
pub mod inventory;
pub mod items;
pub mod progression;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, CraftureType, EvolutionCondition, EvolutionPath, MoveData, MoveId, Rarity,
    SpeciesData, SpeciesId, StatusEffect, StatusInfliction, UtilityEffect,
};

// --- From this crate's modules (`src/`) ---

// Battle actions and state.
pub use battle::catch::{attempt_capture, capture_chance, throw_ball, CaptureOutcome, CatchError};
pub use battle::engine::{
    end_battle, flee, heal_in_battle, player_attack, start_battle, switch_combatant,
    trigger_opponent_turn, use_potion_in_battle, ActionOutcome, IgnoreReason,
};
pub use battle::rng::{BattleRng, SystemRng, TurnRng};
pub use battle::state::{
    BattleCombatant, BattleEvent, BattlePhase, BattleRewards, BattleSession, EventBus, Side,
};

// Creatures and their data.
pub use care::{ItemEffect, ItemUseError};
pub use catalog::Catalog;
pub use crafture::{Crafture, CraftureStats};
pub use encounter::{roll_wild_encounter, WildEncounter};
pub use inventory::Inventory;
pub use items::{Item, ItemKind};
pub use progression::{apply_battle_rewards, evolution_options, evolve, RewardCalculator};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, CatalogError, ConfigError, DataResult,
    MoveDataError, MoveDataResult, ProgressionError, SpeciesDataError, SpeciesDataResult,
};
