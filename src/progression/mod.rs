pub mod evolution;
pub mod experience;
pub mod moves;
pub mod rewards;

pub use evolution::{evolution_options, evolve, EvolutionOption, EvolutionReport};
pub use experience::LevelUpReport;
pub use moves::{
    ensure_learned_move_ids, known_moves, learn_level_for_slot, learned_move_ids_for_level,
    MAX_OFFERED_MOVES, MOVE_LEARN_LEVELS,
};
pub use rewards::{apply_battle_rewards, RewardCalculator};
