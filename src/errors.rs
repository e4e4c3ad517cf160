use schema::{CraftureType, MoveId, SpeciesId};
use thiserror::Error;

/// Main error type for the Crafture battle engine.
///
/// Caller misuse (acting out of turn, acting on a finished battle) is never an
/// error; those calls are ignored. Only data-integrity failures surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleEngineError {
    /// Error related to move data lookup or processing
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// Error related to species data lookup or processing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// The embedded or supplied catalog failed to load
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Error related to levelling or evolution
    #[error("Progression error: {0}")]
    Progression(#[from] ProgressionError),
    /// A battle snapshot could not be written or read
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// The demo configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),
    /// A type owns no moves at all
    #[error("Empty move pool for type {0}")]
    EmptyMovePool(CraftureType),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    #[error("Species not found: {0}")]
    SpeciesNotFound(SpeciesId),
    /// Every species is an evolution target, so nothing can be met in the wild
    #[error("No species can appear in the wild")]
    NoWildSpecies,
}

/// Structural problems found while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to parse {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },
    #[error("type {crafture_type} has {found} moves, expected {expected}")]
    WrongPoolSize {
        crafture_type: CraftureType,
        found: usize,
        expected: usize,
    },
    #[error("type {0} is listed by more than one move pool")]
    DuplicatePool(CraftureType),
    #[error("move {0} appears more than once")]
    DuplicateMove(MoveId),
    #[error("species {0} appears more than once")]
    DuplicateSpecies(SpeciesId),
    #[error("species {species} evolves into unknown species {target}")]
    UnknownEvolutionTarget { species: SpeciesId, target: SpeciesId },
    #[error("type {0} is both strong and weak against the same type")]
    ContradictoryMatchup(CraftureType),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// The requested target is not one of the currently eligible evolutions.
    #[error("{species} cannot evolve into {target} right now")]
    NotEligible { species: SpeciesId, target: SpeciesId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    #[error("snapshot serialization failed: {0}")]
    Serialization(String),
    #[error("snapshot is not a valid battle session: {0}")]
    Deserialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },
    #[error("invalid config: {0}")]
    Parse(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Results of operations that read the catalog (lookups, construction, start of battle).
pub type DataResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;
