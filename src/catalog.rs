//! Static species and move data.
//!
//! The builtin catalog is parsed once from the RON documents under `data/` and
//! shared immutably; tests and tools can build their own with [`Catalog::from_ron`]
//! or [`Catalog::from_parts`].

use crate::errors::{
    CatalogError, DataResult, MoveDataError, MoveDataResult, SpeciesDataError, SpeciesDataResult,
};
use schema::{CraftureType, MoveData, MoveId, SpeciesData, SpeciesId};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

const SPECIES_RON: &str = include_str!("../data/species.ron");
const MOVES_RON: &str = include_str!("../data/moves.ron");

/// Every type owns exactly this many moves, in learn order.
pub const MOVE_POOL_SIZE: usize = 4;

static BUILTIN: LazyLock<DataResult<Catalog>> =
    LazyLock::new(|| Catalog::from_ron(SPECIES_RON, MOVES_RON));

#[derive(Debug, Clone, Deserialize)]
pub struct MovePoolEntry {
    pub crafture_type: CraftureType,
    pub moves: Vec<MoveData>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<SpeciesData>,
    species_index: HashMap<SpeciesId, usize>,
    move_pools: HashMap<CraftureType, Vec<MoveData>>,
    move_index: HashMap<MoveId, (CraftureType, usize)>,
}

impl Catalog {
    /// The catalog compiled into the crate.
    pub fn builtin() -> DataResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    pub fn from_ron(species_src: &str, moves_src: &str) -> DataResult<Catalog> {
        let species: Vec<SpeciesData> =
            ron::from_str(species_src).map_err(|e| CatalogError::Parse {
                source_name: "species",
                message: e.to_string(),
            })?;
        let pools: Vec<MovePoolEntry> =
            ron::from_str(moves_src).map_err(|e| CatalogError::Parse {
                source_name: "moves",
                message: e.to_string(),
            })?;

        Ok(Self::from_parts(species, pools)?)
    }

    /// Builds and validates a catalog from already-deserialised records.
    ///
    /// Types without a pool are accepted here; looking up their pool later fails
    /// with [`MoveDataError::EmptyMovePool`].
    pub fn from_parts(
        species: Vec<SpeciesData>,
        pools: Vec<MovePoolEntry>,
    ) -> Result<Catalog, CatalogError> {
        for crafture_type in CraftureType::all() {
            let overlaps = crafture_type
                .strong_against()
                .iter()
                .any(|t| crafture_type.weak_against().contains(t));
            if overlaps {
                return Err(CatalogError::ContradictoryMatchup(crafture_type));
            }
        }

        let mut move_pools = HashMap::new();
        let mut move_index = HashMap::new();
        for entry in pools {
            if entry.moves.len() != MOVE_POOL_SIZE {
                return Err(CatalogError::WrongPoolSize {
                    crafture_type: entry.crafture_type,
                    found: entry.moves.len(),
                    expected: MOVE_POOL_SIZE,
                });
            }
            for (slot, move_data) in entry.moves.iter().enumerate() {
                if move_index
                    .insert(move_data.id.clone(), (entry.crafture_type, slot))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateMove(move_data.id.clone()));
                }
            }
            if move_pools.insert(entry.crafture_type, entry.moves).is_some() {
                return Err(CatalogError::DuplicatePool(entry.crafture_type));
            }
        }

        let mut species_index = HashMap::new();
        for (position, data) in species.iter().enumerate() {
            if species_index.insert(data.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSpecies(data.id.clone()));
            }
        }
        for data in &species {
            if let Some(target) = data
                .evolution_targets()
                .find(|target| !species_index.contains_key(*target))
            {
                return Err(CatalogError::UnknownEvolutionTarget {
                    species: data.id.clone(),
                    target: target.clone(),
                });
            }
        }

        debug!(
            species = species.len(),
            move_pools = move_pools.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            species,
            species_index,
            move_pools,
            move_index,
        })
    }

    pub fn species(&self, id: &str) -> SpeciesDataResult<&SpeciesData> {
        self.species_index
            .get(id)
            .map(|&position| &self.species[position])
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(SpeciesId::new(id)))
    }

    /// All species in catalog order.
    pub fn all_species(&self) -> &[SpeciesData] {
        &self.species
    }

    /// The ordered move pool of a type.
    pub fn move_pool(&self, crafture_type: CraftureType) -> MoveDataResult<&[MoveData]> {
        match self.move_pools.get(&crafture_type) {
            Some(pool) if !pool.is_empty() => Ok(pool),
            _ => Err(MoveDataError::EmptyMovePool(crafture_type)),
        }
    }

    pub fn move_data(&self, id: &str) -> MoveDataResult<&MoveData> {
        self.move_index
            .get(id)
            .and_then(|(crafture_type, slot)| self.move_pools.get(crafture_type)?.get(*slot))
            .ok_or_else(|| MoveDataError::MoveNotFound(MoveId::new(id)))
    }

    /// Species that can appear in the wild: every species that is not the
    /// evolution target of another species, in catalog order.
    pub fn wild_species(&self) -> Vec<&SpeciesData> {
        self.species
            .iter()
            .filter(|candidate| {
                !self
                    .species
                    .iter()
                    .any(|other| other.evolution_targets().any(|t| *t == candidate.id))
            })
            .collect()
    }
}
