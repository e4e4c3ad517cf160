// Crafture Schema - Shared type definitions
// This crate contains the static enums and data records that are shared between
// the crafture-battle engine and the RON data files it embeds.

pub use battle_data::*;
pub use crafture_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod crafture_types;
pub mod species_data;
