pub mod calculators;
pub mod catch;
pub mod commands;
pub mod engine;
pub mod rng;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;
