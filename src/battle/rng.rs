use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Source of uniform draws in `[0, 1)` for every roll the engine makes.
///
/// `reason` names the roll ("accuracy", "flee", ...) so scripted sources can
/// report what they were asked for.
pub trait BattleRng {
    fn next_uniform(&mut self, reason: &str) -> f64;
}

/// Scripted draws for tests. Panics when the script runs out.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl BattleRng for TurnRng {
    fn next_uniform(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];
        trace!(outcome, reason, "rng consumed");

        self.index += 1;
        outcome
    }
}

/// Production source backed by `rand`.
#[derive(Debug, Clone)]
pub struct SystemRng {
    rng: StdRng,
}

impl SystemRng {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible sequence for demos and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRng for SystemRng {
    fn next_uniform(&mut self, reason: &str) -> f64 {
        let outcome: f64 = self.rng.random();
        trace!(outcome, reason, "rng consumed");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_come_back_in_order() {
        let mut rng = TurnRng::new_for_test(vec![0.1, 0.9]);
        assert_eq!(rng.next_uniform("first"), 0.1);
        assert_eq!(rng.remaining(), 1);
        assert_eq!(rng.next_uniform("second"), 0.9);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "flee")]
    fn exhausted_script_names_the_roll() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.next_uniform("flee");
    }

    #[test]
    fn seeded_draws_are_reproducible_and_in_range() {
        let mut a = SystemRng::seeded(7);
        let mut b = SystemRng::seeded(7);
        for _ in 0..100 {
            let x = a.next_uniform("test");
            assert_eq!(x, b.next_uniform("test"));
            assert!((0.0..1.0).contains(&x));
        }
    }
}
