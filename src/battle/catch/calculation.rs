use crate::battle::rng::BattleRng;
use schema::Rarity;

/// Multiplier applied when the target was beaten in battle first.
pub const WEAKENED_BONUS: f64 = 1.5;

pub fn base_capture_chance(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => 0.6,
        Rarity::Uncommon => 0.4,
        Rarity::Rare => 0.25,
        Rarity::Legendary => 0.1,
    }
}

/// Final capture chance, clamped to at most 1.
pub fn capture_chance(rarity: Rarity, ball_bonus: f64, weakened: bool) -> f64 {
    let weakened_bonus = if weakened { WEAKENED_BONUS } else { 1.0 };
    (base_capture_chance(rarity) * ball_bonus * weakened_bonus).min(1.0)
}

/// Rolls one capture attempt. The ball must already have been spent.
pub fn attempt_capture(
    rarity: Rarity,
    ball_bonus: f64,
    weakened: bool,
    rng: &mut dyn BattleRng,
) -> bool {
    rng.next_uniform("capture roll") < capture_chance(rarity, ball_bonus, weakened)
}

/// Short label for showing a capture chance.
pub fn capture_chance_description(chance: f64) -> &'static str {
    match chance {
        c if c >= 1.0 => "Guaranteed",
        c if c >= 0.75 => "Excellent",
        c if c >= 0.5 => "Good",
        c if c >= 0.3 => "Fair",
        c if c >= 0.15 => "Poor",
        _ => "Very Poor",
    }
}
