use crate::battle::catch::{attempt_capture, capture_chance, validate_throw, CatchError};
use crate::battle::rng::BattleRng;
use crate::inventory::Inventory;
use crate::items::Item;
use schema::SpeciesData;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOutcome {
    pub ball: Item,
    pub chance: f64,
    pub caught: bool,
}

/// Spends one `ball` from the inventory and rolls a capture of `species`.
///
/// The ball is gone whether or not the capture works. Nothing is spent when the
/// throw is rejected.
pub fn throw_ball(
    inventory: &mut Inventory,
    ball: Item,
    species: &SpeciesData,
    weakened: bool,
    rng: &mut dyn BattleRng,
) -> Result<CaptureOutcome, CatchError> {
    let bonus = validate_throw(inventory, ball)?;
    if !inventory.remove_item(ball, 1) {
        return Err(CatchError::OutOfBalls(ball));
    }

    let chance = capture_chance(species.rarity, bonus, weakened);
    let caught = attempt_capture(species.rarity, bonus, weakened, rng);
    info!(species = %species.id, %ball, chance, caught, "capture attempt");
    Ok(CaptureOutcome {
        ball,
        chance,
        caught,
    })
}
