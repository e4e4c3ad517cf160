use crate::inventory::Inventory;
use crate::items::Item;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatchError {
    #[error("{0} is not a ball")]
    NotABall(Item),
    #[error("no {0} left")]
    OutOfBalls(Item),
}

/// Checks that `ball` can be thrown and returns its catch bonus.
pub fn validate_throw(inventory: &Inventory, ball: Item) -> Result<f64, CatchError> {
    let bonus = ball.catch_bonus().ok_or(CatchError::NotABall(ball))?;
    if !inventory.has(ball, 1) {
        return Err(CatchError::OutOfBalls(ball));
    }
    Ok(bonus)
}
