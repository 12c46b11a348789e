use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Chips credited to one winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub amount: u32,
}

/// Splits `pot` evenly between `winners`, given in seating order.
///
/// Integer division; the leftover `pot % winners.len()` chips go one each
/// to the first winners in the order given, so the payouts always sum to
/// `pot`.
///
/// # Examples
///
/// ```
/// use pokersim_engine::pot::split_pot;
///
/// let p = split_pot(101, &[3, 1]);
/// assert_eq!(p[0].amount, 51);
/// assert_eq!(p[1].amount, 50);
/// ```
pub fn split_pot(pot: u32, winners: &[PlayerId]) -> Vec<Payout> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = pot / n;
    let remainder = (pot % n) as usize;
    winners
        .iter()
        .enumerate()
        .map(|(i, &player)| Payout {
            player,
            amount: share + u32::from(i < remainder),
        })
        .collect()
}
