use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Player, PlayerId, PlayerStatus};

/// One seat as seen in a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub name: String,
    pub stack: u32,
    pub cards: Vec<Card>,
    pub status: PlayerStatus,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            player: p.id(),
            name: p.name().to_string(),
            stack: p.stack(),
            cards: p.hole_cards().to_vec(),
            status: p.status(),
        }
    }
}

/// Immutable snapshot of a hand in progress. Passed to agents and stored
/// at the start of every round in the history.
///
/// `players_state` follows the seating order at the time of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub round: usize,
    pub big_blind: u32,
    pub small_blind: u32,
    pub pot: u32,
    pub community_cards: Vec<Card>,
    pub players_state: Vec<PlayerSnapshot>,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players_state.iter().find(|p| p.player == id)
    }
}
