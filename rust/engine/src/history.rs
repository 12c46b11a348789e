use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::player::{PlayerAction, PlayerId};

/// One decision as it was applied, after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub player: PlayerId,
    pub action: PlayerAction,
    pub amount: u32,
}

/// A betting round: the state at round start plus every decision taken in
/// seating order. Serialises flat, so `round`, `pot`, `community_cards`,
/// `players_state` and `events` sit side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub state: GameState,
    pub events: Vec<Event>,
}

impl HistoryEntry {
    pub fn round(&self) -> usize {
        self.state.round
    }
}

/// Append-only record of the rounds of one hand.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    closed: bool,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a round. Ignored once the log is closed.
    pub fn add(&mut self, round: usize, mut state: GameState, events: Vec<Event>) {
        if self.closed {
            tracing::warn!(round, "history closed; round not recorded");
            return;
        }
        state.round = round;
        self.entries.push(HistoryEntry { state, events });
    }

    pub fn get(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.closed = false;
    }

    /// Events of every round in order, paired with their round number.
    pub fn events(&self) -> impl Iterator<Item = (usize, &Event)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.events.iter().map(move |ev| (e.round(), ev)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> GameState {
        GameState {
            round: 0,
            big_blind: 20,
            small_blind: 10,
            pot: 0,
            community_cards: vec![],
            players_state: vec![],
        }
    }

    #[test]
    fn add_stamps_round_and_close_freezes() {
        let mut log = HistoryLog::new();
        log.add(
            2,
            empty_state(),
            vec![Event {
                player: 1,
                action: PlayerAction::Check,
                amount: 0,
            }],
        );
        assert_eq!(log.get()[0].round(), 2);
        log.close();
        log.add(3, empty_state(), vec![]);
        assert_eq!(log.len(), 1);
        log.reset();
        assert!(log.is_empty());
        assert!(!log.is_closed());
    }

    #[test]
    fn entry_serialises_with_flat_field_names() {
        let entry = HistoryEntry {
            state: empty_state(),
            events: vec![],
        };
        let v = serde_json::to_value(&entry).unwrap();
        for key in [
            "round",
            "big_blind",
            "small_blind",
            "pot",
            "community_cards",
            "players_state",
            "events",
        ] {
            assert!(v.get(key).is_some(), "missing {}", key);
        }
    }
}
