//! Deal command: one hand at a checking table, printed for inspection.

use crate::commands::build_engine;
use crate::error::CliError;
use pokersim_engine::cards::Card;
use std::io::Write;

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle the deal command.
///
/// Every seat checks, so the hand always reaches showdown with the full
/// board. Prints one `Hole P<id>` line per player in id order, the board,
/// and the winners with their category.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<usize>,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    let (mut engine, _) = build_engine(players, seed, Some("check"))?;
    let showdown = engine.play()?;

    let mut seats: Vec<_> = engine.players().iter().collect();
    seats.sort_by_key(|p| p.id());
    for p in seats {
        writeln!(out, "Hole P{}: {}", p.id(), join(p.hole_cards()))?;
    }
    writeln!(out, "Board: {}", join(engine.community_cards()))?;

    let winners: Vec<String> = showdown.winners.iter().map(|w| format!("P{}", w)).collect();
    writeln!(
        out,
        "Winner: {} ({}, pot {})",
        winners.join(" "),
        showdown.strength.category,
        showdown.pot
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn deal(seed: u64, players: usize) -> String {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_deal_command(Some(seed), Some(players), &mut out, &mut err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    #[serial]
    fn prints_every_seat_and_the_board() {
        let output = deal(999, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Hole P0: "));
        assert!(lines[2].starts_with("Hole P2: "));
        assert!(lines[3].starts_with("Board: "));
        assert_eq!(lines[3].trim_start_matches("Board: ").split(' ').count(), 5);
        assert!(lines[4].starts_with("Winner: P"));
    }

    #[test]
    #[serial]
    fn same_seed_same_deal() {
        assert_eq!(deal(12345, 4), deal(12345, 4));
    }

    #[test]
    #[serial]
    fn one_player_is_a_config_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_deal_command(Some(1), Some(1), &mut out, &mut err);
        assert!(matches!(res, Err(CliError::Config(_))));
    }
}
