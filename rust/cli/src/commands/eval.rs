//! Eval command: classifies a hole/board combination.

use crate::error::CliError;
use crate::ui;
use pokersim_engine::cards::{Card, parse_cards};
use pokersim_engine::hand::{EvaluationMode, evaluate_strength};
use std::collections::HashSet;
use std::io::Write;

fn parse(label: &str, raw: &str) -> Result<Vec<Card>, CliError> {
    parse_cards(raw).map_err(|e| CliError::InvalidInput(format!("{}: {}", label, e)))
}

/// Handle the eval command.
///
/// Prints the category name, its rank (0-9) and the tiebreaker. Duplicate
/// cards are evaluated as given, with a warning.
pub fn handle_eval_command(
    hole: &str,
    board: &str,
    best_five: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse("--hole", hole)?;
    let board = parse("--board", board)?;

    let mut seen = HashSet::new();
    if let Some(dup) = hole.iter().chain(&board).find(|c| !seen.insert(**c)) {
        ui::display_warning(err, &format!("card {} appears more than once", dup))?;
    }

    let mode = if best_five {
        EvaluationMode::BestFive
    } else {
        EvaluationMode::WholeSet
    };
    let strength = evaluate_strength(&hole, &board, mode)?;

    writeln!(out, "Category: {}", strength.category)?;
    writeln!(out, "Rank: {}", strength.category.rank())?;
    writeln!(out, "Tiebreaker: {}", strength.tiebreaker)?;
    Ok(())
}
