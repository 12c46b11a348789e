//! Dataset command: hand history in, training samples out.
//!
//! Each input line is a [`HandRecord`]. Rewards are annotated per event and
//! flattened to one JSON sample per line. Both files may be `.zst`.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{read_text_auto, write_text_auto};
use crate::ui;
use pokersim_ai::training::{Sample, samples_from_record};
use pokersim_engine::logger::HandRecord;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::path::Path;

fn parse_records(content: &str) -> (Vec<HandRecord>, Vec<BatchValidationError<usize>>) {
    let mut records = Vec::new();
    let mut errors = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<HandRecord>(line) {
            Ok(r) => records.push(r),
            Err(e) => errors.push(BatchValidationError {
                item_context: idx + 1,
                message: e.to_string(),
            }),
        }
    }
    (records, errors)
}

/// Handle the dataset command.
///
/// Every malformed line is reported on `err` before the command fails;
/// nothing is written in that case. With `shuffle` the samples are
/// permuted by a ChaCha stream seeded with that value.
pub fn handle_dataset_command(
    input: &Path,
    output: &Path,
    shuffle: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;
    let (records, errors) = parse_records(&content);

    if !errors.is_empty() {
        for e in &errors {
            ui::write_error(err, &format!("Invalid record at line {}", e))?;
        }
        return Err(CliError::InvalidInput(format!(
            "{} invalid record(s) in {}",
            errors.len(),
            input.display()
        )));
    }
    if records.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no hand records in {}",
            input.display()
        )));
    }

    let mut samples: Vec<Sample> = records.iter().flat_map(samples_from_record).collect();
    if let Some(seed) = shuffle {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        samples.shuffle(&mut rng);
    }

    let mut text = String::new();
    for s in &samples {
        text.push_str(&serde_json::to_string(s).map_err(std::io::Error::other)?);
        text.push('\n');
    }
    write_text_auto(output, &text)?;

    tracing::info!(hands = records.len(), samples = samples.len(), "dataset written");
    writeln!(out, "Hands: {}", records.len())?;
    writeln!(out, "Samples: {}", samples.len())?;
    writeln!(out, "Output: {}", output.display())?;
    Ok(())
}
