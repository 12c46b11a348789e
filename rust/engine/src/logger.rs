use serde::{Deserialize, Serialize};

use crate::engine::{Engine, Showdown};
use crate::history::HistoryEntry;

/// Complete record of a poker hand: every round with its events, the
/// showdown and the stacks after the payout.
/// Serialized to JSONL format for hand history storage and training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Seed of the engine that played the hand
    pub seed: Option<u64>,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    pub rounds: Vec<HistoryEntry>,
    #[serde(default)]
    pub showdown: Option<Showdown>,
    /// Stacks after the payout, indexed by player id
    pub final_stacks: Vec<u32>,
}

impl HandRecord {
    /// Captures the hand the engine just played.
    pub fn from_engine(engine: &Engine, hand_id: String) -> Self {
        Self {
            hand_id,
            seed: Some(engine.seed()),
            ts: None,
            rounds: engine.history().get().to_vec(),
            showdown: engine.last_showdown().cloned(),
            final_stacks: engine.stacks_by_id(),
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes [`HandRecord`]s to a JSONL file, one line per hand.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Creates `path` and its parent directories, truncating an existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
