use serde::{Deserialize, Serialize};

use crate::rules::PickOutcome;
use crate::tiles::TileColor;

/// Records a single turn: which player took which color from which factory,
/// and how the pick resolved.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based round the turn belongs to
    pub round: u32,
    /// Player index (0 or 1)
    pub player: usize,
    /// The chosen tile color
    pub color: TileColor,
    /// 0-based factory index the tiles came from
    pub factory: usize,
    /// 0-based staging row the player aimed for
    pub row: usize,
    /// Resolution counts for the pick
    pub outcome: PickOutcome,
}

/// Complete record of one game including every turn and the final scores.
/// Serialized to JSONL format for match history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed used for the bag shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Number of rounds the game was configured for
    pub rounds: u32,
    /// Chronological list of all turns
    pub turns: Vec<TurnRecord>,
    /// Final cumulative scores in player order
    pub final_scores: Option<Vec<i32>>,
    /// Result summary ("Player 1 wins", "tie", ...)
    pub result: Option<String>,
    /// Timestamp when the match was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
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
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
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
