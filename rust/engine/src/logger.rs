use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::betting::Stage;
use crate::cards::Card;
use crate::player::Action;

/// One decision applied by the engine.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Stage,
    /// The action as requested by the decision source
    pub action: Action,
    /// Chips actually moved into the pot after capping
    pub amount: u32,
}

/// A contender's evaluated hand at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatScore {
    pub seat: usize,
    pub score: u32,
    pub hole: Vec<Card>,
}

/// Showdown details for a hand that reached it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub contenders: Vec<SeatScore>,
    /// e.g. "tie broken by seat order"
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one hand: blinds, decisions, board and outcome.
/// Serialized to JSONL for hand history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Assigned by [`HandLogger`] when written (format: YYYYMMDD-NNNNNN)
    #[serde(default)]
    pub hand_id: Option<String>,
    pub hand_number: u32,
    pub dealer: usize,
    pub small_blind_seat: usize,
    pub big_blind_seat: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub winner: Option<usize>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSON-lines file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers hands but writes nowhere.
    pub fn sink(date: &str) -> Self {
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

    /// Writes one line. Fills in `hand_id` and `ts` when the record lacks them.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.hand_id.is_none() {
            rec.hand_id = Some(self.next_id());
        }
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
