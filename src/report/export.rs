use crate::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

const CSV_FILE: &str = const_format::concatcp!(EXPORT_STEM, ".csv");
const JSON_FILE: &str = const_format::concatcp!(EXPORT_STEM, ".json");

/// One exported transaction, tagged with the round that generated it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Round")]
    round: usize,
    #[serde(rename = "R_Transaction")]
    transaction: String,
    gas: Gas,
    tip: Tip,
}

impl Record {
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn transaction(&self) -> &str {
        &self.transaction
    }
    pub fn gas(&self) -> Gas {
        self.gas
    }
    pub fn tip(&self) -> Tip {
        self.tip
    }
}

/// Every generated transaction of a run, ready to be written to disk.
///
/// Built from pools in play order; rounds are numbered from 1 across the
/// whole run, and transactions keep pool order within a round.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Export(Vec<Record>);

impl<'a> FromIterator<&'a Pool> for Export {
    fn from_iter<T: IntoIterator<Item = &'a Pool>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .enumerate()
                .flat_map(|(i, pool)| {
                    pool.iter().map(move |(id, tx)| Record {
                        round: i + 1,
                        transaction: id.to_string(),
                        gas: tx.gas(),
                        tip: tx.tip(),
                    })
                })
                .collect(),
        )
    }
}

impl Export {
    pub fn records(&self) -> &[Record] {
        &self.0
    }
    pub fn write_csv<W: Write>(&self, mut w: W) -> anyhow::Result<()> {
        writeln!(w, "Round,R_Transaction,gas,tip")?;
        for r in &self.0 {
            writeln!(w, "{},{},{},{}", r.round, r.transaction, r.gas, r.tip)?;
        }
        Ok(w.flush()?)
    }
    pub fn write_json<W: Write>(&self, w: W) -> anyhow::Result<()> {
        Ok(serde_json::to_writer_pretty(w, &self.0)?)
    }
    /// Writes both tables under `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
        std::fs::create_dir_all(dir)?;
        let csv = dir.join(CSV_FILE);
        let json = dir.join(JSON_FILE);
        self.write_csv(std::io::BufWriter::new(std::fs::File::create(&csv)?))?;
        self.write_json(std::io::BufWriter::new(std::fs::File::create(&json)?))?;
        log::info!("saved {} transactions to {}", self.0.len(), dir.display());
        Ok((csv, json))
    }
}
