use super::snapshot::{TickStats, WorldSnapshot};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Appends one CSV row per tick while recording is enabled
pub struct Recorder {
    out: BufWriter<File>,
}

impl Recorder {
    /// Create the output file and write the header row
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{}", TickStats::CSV_HEADER)?;
        Ok(Self { out })
    }

    pub fn append(&mut self, stats: &TickStats) -> io::Result<()> {
        writeln!(self.out, "{}", stats.csv_row())
    }

    /// Flush and close the file
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Dump a full world snapshot as pretty JSON, for display layers and
/// offline inspection
pub fn write_snapshot(snapshot: &WorldSnapshot, path: impl AsRef<Path>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)
}
