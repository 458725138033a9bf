//! Reading and writing the shared roster CSV file.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{EmployeeRecord, ROSTER_HEADERS};

/// UTF-8 byte-order mark written at the start of the roster file.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Streaming writer for roster files.
///
/// The header row is written on creation; the file is flushed by [`RosterWriter::finish`].
pub struct RosterWriter<W: Write> {
    inner: csv::Writer<W>,
    written: usize,
}

impl RosterWriter<BufWriter<File>> {
    /// Create (or truncate) a roster file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> RosterWriter<W> {
    /// Wrap a writer, emitting the BOM and header row.
    pub fn new(mut writer: W) -> Result<Self> {
        writer.write_all(UTF8_BOM)?;
        let mut inner = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        inner.write_record(ROSTER_HEADERS)?;
        Ok(Self { inner, written: 0 })
    }

    /// Append one record.
    pub fn write(&mut self, record: &EmployeeRecord) -> Result<()> {
        self.inner.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered rows and return the underlying writer.
    pub fn finish(self) -> Result<W> {
        let mut writer = self.inner.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        writer.flush()?;
        Ok(writer)
    }
}

/// Write a complete roster to `path`.
pub fn write_roster(path: &Path, records: &[EmployeeRecord]) -> Result<()> {
    let mut writer = RosterWriter::create(path)?;
    for record in records {
        writer.write(record)?;
    }
    writer.finish()?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read every record from the roster file at `path`.
///
/// Fails with [`AppError::InputMissing`] when the file does not exist.
pub fn read_roster(path: &Path) -> Result<Vec<EmployeeRecord>> {
    if !path.exists() {
        return Err(AppError::InputMissing(path.to_path_buf()));
    }

    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;
    let records = parse_roster(&content)?;

    debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse roster CSV text, with or without a leading BOM.
pub fn parse_roster(content: &str) -> Result<Vec<EmployeeRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<EmployeeRecord>() {
        records.push(row?);
    }
    Ok(records)
}
