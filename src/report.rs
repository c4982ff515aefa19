use crate::classify::ChangeType;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Fixed header row of the output table
pub const HEADER: &str = "Snapshot;File;ChangeType";

/// Semicolon-delimited report sink. Rows are appended in the order the
/// pipeline emits them; the writer never reorders or buffers records
/// beyond the underlying sink's own buffering.
pub struct ReportWriter<W: Write> {
    out: BufWriter<W>,
}

impl ReportWriter<File> {
    /// Create (or truncate) the report file and write the header row
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut out = BufWriter::new(sink);
        writeln!(out, "{HEADER}")?;
        Ok(Self { out })
    }

    /// Append one `commit;class;code` row. The row is formed whole before
    /// anything is handed to the sink, so a record is either emitted
    /// completely or not at all.
    pub fn record(&mut self, commit: &str, qualified_name: &str, change: ChangeType) -> Result<()> {
        let row = format!("{commit};{qualified_name};{}\n", change.code());
        self.out.write_all(row.as_bytes())?;
        Ok(())
    }

    /// Flush and close the sink. The `BufWriter` also flushes on drop, so
    /// rows written before a fatal error still reach the file.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().map_err(|e| e.into_error()).unwrap()
    }
}
