use crate::job::Outcome;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the batch log written next to the structure files.
pub const LOG_FILE_NAME: &str = "fetching.log";

/// Write one line per outcome, in order.
pub fn write_log<W: Write>(mut writer: W, outcomes: &[Outcome]) -> std::io::Result<()> {
    for outcome in outcomes {
        writeln!(writer, "{outcome}")?;
    }
    writer.flush()
}

/// Write `fetching.log` into `out_dir` and return its path.
pub fn write_log_file(out_dir: &Path, outcomes: &[Outcome]) -> Result<PathBuf> {
    let path = out_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    write_log(BufWriter::new(file), outcomes)
        .with_context(|| format!("failed to write log file {}", path.display()))?;
    Ok(path)
}
