use anyhow::{Context, Result};
use clap::Parser;
use ferritin_fetch::{
    read_entries, run_batch, write_log_file, FetchOptions, LocalMirror, OutputFormat, Rcsb,
    StructureSource, RCSB_DOWNLOAD_URL,
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

/// Fetch structures listed in a file, optionally extract one chain, and write them out.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File with one `ID [CHAIN]` entry per line
    #[arg(long, short = 'i', alias = "pdbIDs")]
    pdbid_list_file: PathBuf,

    /// Directory for the structure files and `fetching.log`
    #[arg(long, short = 'o', alias = "outdir")]
    out_file_directory: PathBuf,

    /// Number of worker threads
    #[arg(long, short = 'c', value_parser = clap::value_parser!(u16).range(1..))]
    max_threads: u16,

    /// Output file format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pdb)]
    format: OutputFormat,

    /// Download root for `<ID>.cif` files
    #[arg(long, default_value = RCSB_DOWNLOAD_URL)]
    base_url: String,

    /// Read structures from this directory instead of downloading them
    #[arg(long, conflicts_with = "base_url")]
    mirror: Option<PathBuf>,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let list = File::open(&self.pdbid_list_file).with_context(|| {
            format!("failed to open {}", self.pdbid_list_file.display())
        })?;
        let entries = read_entries(BufReader::new(list)).with_context(|| {
            format!("failed to read {}", self.pdbid_list_file.display())
        })?;

        fs::create_dir_all(&self.out_file_directory).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.out_file_directory.display()
            )
        })?;

        let source: Box<dyn StructureSource> = match &self.mirror {
            Some(dir) => Box::new(LocalMirror::new(dir)),
            None => Box::new(Rcsb::with_base_url(self.base_url.as_str())),
        };
        let options = FetchOptions::new(&self.out_file_directory).with_format(self.format);

        let outcomes = run_batch(
            &entries,
            &*source,
            &options,
            usize::from(self.max_threads),
        )?;
        let log = write_log_file(&self.out_file_directory, &outcomes)?;
        tracing::info!(log = %log.display(), "log written");
        Ok(())
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
