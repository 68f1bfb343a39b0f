//! The per-entry operation: fetch, select, check, write.
//!
//! Nothing in here returns an error to the caller. Every failure is folded
//! into the [`Outcome`] so one bad entry never takes down the batch.
use crate::entry::Entry;
use crate::error::{join_pdb_errors, FetchError};
use crate::source::StructureSource;
use pdbtbx::{StrictnessLevel, PDB};
use std::fmt;
use std::path::{Path, PathBuf};

/// Largest atom serial a PDB `ATOM` record can hold (5 columns).
pub const PDB_MAX_ATOMS: usize = 99_999;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdb,
    Cif,
}

impl OutputFormat {
    /// Atom ceiling imposed by the file format, if any.
    pub fn atom_limit(&self) -> Option<usize> {
        match self {
            OutputFormat::Pdb => Some(PDB_MAX_ATOMS),
            OutputFormat::Cif => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub out_dir: PathBuf,
    pub format: OutputFormat,
}

impl FetchOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        FetchOptions {
            out_dir: out_dir.into(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// The entry together with the written file name, or why nothing was written.
#[derive(Debug)]
pub struct Outcome {
    pub entry: Entry,
    pub result: Result<String, FetchError>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// One log line: `ID [CHAIN] <file name | error>`.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(file_name) => write!(f, "{} {}", self.entry, file_name),
            Err(err) => write!(f, "{} {}", self.entry, err),
        }
    }
}

pub fn fetch_and_write(
    source: &dyn StructureSource,
    entry: &Entry,
    options: &FetchOptions,
) -> Outcome {
    let result = process(source, entry, options);
    match &result {
        Ok(file_name) => tracing::info!(id = %entry.id, file = %file_name, "written"),
        Err(err) => tracing::warn!(id = %entry.id, "{err}"),
    }
    Outcome {
        entry: entry.clone(),
        result,
    }
}

fn process(
    source: &dyn StructureSource,
    entry: &Entry,
    options: &FetchOptions,
) -> Result<String, FetchError> {
    let mut pdb = source.fetch(&entry.id)?;
    keep_first_model(&mut pdb);

    if let Some(chain) = &entry.chain {
        select_chain(&mut pdb, chain)?;
    }

    check_atom_count(pdb.atom_count(), options.format)?;

    let file_name = format!("{}.{}", entry.output_stem(), options.format);
    let path = options.out_dir.join(&file_name);
    write_structure(&pdb, &path, options.format).map_err(|reason| FetchError::Write {
        file: file_name.clone(),
        reason,
    })?;
    Ok(file_name)
}

/// NMR ensembles and other multi-model entries are reduced to their first model.
fn keep_first_model(pdb: &mut PDB) {
    while pdb.model_count() > 1 {
        pdb.remove_model(pdb.model_count() - 1);
    }
}

/// Drop every chain except `chain`.
fn select_chain(pdb: &mut PDB, chain: &str) -> Result<(), FetchError> {
    if !pdb.chains().any(|c| c.id() == chain) {
        return Err(FetchError::MissingChain {
            chain: chain.to_string(),
        });
    }
    pdb.remove_chains_by(|c| c.id() != chain);
    if pdb.atom_count() == 0 {
        return Err(FetchError::EmptySelection {
            chain: chain.to_string(),
        });
    }
    Ok(())
}

pub fn check_atom_count(count: usize, format: OutputFormat) -> Result<(), FetchError> {
    match format.atom_limit() {
        Some(limit) if count > limit => Err(FetchError::TooManyAtoms { count }),
        _ => Ok(()),
    }
}

/// Chain ids longer than one character overflow column 22 of a PDB `ATOM`
/// record, and `pdbtbx` writes them truncated without complaint.
fn check_chain_ids(pdb: &PDB) -> Result<(), String> {
    match pdb.chains().find(|c| c.id().chars().count() > 1) {
        Some(chain) => Err(format!(
            "Chain id ({}) is too long for the pdb file format",
            chain.id()
        )),
        None => Ok(()),
    }
}

fn write_structure(pdb: &PDB, path: &Path, format: OutputFormat) -> Result<(), String> {
    if format == OutputFormat::Pdb {
        check_chain_ids(pdb)?;
    }
    let filename = path
        .to_str()
        .ok_or_else(|| format!("non UTF-8 path {}", path.display()))?;
    pdbtbx::save(pdb, filename, StrictnessLevel::Loose)
        .map_err(|errors| join_pdb_errors(&errors))
}
