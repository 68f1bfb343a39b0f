//! ferritin-fetch
//!
//! Batch retrieval of biomolecular structures.
//!
//! __ferritin-fetch__ provides functionality for:
//! * Reading a list of structure identifiers with optional chain selectors
//! * Fetching each structure from the RCSB file server (or a local mirror)
//! * Extracting a single chain and writing PDB or mmCIF files
//! * Running the whole list on a fixed-size thread pool and logging one result per entry
//!
//! ```shell
//! ferritin-fetch --pdbid-list-file ids.txt --out-file-directory out/ --max-threads 8
//! ```
//!
mod batch;
mod entry;
mod error;
mod job;
mod report;
mod source;

pub use self::batch::run_batch;
pub use self::entry::{read_entries, Entry};
pub use self::error::FetchError;
pub use self::job::{
    check_atom_count, fetch_and_write, FetchOptions, Outcome, OutputFormat, PDB_MAX_ATOMS,
};
pub use self::report::{write_log, write_log_file, LOG_FILE_NAME};
pub use self::source::{LocalMirror, Rcsb, StructureSource, RCSB_DOWNLOAD_URL};
