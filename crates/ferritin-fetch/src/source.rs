//! Where structures come from.
//!
//! A [`StructureSource`] turns an identifier into a parsed [`pdbtbx::PDB`].
//! Sources are shared by every worker in the pool, hence the `Sync` bound.
use crate::error::{join_pdb_errors, FetchError};
use pdbtbx::PDB;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Download root for mmCIF files on the RCSB file server.
pub const RCSB_DOWNLOAD_URL: &str = "https://files.rcsb.org/download";

pub trait StructureSource: Sync {
    fn fetch(&self, id: &str) -> Result<PDB, FetchError>;
}

/// Fetch `<base_url>/<ID>.cif` over HTTP.
pub struct Rcsb {
    agent: ureq::Agent,
    base_url: String,
}

impl Rcsb {
    pub fn new() -> Self {
        Self::with_base_url(RCSB_DOWNLOAD_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Rcsb {
            agent: ureq::Agent::new_with_defaults(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, id: &str) -> String {
        format!("{}/{}.cif", self.base_url, id)
    }

    /// Stream the response body into a temp file. The `.cif` suffix is what
    /// tells `pdbtbx` which parser to use.
    fn download(&self, id: &str) -> Result<NamedTempFile, String> {
        let url = self.url(id);
        tracing::debug!(%url, "downloading");
        let response = self.agent.get(&url).call().map_err(|e| e.to_string())?;

        let mut temp = tempfile::Builder::new()
            .prefix("ferritin-fetch-")
            .suffix(".cif")
            .tempfile()
            .map_err(|e| e.to_string())?;
        let mut body = response.into_body().into_reader();
        io::copy(&mut body, &mut temp).map_err(|e| e.to_string())?;
        Ok(temp)
    }
}

impl Default for Rcsb {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureSource for Rcsb {
    fn fetch(&self, id: &str) -> Result<PDB, FetchError> {
        let temp = self.download(id).map_err(|reason| FetchError::Fetch {
            id: id.to_string(),
            reason,
        })?;
        // `temp` is removed when it drops at the end of this scope
        read_structure(id, temp.path())
    }
}

/// Read structures from a local directory of `<ID>.cif` / `<ID>.pdb` files.
pub struct LocalMirror {
    dir: PathBuf,
}

impl LocalMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalMirror { dir: dir.into() }
    }

    /// First existing file for `id`, trying the identifier as given, then lower
    /// and upper case, mmCIF before PDB.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        let stems = [id.to_string(), id.to_lowercase(), id.to_uppercase()];
        stems
            .iter()
            .flat_map(|stem| ["cif", "pdb"].map(|ext| self.dir.join(format!("{stem}.{ext}"))))
            .find(|path| path.is_file())
    }
}

impl StructureSource for LocalMirror {
    fn fetch(&self, id: &str) -> Result<PDB, FetchError> {
        let path = self.locate(id).ok_or_else(|| FetchError::Fetch {
            id: id.to_string(),
            reason: format!("no structure file in mirror {}", self.dir.display()),
        })?;
        read_structure(id, &path)
    }
}

/// Parse a structure file with `pdbtbx`, format picked from the extension.
pub(crate) fn read_structure(id: &str, path: &Path) -> Result<PDB, FetchError> {
    let filename = path.to_str().ok_or_else(|| FetchError::Parse {
        id: id.to_string(),
        reason: format!("non UTF-8 path {}", path.display()),
    })?;

    match pdbtbx::open(filename) {
        Ok((pdb, warnings)) => {
            if !warnings.is_empty() {
                tracing::debug!(id, count = warnings.len(), "parsed with warnings");
            }
            Ok(pdb)
        }
        Err(errors) => Err(FetchError::Parse {
            id: id.to_string(),
            reason: join_pdb_errors(&errors),
        }),
    }
}
