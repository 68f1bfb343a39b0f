//! ferritin-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Small synthetic structures are included in the crate distribution for reference files.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and either create temporary files or install themselves into a directory laid out
//! like a structure mirror (`<ID>.<suffix>`).
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ferritin_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::two_chains().create_temp().unwrap();
///
/// // or drop it into a mirror directory as `1FRT.pdb`
/// let path = TestFile::two_chains().install(mirror_dir, "1FRT").unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Two peptide chains.
    /// Chain A: two GLY residues (8 atoms). Chain B: one ALA residue (5 atoms).
    pub fn two_chains() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/two_chains.pdb"),
            suffix: "pdb",
        }
    }
    /// mmCIF with a two-character chain `AA` (4 atoms) next to chain `B` (4 atoms).
    /// `AA` does not fit the single chain column of a PDB `ATOM` record.
    pub fn two_letter_chain() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/two_letter_chain.cif"),
            suffix: "cif",
        }
    }
    /// Two-model ensemble of a single GLY in chain A, 4 atoms per model.
    pub fn nmr_ensemble() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/nmr_ensemble.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Write the file into `dir` as `<stem>.<suffix>`.
    pub fn install(&self, dir: impl AsRef<Path>, stem: &str) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(format!("{}.{}", stem, self.suffix));
        fs::write(&path, self.filebinary)?;
        Ok(path)
    }
}

const ATOM_SITE_COLUMNS: [&str; 21] = [
    "group_PDB",
    "id",
    "type_symbol",
    "label_atom_id",
    "label_alt_id",
    "label_comp_id",
    "label_asym_id",
    "label_entity_id",
    "label_seq_id",
    "pdbx_PDB_ins_code",
    "Cartn_x",
    "Cartn_y",
    "Cartn_z",
    "occupancy",
    "B_iso_or_equiv",
    "pdbx_formal_charge",
    "auth_seq_id",
    "auth_comp_id",
    "auth_asym_id",
    "auth_atom_id",
    "pdbx_PDB_model_num",
];

/// Generate an mmCIF poly-GLY chain with exactly `atom_count` backbone atoms.
///
/// Used for structures too large to ship as fixtures, e.g. entries past the
/// PDB format's atom ceiling.
pub fn synthetic_cif(id: &str, chain: &str, atom_count: usize) -> String {
    const BACKBONE: [(&str, &str); 4] = [("N", "N"), ("CA", "C"), ("C", "C"), ("O", "O")];

    let mut cif = format!("data_{id}\n#\nloop_\n");
    for column in ATOM_SITE_COLUMNS {
        cif.push_str(&format!("_atom_site.{column}\n"));
    }
    for i in 0..atom_count {
        let (name, element) = BACKBONE[i % 4];
        let seq = i / 4 + 1;
        let x = (i % 100) as f64 * 1.5;
        let y = (i / 100 % 100) as f64 * 1.5;
        let z = (i / 10_000) as f64 * 1.5;
        cif.push_str(&format!(
            "ATOM {} {element} {name} . GLY {chain} 1 {seq} ? {x:.3} {y:.3} {z:.3} 1.00 20.00 ? {seq} GLY {chain} {name} 1\n",
            i + 1
        ));
    }
    cif.push_str("#\n");
    cif
}
