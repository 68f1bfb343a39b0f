use itertools::Itertools;
use thiserror::Error;

/// Per-entry failures.
///
/// The `Display` text of each variant is what ends up in the batch log, so
/// every message names the identifier, chain, or file it concerns.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("The structure ({id}) was not able to be fetched. Error: {reason}")]
    Fetch { id: String, reason: String },

    #[error("The structure ({id}) could not be parsed. Error: {reason}")]
    Parse { id: String, reason: String },

    #[error("The expected chain ID ({chain}) is not found in the structure's chain list")]
    MissingChain { chain: String },

    #[error("The expected chain ID ({chain}) does not return an atom selection")]
    EmptySelection { chain: String },

    #[error(
        "Number of atoms ({count}) is too large for the pdb file format; need to store in some other file format."
    )]
    TooManyAtoms { count: usize },

    #[error("Writing to file ({file}) failed. Error: {reason}")]
    Write { file: String, reason: String },
}

/// Flatten the error list `pdbtbx` hands back into a single line.
pub(crate) fn join_pdb_errors(errors: &[pdbtbx::PDBError]) -> String {
    errors
        .iter()
        .map(|e| e.short_description())
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_identifier() {
        let e = FetchError::Fetch {
            id: "9XYZ".to_string(),
            reason: "http status: 404".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "The structure (9XYZ) was not able to be fetched. Error: http status: 404"
        );
    }

    #[test]
    fn missing_chain_names_chain() {
        let e = FetchError::MissingChain {
            chain: "Q".to_string(),
        };
        assert!(e.to_string().contains("(Q)"));
    }

    #[test]
    fn too_many_atoms_reports_count() {
        let e = FetchError::TooManyAtoms { count: 123_456 };
        assert!(e.to_string().starts_with("Number of atoms (123456)"));
    }
}
