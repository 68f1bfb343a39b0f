//! Work items read from the identifier list.
use std::fmt;
use std::io::BufRead;

/// One line of the input list: an identifier and an optional chain selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub chain: Option<String>,
}

impl Entry {
    pub fn new(id: impl Into<String>, chain: Option<String>) -> Self {
        Entry {
            id: id.into(),
            chain,
        }
    }

    /// Split a line on whitespace. Blank lines give `None`; tokens past the
    /// second are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let id = tokens.next()?;
        let chain = tokens.next().map(str::to_string);
        Some(Entry::new(id, chain))
    }

    /// File stem used for this entry's output: `ID` or `ID_CHAIN`.
    pub fn output_stem(&self) -> String {
        match &self.chain {
            Some(chain) => format!("{}_{}", self.id, chain),
            None => self.id.clone(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.chain {
            Some(chain) => write!(f, "{} {}", self.id, chain),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Read every non-blank line of `reader` into an [`Entry`], keeping file order.
pub fn read_entries<R: BufRead>(reader: R) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        if let Some(entry) = Entry::parse_line(&line?) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
