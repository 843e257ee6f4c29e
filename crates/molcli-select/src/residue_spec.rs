//! Residue number lists
//!
//! Unlike model and chain specs, residue specs keep the written order:
//! [`ResidueSpec::last_index`] reports where the user's cursor logically is.

/// Parsed residue numbers and ranges
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidueSpec {
    /// Entries in the order they were written
    pub entries: Vec<ResidueEntry>,
}

/// One token of a residue spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueEntry {
    /// Single residue number (e.g. `45`)
    Single(i64),
    /// Inclusive range (e.g. `10-20`)
    Range(i64, i64),
}

impl ResidueEntry {
    /// Check if a residue number is selected by this entry
    pub fn matches(&self, number: i64) -> bool {
        match *self {
            ResidueEntry::Single(n) => n == number,
            ResidueEntry::Range(start, end) => start <= number && number <= end,
        }
    }

    /// Number written last in this entry
    pub fn end(&self) -> i64 {
        match *self {
            ResidueEntry::Single(n) => n,
            ResidueEntry::Range(_, end) => end,
        }
    }

    fn parse(token: &str) -> Option<ResidueEntry> {
        match token.split_once('-') {
            Some((start, end)) => Some(ResidueEntry::Range(start.parse().ok()?, end.parse().ok()?)),
            None => token.parse().ok().map(ResidueEntry::Single),
        }
    }
}

impl ResidueSpec {
    /// Parse a comma-separated residue spec, skipping malformed tokens
    pub fn parse(spec: &str) -> Self {
        let mut entries = Vec::new();
        if spec.is_empty() {
            return ResidueSpec { entries };
        }
        for token in spec.split(',') {
            match ResidueEntry::parse(token) {
                Some(entry) => entries.push(entry),
                None => log::debug!("Skipping malformed residue spec token {:?}", token),
            }
        }
        ResidueSpec { entries }
    }

    /// True if no residue number was recognized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a residue number is selected
    pub fn contains(&self, number: i64) -> bool {
        self.entries.iter().any(|e| e.matches(number))
    }

    /// Endpoint of the last written entry
    pub fn last_index(&self) -> Option<i64> {
        self.entries.last().map(ResidueEntry::end)
    }
}
