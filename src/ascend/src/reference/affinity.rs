//! Affinity definitions

use std::fmt;

/// Champion affinity. Only used to bucket affinity-potion totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Affinity {
    Spirit,
    Force,
    Magic,
    Void,
}

/// All affinities in display order
pub const AFFINITIES: [Affinity; 4] = [
    Affinity::Spirit,
    Affinity::Force,
    Affinity::Magic,
    Affinity::Void,
];

impl Affinity {
    /// Letter typed at the affinity prompt
    pub const fn code(self) -> char {
        match self {
            Affinity::Spirit => 'S',
            Affinity::Force => 'F',
            Affinity::Magic => 'M',
            Affinity::Void => 'V',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Affinity::Spirit => "Spirit",
            Affinity::Force => "Force",
            Affinity::Magic => "Magic",
            Affinity::Void => "Void",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Look up an affinity by its letter code (case-insensitive, whitespace ignored)
    pub fn from_code(code: &str) -> Option<Affinity> {
        let letter = super::code_letter(code)?;
        AFFINITIES.iter().copied().find(|a| a.code() == letter)
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
