//! Rarity definitions

use std::fmt;

/// Champion rarity, which selects the cost row in the ascension table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

/// All rarities in table order
pub const RARITIES: [Rarity; 5] = [
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
    Rarity::Mythical,
];

impl Rarity {
    /// Letter typed at the rarity prompt
    pub const fn code(self) -> char {
        match self {
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
            Rarity::Epic => 'E',
            Rarity::Legendary => 'L',
            Rarity::Mythical => 'M',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }

    /// Row index into the cost table
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Look up a rarity by its letter code (case-insensitive, whitespace ignored)
    pub fn from_code(code: &str) -> Option<Rarity> {
        let letter = super::code_letter(code)?;
        RARITIES.iter().copied().find(|r| r.code() == letter)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
