//! Ascension cost table
//!
//! Potions consumed when a champion advances *into* a rank, keyed by rarity
//! and rank. The values are fixed game-balance constants with no formula
//! behind them, so the grid is spelled out literally.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use thiserror::Error;

use crate::potion::PotionCounts;
use crate::reference::Rarity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CostError {
    #[error("No cost entry for rarity {rarity:?} at rank {rank}")]
    InvalidKey { rarity: String, rank: i64 },
}

/// Number of ranks a champion can hold
pub const RANK_COUNT: usize = 6;

/// Progression rank, always within 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const MIN: Rank = Rank(1);
    pub const MAX: Rank = Rank(RANK_COUNT as u8);

    pub const fn new(value: u8) -> Option<Rank> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// Accepts any integer, rejecting those outside the rank range
    pub fn from_number(value: i64) -> Option<Rank> {
        u8::try_from(value).ok().and_then(Rank::new)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Ranks from `self` up to and including `end`. Empty if `end < self`.
    pub fn through(self, end: Rank) -> impl Iterator<Item = Rank> {
        (self.0..=end.0).map(Rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Potions of both families consumed by one rank-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CostRecord {
    pub affinity: PotionCounts,
    pub arcane: PotionCounts,
}

impl CostRecord {
    pub const ZERO: CostRecord = CostRecord {
        affinity: PotionCounts::ZERO,
        arcane: PotionCounts::ZERO,
    };
}

impl Add for CostRecord {
    type Output = CostRecord;

    fn add(self, rhs: CostRecord) -> CostRecord {
        CostRecord {
            affinity: self.affinity + rhs.affinity,
            arcane: self.arcane + rhs.arcane,
        }
    }
}

impl AddAssign for CostRecord {
    fn add_assign(&mut self, rhs: CostRecord) {
        *self = *self + rhs;
    }
}

impl Sum for CostRecord {
    fn sum<I: Iterator<Item = CostRecord>>(iter: I) -> Self {
        iter.fold(CostRecord::ZERO, Add::add)
    }
}

/// (affinity lesser, greater, superior), (arcane lesser, greater, superior)
const fn rec(affinity: [u32; 3], arcane: [u32; 3]) -> CostRecord {
    CostRecord {
        affinity: PotionCounts::new(affinity[0], affinity[1], affinity[2]),
        arcane: PotionCounts::new(arcane[0], arcane[1], arcane[2]),
    }
}

/// Rows in `RARITIES` order, columns rank 1 through 6
pub const COST_TABLE: [[CostRecord; RANK_COUNT]; 5] = [
    // Uncommon
    [
        rec([2, 0, 0], [2, 0, 0]),
        rec([2, 0, 0], [2, 0, 0]),
        rec([3, 0, 0], [2, 0, 0]),
        rec([3, 0, 0], [3, 0, 0]),
        rec([5, 0, 0], [3, 0, 0]),
        rec([5, 0, 0], [3, 0, 0]),
    ],
    // Rare
    [
        rec([4, 0, 0], [2, 0, 0]),
        rec([6, 0, 0], [3, 0, 0]),
        rec([0, 2, 0], [0, 1, 0]),
        rec([0, 2, 0], [0, 2, 0]),
        rec([0, 5, 0], [0, 3, 0]),
        rec([0, 6, 0], [0, 4, 0]),
    ],
    // Epic
    [
        rec([0, 4, 0], [0, 3, 0]),
        rec([0, 7, 0], [0, 5, 0]),
        rec([0, 9, 0], [0, 7, 0]),
        rec([0, 0, 3], [0, 0, 1]),
        rec([0, 0, 3], [0, 0, 2]),
        rec([0, 0, 4], [0, 0, 2]),
    ],
    // Legendary
    [
        rec([0, 0, 1], [0, 5, 0]),
        rec([0, 0, 2], [0, 0, 2]),
        rec([0, 0, 3], [0, 0, 2]),
        rec([0, 0, 4], [0, 0, 3]),
        rec([0, 0, 5], [0, 0, 4]),
        rec([0, 0, 6], [0, 0, 5]),
    ],
    // Mythical
    [
        rec([0, 0, 3], [0, 0, 2]),
        rec([0, 0, 4], [0, 0, 3]),
        rec([0, 0, 5], [0, 0, 4]),
        rec([0, 0, 6], [0, 0, 5]),
        rec([0, 0, 7], [0, 0, 6]),
        rec([0, 0, 8], [0, 0, 7]),
    ],
];

/// Cost of advancing a champion of `rarity` into `rank`
pub const fn cost_of(rarity: Rarity, rank: Rank) -> CostRecord {
    COST_TABLE[rarity.index()][rank.index()]
}

/// Lookup by raw rarity letter and rank number.
///
/// For callers holding unvalidated keys; the calculator itself only ever uses
/// [`cost_of`].
pub fn lookup(rarity: &str, rank: i64) -> Result<CostRecord, CostError> {
    let invalid = || CostError::InvalidKey {
        rarity: rarity.to_string(),
        rank,
    };
    let rarity_value = Rarity::from_code(rarity).ok_or_else(invalid)?;
    let rank_value = Rank::from_number(rank).ok_or_else(invalid)?;
    Ok(cost_of(rarity_value, rank_value))
}
