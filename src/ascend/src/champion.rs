//! Champion entries

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cost::{cost_of, CostRecord, Rank};
use crate::input::{self, InputError, RarityAnswer};
use crate::reference::{Affinity, Rarity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChampionError {
    #[error("End rank {end} is lower than start rank {start}")]
    RankOrder { start: Rank, end: Rank },
}

/// One champion to be ascended from `start` to `end` (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChampionEntry {
    rarity: Rarity,
    affinity: Affinity,
    start: Rank,
    end: Rank,
}

impl ChampionEntry {
    pub fn new(
        rarity: Rarity,
        affinity: Affinity,
        start: Rank,
        end: Rank,
    ) -> Result<Self, ChampionError> {
        if end < start {
            return Err(ChampionError::RankOrder { start, end });
        }
        Ok(Self {
            rarity,
            affinity,
            start,
            end,
        })
    }

    /// Build from parts already checked by the input parsers
    pub(crate) fn validated(rarity: Rarity, affinity: Affinity, start: Rank, end: Rank) -> Self {
        debug_assert!(start <= end);
        Self {
            rarity,
            affinity,
            start,
            end,
        }
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn affinity(&self) -> Affinity {
        self.affinity
    }

    pub fn start(&self) -> Rank {
        self.start
    }

    pub fn end(&self) -> Rank {
        self.end
    }

    /// Ranks whose cost this champion pays
    pub fn ranks(&self) -> impl Iterator<Item = Rank> {
        self.start.through(self.end)
    }

    /// Combined cost of every rank from start to end
    pub fn cost(&self) -> CostRecord {
        self.ranks().map(|rank| cost_of(self.rarity, rank)).sum()
    }
}

impl fmt::Display for ChampionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (rank {} to {})",
            self.rarity, self.affinity, self.start, self.end
        )
    }
}

/// Parses the compact `RARITY:AFFINITY:START:END` form, e.g. `R:F:3:4`
impl FromStr for ChampionEntry {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let &[rarity, affinity, start, end] = fields.as_slice() else {
            return Err(InputError::InvalidSpec(s.to_string()));
        };

        let rarity = match input::parse_rarity(rarity)? {
            RarityAnswer::Champion(value) => value,
            RarityAnswer::Finish => {
                return Err(InputError::InvalidRarity(rarity.trim().to_string()));
            }
        };
        let affinity = input::parse_affinity(affinity)?;
        let start = input::parse_start_rank(start)?;
        let end = input::parse_end_rank(end, start)?;

        Ok(Self::validated(rarity, affinity, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::potion::PotionCounts;
    use crate::reference::RARITIES;

    fn rank(n: u8) -> Rank {
        Rank::new(n).unwrap()
    }

    fn entry(rarity: Rarity, start: u8, end: u8) -> ChampionEntry {
        ChampionEntry::new(rarity, Affinity::Spirit, rank(start), rank(end)).unwrap()
    }

    #[test]
    fn test_rejects_reversed_ranks() {
        assert_eq!(
            ChampionEntry::new(Rarity::Rare, Affinity::Force, rank(4), rank(2)),
            Err(ChampionError::RankOrder {
                start: rank(4),
                end: rank(2)
            })
        );
    }

    #[test]
    fn test_single_rank_costs_table_entry() {
        for rarity in RARITIES {
            for r in 1..=6 {
                assert_eq!(entry(rarity, r, r).cost(), cost_of(rarity, rank(r)));
            }
        }
    }

    #[test]
    fn test_range_sums_each_rank() {
        let cost = entry(Rarity::Uncommon, 1, 2).cost();
        assert_eq!(cost.affinity, PotionCounts::new(4, 0, 0));
        assert_eq!(cost.arcane, PotionCounts::new(4, 0, 0));

        let epic = entry(Rarity::Epic, 3, 5).cost();
        assert_eq!(epic.affinity, PotionCounts::new(0, 9, 6));
        assert_eq!(epic.arcane, PotionCounts::new(0, 7, 3));
    }

    #[test]
    fn test_range_splits_additively() {
        let whole = entry(Rarity::Uncommon, 1, 3).cost();
        let split = entry(Rarity::Uncommon, 1, 2).cost() + entry(Rarity::Uncommon, 3, 3).cost();
        assert_eq!(whole, split);
    }

    #[test]
    fn test_parse_compact_form() {
        let parsed: ChampionEntry = "r:f:3:4".parse().unwrap();
        assert_eq!(parsed.rarity(), Rarity::Rare);
        assert_eq!(parsed.affinity(), Affinity::Force);
        assert_eq!(parsed.start(), rank(3));
        assert_eq!(parsed.end(), rank(4));
    }

    #[test]
    fn test_parse_compact_form_errors() {
        assert!(matches!(
            "R:F:3".parse::<ChampionEntry>(),
            Err(InputError::InvalidSpec(_))
        ));
        assert!(matches!(
            "Q:F:3:4".parse::<ChampionEntry>(),
            Err(InputError::InvalidRarity(_))
        ));
        assert!(matches!(
            "R:X:3:4".parse::<ChampionEntry>(),
            Err(InputError::InvalidAffinity(_))
        ));
        assert!(matches!(
            "R:F:0:4".parse::<ChampionEntry>(),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            "R:F:4:2".parse::<ChampionEntry>(),
            Err(InputError::EndRank { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            entry(Rarity::Legendary, 2, 6).to_string(),
            "Legendary Spirit (rank 2 to 6)"
        );
    }
}
