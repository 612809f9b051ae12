//! Potion totals across a collection of champions

use std::fmt;

use crate::champion::ChampionEntry;
use crate::potion::PotionCounts;
use crate::reference::{Affinity, AFFINITIES};

/// Accumulated potion requirements.
///
/// Affinity potions are bucketed by the affinity of the champion consuming
/// them; arcane potions are shared by every affinity and kept as one total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PotionTotals {
    affinity: [PotionCounts; 4],
    arcane: PotionCounts,
}

impl PotionTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals for a whole collection. Order of the entries does not matter.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ChampionEntry>,
    {
        let mut totals = Self::new();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }

    pub fn add(&mut self, entry: &ChampionEntry) {
        let cost = entry.cost();
        self.affinity[entry.affinity().index()] += cost.affinity;
        self.arcane += cost.arcane;
    }

    pub fn affinity(&self, affinity: Affinity) -> PotionCounts {
        self.affinity[affinity.index()]
    }

    pub fn arcane(&self) -> PotionCounts {
        self.arcane
    }

    /// Affinity totals in display order
    pub fn by_affinity(&self) -> impl Iterator<Item = (Affinity, PotionCounts)> + '_ {
        AFFINITIES.iter().map(move |a| (*a, self.affinity(*a)))
    }

    pub fn is_zero(&self) -> bool {
        self.arcane.is_zero() && self.affinity.iter().all(PotionCounts::is_zero)
    }
}

impl fmt::Display for PotionTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total potions needed for all champions:")?;
        for (affinity, counts) in self.by_affinity() {
            writeln!(f, "{} Affinity Potions: {}", affinity, counts)?;
        }
        writeln!(f)?;
        write!(f, "Arcane Potions: {}", self.arcane)
    }
}
