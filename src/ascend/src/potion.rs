//! Potion tiers and per-tier counts

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Strength tier within a potion family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotionTier {
    Lesser,
    Greater,
    Superior,
}

impl PotionTier {
    pub const ALL: [PotionTier; 3] = [
        PotionTier::Lesser,
        PotionTier::Greater,
        PotionTier::Superior,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PotionTier::Lesser => "Lesser",
            PotionTier::Greater => "Greater",
            PotionTier::Superior => "Superior",
        }
    }
}

/// Number of potions of one family, split by tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PotionCounts {
    pub lesser: u32,
    pub greater: u32,
    pub superior: u32,
}

impl PotionCounts {
    pub const ZERO: PotionCounts = PotionCounts::new(0, 0, 0);

    pub const fn new(lesser: u32, greater: u32, superior: u32) -> Self {
        Self {
            lesser,
            greater,
            superior,
        }
    }

    pub const fn get(&self, tier: PotionTier) -> u32 {
        match tier {
            PotionTier::Lesser => self.lesser,
            PotionTier::Greater => self.greater,
            PotionTier::Superior => self.superior,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for PotionCounts {
    type Output = PotionCounts;

    fn add(self, rhs: PotionCounts) -> PotionCounts {
        PotionCounts {
            lesser: self.lesser + rhs.lesser,
            greater: self.greater + rhs.greater,
            superior: self.superior + rhs.superior,
        }
    }
}

impl AddAssign for PotionCounts {
    fn add_assign(&mut self, rhs: PotionCounts) {
        *self = *self + rhs;
    }
}

impl Sum for PotionCounts {
    fn sum<I: Iterator<Item = PotionCounts>>(iter: I) -> Self {
        iter.fold(PotionCounts::ZERO, Add::add)
    }
}

/// Renders as `4 Lesser, 0 Greater, 0 Superior`
impl fmt::Display for PotionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tier) in PotionTier::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", self.get(*tier), tier.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_per_tier() {
        let a = PotionCounts::new(2, 0, 1);
        let b = PotionCounts::new(3, 4, 0);
        assert_eq!(a + b, PotionCounts::new(5, 4, 1));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: PotionCounts = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_get_by_tier() {
        let counts = PotionCounts::new(1, 2, 3);
        assert_eq!(counts.get(PotionTier::Lesser), 1);
        assert_eq!(counts.get(PotionTier::Greater), 2);
        assert_eq!(counts.get(PotionTier::Superior), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PotionCounts::new(4, 0, 12).to_string(),
            "4 Lesser, 0 Greater, 12 Superior"
        );
    }
}
