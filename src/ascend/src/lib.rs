//! # ascend
//!
//! Potion calculator for champion ascension.
//!
//! This library provides:
//! - The fixed ascension cost table, keyed by rarity and rank
//! - Per-champion and per-collection potion totals
//! - Validated parsing of prompt answers
//! - The interactive champion collection loop over any reader/writer
//!
//! ## Example
//!
//! ```
//! use ascend::{ChampionEntry, PotionCounts, PotionTotals, Affinity};
//!
//! let champions: Vec<ChampionEntry> = ["R:F:3:4", "U:S:1:2"]
//!     .iter()
//!     .map(|spec| spec.parse())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let totals = PotionTotals::from_entries(&champions);
//! assert_eq!(totals.affinity(Affinity::Force), PotionCounts::new(0, 4, 0));
//! assert_eq!(totals.arcane(), PotionCounts::new(4, 3, 0));
//! ```

pub mod calculator;
pub mod champion;
pub mod cost;
pub mod input;
pub mod potion;
pub mod prompt;
pub mod reference;
pub mod totals;

#[doc(inline)]
pub use calculator::CalculatorOptions;
#[doc(inline)]
pub use champion::{ChampionEntry, ChampionError};
#[doc(inline)]
pub use cost::{cost_of, CostError, CostRecord, Rank, COST_TABLE};
#[doc(inline)]
pub use input::{InputError, RarityAnswer};
#[doc(inline)]
pub use potion::{PotionCounts, PotionTier};
#[doc(inline)]
pub use prompt::{PromptError, Prompter};
#[doc(inline)]
pub use reference::{Affinity, Rarity, AFFINITIES, RARITIES};
#[doc(inline)]
pub use totals::PotionTotals;
