//! Reference data for champions
//!
//! Closed enumerations for the champion attributes that drive potion costs:
//! rarity picks the cost row, affinity picks the bucket that affinity potions
//! are counted into. Each value carries the single-letter code typed at the
//! prompts and a display name.

mod affinity;
mod rarity;

pub use affinity::{Affinity, AFFINITIES};
pub use rarity::{Rarity, RARITIES};

/// Normalize a single-letter code typed by the user.
///
/// Returns `None` unless the trimmed input is exactly one character.
pub(crate) fn code_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(letter.to_ascii_uppercase())
}
