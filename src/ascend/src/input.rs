//! Parsing and validation of typed answers
//!
//! Each prompt field has a parser turning a raw line into a typed value or an
//! [`InputError`]. The error's `Display` text is what the user sees before
//! being asked again, so nothing unvalidated ever reaches the cost table.

use std::num::IntErrorKind;

use thiserror::Error;

use crate::cost::Rank;
use crate::reference::{code_letter, Affinity, Rarity};

/// Letter that ends champion entry at the rarity prompt
pub const FINISH_CODE: char = 'Q';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid rarity. Please enter one of U, R, E, L, M (or Q to finish).")]
    InvalidRarity(String),

    #[error("Invalid affinity. Please enter one of S, F, M, V.")]
    InvalidAffinity(String),

    #[error("Invalid input. Please enter a number.")]
    NotANumber(String),

    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// End rank outside 1..=6 or below the start rank; one message covers both
    #[error(
        "Please enter a number between 1 and 6 that is not lower than the starting rank ({start})."
    )]
    EndRank { value: i64, start: Rank },

    #[error("Expected RARITY:AFFINITY:START:END (e.g. R:F:3:4), got {0:?}")]
    InvalidSpec(String),
}

/// Answer to the rarity prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityAnswer {
    Champion(Rarity),
    Finish,
}

pub fn parse_rarity(input: &str) -> Result<RarityAnswer, InputError> {
    if code_letter(input) == Some(FINISH_CODE) {
        return Ok(RarityAnswer::Finish);
    }
    Rarity::from_code(input)
        .map(RarityAnswer::Champion)
        .ok_or_else(|| InputError::InvalidRarity(input.trim().to_string()))
}

pub fn parse_affinity(input: &str) -> Result<Affinity, InputError> {
    Affinity::from_code(input)
        .ok_or_else(|| InputError::InvalidAffinity(input.trim().to_string()))
}

/// Parse an integer. Integers too large for `i64` saturate, so they still
/// fail the range checks rather than being reported as non-numeric.
pub fn parse_number(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::NotANumber(trimmed.to_string())),
        },
    }
}

/// Parse an integer within `min..=max`
pub fn parse_in_range(input: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value = parse_number(input)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { value, min, max })
    }
}

pub fn parse_start_rank(input: &str) -> Result<Rank, InputError> {
    let value = parse_number(input)?;
    Rank::from_number(value).ok_or(InputError::OutOfRange {
        value,
        min: Rank::MIN.get().into(),
        max: Rank::MAX.get().into(),
    })
}

pub fn parse_end_rank(input: &str, start: Rank) -> Result<Rank, InputError> {
    let value = parse_number(input)?;
    Rank::from_number(value)
        .filter(|end| *end >= start)
        .ok_or(InputError::EndRank { value, start })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(n: u8) -> Rank {
        Rank::new(n).unwrap()
    }

    #[test]
    fn test_parse_rarity() {
        assert_eq!(parse_rarity("e"), Ok(RarityAnswer::Champion(Rarity::Epic)));
        assert_eq!(parse_rarity("Q"), Ok(RarityAnswer::Finish));
        assert_eq!(parse_rarity(" q\n"), Ok(RarityAnswer::Finish));
        assert_eq!(
            parse_rarity("x"),
            Err(InputError::InvalidRarity("x".to_string()))
        );
    }

    #[test]
    fn test_parse_affinity() {
        assert_eq!(parse_affinity("v"), Ok(Affinity::Void));
        assert!(matches!(
            parse_affinity("Q"),
            Err(InputError::InvalidAffinity(_))
        ));
    }

    #[test]
    fn test_start_rank_rejections() {
        assert_eq!(parse_start_rank("3"), Ok(rank(3)));
        assert!(matches!(
            parse_start_rank("0"),
            Err(InputError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_start_rank("7"),
            Err(InputError::OutOfRange { value: 7, .. })
        ));
        assert_eq!(
            parse_start_rank("abc"),
            Err(InputError::NotANumber("abc".to_string()))
        );
    }

    #[test]
    fn test_end_rank_rejections() {
        assert_eq!(parse_end_rank("4", rank(4)), Ok(rank(4)));
        assert_eq!(parse_end_rank("6", rank(1)), Ok(rank(6)));
        assert_eq!(
            parse_end_rank("2", rank(4)),
            Err(InputError::EndRank {
                value: 2,
                start: rank(4)
            })
        );
        assert!(matches!(
            parse_end_rank("7", rank(1)),
            Err(InputError::EndRank { value: 7, .. })
        ));
        assert!(matches!(
            parse_end_rank("six", rank(1)),
            Err(InputError::NotANumber(_))
        ));
    }

    #[test]
    fn test_overflowing_number_is_out_of_range() {
        let huge = "99999999999999999999";
        assert!(matches!(
            parse_start_rank(huge),
            Err(InputError::OutOfRange { value: i64::MAX, .. })
        ));
        assert!(matches!(
            parse_start_rank("-99999999999999999999"),
            Err(InputError::OutOfRange { value: i64::MIN, .. })
        ));
        assert!(matches!(
            parse_end_rank(huge, rank(1)),
            Err(InputError::EndRank { value: i64::MAX, .. })
        ));
        assert!(matches!(
            parse_in_range(huge, 1, 5),
            Err(InputError::OutOfRange { min: 1, max: 5, .. })
        ));
        assert_eq!(
            parse_start_rank(huge).unwrap_err().to_string(),
            "Please enter a number between 1 and 6."
        );
    }

    #[test]
    fn test_not_a_number_message_differs_from_range_message() {
        let parse = InputError::NotANumber("abc".into()).to_string();
        let range = InputError::OutOfRange {
            value: 9,
            min: 1,
            max: 6,
        }
        .to_string();
        assert_ne!(parse, range);
        assert_eq!(range, "Please enter a number between 1 and 6.");
    }

    #[test]
    fn test_end_rank_message_names_both_constraints() {
        let message = InputError::EndRank {
            value: 2,
            start: rank(4),
        }
        .to_string();
        assert!(message.contains("between 1 and 6"));
        assert!(message.contains("starting rank (4)"));
    }
}
