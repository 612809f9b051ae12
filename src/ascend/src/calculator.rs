//! Ascension calculator
//!
//! Collects champions interactively and reduces them into [`PotionTotals`].
//! Per champion the flow is rarity, affinity, start rank, end rank, then the
//! entry is stored and the next champion is asked for. Answering `Q` at the
//! rarity prompt ends collection; nothing else does.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::champion::ChampionEntry;
use crate::input::{self, RarityAnswer};
use crate::prompt::{PromptError, Prompter};
use crate::totals::PotionTotals;

pub const RARITY_PROMPT: &str = "Enter the rarity of the champion (U/R/E/L/M, Q to finish): ";
pub const AFFINITY_PROMPT: &str =
    "Enter the affinity of the champion (S - Spirit, F - Force, M - Magic, V - Void): ";
pub const START_RANK_PROMPT: &str = "Enter the starting rank (1-6): ";
pub const END_RANK_PROMPT: &str = "Enter the ending rank (1-6): ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Print each champion's own cost as soon as it is entered
    pub show_champion_cost: bool,
}

/// One-line summary of a single champion's cost
pub fn describe_cost(entry: &ChampionEntry) -> String {
    let cost = entry.cost();
    format!(
        "{}: Affinity {} | Arcane {}",
        entry, cost.affinity, cost.arcane
    )
}

/// Ask for one champion. `None` means the user chose to finish.
pub fn prompt_champion<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<ChampionEntry>, PromptError> {
    let rarity = match prompter.ask(RARITY_PROMPT, input::parse_rarity)? {
        RarityAnswer::Champion(rarity) => rarity,
        RarityAnswer::Finish => return Ok(None),
    };
    let affinity = prompter.ask(AFFINITY_PROMPT, input::parse_affinity)?;
    let start = prompter.ask(START_RANK_PROMPT, input::parse_start_rank)?;
    let end = prompter.ask(END_RANK_PROMPT, |line| input::parse_end_rank(line, start))?;

    Ok(Some(ChampionEntry::validated(rarity, affinity, start, end)))
}

/// Collect champions until the user finishes
pub fn collect_champions<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &CalculatorOptions,
) -> Result<Vec<ChampionEntry>, PromptError> {
    let mut champions = Vec::new();

    while let Some(entry) = prompt_champion(prompter)? {
        debug!(champion = %entry, "Added champion");
        if options.show_champion_cost {
            prompter.say(describe_cost(&entry))?;
        }
        champions.push(entry);
    }

    info!(count = champions.len(), "Finished collecting champions");
    Ok(champions)
}

/// Full calculator run: collect, total and print
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &CalculatorOptions,
) -> Result<PotionTotals, PromptError> {
    let champions = collect_champions(prompter, options)?;
    let totals = PotionTotals::from_entries(&champions);

    prompter.say("")?;
    prompter.say(totals)?;
    Ok(totals)
}
