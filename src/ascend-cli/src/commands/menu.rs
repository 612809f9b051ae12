//! Interactive menu
//!
//! Five numbered options: the ascension calculator, three reserved slots that
//! only acknowledge the choice, and exit.

use anyhow::Result;
use ascend::calculator;
use ascend::input::{self, InputError};
use ascend::{CalculatorOptions, PromptError, Prompter};
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::config::Config;

pub const CHOICE_PROMPT: &str = "Enter the number of your choice: ";

const MENU: &[&str] = &[
    "Please choose an option:",
    "1. Ascend Calculator",
    "2. Option 2",
    "3. Option 3",
    "4. Option 4",
    "5. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AscendCalculator,
    /// Reserved slot (2-4) with no behavior yet
    Reserved(u8),
    Exit,
}

pub fn parse_choice(line: &str) -> Result<MenuChoice, InputError> {
    let choice = match input::parse_in_range(line, 1, 5)? {
        1 => MenuChoice::AscendCalculator,
        5 => MenuChoice::Exit,
        n => MenuChoice::Reserved(n as u8),
    };
    Ok(choice)
}

/// Run the menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &CalculatorOptions,
) -> Result<()> {
    loop {
        for line in MENU {
            prompter.say(line)?;
        }

        let outcome = match prompter.ask(CHOICE_PROMPT, parse_choice) {
            Ok(choice) => run_choice(prompter, choice, options),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(true) => continue,
            Ok(false) => return Ok(()),
            Err(PromptError::Closed) => {
                info!("Input closed, exiting");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Returns whether the menu should be shown again
fn run_choice<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    choice: MenuChoice,
    options: &CalculatorOptions,
) -> Result<bool, PromptError> {
    match choice {
        MenuChoice::AscendCalculator => {
            prompter.say("You chose Ascend Calculator.")?;
            calculator::run(prompter, options)?;
            Ok(true)
        }
        MenuChoice::Reserved(n) => {
            prompter.say(format_args!("You chose Option {}.", n))?;
            Ok(true)
        }
        MenuChoice::Exit => {
            prompter.say("Exiting program.")?;
            Ok(false)
        }
    }
}

/// Handle the menu command against the terminal
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run(&mut prompter, &config.calculator_options())
}
