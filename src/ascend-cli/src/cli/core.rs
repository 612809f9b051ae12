//! Core CLI definitions

use ascend::ChampionEntry;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ascend")]
#[command(about = "Champion ascension potion calculator", long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu
    #[command(visible_alias = "m")]
    Menu,

    /// Calculate potions for champions given on the command line
    Calc {
        /// Champions as RARITY:AFFINITY:START:END (e.g. R:F:3:4)
        #[arg(value_name = "CHAMPION")]
        champions: Vec<ChampionEntry>,

        /// Also print each champion's own cost
        #[arg(long)]
        show_champion_cost: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Print each champion's cost as it is entered
        #[arg(long)]
        show_champion_cost: Option<bool>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
