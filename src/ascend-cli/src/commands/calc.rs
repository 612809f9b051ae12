//! Calc command handler
//!
//! Non-interactive counterpart of the calculator: champions come from the
//! command line, already validated by the same rules as the prompts.

use anyhow::Result;
use ascend::calculator::describe_cost;
use ascend::{ChampionEntry, PotionTotals};
use tracing::info;

use crate::config::Config;

/// Render the per-champion breakdown (optional) followed by the totals
pub fn render(champions: &[ChampionEntry], show_champion_cost: bool) -> String {
    let mut out = String::new();

    if show_champion_cost {
        for entry in champions {
            out.push_str(&describe_cost(entry));
            out.push('\n');
        }
        out.push('\n');
    }

    let totals = PotionTotals::from_entries(champions);
    out.push_str(&totals.to_string());
    out
}

/// Handle the calc command
///
/// # Arguments
/// * `champions` - Parsed champion specs
/// * `show_champion_cost` - Force the per-champion breakdown on
pub fn handle(champions: &[ChampionEntry], show_champion_cost: bool) -> Result<()> {
    let config = Config::load()?;
    let show = show_champion_cost || config.show_champion_cost;

    info!(count = champions.len(), "Calculating totals");
    println!("{}", render(champions, show));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champions(specs: &[&str]) -> Vec<ChampionEntry> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_render_no_champions() {
        let out = render(&[], false);
        assert!(out.starts_with("Total potions needed for all champions:\n"));
        assert_eq!(out.matches("0 Lesser, 0 Greater, 0 Superior").count(), 5);
    }

    #[test]
    fn test_render_totals() {
        let out = render(&champions(&["R:F:3:4", "U:S:1:2"]), false);
        assert!(out.contains("Spirit Affinity Potions: 4 Lesser, 0 Greater, 0 Superior"));
        assert!(out.contains("Force Affinity Potions: 0 Lesser, 4 Greater, 0 Superior"));
        assert!(out.ends_with("Arcane Potions: 4 Lesser, 3 Greater, 0 Superior"));
        assert!(!out.contains("(rank"));
    }

    #[test]
    fn test_render_breakdown() {
        let out = render(&champions(&["U:S:1:2"]), true);
        assert!(out.starts_with(
            "Uncommon Spirit (rank 1 to 2): Affinity 4 Lesser, 0 Greater, 0 Superior | Arcane 4 Lesser, 0 Greater, 0 Superior\n\n"
        ));
    }
}
