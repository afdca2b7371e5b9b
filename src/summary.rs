//! README progress badges: solved counts overall and per difficulty.

use std::collections::HashMap;
use std::path::Path;

use crate::api::{Catalog, Difficulty};
use crate::error::{SiteError, SiteResult};
use crate::solutions::SolutionStore;

const BADGE_PREFIX: &str = "<img src=\"https://img.shields.io/badge/";
const BADGE_SUFFIX: &str = ".svg?style=flat-square\" />\n";

/// README line that starts the badge block.
pub const MARKER: &str = "<img src=\"https://img.shields.io/badge/Solved";

/// Per-difficulty totals and solved counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Denominator for the overall badge, as reported by the site.
    pub num_total: u32,
    total: HashMap<Difficulty, u32>,
    solved: HashMap<Difficulty, u32>,
}

impl Progress {
    /// Count catalog entries and solved entries per difficulty.
    pub fn scan(catalog: &Catalog, store: &SolutionStore) -> SiteResult<Self> {
        let mut progress = Self {
            num_total: catalog.num_total,
            ..Default::default()
        };
        for entry in &catalog.entries {
            let solved = store.is_solved(&entry.padded_id())?;
            progress.record(entry.difficulty, solved);
        }
        Ok(progress)
    }

    pub fn record(&mut self, difficulty: Difficulty, solved: bool) {
        *self.total.entry(difficulty).or_default() += 1;
        if solved {
            *self.solved.entry(difficulty).or_default() += 1;
        }
    }

    pub fn total(&self, difficulty: Difficulty) -> u32 {
        self.total.get(&difficulty).copied().unwrap_or(0)
    }

    pub fn solved(&self, difficulty: Difficulty) -> u32 {
        self.solved.get(&difficulty).copied().unwrap_or(0)
    }

    pub fn num_solved(&self) -> u32 {
        self.solved.values().sum()
    }

    /// The four badge lines: overall, easy, medium, hard.
    pub fn badges(&self) -> [String; 4] {
        let percentage = format_percentage(solved_percentage(self.num_solved(), self.num_total));
        let difficulty_badge = |difficulty: Difficulty, color: &str| {
            format!(
                "{BADGE_PREFIX}{difficulty}-{}/{}-{color}{BADGE_SUFFIX}",
                self.solved(difficulty),
                self.total(difficulty)
            )
        };
        [
            format!(
                "{BADGE_PREFIX}Solved-{}/{}%20=%20{percentage}%25-blue{BADGE_SUFFIX}",
                self.num_solved(),
                self.num_total
            ),
            difficulty_badge(Difficulty::Easy, "5CB85D"),
            difficulty_badge(Difficulty::Medium, "F0AE4E"),
            difficulty_badge(Difficulty::Hard, "D95450"),
        ]
    }
}

/// `solved / total * 100`, rounded to two decimals. Zero when `total` is zero.
pub fn solved_percentage(solved: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_hundredths(solved as f64 / total as f64 * 100.0)
}

/// Round the exact binary value to two decimals, ties to even.
fn round_hundredths(value: f64) -> f64 {
    // A tie at the third decimal is exactly an odd multiple of 1/8.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let below = (eighths * 25.0 - 1.0) / 2.0;
        let hundredths = if below % 2.0 == 0.0 { below } else { below + 1.0 };
        return hundredths / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Shortest decimal form that keeps at least one fractional digit (`25.0`, `33.33`).
pub fn format_percentage(value: f64) -> String {
    format!("{value:?}")
}

/// Replace the badge block in `lines`: marker line, then +2, +3, +4.
pub fn replace_badges(lines: &mut [String], badges: [String; 4]) -> Option<()> {
    let start = lines.iter().position(|l| l.starts_with(MARKER))?;
    if start + 4 >= lines.len() {
        return None;
    }
    let [solved, easy, medium, hard] = badges;
    lines[start] = solved;
    lines[start + 2] = easy;
    lines[start + 3] = medium;
    lines[start + 4] = hard;
    Some(())
}

/// Rewrite the badge block of the README at `readme`.
pub fn update_readme(readme: &Path, progress: &Progress) -> SiteResult<()> {
    let text = std::fs::read_to_string(readme).map_err(|e| SiteError::io(readme, e))?;
    let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

    replace_badges(&mut lines, progress.badges()).ok_or_else(|| SiteError::MarkerMissing {
        path: readme.display().to_string(),
    })?;

    std::fs::write(readme, lines.concat()).map_err(|e| SiteError::io(readme, e))?;
    tracing::info!(
        path = %readme.display(),
        solved = progress.num_solved(),
        total = progress.num_total,
        "updated summary badges"
    );
    Ok(())
}
