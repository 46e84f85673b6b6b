use serde::{Deserialize, Serialize};

use crate::scoring::{Category, ScoreResult};

/// Points granted for the first submission.
pub const FIRST_SUBMISSION_POINTS: u32 = 50;

/// One point per this many kg CO2e of improvement.
pub const POINTS_PER_KG: f64 = 10.0;

/// Points earned by a submission, compared with the one before it.
///
/// The first submission earns a flat bonus; later ones earn points only when
/// the total went down.
pub fn points_awarded(previous: Option<f64>, current: f64) -> u32 {
    match previous {
        None => FIRST_SUBMISSION_POINTS,
        Some(previous) if current < previous => {
            ((previous - current) / POINTS_PER_KG).floor() as u32
        }
        Some(_) => 0,
    }
}

/// Whether a submission extends the streak: the first one always does,
/// later ones only when the total went down.
pub fn improved(previous: Option<f64>, current: f64) -> bool {
    previous.map_or(true, |previous| current < previous)
}

/// Streak keeps growing while submissions are at most this many days apart.
pub const STREAK_CONTINUE_DAYS: u64 = 1;
/// Streak starts over after a gap longer than this many days.
pub const STREAK_RESET_DAYS: u64 = 7;

/// Consecutive improving submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

impl Streak {
    /// Streak after a new submission.
    ///
    /// `days_since_last` is `None` when there is no earlier submission, which
    /// resets like a long gap. Gaps between the two limits leave the current
    /// streak as it is.
    pub fn next(self, days_since_last: Option<u64>, improved: bool) -> Streak {
        let increment = u32::from(improved);
        let current = match days_since_last {
            Some(days) if days <= STREAK_CONTINUE_DAYS => self.current + increment,
            Some(days) if days <= STREAK_RESET_DAYS => self.current,
            _ => increment,
        };
        Streak {
            current,
            longest: self.longest.max(current),
        }
    }
}

pub fn average_score(totals: &[f64]) -> Option<f64> {
    if totals.is_empty() {
        None
    } else {
        Some(totals.iter().sum::<f64>() / totals.len() as f64)
    }
}

/// A category's part of the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub score: f64,
    /// Percent of the total score, 0 when the total is not positive.
    pub percentage: f64,
}

impl ScoreResult {
    /// Non-zero categories, largest first.
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        let mut shares = self
            .scores
            .iter()
            .filter(|(_, score)| **score != 0.0)
            .map(|(&category, &score)| CategoryShare {
                category,
                score,
                percentage: if self.total_score > 0.0 {
                    score / self.total_score * 100.0
                } else {
                    0.0
                },
            })
            .collect::<Vec<CategoryShare>>();
        shares.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.category.cmp(&b.category)));
        shares
    }
}
