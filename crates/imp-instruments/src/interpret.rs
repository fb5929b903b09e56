use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;

/// Coarse qualitative reading of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    /// Below 25% of the catalog ceiling.
    DetailedEvaluation,
    /// 25% up to (not including) 50%.
    CloseFollowUp,
    /// 50% up to (not including) 75%.
    WithinExpected,
    /// 75% and above.
    AboveExpected,
}

impl Interpretation {
    pub fn message(&self) -> &'static str {
        match self {
            Interpretation::DetailedEvaluation => {
                "The score indicates that a detailed evaluation is recommended."
            }
            Interpretation::CloseFollowUp => {
                "The score indicates that close follow-up is recommended."
            }
            Interpretation::WithinExpected => {
                "The score indicates performance within the expected range."
            }
            Interpretation::AboveExpected => {
                "The score indicates performance above the expected range."
            }
        }
    }

    fn from_percentage(percentage: f64) -> Self {
        if percentage < 25.0 {
            Interpretation::DetailedEvaluation
        } else if percentage < 50.0 {
            Interpretation::CloseFollowUp
        } else if percentage < 75.0 {
            Interpretation::WithinExpected
        } else {
            Interpretation::AboveExpected
        }
    }
}

/// Maps a total score onto an [`Interpretation`] using flat thresholds over
/// the catalog-wide maximum.
pub struct Interpreter<'a> {
    catalog: &'a Catalog,
    max_possible: i64,
}

impl<'a> Interpreter<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            max_possible: catalog.max_possible(),
        }
    }

    pub fn max_possible(&self) -> i64 {
        self.max_possible
    }

    /// Unrounded share of the catalog ceiling, 0 for an empty catalog.
    pub fn percentage(&self, total: i64) -> f64 {
        if self.max_possible <= 0 {
            return 0.0;
        }
        total as f64 / self.max_possible as f64 * 100.0
    }

    /// `age_weeks` does not influence the result. The age-band percentile
    /// table is only looked up so the applicable band shows in the logs.
    pub fn interpret(&self, total: i64, age_weeks: Option<u32>) -> Interpretation {
        let percentage = self.percentage(total);
        let interpretation = Interpretation::from_percentage(percentage);

        let band = age_weeks.and_then(|weeks| self.catalog.age_band_for(weeks));
        let outside = age_weeks
            .zip(self.catalog.age_range())
            .filter(|(weeks, range)| !range.contains(weeks));
        if let Some((weeks, range)) = outside {
            tracing::warn!(
                age_weeks = weeks,
                min_weeks = *range.start(),
                max_weeks = *range.end(),
                "age outside the normative age bands"
            );
        }
        tracing::debug!(
            total,
            percentage,
            ?age_weeks,
            band = ?band.map(|b| (b.min_weeks, b.max_weeks)),
            ?interpretation,
            "score interpreted"
        );
        interpretation
    }
}
