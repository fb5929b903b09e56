use std::collections::BTreeMap;

use imp_core::models::submission::Submission;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, Item, ObservationMode, SectionId, SkillType};

/// Aggregate for one skill type over the items present in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypeScore {
    /// Sum of the submitted values.
    pub total: i64,
    /// Sum of the maximum option value of each *submitted* item, not the
    /// catalog-wide ceiling. Percentages are therefore only comparable
    /// between submissions with the same item coverage.
    pub max: i64,
    /// `total / max * 100` rounded to one decimal, 0 when `max` is 0.
    pub percentage: f64,
}

/// Every aggregate derived from one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub sections: BTreeMap<SectionId, i64>,
    pub type_scores: BTreeMap<SkillType, TypeScore>,
    pub observed: i64,
    pub provoked: i64,
    pub total: i64,
}

impl ScoreResult {
    pub fn section(&self, id: SectionId) -> i64 {
        self.sections.get(&id).copied().unwrap_or(0)
    }

    pub fn type_score(&self, skill: SkillType) -> TypeScore {
        self.type_scores.get(&skill).copied().unwrap_or_default()
    }
}

/// Parse a submitted value as an integer, ignoring surrounding whitespace.
pub fn parse_value(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// One-decimal percentage of `total` over `max`; 0 when `max` is not
/// positive. Exact halves round to the even digit, so 6.25 becomes 6.2.
pub fn percentage(total: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    let raw = total as f64 / max as f64 * 100.0;
    (raw * 10.0).round_ties_even() / 10.0
}

/// Computes section, skill-type, observation-mode and grand totals.
///
/// The scorer assumes the submission already passed validation but never
/// fails on bad item data: absent, empty or non-numeric values contribute
/// nothing, and sums saturate instead of overflowing.
pub struct Scorer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Scorer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn score(&self, submission: &Submission) -> ScoreResult {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| (id, self.section_total(submission, id)))
            .collect();

        let result = ScoreResult {
            sections,
            type_scores: self.type_scores(submission),
            observed: self.mode_total(submission, ObservationMode::Observed),
            provoked: self.mode_total(submission, ObservationMode::Provoked),
            total: self.grand_total(submission),
        };

        tracing::debug!(
            total = result.total,
            observed = result.observed,
            provoked = result.provoked,
            "submission scored"
        );
        result
    }

    /// Sum of the values of items declared under `section` whose sequence
    /// number also falls inside that section's range.
    pub fn section_total(&self, submission: &Submission, section: SectionId) -> i64 {
        let range = self.catalog.section(section);
        self.catalog
            .items_in(section)
            .filter(|item| range.contains(item.sequence_number))
            .filter_map(|item| item_value(submission, item))
            .fold(0, i64::saturating_add)
    }

    /// Per-skill-type totals, maxima and percentages over the items present
    /// in `submission`. All five skill types are always reported.
    ///
    /// This is the single aggregation shared by scoring, reporting and
    /// charting.
    pub fn type_scores(&self, submission: &Submission) -> BTreeMap<SkillType, TypeScore> {
        let mut scores: BTreeMap<SkillType, TypeScore> = SkillType::ALL
            .iter()
            .map(|&skill| (skill, TypeScore::default()))
            .collect();

        for item in self.catalog.items() {
            let Some(value) = item_value(submission, item) else {
                continue;
            };
            let entry = scores.entry(item.skill_type).or_default();
            entry.total = entry.total.saturating_add(value);
            entry.max = entry.max.saturating_add(item.max_value());
        }

        for score in scores.values_mut() {
            score.percentage = percentage(score.total, score.max);
        }
        scores
    }

    /// Sum of the values of items rated under `mode`.
    pub fn mode_total(&self, submission: &Submission, mode: ObservationMode) -> i64 {
        self.catalog
            .mode_items(mode)
            .filter_map(|item| item_value(submission, item))
            .fold(0, i64::saturating_add)
    }

    /// Sum over the whole catalog. Equal to the sum of the section totals
    /// because sections partition the catalog.
    pub fn grand_total(&self, submission: &Submission) -> i64 {
        self.catalog
            .items()
            .iter()
            .filter_map(|item| item_value(submission, item))
            .fold(0, i64::saturating_add)
    }
}

fn item_value(submission: &Submission, item: &Item) -> Option<i64> {
    submission.value(&item.id).and_then(parse_value)
}
