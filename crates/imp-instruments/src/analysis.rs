use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{SectionId, SkillType};
use crate::interpret::{Interpretation, Interpreter};
use crate::scoring::{ScoreResult, TypeScore};

/// Placeholder carried in [`DetailedAnalysis::percentile`]; normative
/// percentiles are not computed.
pub const PERCENTILE_NOT_APPLICABLE: &str = "N/A";

/// Score summary in the shape consumed by reports and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailedAnalysis {
    pub section_scores: BTreeMap<SectionId, i64>,
    pub type_scores: BTreeMap<SkillType, TypeScore>,
    pub total_score: i64,
    pub level: Interpretation,
    pub interpretation: String,
    pub percentile: String,
}

pub fn analyze(
    interpreter: &Interpreter<'_>,
    scores: &ScoreResult,
    age_weeks: Option<u32>,
) -> DetailedAnalysis {
    let level = interpreter.interpret(scores.total, age_weeks);
    DetailedAnalysis {
        section_scores: scores.sections.clone(),
        type_scores: scores.type_scores.clone(),
        total_score: scores.total,
        level,
        interpretation: level.message().to_string(),
        percentile: PERCENTILE_NOT_APPLICABLE.to_string(),
    }
}
