use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use imp_instruments::catalog::{Catalog, SectionId, SkillType};
use imp_instruments::scoring::TypeScore;

const BAR_WIDTH: usize = 20;

/// One labelled value on a chart, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    /// Text bar, one `#` per 5%, clipped to 0..=100%.
    pub bar: String,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        let filled = (value.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
        Self {
            label: label.into(),
            value,
            value_label: format!("{value:.1}%"),
            bar: "#".repeat(filled),
        }
    }
}

/// Vertical bar chart of skill-type percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub points: Vec<ChartPoint>,
    pub value_min: f64,
    pub value_max: f64,
    pub value_step: f64,
}

/// Radar (spider) chart of the section profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub title: String,
    pub points: Vec<ChartPoint>,
}

/// Fixed per-section maximum used to normalise the radar spokes.
///
/// These are display ceilings only and intentionally differ from the
/// scorer's per-submission maxima.
pub fn chart_ceiling(section: SectionId) -> f64 {
    match section {
        SectionId::Supine => 80.0,
        SectionId::Prone => 60.0,
        SectionId::Sitting => 50.0,
        SectionId::Standing => 70.0,
        SectionId::Manipulation => 40.0,
        SectionId::General => 20.0,
    }
}

/// One bar per skill type, in canonical order. Skill types missing from
/// `type_scores` are left out.
pub fn type_chart(type_scores: &BTreeMap<SkillType, TypeScore>) -> BarChart {
    let points = SkillType::ALL
        .iter()
        .filter_map(|skill| {
            let score = type_scores.get(skill)?;
            tracing::debug!(skill = %skill, percentage = score.percentage, "type chart point");
            Some(ChartPoint::new(skill.label(), score.percentage))
        })
        .collect();

    BarChart {
        title: "Scores by skill type".to_string(),
        subtitle: "Percentage reached in each area".to_string(),
        points,
        value_min: 0.0,
        value_max: 100.0,
        value_step: 20.0,
    }
}

/// One spoke per section, labelled with the section's short title.
pub fn section_chart(catalog: &Catalog, sections: &BTreeMap<SectionId, i64>) -> RadarChart {
    let points = SectionId::ALL
        .iter()
        .filter_map(|&id| {
            let total = *sections.get(&id)?;
            let value = total as f64 / chart_ceiling(id) * 100.0;
            tracing::debug!(section = %id, value, "section chart point");
            Some(ChartPoint::new(catalog.section(id).short_title.clone(), value))
        })
        .collect();

    RadarChart {
        title: "Developmental profile".to_string(),
        points,
    }
}
