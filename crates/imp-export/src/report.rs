use serde::Serialize;

use imp_core::models::observation::{
    BEHAVIORAL_STATE, HEALTH_STATE, MovementQuantity, OBSERVATION_FIELDS, OTHER_OBSERVATIONS,
};
use imp_core::models::submission::Submission;
use imp_instruments::analysis::DetailedAnalysis;
use imp_instruments::catalog::{Catalog, Item, ItemOption, ObservationMode, SectionId, SkillType};
use imp_instruments::scoring::{parse_value, percentage};

use crate::chart::{self, BarChart, RadarChart};

const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";
/// Heading used when the catalog does not name its instrument.
pub const UNNAMED_INSTRUMENT: &str = "Motor assessment";

fn instrument_name(catalog: &Catalog) -> String {
    catalog.name().unwrap_or(UNNAMED_INSTRUMENT).to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientInfo {
    pub patient_id: String,
    pub evaluation_date: String,
    pub age_weeks: Option<u32>,
    pub evaluator: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeRow {
    pub code: String,
    pub label: String,
    pub total: i64,
    pub max: i64,
    pub percentage: f64,
    pub percentage_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRow {
    pub id: SectionId,
    pub title: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub number: u32,
    pub title: String,
    pub skill: String,
    pub value: i64,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseSection {
    pub title: String,
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObservationRow {
    pub title: String,
    pub value: String,
}

/// Everything the results template needs for one scored evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsContext {
    pub instrument: String,
    pub patient: PatientInfo,
    pub type_rows: Vec<TypeRow>,
    pub type_total: TypeRow,
    pub type_chart: BarChart,
    pub section_rows: Vec<SectionRow>,
    pub section_chart: RadarChart,
    pub responses: Vec<ResponseSection>,
    pub observations: Vec<ObservationRow>,
    pub total_score: i64,
    pub max_possible: i64,
    pub interpretation: String,
    pub percentile: String,
    pub generated_on: String,
}

impl ResultsContext {
    /// Assemble the report from an already-computed analysis. Aggregates are
    /// taken from the analysis as-is and never recomputed here.
    pub fn new(
        catalog: &Catalog,
        submission: &Submission,
        analysis: &DetailedAnalysis,
        generated_on: jiff::civil::Date,
    ) -> Self {
        let type_rows: Vec<TypeRow> = SkillType::ALL
            .iter()
            .map(|&skill| {
                let score = analysis.type_scores.get(&skill).copied().unwrap_or_default();
                type_row(skill.code(), skill.label(), score.total, score.max, score.percentage)
            })
            .collect();

        let total = type_rows.iter().map(|r| r.total).fold(0, i64::saturating_add);
        let max = type_rows.iter().map(|r| r.max).fold(0, i64::saturating_add);
        let type_total = type_row("", "TOTAL", total, max, percentage(total, max));

        let section_rows = SectionId::ALL
            .iter()
            .map(|&id| SectionRow {
                id,
                title: catalog.section(id).title.clone(),
                total: analysis.section_scores.get(&id).copied().unwrap_or(0),
            })
            .collect();

        let responses = SectionId::ALL
            .iter()
            .map(|&id| ResponseSection {
                title: catalog.section(id).title.clone(),
                responses: section_responses(catalog, submission, id),
            })
            .collect();

        Self {
            instrument: instrument_name(catalog),
            patient: PatientInfo {
                patient_id: submission.patient_id().unwrap_or_default().to_string(),
                evaluation_date: submission.evaluation_date().unwrap_or_default().to_string(),
                age_weeks: submission.age_weeks(),
                evaluator: submission.evaluator().unwrap_or_default().to_string(),
            },
            type_chart: chart::type_chart(&analysis.type_scores),
            section_chart: chart::section_chart(catalog, &analysis.section_scores),
            type_rows,
            type_total,
            section_rows,
            responses,
            observations: observation_rows(submission),
            total_score: analysis.total_score,
            max_possible: catalog.max_possible(),
            interpretation: analysis.interpretation.clone(),
            percentile: analysis.percentile.clone(),
            generated_on: generated_on.strftime(REPORT_DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormItem {
    pub number: u32,
    pub title: String,
    pub skill: String,
    pub provoked: bool,
    pub options: Vec<ItemOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSection {
    pub title: String,
    pub items: Vec<FormItem>,
}

/// Context for the printable blank evaluation form.
#[derive(Debug, Clone, Serialize)]
pub struct BlankFormContext {
    pub instrument: String,
    pub sections: Vec<FormSection>,
    pub movement_quantities: Vec<String>,
    pub note_fields: Vec<String>,
    pub generated_on: String,
}

impl BlankFormContext {
    pub fn new(catalog: &Catalog, generated_on: jiff::civil::Date) -> Self {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| {
                let mut items: Vec<&Item> = catalog
                    .items_in(id)
                    .filter(|item| {
                        catalog.is_member(ObservationMode::Observed, &item.id)
                            || catalog.is_member(ObservationMode::Provoked, &item.id)
                    })
                    .collect();
                items.sort_by_key(|item| item.sequence_number);

                FormSection {
                    title: catalog.section(id).title.clone(),
                    items: items
                        .into_iter()
                        .map(|item| FormItem {
                            number: item.sequence_number,
                            title: item.title.clone(),
                            skill: item.skill_type.code().to_string(),
                            provoked: catalog.is_member(ObservationMode::Provoked, &item.id),
                            options: item.options.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        let note_fields = OBSERVATION_FIELDS
            .iter()
            .filter(|(field, _)| {
                [BEHAVIORAL_STATE, HEALTH_STATE, OTHER_OBSERVATIONS].contains(field)
            })
            .map(|(_, title)| title.to_string())
            .collect();

        Self {
            instrument: instrument_name(catalog),
            sections,
            movement_quantities: MovementQuantity::ALL
                .iter()
                .map(|q| q.symbol().to_string())
                .collect(),
            note_fields,
            generated_on: generated_on.strftime(REPORT_DATE_FORMAT).to_string(),
        }
    }
}

fn type_row(code: &str, label: &str, total: i64, max: i64, percentage: f64) -> TypeRow {
    TypeRow {
        code: code.to_string(),
        label: label.to_string(),
        total,
        max,
        percentage,
        percentage_label: format!("{percentage:.1}%"),
    }
}

/// Answered items of one section, by sequence number. Unparsable values are
/// skipped the same way the scorer skips them.
fn section_responses(catalog: &Catalog, submission: &Submission, id: SectionId) -> Vec<Response> {
    let mut responses: Vec<Response> = catalog
        .items_in(id)
        .filter_map(|item| {
            let value = submission.value(&item.id).and_then(parse_value)?;
            Some(Response {
                number: item.sequence_number,
                title: item.title.clone(),
                skill: item.skill_type.code().to_string(),
                value,
                answer: item.option_text(value).unwrap_or_default().to_string(),
            })
        })
        .collect();
    responses.sort_by_key(|r| r.number);
    responses
}

fn observation_rows(submission: &Submission) -> Vec<ObservationRow> {
    let observations = submission.observations();
    let values = [
        observations
            .movement_quantity
            .map(|q| q.symbol().to_string()),
        observations.behavioral_state,
        observations.health_state,
        observations.other,
    ];

    OBSERVATION_FIELDS
        .iter()
        .zip(values)
        .filter_map(|((_, title), value)| {
            value.map(|value| ObservationRow {
                title: title.to_string(),
                value,
            })
        })
        .collect()
}
