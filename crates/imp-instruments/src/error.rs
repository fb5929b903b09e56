use thiserror::Error;

use crate::catalog::SectionId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("item '{0}' declares no options")]
    NoOptions(String),

    #[error("item '{item_id}' declares option value {value} more than once")]
    DuplicateOption { item_id: String, value: i64 },

    #[error("sequence number {number} is used by both '{first}' and '{second}'")]
    DuplicateSequence {
        number: u32,
        first: String,
        second: String,
    },

    #[error("section '{0}' is not declared")]
    MissingSection(SectionId),

    #[error("section '{0}' is declared more than once")]
    DuplicateSection(SectionId),

    #[error("section '{section}' has an empty range [{start}, {end}]")]
    EmptySectionRange {
        section: SectionId,
        start: u32,
        end: u32,
    },

    #[error("sections '{first}' and '{second}' have overlapping ranges")]
    OverlappingSections { first: SectionId, second: SectionId },

    #[error(
        "item '{item_id}' has number {number}, outside the range [{start}, {end}] of section '{section}'"
    )]
    ItemOutsideSection {
        item_id: String,
        number: u32,
        section: SectionId,
        start: u32,
        end: u32,
    },

    #[error("{mode} set references unknown item '{item_id}'")]
    UnknownModeItem { mode: &'static str, item_id: String },

    #[error("age band [{min_weeks}, {max_weeks}] is empty or overlaps another band")]
    InvalidAgeBand { min_weeks: u32, max_weeks: u32 },

    #[error("catalog schema error: {0}")]
    Schema(#[from] serde_json::Error),
}
