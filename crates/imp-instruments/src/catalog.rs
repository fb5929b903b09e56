use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CatalogError;

/// Positional or contextual grouping of items. Each section owns a
/// contiguous range of sequence numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionId {
    Supine,
    Prone,
    Sitting,
    Standing,
    Manipulation,
    General,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Supine,
        SectionId::Prone,
        SectionId::Sitting,
        SectionId::Standing,
        SectionId::Manipulation,
        SectionId::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Supine => "supine",
            SectionId::Prone => "prone",
            SectionId::Sitting => "sitting",
            SectionId::Standing => "standing",
            SectionId::Manipulation => "manipulation",
            SectionId::General => "general",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-cutting skill dimension. Every item belongs to exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum SkillType {
    #[serde(rename = "P")]
    Performance,
    #[serde(rename = "V")]
    Variation,
    #[serde(rename = "A")]
    Adaptability,
    #[serde(rename = "S")]
    Symmetry,
    #[serde(rename = "F")]
    Fluency,
}

impl SkillType {
    pub const ALL: [SkillType; 5] = [
        SkillType::Performance,
        SkillType::Variation,
        SkillType::Adaptability,
        SkillType::Symmetry,
        SkillType::Fluency,
    ];

    /// Single-letter code used on the printed form (P, V, A, S, F).
    pub fn code(&self) -> &'static str {
        match self {
            SkillType::Performance => "P",
            SkillType::Variation => "V",
            SkillType::Adaptability => "A",
            SkillType::Symmetry => "S",
            SkillType::Fluency => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillType::Performance => "Performance",
            SkillType::Variation => "Variation",
            SkillType::Adaptability => "Adaptability",
            SkillType::Symmetry => "Symmetry",
            SkillType::Fluency => "Fluency",
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How an item is rated during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ObservationMode {
    /// Rated from spontaneous behavior.
    Observed,
    /// Rated only when the evaluator actively elicits the behavior.
    Provoked,
}

impl ObservationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationMode::Observed => "observed",
            ObservationMode::Provoked => "provoked",
        }
    }
}

/// One answer on an item's ordinal scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemOption {
    pub value: i64,
    pub text: String,
}

/// A single assessable item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub section: SectionId,
    pub sequence_number: u32,
    pub skill_type: SkillType,
    /// Ordered answer scale. Values are unique but need not start at 0 or 1
    /// nor be contiguous.
    pub options: Vec<ItemOption>,
}

impl Item {
    pub fn max_value(&self) -> i64 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    pub fn min_value(&self) -> i64 {
        self.options.iter().map(|o| o.value).min().unwrap_or(0)
    }

    pub fn accepts(&self, value: i64) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_text(&self, value: i64) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.text.as_str())
    }
}

/// A section's display data and its inclusive sequence-number range.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Section {
    pub id: SectionId,
    pub start: u32,
    pub end: u32,
    pub title: String,
    pub short_title: String,
}

impl Section {
    pub fn contains(&self, number: u32) -> bool {
        (self.start..=self.end).contains(&number)
    }
}

/// Percentile cut points for one postmenstrual age band (in weeks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgeBand {
    pub min_weeks: u32,
    pub max_weeks: u32,
    pub p5: u32,
    pub p16: u32,
    pub p25: u32,
    pub p50: u32,
    pub p75: u32,
    pub p95: u32,
}

impl AgeBand {
    pub fn contains(&self, weeks: u32) -> bool {
        (self.min_weeks..=self.max_weeks).contains(&weeks)
    }
}

/// The immutable item catalog shared by the validator, scorer and
/// interpreter.
///
/// Construction goes through [`Catalog::new`], which enforces the
/// structural invariants; there are no mutating methods afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: Option<String>,
    items: Vec<Item>,
    index: HashMap<String, usize>,
    /// Always holds all six sections, in [`SectionId::ALL`] order.
    sections: Vec<Section>,
    observed: HashSet<String>,
    provoked: HashSet<String>,
    age_bands: Vec<AgeBand>,
}

impl Catalog {
    pub fn new<O, P>(
        items: Vec<Item>,
        sections: Vec<Section>,
        observed: O,
        provoked: P,
        age_bands: Vec<AgeBand>,
    ) -> Result<Self, CatalogError>
    where
        O: IntoIterator,
        O::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let sections = check_sections(sections)?;

        let mut index = HashMap::with_capacity(items.len());
        let mut numbers: HashMap<u32, &str> = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
            if item.options.is_empty() {
                return Err(CatalogError::NoOptions(item.id.clone()));
            }
            let mut seen = HashSet::with_capacity(item.options.len());
            for option in &item.options {
                if !seen.insert(option.value) {
                    return Err(CatalogError::DuplicateOption {
                        item_id: item.id.clone(),
                        value: option.value,
                    });
                }
            }
            if let Some(first) = numbers.insert(item.sequence_number, &item.id) {
                return Err(CatalogError::DuplicateSequence {
                    number: item.sequence_number,
                    first: first.to_string(),
                    second: item.id.clone(),
                });
            }
            let section = &sections[section_slot(item.section)];
            if !section.contains(item.sequence_number) {
                return Err(CatalogError::ItemOutsideSection {
                    item_id: item.id.clone(),
                    number: item.sequence_number,
                    section: item.section,
                    start: section.start,
                    end: section.end,
                });
            }
        }

        let observed = check_mode_set(&index, ObservationMode::Observed, observed)?;
        let provoked = check_mode_set(&index, ObservationMode::Provoked, provoked)?;
        let age_bands = check_age_bands(age_bands)?;

        Ok(Self {
            name: None,
            items,
            index,
            sections,
            observed,
            provoked,
            age_bands,
        })
    }

    /// Parse a catalog from its JSON schema representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let schema: CatalogSchema = serde_json::from_str(json)?;
        Self::from_schema(schema)
    }

    pub fn from_schema(schema: CatalogSchema) -> Result<Self, CatalogError> {
        let mut items = Vec::with_capacity(schema.items.len());
        for (id, value) in schema.items {
            let def: ItemSchema = serde_json::from_value(value)?;
            items.push(Item {
                id,
                title: def.title,
                section: def.section,
                sequence_number: def.sequence_number,
                skill_type: def.skill_type,
                options: def.options,
            });
        }

        let sections = schema
            .sections
            .into_iter()
            .map(|(id, def)| Section {
                id,
                start: def.start,
                end: def.end,
                short_title: def.short_title.unwrap_or_else(|| def.title.clone()),
                title: def.title,
            })
            .collect();

        let catalog = Self::new(
            items,
            sections,
            schema.observed,
            schema.provoked,
            schema.age_bands,
        )?;
        Ok(match schema.name {
            Some(name) => catalog.with_name(name),
            None => catalog,
        })
    }

    /// The JSON schema representation. Item key order follows catalog order.
    pub fn to_schema(&self) -> Result<CatalogSchema, CatalogError> {
        let mut items = serde_json::Map::with_capacity(self.items.len());
        for item in &self.items {
            let def = ItemSchema {
                title: item.title.clone(),
                section: item.section,
                sequence_number: item.sequence_number,
                skill_type: item.skill_type,
                options: item.options.clone(),
            };
            items.insert(item.id.clone(), serde_json::to_value(def)?);
        }

        let sections = self
            .sections
            .iter()
            .map(|s| {
                (
                    s.id,
                    SectionSchema {
                        start: s.start,
                        end: s.end,
                        title: s.title.clone(),
                        short_title: Some(s.short_title.clone()),
                    },
                )
            })
            .collect();

        Ok(CatalogSchema {
            name: self.name.clone(),
            items,
            sections,
            observed: self.ordered_ids(&self.observed),
            provoked: self.ordered_ids(&self.provoked),
            age_bands: self.age_bands.clone(),
        })
    }

    /// Attach the display name of the instrument this catalog belongs to.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Items in catalog (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[section_slot(id)]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Items declared under `section`, in catalog order.
    pub fn items_in(&self, section: SectionId) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.section == section)
    }

    pub fn is_member(&self, mode: ObservationMode, id: &str) -> bool {
        match mode {
            ObservationMode::Observed => self.observed.contains(id),
            ObservationMode::Provoked => self.provoked.contains(id),
        }
    }

    /// Items rated under `mode`, in catalog order.
    pub fn mode_items(&self, mode: ObservationMode) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |i| self.is_member(mode, &i.id))
    }

    pub fn age_bands(&self) -> &[AgeBand] {
        &self.age_bands
    }

    pub fn age_band_for(&self, weeks: u32) -> Option<&AgeBand> {
        self.age_bands.iter().find(|b| b.contains(weeks))
    }

    /// Ages (in weeks) covered by the age-band table, `None` without bands.
    pub fn age_range(&self) -> Option<RangeInclusive<u32>> {
        let first = self.age_bands.first()?;
        let last = self.age_bands.last()?;
        Some(first.min_weeks..=last.max_weeks)
    }

    /// Catalog-wide ceiling: the sum of every item's maximum option value.
    pub fn max_possible(&self) -> i64 {
        self.items.iter().map(Item::max_value).sum()
    }

    fn ordered_ids(&self, set: &HashSet<String>) -> Vec<String> {
        self.items
            .iter()
            .filter(|i| set.contains(&i.id))
            .map(|i| i.id.clone())
            .collect()
    }
}

fn section_slot(id: SectionId) -> usize {
    id as usize
}

fn check_sections(sections: Vec<Section>) -> Result<Vec<Section>, CatalogError> {
    let mut by_id: BTreeMap<SectionId, Section> = BTreeMap::new();
    for section in sections {
        if section.start > section.end {
            return Err(CatalogError::EmptySectionRange {
                section: section.id,
                start: section.start,
                end: section.end,
            });
        }
        let id = section.id;
        if by_id.insert(id, section).is_some() {
            return Err(CatalogError::DuplicateSection(id));
        }
    }

    let mut ordered = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let section = by_id
            .remove(&id)
            .ok_or(CatalogError::MissingSection(id))?;
        ordered.push(section);
    }

    for (i, a) in ordered.iter().enumerate() {
        for b in &ordered[i + 1..] {
            if a.start <= b.end && b.start <= a.end {
                return Err(CatalogError::OverlappingSections {
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }

    Ok(ordered)
}

fn check_mode_set<I>(
    index: &HashMap<String, usize>,
    mode: ObservationMode,
    ids: I,
) -> Result<HashSet<String>, CatalogError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut set = HashSet::new();
    for id in ids {
        let id = id.into();
        if !index.contains_key(&id) {
            return Err(CatalogError::UnknownModeItem {
                mode: mode.as_str(),
                item_id: id,
            });
        }
        set.insert(id);
    }
    Ok(set)
}

fn check_age_bands(mut bands: Vec<AgeBand>) -> Result<Vec<AgeBand>, CatalogError> {
    bands.sort_by_key(|b| b.min_weeks);
    for (i, band) in bands.iter().enumerate() {
        let overlaps_next = bands
            .get(i + 1)
            .is_some_and(|next| next.min_weeks <= band.max_weeks);
        if band.min_weeks > band.max_weeks || overlaps_next {
            return Err(CatalogError::InvalidAgeBand {
                min_weeks: band.min_weeks,
                max_weeks: band.max_weeks,
            });
        }
    }
    Ok(bands)
}

/// Serialized catalog: an optional instrument name, items keyed by id (key
/// order is catalog order), sections keyed by name, and the
/// observation-mode id lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub items: serde_json::Map<String, serde_json::Value>,
    pub sections: BTreeMap<SectionId, SectionSchema>,
    pub observed: Vec<String>,
    pub provoked: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub age_bands: Vec<AgeBand>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSchema {
    pub title: String,
    pub section: SectionId,
    pub sequence_number: u32,
    pub skill_type: SkillType,
    pub options: Vec<ItemOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSchema {
    pub start: u32,
    pub end: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
}
