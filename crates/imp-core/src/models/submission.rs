use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::observation::Observations;

pub const PATIENT_ID: &str = "patientId";
pub const EVALUATION_DATE: &str = "evaluationDate";
pub const EVALUATOR: &str = "evaluator";
pub const AGE_WEEKS: &str = "age_weeks";

/// An identifying field every submission must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Required identifying fields, in the order they are checked.
pub const REQUIRED_FIELDS: [RequiredField; 3] = [
    RequiredField {
        name: PATIENT_ID,
        label: "patient ID",
    },
    RequiredField {
        name: EVALUATION_DATE,
        label: "evaluation date",
    },
    RequiredField {
        name: EVALUATOR,
        label: "evaluator",
    },
];

/// One evaluation form as submitted: a flat, unordered mapping from field
/// name (identifying fields, item ids, observation fields) to raw text.
///
/// Absent fields and JSON `null` are the same thing. Numbers and booleans
/// are kept as their text form so item values can be posted either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, serde_json::Value>",
    into = "HashMap<String, String>"
)]
pub struct Submission {
    fields: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    /// Raw text of `field`, which may be empty.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Text of `field` if it was answered, i.e. present and non-empty.
    pub fn value(&self, field: &str) -> Option<&str> {
        self.get(field).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn patient_id(&self) -> Option<&str> {
        self.value(PATIENT_ID)
    }

    pub fn evaluation_date(&self) -> Option<&str> {
        self.value(EVALUATION_DATE)
    }

    pub fn evaluator(&self) -> Option<&str> {
        self.value(EVALUATOR)
    }

    /// Postmenstrual age in weeks, if given as a whole number.
    pub fn age_weeks(&self) -> Option<u32> {
        self.value(AGE_WEEKS).and_then(|v| v.trim().parse().ok())
    }

    /// The evaluation date as a calendar date (`YYYY-MM-DD`).
    pub fn evaluation_day(&self) -> Result<jiff::civil::Date, CoreError> {
        let raw = self
            .evaluation_date()
            .ok_or_else(|| CoreError::MissingField(EVALUATION_DATE.to_string()))?;
        raw.trim()
            .parse::<jiff::civil::Date>()
            .map_err(|source| CoreError::InvalidDate {
                value: raw.to_string(),
                source,
            })
    }

    pub fn observations(&self) -> Observations {
        Observations::from_submission(self)
    }
}

impl From<HashMap<String, serde_json::Value>> for Submission {
    fn from(raw: HashMap<String, serde_json::Value>) -> Self {
        let fields = raw
            .into_iter()
            .filter_map(|(field, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((field, text))
            })
            .collect();
        Self { fields }
    }
}

impl From<Submission> for HashMap<String, String> {
    fn from(submission: Submission) -> Self {
        submission.fields
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }
}
