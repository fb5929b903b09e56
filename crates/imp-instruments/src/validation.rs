use std::panic::{self, AssertUnwindSafe};

use imp_core::models::submission::{REQUIRED_FIELDS, Submission};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::catalog::{Catalog, Item};
use crate::scoring::parse_value;

/// A single reason a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("the {label} field is required")]
    MissingField { field: String, label: String },

    #[error("non-numeric value for {title}")]
    NonNumeric {
        item_id: String,
        title: String,
        value: String,
    },

    #[error("invalid value for {title}")]
    InvalidValue {
        item_id: String,
        title: String,
        value: i64,
    },

    #[error("validation error: {detail}")]
    Internal { detail: String },
}

/// The `(valid, message)` pair handed to form front ends. `message` is
/// empty when the submission is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl From<Result<(), ValidationError>> for ValidationOutcome {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: String::new(),
            },
            Err(e) => Self {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}

/// An additional rule run after the catalog checks.
pub type Check<'a> = Box<dyn Fn(&Submission) -> Option<ValidationError> + Send + Sync + 'a>;

/// Checks submissions against a catalog.
///
/// Identifying fields are checked first, in the fixed order of
/// [`REQUIRED_FIELDS`]; item values follow in catalog order, then any
/// checks added with [`Self::with_check`]. Empty item values are treated
/// as unanswered and are never an error.
pub struct Validator<'a> {
    catalog: &'a Catalog,
    checks: Vec<Check<'a>>,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            checks: Vec::new(),
        }
    }

    /// Append a rule. A rule that panics aborts validation with
    /// [`ValidationError::Internal`].
    pub fn with_check(
        mut self,
        check: impl Fn(&Submission) -> Option<ValidationError> + Send + Sync + 'a,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Fail-fast: report the first violation only.
    pub fn validate(&self, submission: &Submission) -> Result<(), ValidationError> {
        let first = guarded(|| self.violations(submission).next()).unwrap_or_else(Some);
        match first {
            None => Ok(()),
            Some(e) => {
                tracing::warn!(
                    patient_id = submission.patient_id().unwrap_or("unknown"),
                    error = %e,
                    "submission rejected"
                );
                Err(e)
            }
        }
    }

    /// Fail-all: every violation, in the same order [`Self::validate`]
    /// would find them.
    pub fn validate_all(&self, submission: &Submission) -> Vec<ValidationError> {
        guarded(|| self.violations(submission).collect()).unwrap_or_else(|e| vec![e])
    }

    pub fn outcome(&self, submission: &Submission) -> ValidationOutcome {
        self.validate(submission).into()
    }

    fn violations<'s>(
        &'s self,
        submission: &'s Submission,
    ) -> impl Iterator<Item = ValidationError> + 's {
        let missing = REQUIRED_FIELDS.iter().filter_map(move |field| {
            submission
                .value(field.name)
                .is_none()
                .then(|| ValidationError::MissingField {
                    field: field.name.to_string(),
                    label: field.label.to_string(),
                })
        });

        let items = self
            .catalog
            .items()
            .iter()
            .filter_map(move |item| check_item(item, submission.value(&item.id)?));

        let extra = self.checks.iter().filter_map(move |check| check(submission));

        missing.chain(items).chain(extra)
    }
}

fn check_item(item: &Item, raw: &str) -> Option<ValidationError> {
    let Some(value) = parse_value(raw) else {
        return Some(ValidationError::NonNumeric {
            item_id: item.id.clone(),
            title: item.title.clone(),
            value: raw.to_string(),
        });
    };
    if item.accepts(value) {
        None
    } else {
        Some(ValidationError::InvalidValue {
            item_id: item.id.clone(),
            title: item.title.clone(),
            value,
        })
    }
}

/// Run a check, downgrading a panic into [`ValidationError::Internal`].
fn guarded<T>(check: impl FnOnce() -> T) -> Result<T, ValidationError> {
    panic::catch_unwind(AssertUnwindSafe(check)).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unexpected failure".to_string());
        tracing::error!(%detail, "validation aborted");
        ValidationError::Internal { detail }
    })
}
