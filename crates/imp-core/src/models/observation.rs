use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::submission::Submission;

pub const MOVEMENT_QUANTITY: &str = "cantidad_movimientos";
pub const BEHAVIORAL_STATE: &str = "estado_conductual";
pub const HEALTH_STATE: &str = "estado_salud";
pub const OTHER_OBSERVATIONS: &str = "otras_observaciones";

/// Free-text observation fields, in form order, with their display titles.
pub const OBSERVATION_FIELDS: [(&str, &str); 4] = [
    (MOVEMENT_QUANTITY, "Quantity of movement"),
    (BEHAVIORAL_STATE, "Behavioral state"),
    (HEALTH_STATE, "Health state"),
    (OTHER_OBSERVATIONS, "Other observations"),
];

/// Overall amount of spontaneous movement, marked `+`, `++` or `+++`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MovementQuantity {
    #[serde(rename = "+")]
    Low,
    #[serde(rename = "++")]
    Moderate,
    #[serde(rename = "+++")]
    High,
}

impl MovementQuantity {
    pub const ALL: [MovementQuantity; 3] = [
        MovementQuantity::Low,
        MovementQuantity::Moderate,
        MovementQuantity::High,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "+" => Some(MovementQuantity::Low),
            "++" => Some(MovementQuantity::Moderate),
            "+++" => Some(MovementQuantity::High),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MovementQuantity::Low => "+",
            MovementQuantity::Moderate => "++",
            MovementQuantity::High => "+++",
        }
    }
}

/// Evaluator notes that accompany the item ratings. Never scored and never
/// validated; unrecognised movement quantities are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Observations {
    pub movement_quantity: Option<MovementQuantity>,
    pub behavioral_state: Option<String>,
    pub health_state: Option<String>,
    pub other: Option<String>,
}

impl Observations {
    pub fn from_submission(submission: &Submission) -> Self {
        let text = |field: &str| submission.value(field).map(str::to_string);
        Self {
            movement_quantity: submission
                .value(MOVEMENT_QUANTITY)
                .and_then(MovementQuantity::parse),
            behavioral_state: text(BEHAVIORAL_STATE),
            health_state: text(HEALTH_STATE),
            other: text(OTHER_OBSERVATIONS),
        }
    }
}
