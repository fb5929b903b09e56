use imp_core::models::submission::Submission;
use imp_instruments::catalog::Catalog;
use imp_instruments::Instrument;
use imp_instruments::instruments::imp::Imp;
use imp_instruments::validation::{ValidationError, ValidationOutcome, Validator};

const MINI: &str = include_str!("fixtures/mini_catalog.json");

fn identified() -> Submission {
    Submission::new()
        .with("patientId", "P1")
        .with("evaluationDate", "2024-01-01")
        .with("evaluator", "Dr.X")
}

#[test]
fn identified_submission_with_valid_value_passes() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);

    let submission = identified().with("control_cabeza", "2");
    assert_eq!(validator.validate(&submission), Ok(()));
    assert!(validator.validate_all(&submission).is_empty());
}

#[test]
fn identified_submission_without_items_passes() {
    let catalog = Imp.catalog().unwrap();
    assert_eq!(Validator::new(&catalog).validate(&identified()), Ok(()));
}

#[test]
fn missing_patient_id_is_reported_first() {
    let catalog = Imp.catalog().unwrap();
    let submission = Submission::new()
        .with("evaluationDate", "2024-01-01")
        .with("evaluator", "Dr.X")
        .with("control_cabeza", "9");

    let err = Validator::new(&catalog).validate(&submission).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingField {
            field: "patientId".to_string(),
            label: "patient ID".to_string(),
        }
    );
    assert_eq!(err.to_string(), "the patient ID field is required");
}

#[test]
fn required_fields_are_checked_in_fixed_order() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);

    let err = validator
        .validate(&Submission::new().with("patientId", "P1"))
        .unwrap_err();
    assert!(matches!(err, ValidationError::MissingField { field, .. } if field == "evaluationDate"));

    let err = validator
        .validate(
            &Submission::new()
                .with("patientId", "P1")
                .with("evaluationDate", "2024-01-01"),
        )
        .unwrap_err();
    assert!(matches!(err, ValidationError::MissingField { field, .. } if field == "evaluator"));
}

#[test]
fn empty_identifying_field_counts_as_missing() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified().with("evaluator", "");

    let err = Validator::new(&catalog).validate(&submission).unwrap_err();
    assert_eq!(err.to_string(), "the evaluator field is required");
}

#[test]
fn non_numeric_value_is_rejected() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified().with("control_cabeza", "abc");

    let err = Validator::new(&catalog).validate(&submission).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonNumeric {
            item_id: "control_cabeza".to_string(),
            title: "Control de movimientos de la cabeza".to_string(),
            value: "abc".to_string(),
        }
    );
}

#[test]
fn out_of_scale_value_is_rejected_with_item_title() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified().with("control_cabeza", "9");

    let err = Validator::new(&catalog).validate(&submission).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidValue { value: 9, .. }));
    assert_eq!(
        err.to_string(),
        "invalid value for Control de movimientos de la cabeza"
    );
}

#[test]
fn zero_is_only_valid_where_the_scale_has_it() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);

    assert!(validator
        .validate(&identified().with("variedad_alcance_supino", "0"))
        .is_ok());
    assert!(validator
        .validate(&identified().with("control_cabeza", "0"))
        .is_err());
}

#[test]
fn first_invalid_item_follows_catalog_order() {
    let catalog = Imp.catalog().unwrap();
    // `elevacion_cabeza_prono` (#22) precedes `fluidez_comportamiento_motor` (#80).
    let submission = identified()
        .with("fluidez_comportamiento_motor", "7")
        .with("elevacion_cabeza_prono", "9");

    let err = Validator::new(&catalog).validate(&submission).unwrap_err();
    assert!(
        matches!(err, ValidationError::InvalidValue { item_id, .. } if item_id == "elevacion_cabeza_prono")
    );
}

#[test]
fn result_does_not_depend_on_field_insertion_order() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);

    let pairs = [
        ("patientId", "P1"),
        ("evaluationDate", "2024-01-01"),
        ("evaluator", "Dr.X"),
        ("control_cabeza", "2"),
        ("fluidez_comportamiento_motor", "7"),
        ("elevacion_cabeza_prono", "x"),
    ];
    let forward: Submission = pairs.iter().copied().collect();
    let backward: Submission = pairs.iter().rev().copied().collect();

    assert_eq!(validator.validate(&forward), validator.validate(&backward));
    assert_eq!(
        validator.validate_all(&forward),
        validator.validate_all(&backward)
    );
}

#[test]
fn validate_all_reports_every_violation_in_order() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);
    let submission = Submission::new()
        .with("evaluator", "Dr.X")
        .with("fluidez_comportamiento_motor", "7")
        .with("control_cabeza", "abc")
        .with("elevacion_cabeza_prono", "9");

    let errors = validator.validate_all(&submission);
    let summary: Vec<String> = errors
        .iter()
        .map(|e| match e {
            ValidationError::MissingField { field, .. } => format!("missing:{field}"),
            ValidationError::NonNumeric { item_id, .. } => format!("nan:{item_id}"),
            ValidationError::InvalidValue { item_id, .. } => format!("invalid:{item_id}"),
            ValidationError::Internal { .. } => "internal".to_string(),
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            "missing:patientId",
            "missing:evaluationDate",
            "nan:control_cabeza",
            "invalid:elevacion_cabeza_prono",
            "invalid:fluidez_comportamiento_motor",
        ]
    );

    assert_eq!(validator.validate(&submission), Err(errors[0].clone()));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified().with("control_cabeza", " 2 ");
    assert!(Validator::new(&catalog).validate(&submission).is_ok());
}

#[test]
fn blank_item_values_are_unanswered() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified().with("control_cabeza", "");
    assert!(Validator::new(&catalog).validate(&submission).is_ok());
}

#[test]
fn unknown_fields_are_ignored() {
    let catalog = Imp.catalog().unwrap();
    let submission = identified()
        .with("notes", "free text")
        .with("estado_conductual", "alerta");
    assert!(Validator::new(&catalog).validate(&submission).is_ok());
}

#[test]
fn outcome_pairs_validity_with_message() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog);

    assert_eq!(
        validator.outcome(&identified()),
        ValidationOutcome {
            valid: true,
            message: String::new(),
        }
    );

    let outcome = validator.outcome(&identified().with("control_cabeza", "9"));
    assert!(!outcome.valid);
    assert_eq!(
        outcome.message,
        "invalid value for Control de movimientos de la cabeza"
    );
}

#[test]
fn fixture_catalog_scales() {
    let catalog = Catalog::from_json(MINI).unwrap();
    let validator = Validator::new(&catalog);

    assert!(validator
        .validate(&identified().with("reach_adapt", "0"))
        .is_ok());
    assert!(validator
        .validate(&identified().with("head", "0"))
        .is_err());
    assert!(validator
        .validate(&identified().with("control_cabeza", "9"))
        .is_ok());
}

#[test]
fn errors_serialize_with_a_kind_tag() {
    let err = ValidationError::InvalidValue {
        item_id: "head".to_string(),
        title: "Head".to_string(),
        value: 9,
    };
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "invalid_value");
    assert_eq!(json["item_id"], "head");
    assert_eq!(json["value"], 9);
}

#[test]
fn added_checks_run_after_the_catalog_checks() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog).with_check(|submission| {
        (submission.get("evaluator") == Some("Dr.X")).then(|| ValidationError::MissingField {
            field: "supervisor".to_string(),
            label: "supervisor".to_string(),
        })
    });

    let errors = validator.validate_all(&identified().with("control_cabeza", "9"));
    assert_eq!(errors.len(), 2);
    assert!(matches!(&errors[0], ValidationError::InvalidValue { item_id, .. } if item_id == "control_cabeza"));
    assert!(matches!(&errors[1], ValidationError::MissingField { field, .. } if field == "supervisor"));

    let err = validator.validate(&identified()).unwrap_err();
    assert_eq!(err.to_string(), "the supervisor field is required");
}

#[test]
fn panicking_check_becomes_an_internal_error() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog).with_check(|submission| {
        let weeks: u32 = submission
            .value("ageWeeks")
            .map(|raw| raw.parse().unwrap())
            .unwrap_or_default();
        if weeks > 200 {
            panic!("age of {weeks} weeks is not plausible");
        }
        None
    });
    let submission = identified().with("ageWeeks", "250");

    let err = validator.validate(&submission).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Internal {
            detail: "age of 250 weeks is not plausible".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "validation error: age of 250 weeks is not plausible"
    );
    assert_eq!(validator.validate_all(&submission), vec![err.clone()]);

    let outcome = validator.outcome(&submission);
    assert!(!outcome.valid);
    assert_eq!(outcome.message, err.to_string());

    assert_eq!(validator.validate(&identified().with("ageWeeks", "40")), Ok(()));
}

#[test]
fn static_panic_message_is_kept_as_detail() {
    let catalog = Imp.catalog().unwrap();
    let validator = Validator::new(&catalog).with_check(|_| panic!("rule table missing"));

    assert_eq!(
        validator.validate(&identified()),
        Err(ValidationError::Internal {
            detail: "rule table missing".to_string(),
        })
    );
}
