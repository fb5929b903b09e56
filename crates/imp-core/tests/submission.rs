use imp_core::error::CoreError;
use imp_core::models::observation::{MovementQuantity, Observations};
use imp_core::models::submission::{REQUIRED_FIELDS, Submission};

#[test]
fn from_json_accepts_text_numbers_and_null() {
    let submission = Submission::from_json(
        r#"{
            "patientId": "P1",
            "evaluationDate": "2024-01-01",
            "evaluator": "Dr.X",
            "age_weeks": 40,
            "control_cabeza": 2,
            "variedad_movimientos_cabeza": "1",
            "otras_observaciones": null
        }"#,
    )
    .unwrap();

    assert_eq!(submission.len(), 6);
    assert_eq!(submission.get("control_cabeza"), Some("2"));
    assert_eq!(submission.get("variedad_movimientos_cabeza"), Some("1"));
    assert!(!submission.contains("otras_observaciones"));
    assert_eq!(submission.age_weeks(), Some(40));
}

#[test]
fn from_json_rejects_non_objects() {
    assert!(matches!(
        Submission::from_json("[1, 2, 3]"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn empty_values_are_present_but_unanswered() {
    let submission = Submission::new()
        .with("patientId", "")
        .with("control_cabeza", " ");

    assert_eq!(submission.get("patientId"), Some(""));
    assert_eq!(submission.value("patientId"), None);
    assert_eq!(submission.patient_id(), None);
    assert_eq!(submission.value("control_cabeza"), Some(" "));
    assert_eq!(submission.value("missing"), None);
}

#[test]
fn identifying_accessors() {
    let submission = Submission::new()
        .with("patientId", "P1")
        .with("evaluationDate", "2024-01-01")
        .with("evaluator", "Dr.X");

    assert_eq!(submission.patient_id(), Some("P1"));
    assert_eq!(submission.evaluation_date(), Some("2024-01-01"));
    assert_eq!(submission.evaluator(), Some("Dr.X"));

    let names: Vec<&str> = REQUIRED_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["patientId", "evaluationDate", "evaluator"]);
}

#[test]
fn age_in_weeks_must_be_a_whole_number() {
    assert_eq!(Submission::new().with("age_weeks", " 52 ").age_weeks(), Some(52));
    assert_eq!(Submission::new().with("age_weeks", "52.5").age_weeks(), None);
    assert_eq!(Submission::new().with("age_weeks", "-3").age_weeks(), None);
    assert_eq!(Submission::new().age_weeks(), None);
}

#[test]
fn evaluation_day_parses_iso_dates() {
    let submission = Submission::new().with("evaluationDate", "2024-03-15");
    assert_eq!(
        submission.evaluation_day().unwrap(),
        jiff::civil::date(2024, 3, 15)
    );

    let err = Submission::new()
        .with("evaluationDate", "15/03/2024")
        .evaluation_day()
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidDate { ref value, .. } if value == "15/03/2024"));

    assert!(matches!(
        Submission::new().evaluation_day(),
        Err(CoreError::MissingField(field)) if field == "evaluationDate"
    ));
}

#[test]
fn remove_and_collect() {
    let mut submission: Submission = [("patientId", "P1"), ("control_cabeza", "3")]
        .into_iter()
        .collect();
    assert_eq!(submission.remove("control_cabeza"), Some("3".to_string()));
    assert_eq!(submission.len(), 1);
    assert!(!submission.is_empty());

    let fields: Vec<(&str, &str)> = submission.fields().collect();
    assert_eq!(fields, vec![("patientId", "P1")]);
}

#[test]
fn serializes_back_to_a_flat_object() {
    let submission = Submission::new().with("control_cabeza", "2");
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json, serde_json::json!({ "control_cabeza": "2" }));
}

#[test]
fn observations_are_read_from_their_fields() {
    let submission = Submission::new()
        .with("cantidad_movimientos", "++")
        .with("estado_conductual", "alert")
        .with("estado_salud", "")
        .with("otras_observaciones", "none");

    assert_eq!(
        submission.observations(),
        Observations {
            movement_quantity: Some(MovementQuantity::Moderate),
            behavioral_state: Some("alert".to_string()),
            health_state: None,
            other: Some("none".to_string()),
        }
    );
}

#[test]
fn unknown_movement_quantity_is_dropped() {
    let submission = Submission::new().with("cantidad_movimientos", "lots");
    assert_eq!(submission.observations().movement_quantity, None);

    assert_eq!(MovementQuantity::parse(" +++ "), Some(MovementQuantity::High));
    assert_eq!(MovementQuantity::Low.symbol(), "+");
}
