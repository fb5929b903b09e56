use std::collections::HashSet;

use imp_instruments::catalog::{
    AgeBand, Catalog, Item, ItemOption, ObservationMode, Section, SectionId, SkillType,
};
use imp_instruments::error::CatalogError;
use imp_instruments::Instrument;
use imp_instruments::instruments::imp::Imp;

const MINI: &str = include_str!("fixtures/mini_catalog.json");

fn option(value: i64) -> ItemOption {
    ItemOption {
        value,
        text: format!("option {value}"),
    }
}

fn item(id: &str, section: SectionId, number: u32, values: &[i64]) -> Item {
    Item {
        id: id.to_string(),
        title: id.to_string(),
        section,
        sequence_number: number,
        skill_type: SkillType::Performance,
        options: values.iter().map(|&v| option(v)).collect(),
    }
}

fn sections() -> Vec<Section> {
    SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let start = i as u32 * 10 + 1;
            Section {
                id,
                start,
                end: start + 9,
                title: id.to_string(),
                short_title: id.to_string(),
            }
        })
        .collect()
}

fn build(items: Vec<Item>, sections: Vec<Section>) -> Result<Catalog, CatalogError> {
    Catalog::new(items, sections, Vec::<String>::new(), Vec::<String>::new(), vec![])
}

#[test]
fn reference_catalog_has_eighty_uniquely_numbered_items() {
    let catalog = Imp.catalog().unwrap();
    assert_eq!(catalog.len(), 80);

    let mut numbers: Vec<u32> = catalog.items().iter().map(|i| i.sequence_number).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=80).collect::<Vec<_>>());
}

#[test]
fn reference_sections_partition_the_catalog() {
    let catalog = Imp.catalog().unwrap();

    let ranges: Vec<(u32, u32)> = catalog.sections().iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(
        ranges,
        vec![(1, 21), (22, 33), (34, 46), (47, 65), (66, 74), (75, 80)]
    );

    let per_section: usize = SectionId::ALL
        .iter()
        .map(|&id| catalog.items_in(id).count())
        .sum();
    assert_eq!(per_section, catalog.len());

    for item in catalog.items() {
        assert!(
            catalog.section(item.section).contains(item.sequence_number),
            "{} is outside its section",
            item.id
        );
    }
}

#[test]
fn reference_provoked_items_are_all_observed_adaptability_items() {
    let catalog = Imp.catalog().unwrap();

    let provoked: Vec<&Item> = catalog.mode_items(ObservationMode::Provoked).collect();
    assert_eq!(provoked.len(), 15);
    for item in &provoked {
        assert_eq!(item.skill_type, SkillType::Adaptability);
        assert!(catalog.is_member(ObservationMode::Observed, &item.id));
    }
    assert_eq!(catalog.mode_items(ObservationMode::Observed).count(), 80);
}

#[test]
fn reference_skill_type_distribution() {
    let catalog = Imp.catalog().unwrap();
    let count = |skill| {
        catalog
            .items()
            .iter()
            .filter(|i| i.skill_type == skill)
            .count()
    };
    assert_eq!(count(SkillType::Performance), 23);
    assert_eq!(count(SkillType::Variation), 25);
    assert_eq!(count(SkillType::Adaptability), 15);
    assert_eq!(count(SkillType::Symmetry), 10);
    assert_eq!(count(SkillType::Fluency), 7);
}

#[test]
fn head_control_item_definition() {
    let catalog = Imp.catalog().unwrap();
    let item = catalog.item("control_cabeza").unwrap();

    assert_eq!(item.title, "Control de movimientos de la cabeza");
    assert_eq!(item.section, SectionId::Supine);
    assert_eq!(item.sequence_number, 1);
    assert_eq!(item.skill_type, SkillType::Performance);
    let values: Vec<i64> = item.options.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(item.max_value(), 3);
    assert!(item.accepts(2));
    assert!(!item.accepts(0));
    assert_eq!(
        item.option_text(3),
        Some("Controla los movimientos de la cabeza")
    );
}

#[test]
fn scales_need_not_start_at_one() {
    let catalog = Imp.catalog().unwrap();
    let item = catalog.item("asimetria_alcance_supino").unwrap();
    assert_eq!(item.min_value(), 0);
    assert_eq!(item.max_value(), 3);

    let item = catalog.item("alcance_manipulacion").unwrap();
    assert_eq!(item.min_value(), 1);
    assert_eq!(item.max_value(), 7);
}

#[test]
fn reference_maximum_possible_score() {
    let catalog = Imp.catalog().unwrap();
    assert_eq!(catalog.max_possible(), 214);
}

#[test]
fn age_band_lookup() {
    let catalog = Imp.catalog().unwrap();
    assert_eq!(catalog.age_bands().len(), 8);

    let band = catalog.age_band_for(33).unwrap();
    assert_eq!((band.min_weeks, band.max_weeks), (32, 34));
    assert_eq!(band.p50, 45);

    let band = catalog.age_band_for(64).unwrap();
    assert_eq!((band.min_weeks, band.max_weeks), (56, 64));

    assert!(catalog.age_band_for(31).is_none());
    assert!(catalog.age_band_for(65).is_none());
    assert_eq!(catalog.age_range(), Some(32..=64));
}

#[test]
fn reference_instrument_identity() {
    assert_eq!(Imp.id(), "imp");
    assert_eq!(Imp.name(), "IMP (Infant Motor Profile)");
    assert_eq!(Imp.catalog().unwrap().name(), Some(Imp.name()));
}

#[test]
fn catalogs_without_age_bands_have_no_age_range() {
    let catalog = build(vec![], sections()).unwrap();
    assert_eq!(catalog.age_range(), None);
    assert_eq!(catalog.name(), None);
}

#[test]
fn fixture_catalog_loads_from_json_in_key_order() {
    let catalog = Catalog::from_json(MINI).unwrap();

    let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["head", "reach_adapt", "crawl_variety", "fluency"]);
    assert_eq!(catalog.name(), Some("Mini IMP"));
    assert_eq!(catalog.max_possible(), 8);
    assert_eq!(catalog.section(SectionId::Supine).short_title, "Sup");
    assert_eq!(catalog.section(SectionId::Prone).short_title, "Prone");
    assert!(catalog.is_member(ObservationMode::Provoked, "reach_adapt"));
    assert!(!catalog.is_member(ObservationMode::Provoked, "head"));
}

#[test]
fn schema_export_preserves_catalog_order() {
    let catalog = Imp.catalog().unwrap();
    let schema = catalog.to_schema().unwrap();

    let first_keys: Vec<&str> = schema.items.keys().take(3).map(String::as_str).collect();
    assert_eq!(
        first_keys,
        vec![
            "control_cabeza",
            "variedad_movimientos_cabeza",
            "adaptabilidad_movimientos_cabeza"
        ]
    );

    let json = serde_json::to_string(&schema).unwrap();
    let reloaded = Catalog::from_json(&json).unwrap();
    assert_eq!(reloaded.name(), catalog.name());
    assert_eq!(reloaded.len(), catalog.len());
    assert_eq!(reloaded.max_possible(), catalog.max_possible());
    assert_eq!(reloaded.items()[79].id, "fluidez_comportamiento_motor");
}

#[test]
fn provoked_need_not_be_observed() {
    let items = vec![
        item("a", SectionId::Supine, 1, &[1, 2]),
        item("b", SectionId::Supine, 2, &[1, 2]),
    ];
    let catalog = Catalog::new(items, sections(), ["a"], ["b"], vec![]).unwrap();
    assert!(catalog.is_member(ObservationMode::Provoked, "b"));
    assert!(!catalog.is_member(ObservationMode::Observed, "b"));
}

#[test]
fn rejects_duplicate_item_ids() {
    let items = vec![
        item("a", SectionId::Supine, 1, &[1]),
        item("a", SectionId::Supine, 2, &[1]),
    ];
    assert!(matches!(
        build(items, sections()),
        Err(CatalogError::DuplicateItem(id)) if id == "a"
    ));
}

#[test]
fn rejects_items_without_options_or_with_repeated_values() {
    let items = vec![item("a", SectionId::Supine, 1, &[])];
    assert!(matches!(
        build(items, sections()),
        Err(CatalogError::NoOptions(_))
    ));

    let items = vec![item("a", SectionId::Supine, 1, &[1, 2, 1])];
    assert!(matches!(
        build(items, sections()),
        Err(CatalogError::DuplicateOption { value: 1, .. })
    ));
}

#[test]
fn rejects_repeated_sequence_numbers() {
    let items = vec![
        item("a", SectionId::Supine, 1, &[1]),
        item("b", SectionId::Supine, 1, &[1]),
    ];
    assert!(matches!(
        build(items, sections()),
        Err(CatalogError::DuplicateSequence { number: 1, .. })
    ));
}

#[test]
fn rejects_items_outside_their_section_range() {
    // Prone owns 11..=20 in the test layout.
    let items = vec![item("a", SectionId::Prone, 5, &[1])];
    assert!(matches!(
        build(items, sections()),
        Err(CatalogError::ItemOutsideSection {
            section: SectionId::Prone,
            number: 5,
            ..
        })
    ));
}

#[test]
fn rejects_missing_duplicate_and_overlapping_sections() {
    let mut missing = sections();
    missing.retain(|s| s.id != SectionId::General);
    assert!(matches!(
        build(vec![], missing),
        Err(CatalogError::MissingSection(SectionId::General))
    ));

    let mut duplicated = sections();
    duplicated.push(duplicated[0].clone());
    assert!(matches!(
        build(vec![], duplicated),
        Err(CatalogError::DuplicateSection(SectionId::Supine))
    ));

    let mut overlapping = sections();
    overlapping[1].start = 10;
    assert!(matches!(
        build(vec![], overlapping),
        Err(CatalogError::OverlappingSections {
            first: SectionId::Supine,
            second: SectionId::Prone
        })
    ));

    let mut inverted = sections();
    inverted[2].end = inverted[2].start - 1;
    assert!(matches!(
        build(vec![], inverted),
        Err(CatalogError::EmptySectionRange { .. })
    ));
}

#[test]
fn rejects_unknown_mode_items() {
    let items = vec![item("a", SectionId::Supine, 1, &[1])];
    let result = Catalog::new(items, sections(), ["a"], ["ghost"], vec![]);
    assert!(matches!(
        result,
        Err(CatalogError::UnknownModeItem { mode: "provoked", item_id }) if item_id == "ghost"
    ));
}

#[test]
fn rejects_overlapping_age_bands() {
    let band = |min_weeks, max_weeks| AgeBand {
        min_weeks,
        max_weeks,
        p5: 0,
        p16: 0,
        p25: 0,
        p50: 0,
        p75: 0,
        p95: 0,
    };
    let result = Catalog::new(
        vec![],
        sections(),
        Vec::<String>::new(),
        Vec::<String>::new(),
        vec![band(40, 45), band(32, 40)],
    );
    assert!(matches!(
        result,
        Err(CatalogError::InvalidAgeBand {
            min_weeks: 32,
            max_weeks: 40
        })
    ));
}

#[test]
fn rejects_malformed_schema() {
    let result = Catalog::from_json(r#"{"items": {}, "sections": {"sideways": {}}}"#);
    assert!(matches!(result, Err(CatalogError::Schema(_))));
}

#[test]
fn section_and_skill_codes() {
    let names: HashSet<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names.len(), 6);
    assert_eq!(SectionId::Manipulation.to_string(), "manipulation");

    let codes: Vec<&str> = SkillType::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec!["P", "V", "A", "S", "F"]);
    assert_eq!(
        serde_json::to_string(&SkillType::Symmetry).unwrap(),
        "\"S\""
    );
}
