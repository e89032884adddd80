//! Integration tests for the Unfolder API
//!
//! These run the full parse → select → generate pipeline the way an
//! external caller would, and pin down the output contract: element
//! counts, geometry, identifier behavior, and validation failures.

use busfold::{
    Unfolder, ValidationError,
    bus::{BusSelection, Selection},
    config::GenerationConfig,
    identifier::SequentialIdSource,
};

const SCHEMATIC: &str = r#"
(kicad_sch
	(version 20231120)
	(bus_alias "DATA"
		(members "D0" "D1" "D2")
	)
	(bus_alias "CTRL"
		(members "RD" "WR")
	)
)
"#;

/// Counts top-level forms with the exact given name. Sub-forms are
/// tab-indented, so only column-zero lines are considered.
fn count(fragment: &str, form: &str) -> usize {
    fragment
        .lines()
        .filter(|line| {
            line.strip_prefix('(')
                .and_then(|rest| rest.split_whitespace().next().or(Some(rest)))
                .is_some_and(|head| head == form)
        })
        .count()
}

#[test]
fn scenario_unfolds_data_bus_with_expected_element_counts() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("DATA").unwrap().members(), ["D0", "D1", "D2"]);

    let selection: Selection = [BusSelection::all_of(table.get("DATA").unwrap())]
        .into_iter()
        .collect();
    let fragment = unfolder
        .generate(&table, &selection)
        .expect("Failed to generate");

    assert_eq!(count(&fragment, "hierarchical_label"), 1);
    assert_eq!(count(&fragment, "bus"), 2); // stub + vertical run
    assert_eq!(count(&fragment, "bus_entry"), 3);
    assert_eq!(count(&fragment, "wire"), 3);
    assert_eq!(count(&fragment, "label"), 3);
}

#[test]
fn wire_and_label_counts_match_signal_count() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    for n in 1..=3 {
        let members: Vec<String> = (0..n).map(|i| format!("D{i}")).collect();
        let selection: Selection = [BusSelection::new("DATA", members)].into_iter().collect();

        let fragment = unfolder
            .generate(&table, &selection)
            .expect("Failed to generate");
        assert_eq!(count(&fragment, "wire"), n);
        assert_eq!(count(&fragment, "label"), n);
    }
}

#[test]
fn geometry_is_deterministic_at_the_documented_anchor() {
    let config = GenerationConfig::default()
        .with_spacing(2.54)
        .with_connection_length(10.16)
        .with_start_x(194.31)
        .with_start_y(49.53);
    let unfolder = Unfolder::new(config);
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let selection: Selection = [BusSelection::new("DATA", vec!["D0".to_string()])]
        .into_iter()
        .collect();
    let fragment = unfolder
        .generate(&table, &selection)
        .expect("Failed to generate");

    // Signal 0 of bus 0: wire runs at y = 52.07, entry anchors at y = 49.53.
    assert!(fragment.contains("(xy 196.85 52.07) (xy 207.01 52.07)"));
    assert!(fragment.contains("(at 194.31 49.53)"));
}

#[test]
fn repeated_generation_differs_only_in_uuids() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");
    let selection = Selection::all_buses(&table);

    let first = unfolder
        .generate(&table, &selection)
        .expect("Failed to generate");
    let second = unfolder
        .generate(&table, &selection)
        .expect("Failed to generate");

    let strip = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.contains("(uuid"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip(&first), strip(&second));

    let uuids = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| line.contains("(uuid"))
            .map(str::to_string)
            .collect()
    };
    let first_ids = uuids(&first);
    let second_ids = uuids(&second);
    assert_eq!(first_ids.len(), second_ids.len());
    assert!(
        first_ids.iter().zip(&second_ids).all(|(a, b)| a != b),
        "uuids must be regenerated per call"
    );

    let mut unique = first_ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), first_ids.len(), "uuids must be unique per call");
}

#[test]
fn golden_output_with_sequential_ids() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let selection: Selection = [BusSelection::new("CTRL", vec!["RD".to_string()])]
        .into_iter()
        .collect();
    let mut ids = SequentialIdSource::new("uuid");
    let fragment = unfolder
        .generate_with_ids(&table, &selection, &mut ids)
        .expect("Failed to generate");

    let expected = "\
(hierarchical_label \"{CTRL}\"
\t(shape input)
\t(at 191.77 49.53 180)
\t(effects
\t\t(font (size 1.27 1.27))
\t\t(justify right)
\t)
\t(uuid \"uuid-0\")
)
(bus
\t(pts
\t\t(xy 191.77 49.53) (xy 194.31 49.53)
\t)
\t(stroke (width 0) (type default))
\t(uuid \"uuid-1\")
)
(bus
\t(pts
\t\t(xy 194.31 49.53) (xy 194.31 52.07)
\t)
\t(stroke (width 0) (type default))
\t(uuid \"uuid-2\")
)
(bus_entry
\t(at 194.31 49.53)
\t(size 2.54 2.54)
\t(stroke (width 0) (type default))
\t(uuid \"uuid-3\")
)
(wire
\t(pts
\t\t(xy 196.85 52.07) (xy 207.01 52.07)
\t)
\t(stroke (width 0) (type default))
\t(uuid \"uuid-4\")
)
(label \"RD\"
\t(at 207.01 52.07 180)
\t(effects
\t\t(font (size 1.27 1.27))
\t\t(justify right bottom)
\t)
\t(uuid \"uuid-5\")
)
";
    assert_eq!(fragment, expected);
}

#[test]
fn empty_selection_fails_validation() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let err = unfolder
        .generate(&table, &Selection::new())
        .expect_err("empty selection must not generate");
    assert!(err.to_string().contains("selection is empty"));
}

#[test]
fn bus_with_no_members_selected_fails_validation() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let selection: Selection = [BusSelection::new("DATA", Vec::new())].into_iter().collect();
    let err = unfolder
        .generate(&table, &selection)
        .expect_err("a filtered-out bus must not produce a stem-only fragment");
    assert!(matches!(
        err,
        busfold::BusfoldError::Validation(ValidationError::NoMembers(_))
    ));
}

#[test]
fn unknown_bus_and_member_are_reported_by_name() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let selection: Selection = [BusSelection::new("NOPE", vec!["X".to_string()])]
        .into_iter()
        .collect();
    let err = unfolder.generate(&table, &selection).expect_err("unknown bus");
    assert!(err.to_string().contains("NOPE"));

    let selection: Selection = [BusSelection::new("DATA", vec!["D9".to_string()])]
        .into_iter()
        .collect();
    let err = unfolder.generate(&table, &selection).expect_err("unknown member");
    assert!(err.to_string().contains("D9"));
    assert!(err.to_string().contains("DATA"));
}

#[test]
fn invalid_config_fails_before_emitting() {
    let unfolder = Unfolder::new(GenerationConfig::default().with_spacing(-2.54));
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let err = unfolder
        .generate(&table, &Selection::all_buses(&table))
        .expect_err("negative spacing must fail validation");
    assert!(err.to_string().contains("spacing"));
}

#[test]
fn selection_order_controls_left_to_right_placement() {
    let unfolder = Unfolder::default();
    let table = unfolder.parse(SCHEMATIC).expect("Failed to parse");

    let selection: Selection = [
        BusSelection::all_of(table.get("CTRL").unwrap()),
        BusSelection::all_of(table.get("DATA").unwrap()),
    ]
    .into_iter()
    .collect();

    let fragment = unfolder
        .generate(&table, &selection)
        .expect("Failed to generate");

    let ctrl = fragment.find("{CTRL}").expect("CTRL label present");
    let data = fragment.find("{DATA}").expect("DATA label present");
    assert!(ctrl < data, "selection order must drive emission order");
}
