//! Property tests for the classifier and report ordering.

use convcheck_analysis::classifier::Classifier;
use convcheck_analysis::reporters::{create_reporter, Report};
use convcheck_analysis::rules::RuleTable;
use convcheck_core::types::{FileRecord, Role, ViolationKind};
use proptest::prelude::*;

fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,12}"
}

fn any_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::all().to_vec())
}

fn any_record() -> impl Strategy<Value = FileRecord> {
    let dir = prop::sample::select(vec![
        "",
        "Features/Home/",
        "Features/",
        "Clients/API/",
        "Models/",
        "Extensions/",
        "Common/",
        "Resources/",
        "Supporting Files/",
        "Misc/",
    ]);
    let suffix = prop::sample::select(vec![
        "View.swift",
        "ViewModel.swift",
        "Client.swift",
        "Client+Live.swift",
        "+Extensions.swift",
        "App.swift",
        ".swift",
        ".plist",
    ]);
    let role = prop_oneof![
        9 => any_role().prop_map(|r| r.as_str().to_string()),
        1 => Just("mystery".to_string()),
    ];
    (dir, type_name(), suffix, role)
        .prop_map(|(dir, name, suffix, role)| {
            FileRecord::new(format!("{dir}{name}{suffix}"), role.as_str())
        })
}

proptest! {
    #[test]
    fn extension_name_violation_iff_pattern_mismatch(
        name in "[A-Za-z0-9+_.]{1,20}",
    ) {
        let record = FileRecord::new(format!("Extensions/{name}.swift"), Role::Extension);
        let violations = Classifier::with_defaults(RuleTable::standard()).classify(&[record.clone()]);
        let has_bad_name = violations.iter().any(|v| v.kind == ViolationKind::BadFilename);

        let stem = record.stem();
        let expected_ok = stem
            .strip_suffix("+Extensions")
            .map(|base| {
                let mut chars = base.chars();
                matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
            })
            .unwrap_or(false);
        prop_assert_eq!(has_bad_name, !expected_ok, "stem {:?}", stem);
    }

    #[test]
    fn client_missing_pair_iff_no_live_sibling(
        base in type_name(),
        other in type_name(),
        live_dir in prop::sample::select(vec!["Clients/API", "Clients/Other"]),
        with_live in any::<bool>(),
    ) {
        let mut records = vec![FileRecord::new(
            format!("Clients/API/{base}Client.swift"),
            Role::ClientDeclaration,
        )];
        if with_live {
            records.push(FileRecord::new(
                format!("{live_dir}/{other}Client+Live.swift"),
                Role::ClientLive,
            ));
        }
        let violations = Classifier::with_defaults(RuleTable::standard()).classify(&records);
        let declaration_missing_pair = violations.iter().any(|v| {
            v.file.path == records[0].path && v.kind == ViolationKind::MissingPair
        });
        let sibling_exists = with_live && live_dir == "Clients/API" && other == base;
        prop_assert_eq!(declaration_missing_pair, !sibling_exists);
    }

    #[test]
    fn classify_is_a_pure_function(records in prop::collection::vec(any_record(), 0..20)) {
        let classifier = Classifier::with_defaults(RuleTable::standard());
        prop_assert_eq!(classifier.classify(&records), classifier.classify(&records));
    }

    #[test]
    fn report_output_is_deterministic(records in prop::collection::vec(any_record(), 0..20)) {
        let table = RuleTable::standard();
        let classifier = Classifier::with_defaults(table);
        let render = || {
            let report = Report::new(table, records.len(), classifier.classify(&records));
            create_reporter("console", false).unwrap().generate(&report).unwrap()
        };
        prop_assert_eq!(render(), render());
    }

    #[test]
    fn report_is_sorted_by_path(records in prop::collection::vec(any_record(), 0..20)) {
        let table = RuleTable::standard();
        let report = Report::new(table, records.len(), Classifier::with_defaults(table).classify(&records));
        for pair in report.violations.windows(2) {
            prop_assert!(pair[0].file.path <= pair[1].file.path);
            if pair[0].file.path == pair[1].file.path {
                prop_assert!(table.position(&pair[0].rule_id) <= table.position(&pair[1].rule_id));
            }
        }
    }

    #[test]
    fn every_unknown_role_yields_exactly_one_violation(records in prop::collection::vec(any_record(), 1..20)) {
        let violations = Classifier::with_defaults(RuleTable::standard()).classify(&records);
        let unknown = records.iter().filter(|r| r.role().is_none()).count();
        let unclassifiable = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Unclassifiable)
            .count();
        prop_assert_eq!(unknown, unclassifiable);
    }
}
