//! Detector tests against the fake engine

use es5check::detector::{DetectOptions, detect};
use es5check::error::CheckError;

use crate::common::{FakeEngine, Fixture, diag};

fn options(fixture: &Fixture, verbose: bool) -> DetectOptions {
    DetectOptions {
        config_path: fixture.config.clone(),
        verbose,
    }
}

#[test]
fn test_clean_files_pass() {
    let fixture = Fixture::new();
    let a = fixture.write_js("a.js", "var x = 1;\n");
    let b = fixture.write_js("b.js", "var y = 2;\n");

    let report = detect(&FakeEngine::clean(), &[a, b], &options(&fixture, false)).unwrap();

    assert!(!report.has_errors);
    assert_eq!(report.files.len(), 2);
    assert!(report.files.iter().all(|f| f.error_count == 0));
    assert!(report.files.iter().all(|f| f.diagnostics.is_empty()));
}

#[test]
fn test_unrelated_diagnostics_are_discarded() {
    let fixture = Fixture::new();
    let a = fixture.write_js("a.js", "var x = 1\n");

    // Style/quality findings only; none are syntax-level
    let engine = FakeEngine::with_diagnostics(
        "a.js",
        vec![
            diag(Some("no-unused-vars"), 1, 5, "x is unused"),
            diag(Some("semi"), 1, 10, "missing semicolon"),
            diag(None, 1, 1, "Parsing error"),
        ],
    );

    let report = detect(&engine, &[a], &options(&fixture, false)).unwrap();

    assert!(!report.has_errors);
    assert_eq!(report.files[0].error_count, 0);
    assert!(report.files[0].diagnostics.is_empty());
}

#[test]
fn test_counts_recomputed_from_filtered_set() {
    let fixture = Fixture::new();
    let a = fixture.write_js("a.js", "var f = () => 1;\nvar y = 2\n");

    let engine = FakeEngine::with_diagnostics(
        "a.js",
        vec![
            diag(Some("es5/no-arrow-functions"), 1, 9, "no arrow functions"),
            diag(Some("no-unused-vars"), 2, 5, "y is unused"),
            diag(Some("arrow-spacing"), 1, 12, "spacing"),
        ],
    );

    let report = detect(&engine, &[a], &options(&fixture, false)).unwrap();

    assert!(report.has_errors);
    assert_eq!(report.files[0].error_count, 2);
    assert_eq!(report.total_errors(), 2);
    // Engine order preserved within the filtered set
    assert_eq!(
        report.files[0].diagnostics[0].rule_id.as_deref(),
        Some("es5/no-arrow-functions")
    );
    assert_eq!(
        report.files[0].diagnostics[1].rule_id.as_deref(),
        Some("arrow-spacing")
    );
}

#[test]
fn test_files_reported_in_input_order() {
    let fixture = Fixture::new();
    let b = fixture.write_js("b.js", "var y;\n");
    let a = fixture.write_js("a.js", "var x;\n");

    let report = detect(
        &FakeEngine::clean(),
        &[b.clone(), a.clone()],
        &options(&fixture, false),
    )
    .unwrap();

    assert_eq!(report.files[0].path, b);
    assert_eq!(report.files[1].path, a);
}

#[test]
fn test_idempotent_for_identical_inputs() {
    let fixture = Fixture::new();
    let a = fixture.write_js("a.js", "var f = () => 1;\n");
    let engine = FakeEngine::with_diagnostics(
        "a.js",
        vec![diag(Some("es5/no-arrow-functions"), 1, 9, "no arrow functions")],
    );

    let files = vec![a];
    let first = detect(&engine, &files, &options(&fixture, false)).unwrap();
    let second = detect(&engine, &files, &options(&fixture, false)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_arrow_function_file_yields_arrow_diagnostic() {
    let fixture = Fixture::new();
    let bundle = fixture.write_js("bundle.js", "var square = (x) => x * x;\n");

    let engine = FakeEngine::with_diagnostics(
        "bundle.js",
        vec![diag(
            Some("es5/no-arrow-functions"),
            1,
            14,
            "ES5 doesn't support arrow functions.",
        )],
    );

    // Verbose path reads the file back for context rendering
    let report = detect(&engine, &[bundle], &options(&fixture, true)).unwrap();

    assert!(report.has_errors);
    assert_eq!(report.total_errors(), 1);
    let rule = report.files[0].diagnostics[0].rule_id.as_deref().unwrap();
    assert!(rule.contains("arrow"));
}

#[test]
fn test_multiple_files_mixed_outcomes() {
    let fixture = Fixture::new();
    let clean = fixture.write_js("clean.js", "var x = 1;\n");
    let dirty = fixture.write_js("dirty.js", "class C {}\n");

    let engine = FakeEngine::clean().and(
        "dirty.js",
        vec![diag(Some("es5/no-classes"), 1, 1, "ES5 doesn't support classes.")],
    );

    let report = detect(&engine, &[clean, dirty], &options(&fixture, false)).unwrap();

    assert!(report.has_errors);
    assert_eq!(report.files[0].error_count, 0);
    assert_eq!(report.files[1].error_count, 1);
}

#[test]
fn test_missing_config_fails() {
    let fixture = Fixture::new();
    let a = fixture.write_js("a.js", "var x;\n");
    let options = DetectOptions {
        config_path: fixture.dir.path().join("nope.eslintrc.js"),
        verbose: false,
    };

    let err = detect(&FakeEngine::clean(), &[a], &options).unwrap_err();
    assert!(matches!(err, CheckError::ConfigNotFound(_)));
    assert!(!err.is_usage());
}
