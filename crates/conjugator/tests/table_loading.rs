//! Integration tests for loading conjugation tables.

use conjugator::parser::parse_file;
use conjugator::{Conjugator, Language, Lemma, LoadError, ParadigmClass, Provenance, engine};
use std::io::{Seek, Write};
use tempfile::NamedTempFile;

fn first_person(conjugator: &Conjugator, text: &str) -> String {
    conjugator
        .conjugate(
            &Lemma::new(text, Language::French),
            "present.indicative.1sg".parse().unwrap(),
        )
        .surface
}

// =========================================================================
// Loading from String
// =========================================================================

#[test]
fn load_tables_str_counts_definitions() {
    let mut conjugator = Conjugator::new();
    let count = conjugator
        .load_tables_str(
            Language::French,
            r#"
        class er_regular = "{}er";
        ending "er" => er_regular;
        rules er_regular present.indicative { 1sg: "{}e" };
    "#,
        )
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(conjugator.languages(), vec![Language::French]);
    assert_eq!(first_person(&conjugator, "parler"), "parle");
}

#[test]
fn load_tables_str_replaces_on_reload() {
    let mut conjugator = Conjugator::new();
    conjugator
        .load_tables_str(
            Language::French,
            r#"class er = "{}er"; ending "er" => er; rules er present.indicative { 1sg: "{}e" };"#,
        )
        .unwrap();
    assert_eq!(first_person(&conjugator, "parler"), "parle");

    conjugator
        .load_tables_str(
            Language::French,
            r#"class ir = "{}ir"; ending "ir" => ir; rules ir present.indicative { 1sg: "{}is" };"#,
        )
        .unwrap();

    // Old rules are gone, including memoized classifications.
    assert_eq!(first_person(&conjugator, "parler"), "parler");
    assert_eq!(first_person(&conjugator, "finir"), "finis");
}

#[test]
fn held_lemma_follows_replaced_tables() {
    let mut conjugator = Conjugator::new();
    conjugator
        .load_tables_str(
            Language::French,
            r#"class a = "{}er"; ending "er" => a; rules a present.indicative { 1sg: "{}e" };"#,
        )
        .unwrap();
    let lemma = Lemma::new("parler", Language::French);
    let params = "present.indicative.1sg".parse().unwrap();
    assert_eq!(conjugator.conjugate(&lemma, params).surface, "parle");

    conjugator
        .load_tables_str(
            Language::French,
            r#"class b = "{}er"; ending "er" => b; rules b present.indicative { 1sg: "{}e" };"#,
        )
        .unwrap();

    let form = conjugator.conjugate(&lemma, params);
    assert_eq!(form.provenance, Provenance::Rule);
    assert_eq!(form.surface, "parle");
    assert_eq!(conjugator.classify(&lemma), ParadigmClass::named("b"));
}

#[test]
fn lemma_classified_elsewhere_uses_own_tables() {
    let bundled = Conjugator::with_bundled_tables().unwrap();
    let mut custom = Conjugator::new();
    custom
        .load_tables_str(
            Language::French,
            r#"class verb = "{}er"; ending "er" => verb; rules verb present.indicative { 1sg: "{}ais" };"#,
        )
        .unwrap();

    let lemma = Lemma::new("parler", Language::French);
    let params = "present.indicative.1sg".parse().unwrap();
    assert_eq!(bundled.conjugate(&lemma, params).surface, "parle");

    let form = custom.conjugate(&lemma, params);
    assert_eq!(form.provenance, Provenance::Rule);
    assert_eq!(form.surface, "parlais");
    assert_eq!(bundled.conjugate(&lemma, params).surface, "parle");
}

#[test]
fn held_lemma_follows_file_reload() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"class a = "{{}}er"; ending "er" => a; rules a present.indicative {{ 1sg: "{{}}e" }};"#
    )
    .unwrap();

    let mut conjugator = Conjugator::builder().memoize(false).build();
    conjugator.load_tables(Language::French, file.path()).unwrap();
    let lemma = Lemma::new("parler", Language::French);
    let params = "present.indicative.1sg".parse().unwrap();
    assert_eq!(conjugator.conjugate(&lemma, params).surface, "parle");

    file.as_file_mut().set_len(0).unwrap();
    file.rewind().unwrap();
    write!(
        file,
        r#"class b = "{{}}er"; ending "er" => b; rules b present.indicative {{ 1sg: "{{}}ons" }};"#
    )
    .unwrap();
    conjugator.reload_tables(Language::French).unwrap();

    assert_eq!(conjugator.conjugate(&lemma, params).surface, "parlons");
}

#[test]
fn loading_one_language_keeps_others() {
    let mut conjugator = Conjugator::with_bundled_tables().unwrap();
    conjugator.load_tables_str(Language::French, "").unwrap();

    assert_eq!(first_person(&conjugator, "parler"), "parler");
    let form = conjugator.conjugate(
        &Lemma::new("usoma", Language::Shimaore),
        "present.indicative.1sg".parse().unwrap(),
    );
    assert_eq!(form.surface, "nisoma");
}

#[test]
fn bundled_tables_parse() {
    for language in Language::ALL {
        let source = engine::bundled_source(language);
        assert!(!source.is_empty());
        parse_file(source).unwrap();
    }
}

#[test]
fn bundled_tables_have_expected_shape() {
    let conjugator = Conjugator::with_bundled_tables().unwrap();

    let french = conjugator.tables(Language::French).unwrap();
    assert_eq!(french.classifier().class_names().len(), 7);
    assert_eq!(french.classifier().irregular_count(), 4);
    assert_eq!(french.phonology().len(), 4);
    assert_eq!(french.exceptions().len(), 4 * 33);

    let shimaore = conjugator.tables(Language::Shimaore).unwrap();
    assert_eq!(shimaore.rules().len(), 2 * 20);
    let imperative = "present.imperative.2sg".parse().unwrap();
    assert_eq!(shimaore.exceptions().override_for("uja", &imperative), Some("ndzo"));

    let kibouchi = conjugator.tables(Language::Kibouchi).unwrap();
    assert_eq!(kibouchi.rules().len(), 18);
    assert_eq!(kibouchi.classifier().endings().len(), 4);
    assert!(kibouchi.phonology().is_empty());
}

#[test]
fn regular_classes_cover_every_declared_tuple() {
    let conjugator = Conjugator::with_bundled_tables().unwrap();
    let checks = [
        (Language::French, vec!["er_regular", "ir_regular", "re_regular"]),
        (Language::Shimaore, vec!["a_verb", "i_verb"]),
        (Language::Kibouchi, vec!["verb"]),
    ];
    for (language, classes) in checks {
        let declared = conjugator::declared_parameters(language);
        let tables = conjugator.tables(language).unwrap();
        for class in classes {
            let coverage = tables.rules().coverage(class, &declared);
            assert!(coverage.is_complete(), "{class} misses {:?}", coverage.missing);
        }
    }
}

// =========================================================================
// Loading from File
// =========================================================================

#[test]
fn load_tables_from_file_and_reload() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"class er = "{{}}er"; ending "er" => er; rules er present.indicative {{ 1sg: "{{}}e" }};"#
    )
    .unwrap();

    let mut conjugator = Conjugator::new();
    let count = conjugator
        .load_tables(Language::French, file.path())
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(first_person(&conjugator, "parler"), "parle");

    file.as_file_mut().set_len(0).unwrap();
    file.rewind().unwrap();
    write!(
        file,
        r#"class er = "{{}}er"; ending "er" => er; rules er present.indicative {{ 1sg: "{{}}ais" }};"#
    )
    .unwrap();

    conjugator.reload_tables(Language::French).unwrap();
    assert_eq!(first_person(&conjugator, "parler"), "parlais");
}

#[test]
fn reload_without_path_fails() {
    let mut conjugator = Conjugator::new();
    conjugator.load_tables_str(Language::Kibouchi, "").unwrap();

    let err = conjugator.reload_tables(Language::Kibouchi).unwrap_err();
    assert!(matches!(err, LoadError::NoPathForReload { ref language } if language == "buc"));
}

#[test]
fn string_load_forgets_file_path() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"class verb = "{{}}";"#).unwrap();

    let mut conjugator = Conjugator::new();
    conjugator.load_tables(Language::Kibouchi, file.path()).unwrap();
    conjugator.load_tables_str(Language::Kibouchi, "").unwrap();

    assert!(conjugator.reload_tables(Language::Kibouchi).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables(Language::French, "/nonexistent/fr.conj")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

// =========================================================================
// Load Errors
// =========================================================================

#[test]
fn syntax_error_reports_position() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            "class er = \"{}er\";\nending \"er\" => er\n",
        )
        .unwrap_err();

    let LoadError::Parse {
        path, line, column, ..
    } = err
    else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(path.to_string_lossy(), "<fr>");
    assert_eq!((line, column), (2, 1));
}

#[test]
fn unknown_class_suggests_declared_names() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"class er_regular = "{}er"; ending "er" => er_regullar;"#,
        )
        .unwrap_err();

    let LoadError::UnknownClass { name, suggestions, .. } = &err else {
        panic!("expected unknown class, got {err:?}");
    };
    assert_eq!(name, "er_regullar");
    assert_eq!(suggestions, &vec!["er_regular".to_string()]);
    assert!(err.to_string().contains("did you mean: er_regular?"));
}

#[test]
fn classes_may_be_declared_after_use() {
    let mut conjugator = Conjugator::new();
    conjugator
        .load_tables_str(
            Language::French,
            r#"ending "er" => er; rules er present.indicative { 1sg: "{}e" }; class er = "{}er";"#,
        )
        .unwrap();
    assert_eq!(first_person(&conjugator, "chanter"), "chante");
}

#[test]
fn unknown_mutation_suggests_close_name() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"class re = "{}re"; rules re future.indicative { 1sg: "{lemma_drop}ai" };"#,
        )
        .unwrap_err();

    let LoadError::UnknownMutation { name, suggestions } = err else {
        panic!("expected unknown mutation, got {err:?}");
    };
    assert_eq!(name, "lemma_drop");
    assert_eq!(suggestions, vec!["lemma_drop_e".to_string()]);
}

#[test]
fn duplicate_rule_is_rejected() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"
        class er = "{}er";
        rules er present.indicative { 1sg: "{}e" };
        rules er present.indicative { 2sg: "{}es", 1sg: "{}e" };
    "#,
        )
        .unwrap_err();
    assert!(matches!(err, LoadError::Duplicate { what: "rule", .. }));
}

#[test]
fn duplicate_exception_is_rejected() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"exception "être" present.indicative { 3sg: "est", 3sg: "et" };"#,
        )
        .unwrap_err();
    assert!(matches!(err, LoadError::Duplicate { what: "exception", .. }));
}

#[test]
fn duplicate_class_and_ending_are_rejected() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(Language::French, r#"class a = "{}"; class a = "{}";"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::Duplicate { what: "class", .. }));

    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"class a = "{}"; ending "x" => a; ending "x" => a;"#,
        )
        .unwrap_err();
    assert!(matches!(err, LoadError::Duplicate { what: "ending", .. }));
}

#[test]
fn exception_forms_must_be_literal() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(
            Language::French,
            r#"exception "être" present.indicative { 3sg: "{}st" };"#,
        )
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidTemplate { .. }));
}

#[test]
fn class_shape_needs_a_hole() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(Language::French, r#"class er = "er";"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidTemplate { .. }));
}

#[test]
fn malformed_rewrite_is_rejected() {
    let mut conjugator = Conjugator::new();
    let err = conjugator
        .load_tables_str(Language::Shimaore, r#"rewrite "a|b|c" => "x";"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidRewrite { .. }));
}

#[test]
fn failed_load_keeps_previous_tables() {
    let mut conjugator = Conjugator::with_bundled_tables().unwrap();
    assert!(
        conjugator
            .load_tables_str(Language::French, "class broken")
            .is_err()
    );
    assert_eq!(first_person(&conjugator, "parler"), "parle");
}

#[test]
fn bundled_rule_forms_are_rule_provenance() {
    let conjugator = Conjugator::with_bundled_tables().unwrap();
    let form = conjugator.conjugate(
        &Lemma::new("chanter", Language::French),
        "future.indicative.3pl".parse().unwrap(),
    );
    assert_eq!(form.surface, "chanteront");
    assert_eq!(form.provenance, Provenance::Rule);
}
