//! Integration tests for conjugation against the bundled tables.

use conjugator::{
    ConjugatedForm, ConjugationError, Conjugator, GrammaticalParameters, Language, Lemma,
    ParadigmClass, Provenance, declared_parameters,
};
use std::collections::HashSet;

fn bundled() -> Conjugator {
    Conjugator::with_bundled_tables().unwrap()
}

fn params(text: &str) -> GrammaticalParameters {
    text.parse().unwrap()
}

fn surface(conjugator: &Conjugator, lemma: &str, language: Language, p: &str) -> String {
    conjugator
        .conjugate(&Lemma::new(lemma, language), params(p))
        .surface
}

fn render(forms: &[ConjugatedForm]) -> String {
    forms
        .iter()
        .map(|form| format!("{} {}", form.parameters, form.surface))
        .collect::<Vec<_>>()
        .join("\n")
}

// =========================================================================
// Core Scenarios
// =========================================================================

#[test]
fn regular_er_verb_uses_rule() {
    let conjugator = bundled();
    let lemma = Lemma::new("parler", Language::French);
    let form = conjugator.conjugate(&lemma, params("present.indicative.1sg"));

    assert_eq!(form.surface, "parle");
    assert_eq!(form.provenance, Provenance::Rule);
    assert_eq!(form.lemma, "parler");
    assert_eq!(form.language, Language::French);
    assert_eq!(lemma.cached_class(), Some(&ParadigmClass::named("er_regular")));
}

#[test]
fn etre_uses_exception() {
    let conjugator = bundled();
    let lemma = Lemma::new("être", Language::French);
    let form = conjugator.conjugate(&lemma, params("present.indicative.3sg"));

    assert_eq!(form.surface, "est");
    assert_eq!(form.provenance, Provenance::Exception);
}

#[test]
fn unknown_lemma_falls_back_to_itself() {
    let conjugator = bundled();
    let lemma = Lemma::new("xyzabc", Language::French);
    let form = conjugator.conjugate(&lemma, params("present.indicative.1sg"));

    assert_eq!(form.surface, "xyzabc");
    assert_eq!(form.provenance, Provenance::Fallback);
    assert!(!form.is_conjugated());
    assert_eq!(conjugator.classify(&lemma), ParadigmClass::Unclassified);
}

#[test]
fn unsupported_language_tag_is_an_error() {
    let conjugator = bundled();
    let err = conjugator
        .conjugate_tag("sprechen", "German", params("present.indicative.1sg"))
        .unwrap_err();

    let ConjugationError::InvalidLanguage { tag, .. } = err;
    assert_eq!(tag, "German");
}

#[test]
fn conjugate_all_manger_covers_every_declared_tuple() {
    let conjugator = bundled();
    let forms = conjugator.conjugate_all(&Lemma::new("manger", Language::French));
    let declared = declared_parameters(Language::French);

    assert_eq!(forms.len(), declared.len());
    let tuples: Vec<GrammaticalParameters> = forms.iter().map(|f| f.parameters).collect();
    assert_eq!(tuples, declared);

    let unique: HashSet<GrammaticalParameters> = tuples.iter().copied().collect();
    assert_eq!(unique.len(), tuples.len());
    assert!(forms.iter().all(|f| f.provenance == Provenance::Rule));
}

#[test]
fn conjugate_all_manger_paradigm() {
    let conjugator = bundled();
    let forms = conjugator.conjugate_all(&Lemma::new("manger", Language::French));

    insta::assert_snapshot!(render(&forms), @r"
    present.indicative.1sg mange
    present.indicative.2sg manges
    present.indicative.3sg mange
    present.indicative.1pl mangeons
    present.indicative.2pl mangez
    present.indicative.3pl mangent
    present.conditional.1sg mangerais
    present.conditional.2sg mangerais
    present.conditional.3sg mangerait
    present.conditional.1pl mangerions
    present.conditional.2pl mangeriez
    present.conditional.3pl mangeraient
    present.subjunctive.1sg mange
    present.subjunctive.2sg manges
    present.subjunctive.3sg mange
    present.subjunctive.1pl mangions
    present.subjunctive.2pl mangiez
    present.subjunctive.3pl mangent
    present.imperative.2sg mange
    present.imperative.1pl mangeons
    present.imperative.2pl mangez
    imperfect.indicative.1sg mangeais
    imperfect.indicative.2sg mangeais
    imperfect.indicative.3sg mangeait
    imperfect.indicative.1pl mangions
    imperfect.indicative.2pl mangiez
    imperfect.indicative.3pl mangeaient
    future.indicative.1sg mangerai
    future.indicative.2sg mangeras
    future.indicative.3sg mangera
    future.indicative.1pl mangerons
    future.indicative.2pl mangerez
    future.indicative.3pl mangeront
    ");
}

// =========================================================================
// French
// =========================================================================

#[test]
fn french_soft_c_before_a_and_o() {
    let conjugator = bundled();
    let fr = Language::French;
    assert_eq!(surface(&conjugator, "commencer", fr, "present.indicative.1pl"), "commençons");
    assert_eq!(surface(&conjugator, "commencer", fr, "imperfect.indicative.3sg"), "commençait");
    assert_eq!(surface(&conjugator, "commencer", fr, "present.indicative.1sg"), "commence");
}

#[test]
fn french_second_group() {
    let conjugator = bundled();
    let fr = Language::French;
    assert_eq!(surface(&conjugator, "finir", fr, "present.indicative.1pl"), "finissons");
    assert_eq!(surface(&conjugator, "finir", fr, "present.subjunctive.3pl"), "finissent");
    assert_eq!(surface(&conjugator, "finir", fr, "future.indicative.2pl"), "finirez");
}

#[test]
fn french_re_verbs_drop_final_e_in_future() {
    let conjugator = bundled();
    let fr = Language::French;
    assert_eq!(surface(&conjugator, "vendre", fr, "present.indicative.3sg"), "vend");
    assert_eq!(surface(&conjugator, "vendre", fr, "future.indicative.1sg"), "vendrai");
    assert_eq!(surface(&conjugator, "vendre", fr, "present.conditional.3pl"), "vendraient");
}

#[test]
fn french_irregular_verbs_are_fully_listed() {
    let conjugator = bundled();
    for lemma in ["être", "avoir", "aller", "faire"] {
        let forms = conjugator.conjugate_all(&Lemma::new(lemma, Language::French));
        assert!(
            forms.iter().all(|f| f.provenance == Provenance::Exception),
            "{lemma} has a non-exception form"
        );
    }
    assert_eq!(surface(&conjugator, "aller", Language::French, "future.indicative.1sg"), "irai");
    assert_eq!(surface(&conjugator, "faire", Language::French, "present.indicative.2pl"), "faites");
}

#[test]
fn irregular_override_beats_ending() {
    let conjugator = bundled();
    let lemma = Lemma::new("aller", Language::French);
    assert_eq!(conjugator.classify(&lemma), ParadigmClass::named("aller"));
}

// =========================================================================
// Shimaoré
// =========================================================================

#[test]
fn shimaore_subject_prefixes() {
    let conjugator = bundled();
    let forms = conjugator.conjugate_all(&Lemma::new("usoma", Language::Shimaore));
    let present: Vec<&str> = forms[..6].iter().map(|f| f.surface.as_str()).collect();
    assert_eq!(present, ["nisoma", "usoma", "asoma", "risoma", "musoma", "wasoma"]);
}

#[test]
fn shimaore_past_future_and_imperative() {
    let conjugator = bundled();
    let swb = Language::Shimaore;
    assert_eq!(surface(&conjugator, "usoma", swb, "past.indicative.1sg"), "nisomile");
    assert_eq!(surface(&conjugator, "usoma", swb, "future.indicative.3pl"), "watsosoma");
    assert_eq!(surface(&conjugator, "usoma", swb, "present.imperative.2sg"), "soma");
    assert_eq!(surface(&conjugator, "usoma", swb, "present.imperative.2pl"), "someni");
}

#[test]
fn shimaore_glides_at_prefix_boundary() {
    let conjugator = bundled();
    let swb = Language::Shimaore;
    assert_eq!(surface(&conjugator, "uenda", swb, "present.indicative.1sg"), "nyenda");
    assert_eq!(surface(&conjugator, "uenda", swb, "present.indicative.2sg"), "wenda");
    assert_eq!(surface(&conjugator, "uenda", swb, "present.indicative.3sg"), "enda");
    assert_eq!(surface(&conjugator, "uenda", swb, "present.indicative.2pl"), "mwenda");
}

#[test]
fn shimaore_suppletive_imperative() {
    let conjugator = bundled();
    let lemma = Lemma::new("uja", Language::Shimaore);
    let form = conjugator.conjugate(&lemma, params("present.imperative.2sg"));
    assert_eq!(form.surface, "ndzo");
    assert_eq!(form.provenance, Provenance::Exception);

    let form = conjugator.conjugate(&lemma, params("present.indicative.1sg"));
    assert_eq!(form.surface, "nija");
    assert_eq!(form.provenance, Provenance::Rule);
}

// =========================================================================
// Kibouchi
// =========================================================================

#[test]
fn kibouchi_pronouns_and_tense_mutations() {
    let conjugator = bundled();
    let buc = Language::Kibouchi;
    assert_eq!(surface(&conjugator, "mihinagna", buc, "present.indicative.3sg"), "izi mihinagna");
    assert_eq!(surface(&conjugator, "mihinagna", buc, "past.indicative.1pl"), "atsika nihinagna");
    assert_eq!(surface(&conjugator, "mihinagna", buc, "future.indicative.3pl"), "réou hihinagna");
}

#[test]
fn kibouchi_stems_keep_lemma_spelling() {
    let conjugator = bundled();
    let buc = Language::Kibouchi;
    assert_eq!(surface(&conjugator, "matory", buc, "present.indicative.1sg"), "zahou matory");
    assert_eq!(surface(&conjugator, "matory", buc, "past.indicative.2pl"), "anaréou natory");

    // An undeclared tuple falls back to the lemma with the same stem spelling.
    let fallback = surface(&conjugator, "matory", buc, "present.imperative.2sg");
    assert_eq!(fallback, "matory");
}

#[test]
fn kibouchi_paradigm_has_no_imperative() {
    let conjugator = bundled();
    let forms = conjugator.conjugate_all(&Lemma::new("mandeha", Language::Kibouchi));
    assert_eq!(forms.len(), 18);
    assert!(forms.iter().all(|f| f.provenance == Provenance::Rule));
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn conjugated_form_serializes_to_json() {
    let conjugator = bundled();
    let form = conjugator.conjugate(
        &Lemma::new("parler", Language::French),
        params("present.indicative.1pl"),
    );

    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "lemma": "parler",
            "language": "french",
            "parameters": {
                "tense": "present",
                "mood": "indicative",
                "number": "plural",
                "person": "first",
            },
            "surface": "parlons",
            "provenance": "rule",
        })
    );

    let back: ConjugatedForm = serde_json::from_value(json).unwrap();
    assert_eq!(back, form);
}
