//! Stem mutations named by `{mutation}` holes in rule templates.

use unicode_segmentation::UnicodeSegmentation;

/// A stem transform function.
///
/// Table files refer to mutations by name; the set is closed so that a typo
/// in a table is caught at load time rather than silently producing the plain
/// stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemMutation {
    /// The full lemma, ignoring the class stem shape (`parler` -> `parler`).
    Lemma,
    /// The lemma without a final `e` (`vendre` -> `vendr`).
    LemmaDropE,
    /// The stem without its final vowel (`soma` -> `som`).
    DropFinalVowel,
    /// Initial `m` becomes `n` (`mihinagna` -> `nihinagna`).
    MToN,
    /// Initial `m` becomes `h` (`mihinagna` -> `hihinagna`).
    MToH,
}

impl StemMutation {
    pub const ALL: [StemMutation; 5] = [
        StemMutation::Lemma,
        StemMutation::LemmaDropE,
        StemMutation::DropFinalVowel,
        StemMutation::MToN,
        StemMutation::MToH,
    ];

    /// Name used in table files.
    pub fn name(self) -> &'static str {
        match self {
            StemMutation::Lemma => "lemma",
            StemMutation::LemmaDropE => "lemma_drop_e",
            StemMutation::DropFinalVowel => "drop_final_vowel",
            StemMutation::MToN => "m_to_n",
            StemMutation::MToH => "m_to_h",
        }
    }

    pub fn from_name(name: &str) -> Option<StemMutation> {
        StemMutation::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Apply the mutation. `stem` is the lemma with its class shape removed.
    pub fn apply(self, lemma: &str, stem: &str) -> String {
        match self {
            StemMutation::Lemma => lemma.to_string(),
            StemMutation::LemmaDropE => lemma.strip_suffix('e').unwrap_or(lemma).to_string(),
            StemMutation::DropFinalVowel => drop_final_vowel(stem),
            StemMutation::MToN => replace_initial_m(stem, 'n'),
            StemMutation::MToH => replace_initial_m(stem, 'h'),
        }
    }
}

/// Vowels recognized at the end of a stem, including accented forms.
fn is_vowel(c: char) -> bool {
    "aeiouyàâäéèêëîïôöùûüAEIOUY".contains(c)
}

fn drop_final_vowel(stem: &str) -> String {
    match stem.grapheme_indices(true).next_back() {
        Some((index, grapheme)) if grapheme.chars().next().is_some_and(is_vowel) => {
            stem[..index].to_string()
        }
        _ => stem.to_string(),
    }
}

fn replace_initial_m(stem: &str, replacement: char) -> String {
    match stem.strip_prefix('m') {
        Some(rest) => format!("{replacement}{rest}"),
        None => stem.to_string(),
    }
}
