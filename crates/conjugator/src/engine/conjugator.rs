//! The conjugation orchestrator.
//!
//! [`Conjugator`] owns the tables of every loaded language and resolves a
//! request in a fixed order: exception dictionary, then classifier and rule
//! table (with phonological adjustment), then the verbatim fallback.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, trace};

use crate::engine::cache::ClassCache;
use crate::engine::error::{ConjugationError, LoadError};
use crate::engine::language_meta::declared_parameters;
use crate::engine::tables::LanguageTables;
use crate::parser::{ParseError, parse_file};
use crate::types::{
    ConjugatedForm, GrammaticalParameters, Language, Lemma, ParadigmClass, Provenance,
};

/// Table files compiled into the library.
const BUNDLED_TABLES: [(Language, &str); 3] = [
    (Language::French, include_str!("../../data/fr.conj")),
    (Language::Shimaore, include_str!("../../data/swb.conj")),
    (Language::Kibouchi, include_str!("../../data/buc.conj")),
];

/// Source text of the bundled table file for a language.
pub fn bundled_source(language: Language) -> &'static str {
    BUNDLED_TABLES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map_or("", |(_, source)| source)
}

/// Rule-based verb conjugator for French, Shimaoré and Kibouchi.
///
/// Tables are loaded per language and are read-only once loaded, so a
/// `Conjugator` can be shared between threads (behind an `Arc` or a
/// `static`) without locking. The only interior mutability is the
/// classification memo, which tolerates concurrent first-time inserts.
///
/// Conjugation never fails. Forms that no exception or rule covers come back
/// as the lemma itself with [`Provenance::Fallback`].
///
/// # Example
///
/// ```
/// use conjugator::{Conjugator, GrammaticalParameters, Language, Lemma, Provenance};
///
/// let conjugator = Conjugator::with_bundled_tables().unwrap();
/// let params: GrammaticalParameters = "present.indicative.1sg".parse().unwrap();
///
/// let form = conjugator.conjugate(&Lemma::new("parler", Language::French), params);
/// assert_eq!(form.surface, "parle");
/// assert_eq!(form.provenance, Provenance::Rule);
/// ```
#[derive(Builder)]
pub struct Conjugator {
    /// Share classifications between requests for the same lemma text.
    #[builder(default = true)]
    memoize: bool,

    /// Per-language tables. Loading a language replaces its tables.
    #[builder(skip)]
    tables: HashMap<Language, LanguageTables>,

    /// File paths for reload support. Only populated for file-loaded tables.
    #[builder(skip)]
    loaded_paths: HashMap<Language, PathBuf>,

    #[builder(skip)]
    cache: ClassCache,
}

impl Default for Conjugator {
    fn default() -> Self {
        Conjugator::builder().build()
    }
}

impl Conjugator {
    /// Create a conjugator with no tables loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conjugator with the bundled tables of every language.
    pub fn with_bundled_tables() -> Result<Self, LoadError> {
        let mut conjugator = Self::new();
        for language in Language::ALL {
            conjugator.load_bundled(language)?;
        }
        Ok(conjugator)
    }

    /// Whether classifications are shared between requests.
    pub fn memoizes(&self) -> bool {
        self.memoize
    }

    // =========================================================================
    // Table Loading
    // =========================================================================

    /// Load the table file compiled into the library for `language`.
    pub fn load_bundled(&mut self, language: Language) -> Result<usize, LoadError> {
        self.loaded_paths.remove(&language);
        self.load_tables_internal(language, bundled_source(language), None)
    }

    /// Load tables for a language from a file.
    ///
    /// The path is stored for [`reload_tables`](Self::reload_tables).
    /// Loading a language again **replaces** all of its tables.
    pub fn load_tables(
        &mut self,
        language: Language,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let count = self.load_tables_internal(language, &content, Some(path))?;
        self.loaded_paths.insert(language, path.to_path_buf());
        Ok(count)
    }

    /// Load tables for a language from a string.
    ///
    /// Returns the number of definitions read. Tables loaded this way cannot
    /// be reloaded.
    ///
    /// ```
    /// use conjugator::{Conjugator, Language};
    ///
    /// let mut conjugator = Conjugator::new();
    /// let count = conjugator.load_tables_str(Language::French, r#"
    ///     class er_regular = "{}er";
    ///     ending "er" => er_regular;
    /// "#).unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn load_tables_str(
        &mut self,
        language: Language,
        content: &str,
    ) -> Result<usize, LoadError> {
        self.loaded_paths.remove(&language);
        self.load_tables_internal(language, content, None)
    }

    /// Reload a language's tables from the file they were loaded from.
    pub fn reload_tables(&mut self, language: Language) -> Result<usize, LoadError> {
        let path = self.loaded_paths.get(&language).cloned().ok_or_else(|| {
            LoadError::NoPathForReload {
                language: language.code().to_string(),
            }
        })?;
        self.load_tables(language, path)
    }

    fn load_tables_internal(
        &mut self,
        language: Language,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let definitions = parse_file(content).map_err(|e| {
            let default_path = PathBuf::from(format!("<{}>", language.code()));
            let path = path.map(Path::to_path_buf).unwrap_or(default_path);
            let message = match &e {
                ParseError::Syntax { message, .. } => message.clone(),
                ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
            };
            let (line, column) = e.position();
            LoadError::Parse {
                path,
                line,
                column,
                message,
            }
        })?;

        let tables = LanguageTables::from_definitions(&definitions)?;
        debug!(
            language = language.code(),
            classes = tables.classifier().classes().len(),
            rules = tables.rules().len(),
            rewrites = tables.phonology().len(),
            exceptions = tables.exceptions().len(),
            "loaded conjugation tables"
        );

        self.tables.insert(language, tables);
        self.cache.clear_language(language);
        Ok(definitions.len())
    }

    // =========================================================================
    // Table Access
    // =========================================================================

    /// Tables for a language, if loaded.
    pub fn tables(&self, language: Language) -> Option<&LanguageTables> {
        self.tables.get(&language)
    }

    /// Languages with loaded tables, in declaration order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.tables.contains_key(lang))
            .collect()
    }

    // =========================================================================
    // Conjugation
    // =========================================================================

    /// Paradigm class of a lemma.
    ///
    /// Always reflects this conjugator's current tables, even for a lemma
    /// classified earlier by other tables. Lemmas of a language without
    /// tables are unclassified.
    pub fn classify(&self, lemma: &Lemma) -> ParadigmClass {
        match self.tables.get(&lemma.language()) {
            Some(tables) => self.class_of(lemma, tables).into_owned(),
            None => ParadigmClass::Unclassified,
        }
    }

    fn class_of<'l>(&self, lemma: &'l Lemma, tables: &LanguageTables) -> Cow<'l, ParadigmClass> {
        lemma.class_for(tables.generation(), || {
            let classify = || tables.classifier().classify(lemma.text());
            if self.memoize {
                self.cache
                    .get_or_insert_with(lemma.language(), lemma.text(), classify)
            } else {
                classify()
            }
        })
    }

    /// Conjugate a lemma for one parameter tuple.
    ///
    /// Resolution order, first hit wins:
    /// 1. Exception dictionary entry for the exact lemma and parameters
    /// 2. Rule for the lemma's paradigm class, run through the phonological
    ///    adjuster
    /// 3. The lemma text, unchanged
    pub fn conjugate(&self, lemma: &Lemma, parameters: GrammaticalParameters) -> ConjugatedForm {
        let language = lemma.language();
        let Some(tables) = self.tables.get(&language) else {
            debug!(language = language.code(), "no tables loaded, echoing lemma");
            return fallback(lemma, parameters);
        };

        if let Some(form) = tables.exceptions().override_for(lemma.text(), &parameters) {
            trace!(lemma = lemma.text(), %parameters, "exception");
            return conjugated(lemma, parameters, form.to_string(), Provenance::Exception);
        }

        let class = self.class_of(lemma, tables);
        if let Some(transformation) = tables.rules().lookup(&class, &parameters) {
            let stem = tables.classifier().stem(&class, lemma.text());
            let (raw, sounds) = transformation.apply(lemma.text(), stem);
            let surface = tables.phonology().adjust(&raw, &sounds);
            trace!(lemma = lemma.text(), %parameters, %class, %raw, %surface, "rule");
            return conjugated(lemma, parameters, surface, Provenance::Rule);
        }

        debug!(
            lemma = lemma.text(),
            language = language.code(),
            %parameters,
            %class,
            "no rule applies, echoing lemma"
        );
        fallback(lemma, parameters)
    }

    /// Conjugate a lemma for every parameter tuple its language declares.
    ///
    /// The result is in canonical order (tense, mood, number, person) and is
    /// identical across calls and processes.
    pub fn conjugate_all(&self, lemma: &Lemma) -> Vec<ConjugatedForm> {
        declared_parameters(lemma.language())
            .into_iter()
            .map(|parameters| self.conjugate(lemma, parameters))
            .collect()
    }

    /// Conjugate from a caller-supplied language tag.
    ///
    /// Fails only if the tag names no supported language.
    ///
    /// ```
    /// use conjugator::{ConjugationError, Conjugator};
    ///
    /// let conjugator = Conjugator::with_bundled_tables().unwrap();
    /// let params = "present.indicative.1sg".parse().unwrap();
    /// let err = conjugator.conjugate_tag("sprechen", "German", params).unwrap_err();
    /// assert!(matches!(err, ConjugationError::InvalidLanguage { .. }));
    /// ```
    pub fn conjugate_tag(
        &self,
        text: &str,
        language_tag: &str,
        parameters: GrammaticalParameters,
    ) -> Result<ConjugatedForm, ConjugationError> {
        let lemma = Lemma::parse(text, language_tag)?;
        Ok(self.conjugate(&lemma, parameters))
    }

    /// Full paradigm from a caller-supplied language tag.
    pub fn conjugate_all_tag(
        &self,
        text: &str,
        language_tag: &str,
    ) -> Result<Vec<ConjugatedForm>, ConjugationError> {
        let lemma = Lemma::parse(text, language_tag)?;
        Ok(self.conjugate_all(&lemma))
    }
}

fn conjugated(
    lemma: &Lemma,
    parameters: GrammaticalParameters,
    surface: String,
    provenance: Provenance,
) -> ConjugatedForm {
    ConjugatedForm {
        lemma: lemma.text().to_string(),
        language: lemma.language(),
        parameters,
        surface,
        provenance,
    }
}

fn fallback(lemma: &Lemma, parameters: GrammaticalParameters) -> ConjugatedForm {
    conjugated(
        lemma,
        parameters,
        lemma.text().to_string(),
        Provenance::Fallback,
    )
}
