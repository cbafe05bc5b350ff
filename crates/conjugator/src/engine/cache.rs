//! Shared memo of lemma classifications.
//!
//! Concurrent requests may race to classify the same lemma. Classification is
//! deterministic, so the race is harmless: both compute the same class and
//! the last insert wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::types::{Language, ParadigmClass};

#[derive(Debug, Default)]
pub struct ClassCache {
    entries: RwLock<HashMap<(Language, String), ParadigmClass>>,
}

impl ClassCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached class, or compute and insert it.
    ///
    /// `classify` runs without the lock held.
    pub fn get_or_insert_with(
        &self,
        language: Language,
        lemma: &str,
        classify: impl FnOnce() -> ParadigmClass,
    ) -> ParadigmClass {
        let key = (language, lemma.to_string());
        if let Some(class) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return class.clone();
        }

        let class = classify();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, class.clone());
        class
    }

    /// Drop every entry for one language.
    pub fn clear_language(&mut self, language: Language) {
        self.entries
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(lang, _), _| *lang != language);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
