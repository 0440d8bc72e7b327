//! # Language preference — the active display locale
//!
//! [`LanguageState`] holds the active [`Language`] and writes its bare code
//! (`"en"` / `"km"`, not JSON) to storage on every change. Anything stored
//! that is not one of the two codes loads as the configured default, so the
//! in-memory value is always valid and [`LanguageState::toggle_language`] is
//! total.

use std::rc::Rc;

use api::Language;

use crate::cell::{Derived, StateCell};
use crate::storage::{load_text, store_text, KeyValueStorage};

#[derive(Clone, Debug)]
pub struct LanguageState {
    language: StateCell<Language>,
    is_english: Derived<bool>,
    is_khmer: Derived<bool>,
}

impl LanguageState {
    /// Seed from the record under `key`, falling back to `default`.
    pub fn load(storage: Rc<dyn KeyValueStorage>, key: &str, default: Language) -> Self {
        let language = StateCell::new(read_language(storage.as_ref(), key, default));

        let key = key.to_string();
        language
            .subscribe(move |lang: &Language| store_text(storage.as_ref(), &key, lang.code()))
            .detach();

        Self {
            is_english: language.map(|lang| *lang == Language::En),
            is_khmer: language.map(|lang| *lang == Language::Km),
            language,
        }
    }

    /// The observable language cell.
    pub fn language(&self) -> &StateCell<Language> {
        &self.language
    }

    pub fn current(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
    }

    /// Switch between English and Khmer.
    pub fn toggle_language(&self) {
        self.language.update(|lang| *lang = lang.toggled());
    }

    pub fn is_english(&self) -> bool {
        self.is_english.get()
    }

    pub fn is_khmer(&self) -> bool {
        self.is_khmer.get()
    }
}

fn read_language(storage: &dyn KeyValueStorage, key: &str, default: Language) -> Language {
    tracing::debug!("checking stored language under {key:?}");
    let Some(code) = load_text(storage, key) else {
        return default;
    };
    match code.parse::<Language>() {
        Ok(lang) => lang,
        Err(e) => {
            tracing::warn!("{e} under {key:?}, using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FailingStorage;
    use crate::{MemoryStorage, NoopStorage};

    const KEY: &str = "language";

    fn reload(storage: &MemoryStorage) -> LanguageState {
        LanguageState::load(Rc::new(storage.clone()), KEY, Language::Km)
    }

    #[test]
    fn test_fresh_storage_defaults_to_khmer() {
        let state = reload(&MemoryStorage::new());
        assert_eq!(state.current(), Language::Km);
        assert!(state.is_khmer());
        assert!(!state.is_english());
    }

    #[test]
    fn test_configured_default() {
        let state = LanguageState::load(Rc::new(MemoryStorage::new()), KEY, Language::En);
        assert_eq!(state.current(), Language::En);
    }

    #[test]
    fn test_set_language_survives_reload() {
        for lang in Language::ALL {
            let storage = MemoryStorage::new();
            reload(&storage).set_language(lang);
            assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(lang.code()));
            assert_eq!(reload(&storage).current(), lang);
        }
    }

    #[test]
    fn test_prepopulated_english() {
        let storage = MemoryStorage::with_items([(KEY, "en")]);
        let state = reload(&storage);
        assert_eq!(state.current(), Language::En);
        assert!(state.is_english());
        assert!(!state.is_khmer());
    }

    #[test]
    fn test_toggle_twice_returns() {
        for start in Language::ALL {
            let storage = MemoryStorage::new();
            let state = reload(&storage);
            state.set_language(start);

            state.toggle_language();
            assert_eq!(state.current(), start.toggled());
            assert_eq!(reload(&storage).current(), start.toggled());

            state.toggle_language();
            assert_eq!(state.current(), start);
            assert_eq!(reload(&storage).current(), start);
        }
    }

    #[test]
    fn test_flags_are_exclusive() {
        let state = reload(&MemoryStorage::new());
        for _ in 0..3 {
            assert_ne!(state.is_english(), state.is_khmer());
            state.toggle_language();
        }
    }

    #[test]
    fn test_out_of_range_value_uses_default() {
        let storage = MemoryStorage::with_items([(KEY, "fr")]);
        let state = reload(&storage);
        assert_eq!(state.current(), Language::Km);

        state.toggle_language();
        assert_eq!(state.current(), Language::En);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_failing_storage_keeps_in_memory_language() {
        let state = LanguageState::load(Rc::new(FailingStorage), KEY, Language::Km);
        assert_eq!(state.current(), Language::Km);

        state.set_language(Language::En);
        assert!(state.is_english());

        state.toggle_language();
        assert_eq!(state.current(), Language::Km);
    }

    #[test]
    fn test_noop_storage_always_defaults() {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(NoopStorage);
        LanguageState::load(Rc::clone(&storage), KEY, Language::Km).set_language(Language::En);
        assert_eq!(
            LanguageState::load(storage, KEY, Language::Km).current(),
            Language::Km
        );
    }
}
