//! The built-in translation catalog.

use std::sync::{
    Arc,
    LazyLock,
};

/// Built-in translations: 6 cultures x 5 keys.
///
/// en-US deliberately has no rows, so lookups under the default culture
/// always fall back to the raw key.
static BUILTIN: &[(&str, &str, &str)] = &[
    ("it-IT", "Hello", "Ciao"),
    ("it-IT", "Goodbye", "Arrivederci"),
    ("it-IT", "The Current Date", "La Data Corrente"),
    ("it-IT", "A Formatted Number", "Un Numero Formattato"),
    ("it-IT", "A Currency Value", "Un Valore di Valuta"),
    ("ja-JP", "Hello", "こんにちは"),
    ("ja-JP", "Goodbye", "さようなら"),
    ("ja-JP", "The Current Date", "現在の日付"),
    ("ja-JP", "A Formatted Number", "フォーマットされた数値"),
    ("ja-JP", "A Currency Value", "通貨の値"),
    ("sv-SE", "Hello", "Hej"),
    ("sv-SE", "Goodbye", "Hej då"),
    ("sv-SE", "The Current Date", "Aktuellt Datum"),
    ("sv-SE", "A Formatted Number", "En Formaterad Rad"),
    ("sv-SE", "A Currency Value", "Ett Valutavärde"),
    ("nl-NL", "Hello", "Hallo"),
    ("nl-NL", "Goodbye", "Tot ziens"),
    ("nl-NL", "The Current Date", "De Huidige Datum"),
    ("nl-NL", "A Formatted Number", "Een Opgemaakte Nummer"),
    ("nl-NL", "A Currency Value", "Een Valutawaarde"),
    ("ru-RU", "Hello", "Привет"),
    ("ru-RU", "Goodbye", "До свидания"),
    ("ru-RU", "The Current Date", "Текущая дата"),
    ("ru-RU", "A Formatted Number", "Отформатированный номер"),
    ("ru-RU", "A Currency Value", "Значение валюты"),
    ("tr-TR", "Hello", "Merhaba"),
    ("tr-TR", "Goodbye", "Hoşçakal"),
    ("tr-TR", "The Current Date", "Güncel Tarih"),
    ("tr-TR", "A Formatted Number", "Biçimlendirilmiş Sayı"),
    ("tr-TR", "A Currency Value", "Para Birimi"),
];

/// Process-wide catalog, built once and shared read-only.
static SHARED: LazyLock<Arc<TranslationCatalog>> =
    LazyLock::new(|| Arc::new(TranslationCatalog::builtin()));

/// One stored (culture, key, value) mapping. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub culture: String,
    pub key: String,
    pub value: String,
}

/// An ordered, immutable sequence of translation entries.
///
/// Uniqueness of (culture, key) is assumed but not enforced; duplicate keys
/// resolve to whichever entry comes first in insertion order.
#[derive(Debug, Default)]
pub struct TranslationCatalog {
    entries: Vec<TranslationEntry>,
}

impl TranslationCatalog {
    /// Builds the catalog from the hardcoded translation list.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(culture, key, value)| TranslationEntry {
                culture: (*culture).to_string(),
                key: (*key).to_string(),
                value: (*value).to_string(),
            })
            .collect();

        Self { entries }
    }

    /// Finds the first entry matching (culture, key) in insertion order.
    #[must_use]
    pub fn find(&self, culture: &str, key: &str) -> Option<&TranslationEntry> {
        self.entries.iter().find(|entry| entry.culture == culture && entry.key == key)
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the shared process-wide catalog.
#[must_use]
pub fn shared() -> Arc<TranslationCatalog> {
    Arc::clone(&SHARED)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn builtin_has_five_keys_for_six_cultures() {
        let catalog = TranslationCatalog::builtin();

        expect_that!(catalog.len(), eq(30));
        for culture in ["it-IT", "ja-JP", "sv-SE", "nl-NL", "ru-RU", "tr-TR"] {
            let count = catalog.entries().iter().filter(|e| e.culture == culture).count();
            expect_that!(count, eq(5));
        }
    }

    #[googletest::test]
    fn builtin_has_no_entries_for_default_culture() {
        let catalog = TranslationCatalog::builtin();

        let count = catalog.entries().iter().filter(|e| e.culture == "en-US").count();
        expect_that!(count, eq(0));
    }

    #[rstest]
    #[case("it-IT", "Hello", "Ciao")]
    #[case("ja-JP", "Goodbye", "さようなら")]
    #[case("sv-SE", "Goodbye", "Hej då")]
    #[case("nl-NL", "The Current Date", "De Huidige Datum")]
    #[case("ru-RU", "A Formatted Number", "Отформатированный номер")]
    #[case("tr-TR", "A Currency Value", "Para Birimi")]
    fn find_returns_stored_value(#[case] culture: &str, #[case] key: &str, #[case] value: &str) {
        let catalog = TranslationCatalog::builtin();

        let entry = catalog.find(culture, key).unwrap();
        assert_eq!(entry.value, value);
    }

    #[rstest]
    #[case("en-US", "Hello")]
    #[case("it-IT", "Current Culture")]
    #[case("fr-FR", "Hello")]
    fn find_returns_none_for_missing_pair(#[case] culture: &str, #[case] key: &str) {
        let catalog = TranslationCatalog::builtin();

        assert!(catalog.find(culture, key).is_none());
    }

    #[googletest::test]
    fn shared_returns_the_same_catalog() {
        let a = shared();
        let b = shared();

        expect_that!(Arc::ptr_eq(&a, &b), eq(true));
        expect_that!(a.len(), eq(30));
    }
}
