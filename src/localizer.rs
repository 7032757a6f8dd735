//! Culture-aware string lookup over the translation catalog.

use std::fmt::{
    self,
    Display,
};
use std::sync::Arc;

use crate::catalog::{
    self,
    TranslationCatalog,
};
use crate::error::FormatError;
use crate::template;

/// The outcome of a lookup.
///
/// When `found` is `false`, `text` is the key itself standing in as a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub key: String,
    pub text: String,
    pub found: bool,
}

impl Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Resolves translated strings for a culture.
///
/// A localizer either carries a fixed culture or resolves against the ambient
/// culture passed into each lookup. Every lookup is a pure function of
/// (catalog, culture, key, arguments); instances are cheap and hold no state
/// beyond an `Arc` to the shared catalog.
#[derive(Debug, Clone)]
pub struct StringLocalizer {
    culture: Option<String>,
    catalog: Arc<TranslationCatalog>,
}

impl Default for StringLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StringLocalizer {
    /// Creates a localizer that resolves against the ambient culture.
    #[must_use]
    pub fn new() -> Self {
        Self { culture: None, catalog: catalog::shared() }
    }

    /// The fixed culture, if any.
    #[must_use]
    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    fn effective_culture<'a>(&'a self, ambient_culture: &'a str) -> &'a str {
        self.culture.as_deref().unwrap_or(ambient_culture)
    }

    /// Looks up `key` for the effective culture.
    ///
    /// First entry in catalog order wins. A missing translation is not an
    /// error: the key itself comes back with `found == false`.
    #[must_use]
    pub fn lookup(&self, ambient_culture: &str, key: &str) -> LocalizedText {
        let culture = self.effective_culture(ambient_culture);

        self.catalog.find(culture, key).map_or_else(
            || LocalizedText { key: key.to_string(), text: key.to_string(), found: false },
            |entry| LocalizedText {
                key: key.to_string(),
                text: entry.value.clone(),
                found: true,
            },
        )
    }

    /// Looks up `key` and expands positional placeholders in the translation.
    ///
    /// When no translation exists, no substitution is attempted and the raw
    /// key comes back unchanged. When the translation references an argument
    /// that was not supplied, the error propagates to the caller.
    ///
    /// # Errors
    /// [`FormatError`] when the found template and `args` do not line up.
    pub fn lookup_formatted(
        &self,
        ambient_culture: &str,
        key: &str,
        args: &[&dyn Display],
    ) -> Result<LocalizedText, FormatError> {
        let culture = self.effective_culture(ambient_culture);

        match self.catalog.find(culture, key) {
            Some(entry) => {
                let text = template::expand(&entry.value, args)?;
                Ok(LocalizedText { key: key.to_string(), text, found: true })
            }
            None => {
                Ok(LocalizedText { key: key.to_string(), text: key.to_string(), found: false })
            }
        }
    }

    /// Every catalog entry, each marked found.
    ///
    /// Deliberately not filtered by this localizer's culture; callers get the
    /// whole catalog no matter which culture is bound.
    pub fn all_entries(&self) -> impl Iterator<Item = LocalizedText> + '_ {
        self.catalog.entries().iter().map(|entry| LocalizedText {
            key: entry.key.clone(),
            text: entry.value.clone(),
            found: true,
        })
    }

    /// A new localizer bound to a fixed culture, sharing the same catalog.
    #[must_use]
    pub fn with_culture(&self, culture: impl Into<String>) -> Self {
        Self { culture: Some(culture.into()), catalog: Arc::clone(&self.catalog) }
    }
}

/// Hands out localizer instances on demand.
///
/// The resource identifier is ignored: every caller gets the same default
/// localizer. Real factories key instances by resource; this one does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizerFactory;

impl LocalizerFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates a fresh default localizer regardless of `resource`.
    #[must_use]
    pub fn create(&self, _resource: &str) -> StringLocalizer {
        StringLocalizer::new()
    }
}
