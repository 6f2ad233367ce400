//! The resolver engine.
//!
//! `Langspect` owns the CLDR-backed machinery — a likely-subtags expander
//! and an alias canonicalizer, both from ICU4X compiled data — and exposes
//! the one operation the CLI needs: [`Langspect::resolve`].

use icu_locale::{LocaleCanonicalizer, LocaleExpander};
use icu_locale_core::{LanguageIdentifier, Locale};
use smallvec::SmallVec;

use crate::data;
use crate::resolve::{MatchKind, Resolution, ResolveError};

pub struct Langspect {
    pub(crate) expander: LocaleExpander,
    pub(crate) canonicalizer: LocaleCanonicalizer,
}

impl Default for Langspect {
    fn default() -> Self {
        Self::new()
    }
}

impl Langspect {
    pub fn new() -> Self {
        Self {
            expander: LocaleExpander::new_extended(),
            canonicalizer: LocaleCanonicalizer::new_extended(),
        }
    }

    /// Resolve a query — a BCP 47 tag or an English language name — into a
    /// standardized tag, description, likely script and related codes.
    pub fn resolve(&self, query: &str) -> Result<Resolution, ResolveError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        let (locale, matched_by) = match self.parse_valid_tag(query) {
            Some(locale) => (locale, MatchKind::Tag),
            None => {
                let id = self
                    .find_name(query)
                    .ok_or_else(|| ResolveError::UnknownLanguage(query.to_owned()))?;
                (Locale::from(id), MatchKind::Name)
            }
        };

        let id = locale.id;
        let tag = id.to_string();
        let description = self.describe(&id);

        let maximized = self.maximize_id(&id);
        let likely_script = maximized.script.map(|s| s.as_str().to_owned());

        let related = self.related_codes(&id, &maximized, &tag);

        Ok(Resolution {
            tag,
            description,
            likely_script,
            related,
            matched_by,
        })
    }

    /// Whether `tag` is a valid BCP 47 tag: syntactically well-formed, and
    /// its (canonicalized) language subtag is ISO 639-registered or `und`.
    ///
    /// The registry check is what keeps name queries out of the tag path:
    /// "French" parses as a syntactically fine language subtag but is not a
    /// registered code.
    pub fn is_valid_tag(&self, tag: &str) -> bool {
        self.parse_valid_tag(tag).is_some()
    }

    pub(crate) fn parse_valid_tag(&self, tag: &str) -> Option<Locale> {
        let mut locale = Locale::try_from_str(tag).ok()?;
        let _ = self.canonicalizer.canonicalize(&mut locale);
        let language = locale.id.language.as_str();
        if language == "und" || data::iso_language(language).is_some() {
            Some(locale)
        } else {
            None
        }
    }

    /// Canonical form of `tag` (case normalization plus CLDR alias
    /// replacement), or `None` when it does not parse.
    pub fn standardize(&self, tag: &str) -> Option<String> {
        let mut locale = Locale::try_from_str(tag).ok()?;
        let _ = self.canonicalizer.canonicalize(&mut locale);
        Some(locale.to_string())
    }

    /// Likely-subtags expansion, e.g. `fr` → `fr-Latn-FR`.
    pub fn maximize(&self, tag: &str) -> Option<String> {
        let locale = self.parse_valid_tag(tag)?;
        Some(self.maximize_id(&locale.id).to_string())
    }

    /// Inverse of [`Langspect::maximize`], e.g. `en-Latn-US` → `en`.
    pub fn minimize(&self, tag: &str) -> Option<String> {
        let locale = self.parse_valid_tag(tag)?;
        let mut id = locale.id;
        let _ = self.expander.minimize(&mut id);
        Some(id.to_string())
    }

    pub(crate) fn maximize_id(&self, id: &LanguageIdentifier) -> LanguageIdentifier {
        let mut maximized = id.clone();
        let _ = self.expander.maximize(&mut maximized);
        maximized
    }

    /// Display name for a language identifier: the ISO 639 English name of
    /// the primary subtag, qualified by whatever script, territory and
    /// variants the tag carries.
    pub fn describe(&self, id: &LanguageIdentifier) -> String {
        let base = data::language_name(id.language.as_str());

        let mut qualifiers: SmallVec<[String; 4]> = SmallVec::new();
        if let Some(script) = id.script {
            qualifiers.push(data::script_name(script.as_str()).to_owned());
        }
        if let Some(region) = id.region {
            qualifiers.push(data::territory_name(region.as_str()).to_owned());
        }
        for variant in id.variants.iter() {
            qualifiers.push(variant.as_str().to_owned());
        }

        if qualifiers.is_empty() {
            base
        } else {
            format!("{base} ({})", qualifiers.join(", "))
        }
    }

    /// Display name for a candidate tag string; "Unknown" when it cannot
    /// even be parsed.
    pub(crate) fn display_name(&self, tag: &str) -> String {
        let standardized = self.standardize(tag);
        let source = standardized.as_deref().unwrap_or(tag);
        match LanguageIdentifier::try_from_str(source) {
            Ok(id) => self.describe(&id),
            Err(_) => "Unknown".to_owned(),
        }
    }

    /// Best-effort English-name search: exact registry match first, then a
    /// title-cased retry so "french" and "swiss german" both land.
    fn find_name(&self, query: &str) -> Option<LanguageIdentifier> {
        let mut attempts: SmallVec<[String; 2]> = SmallVec::new();
        attempts.push(query.to_owned());
        let titled = title_case(query);
        if titled != query {
            attempts.push(titled);
        }

        for name in &attempts {
            if let Some(found) = isolang::Language::from_name(name) {
                let code = found.to_639_1().unwrap_or_else(|| found.to_639_3());
                return LanguageIdentifier::try_from_str(code).ok();
            }
        }
        None
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start_of_word = true;
    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' {
            start_of_word = true;
            out.push(ch);
        } else if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
