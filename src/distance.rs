//! CLDR-style distance between two language tags.
//!
//! Both tags are canonicalized and expanded to their likely subtags, then
//! penalties are summed per differing subtag. The penalties follow the CLDR
//! language-matching defaults; a pair of distinct languages inside the same
//! macrolanguage family scores closer than unrelated languages, but still
//! far beyond the near-identity threshold.

use icu_locale_core::{LanguageIdentifier, Locale};

use crate::data;
use crate::langspect::Langspect;

/// Candidates at or under this distance (in both directions) count as
/// near-identical.
pub const MAX_NEAR_DISTANCE: u32 = 1;

const DIFFERENT_LANGUAGE: u32 = 80;
const MACROLANGUAGE_FAMILY: u32 = 20;
const DIFFERENT_SCRIPT: u32 = 40;
const DIFFERENT_TERRITORY: u32 = 4;
const DIFFERENT_VARIANT: u32 = 1;
const DIFFERENT_EXTENSION: u32 = 1;

impl Langspect {
    /// Distance between two tags, `None` when either fails to parse.
    pub fn tag_distance(&self, a: &str, b: &str) -> Option<u32> {
        let (locale_a, max_a) = self.desugar(a)?;
        let (locale_b, max_b) = self.desugar(b)?;

        let mut distance = 0;
        if max_a.language != max_b.language {
            distance += if same_macro_family(max_a.language.as_str(), max_b.language.as_str()) {
                MACROLANGUAGE_FAMILY
            } else {
                DIFFERENT_LANGUAGE
            };
        }
        if max_a.script != max_b.script {
            distance += DIFFERENT_SCRIPT;
        }
        if max_a.region != max_b.region {
            distance += DIFFERENT_TERRITORY;
        }
        distance += variant_mismatches(&max_a, &max_b) * DIFFERENT_VARIANT;
        if locale_a.extensions != locale_b.extensions {
            distance += DIFFERENT_EXTENSION;
        }
        Some(distance)
    }

    /// Whether `candidate` is effectively identical to `reference`:
    /// distance within [`MAX_NEAR_DISTANCE`] in both directions.
    pub fn is_near_identical(&self, reference: &str, candidate: &str) -> bool {
        let forward = self.tag_distance(reference, candidate);
        let backward = self.tag_distance(candidate, reference);
        match (forward, backward) {
            (Some(f), Some(b)) => f <= MAX_NEAR_DISTANCE && b <= MAX_NEAR_DISTANCE,
            _ => false,
        }
    }

    /// Canonicalize, then expand to likely subtags. Returns the
    /// canonicalized locale (for extension comparison) alongside the
    /// maximized identifier.
    fn desugar(&self, tag: &str) -> Option<(Locale, LanguageIdentifier)> {
        let mut locale = Locale::try_from_str(tag).ok()?;
        let _ = self.canonicalizer.canonicalize(&mut locale);
        let maximized = self.maximize_id(&locale.id);
        Some((locale, maximized))
    }
}

fn same_macro_family(a: &str, b: &str) -> bool {
    let macro_a = data::MACROLANGUAGE_OF.get(a);
    let macro_b = data::MACROLANGUAGE_OF.get(b);
    macro_a == Some(&b) || macro_b == Some(&a) || (macro_a.is_some() && macro_a == macro_b)
}

fn variant_mismatches(a: &LanguageIdentifier, b: &LanguageIdentifier) -> u32 {
    let only_in_a = a
        .variants
        .iter()
        .filter(|v| !b.variants.iter().any(|w| w == *v))
        .count();
    let only_in_b = b
        .variants
        .iter()
        .filter(|v| !a.variants.iter().any(|w| w == *v))
        .count();
    (only_in_a + only_in_b) as u32
}
