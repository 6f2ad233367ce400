//! The related-code collector.
//!
//! Assembles an ordered, deduplicated candidate list from every table that
//! can name a sibling of the resolved tag — minimized/maximized forms and
//! their subtag recombinations, macrolanguage membership, deprecated-code
//! replacements, alpha-3 codes — then keeps only candidates that survive
//! the territory filter and the near-identity distance check. Individual
//! candidate failures are skipped, never fatal.

use std::collections::HashSet;

use icu_locale_core::LanguageIdentifier;
use smallvec::SmallVec;

use crate::data;
use crate::langspect::Langspect;
use crate::resolve::RelatedCode;

impl Langspect {
    pub(crate) fn related_codes(
        &self,
        lang: &LanguageIdentifier,
        maximized: &LanguageIdentifier,
        base_tag: &str,
    ) -> Vec<RelatedCode> {
        let mut tags: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        self.push_candidate(&mut tags, &mut seen, &lang.to_string());

        let mut minimized = lang.clone();
        let _ = self.expander.minimize(&mut minimized);
        self.push_candidate(&mut tags, &mut seen, &minimized.to_string());

        self.push_candidate(&mut tags, &mut seen, &maximized.to_string());

        // every recombination of the maximized subtags
        if maximized.language.as_str() != "und" {
            for component in recombine(maximized) {
                self.push_candidate(&mut tags, &mut seen, &component);
            }
        }

        let base_language = lang.language.as_str();
        if base_language != "und" {
            for member in data::macrolanguage_members(base_language) {
                self.push_candidate(&mut tags, &mut seen, member);
            }
            if let Some(parent) = data::MACROLANGUAGE_OF.get(base_language) {
                self.push_candidate(&mut tags, &mut seen, parent);
            }
            for source in data::replacement_sources(base_language) {
                self.push_candidate(&mut tags, &mut seen, source);
            }
            if let Some(replacement) = data::LANGUAGE_REPLACEMENTS.get(base_language) {
                self.push_candidate(&mut tags, &mut seen, replacement);
            }
            if let Some(iso) = data::iso_language(base_language) {
                self.push_candidate(&mut tags, &mut seen, iso.to_639_3());
            }
            if let Some(bibliographic) = data::ALPHA3_BIBLIOGRAPHIC.get(base_language) {
                self.push_candidate(&mut tags, &mut seen, bibliographic);
            }
        }

        let primary = self
            .standardize(&lang.to_string())
            .unwrap_or_else(|| lang.to_string());
        let reference = if base_tag.is_empty() {
            primary.as_str()
        } else {
            base_tag
        };

        let mut related = Vec::new();
        for candidate in &tags {
            if candidate == &primary {
                continue;
            }
            if is_filtered_us_territory(candidate) {
                continue;
            }
            if self.is_near_identical(reference, candidate) {
                related.push(RelatedCode {
                    tag: candidate.clone(),
                    name: self.display_name(candidate),
                });
            }
        }
        related
    }

    /// Record a candidate: its standardized form first, then the raw
    /// spelling, each only on first sight.
    fn push_candidate(&self, tags: &mut Vec<String>, seen: &mut HashSet<String>, raw: &str) {
        let standardized = self.standardize(raw);
        for candidate in standardized.iter().map(String::as_str).chain([raw]) {
            if !candidate.is_empty() && seen.insert(candidate.to_owned()) {
                tags.push(candidate.to_owned());
            }
        }
    }
}

/// US-territory tags are noise for most languages; only the allowlisted
/// ones keep them.
fn is_filtered_us_territory(candidate: &str) -> bool {
    let Ok(id) = LanguageIdentifier::try_from_str(candidate) else {
        return false;
    };
    id.region.is_some_and(|r| r.as_str() == "US")
        && !data::US_TERRITORY_LANG_ALLOWLIST.contains(&id.language.as_str())
}

/// All tags spellable from the maximized subtags: base, base-script,
/// base-territory, base-script-territory, and each crossed with each
/// variant.
fn recombine(maximized: &LanguageIdentifier) -> SmallVec<[String; 8]> {
    let base = maximized.language.as_str();
    let script = maximized.script;
    let territory = maximized.region;
    let variants: SmallVec<[&str; 4]> = maximized.variants.iter().map(|v| v.as_str()).collect();

    let mut components: SmallVec<[String; 8]> = SmallVec::new();
    components.push(base.to_owned());
    if let Some(sc) = script {
        components.push(format!("{base}-{}", sc.as_str()));
    }
    if let Some(tr) = territory {
        components.push(format!("{base}-{}", tr.as_str()));
    }
    if let (Some(sc), Some(tr)) = (script, territory) {
        components.push(format!("{base}-{}-{}", sc.as_str(), tr.as_str()));
    }
    for variant in &variants {
        components.push(format!("{base}-{variant}"));
        if let Some(sc) = script {
            components.push(format!("{base}-{}-{variant}", sc.as_str()));
        }
        if let Some(tr) = territory {
            components.push(format!("{base}-{}-{variant}", tr.as_str()));
        }
        if let (Some(sc), Some(tr)) = (script, territory) {
            components.push(format!("{base}-{}-{}-{variant}", sc.as_str(), tr.as_str()));
        }
    }
    components
}
