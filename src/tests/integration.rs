#[cfg(test)]
mod integration_tests {

    use crate::{Langspect, MatchKind, ResolveError};

    fn tags(resolution: &crate::Resolution) -> Vec<&str> {
        resolution.related.iter().map(|c| c.tag.as_str()).collect()
    }

    #[test]
    fn resolves_name_to_tag() {
        let ls = Langspect::new();
        let res = ls.resolve("French").unwrap();
        assert_eq!(res.tag, "fr");
        assert_eq!(res.matched_by, MatchKind::Name);
        assert_eq!(res.description, "French");
        assert_eq!(res.likely_script.as_deref(), Some("Latn"));
    }

    #[test]
    fn resolves_lowercase_and_multiword_names() {
        let ls = Langspect::new();
        assert_eq!(ls.resolve("german").unwrap().tag, "de");
        assert_eq!(ls.resolve("Western Frisian").unwrap().tag, "fy");
        assert_eq!(ls.resolve("western frisian").unwrap().tag, "fy");
    }

    #[test]
    fn resolves_valid_tag() {
        let ls = Langspect::new();
        let res = ls.resolve("de").unwrap();
        assert_eq!(res.tag, "de");
        assert_eq!(res.matched_by, MatchKind::Tag);
        assert_eq!(res.likely_script.as_deref(), Some("Latn"));

        let related = tags(&res);
        assert!(related.contains(&"deu"));
        assert!(related.contains(&"de-DE"));
        assert!(!related.contains(&"de"));
    }

    #[test]
    fn resolves_mixed_case_tag() {
        let ls = Langspect::new();
        let res = ls.resolve("EN-us").unwrap();
        assert_eq!(res.tag, "en-US");
        assert_eq!(res.description, "English (United States)");
    }

    #[test]
    fn deprecated_tag_resolves_to_replacement() {
        let ls = Langspect::new();
        let res = ls.resolve("iw").unwrap();
        assert_eq!(res.tag, "he");
        // the deprecated spelling comes back as a related code
        assert!(tags(&res).contains(&"iw"));
    }

    #[test]
    fn related_never_contains_primary() {
        let ls = Langspect::new();
        for query in ["fr", "en", "zh", "de-CH", "haw"] {
            let res = ls.resolve(query).unwrap();
            assert!(
                res.related.iter().all(|c| c.tag != res.tag),
                "primary {} leaked into its own related list",
                res.tag
            );
        }
    }

    #[test]
    fn related_excludes_us_territory_for_non_allowlisted() {
        // Hawaiian maximizes into the US, so the recombinations would all
        // carry -US without the territory filter.
        let ls = Langspect::new();
        let res = ls.resolve("haw").unwrap();
        assert!(tags(&res).iter().all(|t| !t.ends_with("-US")));
    }

    #[test]
    fn related_keeps_us_territory_for_english() {
        let ls = Langspect::new();
        let res = ls.resolve("en").unwrap();
        assert!(tags(&res).contains(&"en-US"));
    }

    #[test]
    fn macrolanguage_related_codes() {
        let ls = Langspect::new();
        let res = ls.resolve("zh").unwrap();
        let related = tags(&res);
        // Mandarin folds into zh; Cantonese is a different language
        assert!(related.contains(&"cmn"));
        assert!(related.contains(&"zh-Hans"));
        assert!(!related.contains(&"yue"));
    }

    #[test]
    fn related_names_are_filled() {
        let ls = Langspect::new();
        let res = ls.resolve("fr").unwrap();
        let fr_fr = res
            .related
            .iter()
            .find(|c| c.tag == "fr-FR")
            .expect("fr-FR should be near-identical to fr");
        assert_eq!(fr_fr.name, "French (France)");
    }

    #[test]
    fn describes_script_and_territory() {
        let ls = Langspect::new();
        let res = ls.resolve("fr-CA").unwrap();
        assert_eq!(res.description, "French (Canada)");

        let res = ls.resolve("zh-Hans").unwrap();
        assert_eq!(res.likely_script.as_deref(), Some("Hans"));
    }

    #[test]
    fn unknown_query_errors() {
        let ls = Langspect::new();
        let err = ls.resolve("definitely not a language").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownLanguage(_)));
    }

    #[test]
    fn empty_query_errors() {
        let ls = Langspect::new();
        assert!(matches!(ls.resolve("   "), Err(ResolveError::EmptyQuery)));
    }
}
