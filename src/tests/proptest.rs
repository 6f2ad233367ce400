mod prop_tests {
    use crate::distance::MAX_NEAR_DISTANCE;
    use crate::{Langspect, data};
    use icu_locale_core::LanguageIdentifier;
    use proptest::prelude::*;

    const TAGS: &[&str] = &[
        "en", "en-US", "en-GB", "fr", "fr-CA", "de", "de-CH", "es", "es-419", "pt-BR", "zh",
        "zh-Hans", "zh-Hant-TW", "cmn", "yue", "sr-Latn", "sr-Cyrl", "haw", "ja", "ko", "iw",
        "und",
    ];

    fn tag_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(TAGS)
    }

    proptest! {
        #[test]
        fn distance_is_symmetric((a, b) in (tag_strategy(), tag_strategy())) {
            let ls = Langspect::new();
            prop_assert_eq!(ls.tag_distance(a, b), ls.tag_distance(b, a));
        }

        #[test]
        fn distance_to_self_is_zero(a in tag_strategy()) {
            let ls = Langspect::new();
            prop_assert_eq!(ls.tag_distance(a, a), Some(0));
        }

        #[test]
        fn related_never_contains_primary(a in tag_strategy()) {
            let ls = Langspect::new();
            let res = ls.resolve(a).unwrap();
            prop_assert!(res.related.iter().all(|c| c.tag != res.tag));
        }

        #[test]
        fn related_respects_us_allowlist(a in tag_strategy()) {
            let ls = Langspect::new();
            let res = ls.resolve(a).unwrap();
            for code in &res.related {
                if let Ok(id) = LanguageIdentifier::try_from_str(&code.tag) {
                    if id.region.is_some_and(|r| r.as_str() == "US") {
                        prop_assert!(
                            data::US_TERRITORY_LANG_ALLOWLIST.contains(&id.language.as_str()),
                            "{} slipped past the US-territory filter", code.tag
                        );
                    }
                }
            }
        }

        #[test]
        fn related_is_near_identical_both_ways(a in tag_strategy()) {
            let ls = Langspect::new();
            let res = ls.resolve(a).unwrap();
            for code in &res.related {
                let forward = ls.tag_distance(&res.tag, &code.tag);
                let backward = ls.tag_distance(&code.tag, &res.tag);
                prop_assert!(forward.is_some_and(|d| d <= MAX_NEAR_DISTANCE));
                prop_assert!(backward.is_some_and(|d| d <= MAX_NEAR_DISTANCE));
            }
        }
    }
}
