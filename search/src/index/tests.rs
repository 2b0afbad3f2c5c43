use super::*;
use crate::config::SearchConfig;
use pokesort_core::{Pokemon, PokemonId};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

mod fuzzy {
    use super::*;

    #[test]
    fn whole_field_match_scores_zero() {
        let score = fuzzy_score(&chars("bulbasaur"), &chars("bulbasaur"), 0.4);
        assert_eq!(score, Some(0.0));
    }

    #[test]
    fn interior_substring_scores_zero() {
        let score = fuzzy_score(&chars("charmander"), &chars("mand"), 0.4);
        assert_eq!(score, Some(0.0));
    }

    #[test]
    fn substitution_typo_scores_one_edit() {
        let score = fuzzy_score(&chars("bulbasaur"), &chars("bulbesaur"), 0.4);
        assert_eq!(score, Some(1.0 / 9.0));
    }

    #[test]
    fn transposition_counts_as_one_edit() {
        let score = fuzzy_score(&chars("bulbasaur"), &chars("bulbasuar"), 0.4);
        assert_eq!(score, Some(1.0 / 9.0));
    }

    #[test]
    fn dissimilar_text_is_not_a_match() {
        assert_eq!(fuzzy_score(&chars("bulbasaur"), &chars("zzz"), 0.4), None);
    }

    #[test]
    fn empty_haystack_is_not_a_match() {
        assert_eq!(fuzzy_score(&[], &chars("bulba"), 0.4), None);
    }

    #[test]
    fn short_haystack_matches_within_budget() {
        // Query "mews" against "mew": one deletion, within budget.
        let score = fuzzy_score(&chars("mew"), &chars("mews"), 0.4);
        assert_eq!(score, Some(0.25));
    }

    #[test]
    fn haystack_far_shorter_than_query_is_rejected() {
        assert_eq!(fuzzy_score(&chars("mu"), &chars("abcd"), 0.4), None);
    }

    #[test]
    fn tighter_threshold_shrinks_the_budget() {
        // One edit over nine characters passes at 0.4 but a 0.1 threshold
        // leaves no budget at all for this query length.
        assert!(fuzzy_score(&chars("bulbasaur"), &chars("bulbesaur"), 0.4).is_some());
        assert_eq!(
            fuzzy_score(&chars("bulbasaur"), &chars("bulbesaur"), 0.1),
            None
        );
    }
}

mod substring {
    use super::*;

    #[test]
    fn containment_scores_zero() {
        assert_eq!(substring_score(&chars("004"), &chars("004")), Some(0.0));
        assert_eq!(substring_score(&chars("004"), &chars("04")), Some(0.0));
    }

    #[test]
    fn no_containment_no_match() {
        assert_eq!(substring_score(&chars("001"), &chars("004")), None);
    }

    #[test]
    fn needle_longer_than_haystack_no_match() {
        assert_eq!(substring_score(&chars("04"), &chars("0004")), None);
    }
}

mod build {
    use super::*;

    fn record(id: u32, name_en: &str, name_de: &str) -> Pokemon {
        Pokemon {
            id: PokemonId::try_from(id).unwrap(),
            number: format!("{:03}", id),
            name_en: name_en.to_string(),
            name_de: name_de.to_string(),
            sprite: None,
        }
    }

    fn corpus() -> Corpus {
        Corpus::new(vec![
            record(1, "Bulbasaur", "Bisasam"),
            record(4, "Charmander", "Glumanda"),
        ])
        .unwrap()
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = SearchConfig {
            fields: vec![],
            threshold: 0.4,
        };
        FuzzyIndex::build(&corpus(), config).unwrap_err();
    }

    #[test]
    fn tied_scores_keep_corpus_order() {
        let corpus = Corpus::new(vec![
            record(4, "Charmander", "Glumanda"),
            record(5, "Charmeleon", "Glutexo"),
        ])
        .unwrap();
        let index = FuzzyIndex::build(&corpus, SearchConfig::default()).unwrap();

        let hits = index.query("char");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, 0.0);
        assert_eq!(hits[1].score, 0.0);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 1);
    }

    #[test]
    fn query_is_deterministic() {
        let corpus = corpus();
        let index = FuzzyIndex::build(&corpus, SearchConfig::default()).unwrap();

        assert_eq!(index.query("char"), index.query("char"));
    }
}
