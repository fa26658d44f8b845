//! End-to-end ranking scenarios with known outcomes.

use super::common::{assert_ranking_contract, ids, permissive, quotes};
use phrasefind::{clean_query, rank, rank_with_stats, word_similarity, RankConfig};

#[test]
fn test_hello_world() {
    let config = RankConfig::default().with_decay_rate(1.0);
    let corpus = vec![(1, "hello word"), (2, "goodbye moon")];

    let results = rank("hello world", corpus, &config).unwrap();

    assert_eq!(results[0].id, 1);
    // hello: exact, world/word: one deletion over five letters
    let expected = 1.0 + (-0.2f64).exp();
    assert!((results[0].score - expected).abs() < 1e-12);
    if let Some(second) = results.get(1) {
        assert_eq!(second.id, 2);
        assert!(second.score < results[0].score);
    }
    assert_ranking_contract(&results, &config);
}

#[test]
fn test_exact_single_word() {
    let results = rank("abc", vec![(7, "abc")], &RankConfig::default()).unwrap();
    assert_eq!(results.len(), 1);
    assert!((results[0].score - 1.0).abs() < 1e-12);
}

#[test]
fn test_misspelled_quote_found_first() {
    // Latin "p" where Cyrillic "р" belongs
    let results = rank("кишки шваpкнули", quotes(), &RankConfig::default()).unwrap();
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_cleaned_query_matches_quote() {
    let query = clean_query("Йобане, село?!");
    assert_eq!(query, "Йобане село");

    let results = rank(&query, quotes(), &RankConfig::default()).unwrap();
    assert_eq!(results[0].id, 5);
}

#[test]
fn test_case_insensitive_match() {
    let results = rank("ЧОГО ВАМ НЕ ХВАТА", quotes(), &RankConfig::default()).unwrap();
    assert_eq!(results[0].id, 4);
    assert!((results[0].score - 4.0).abs() < 1e-12);
}

#[test]
fn test_stats_count_before_truncation() {
    let config = permissive(2);
    let ranking = rank_with_stats("не", quotes(), &config).unwrap();

    assert_eq!(ranking.results.len(), 2);
    // A zero cutoff keeps the phrase with no text too
    assert_eq!(ranking.total_matches, 6);
    assert_ranking_contract(&ranking.results, &config);
}

#[test]
fn test_decay_rate_changes_scores_not_exact_matches() {
    let gentle = RankConfig::default().with_decay_rate(0.5);
    let strict = RankConfig::default().with_decay_rate(8.0);

    let a = rank("тюрми", quotes(), &gentle).unwrap();
    let b = rank("тюрми", quotes(), &strict).unwrap();

    assert_eq!(a[0].id, 4);
    assert_eq!(b[0].id, 4);
    assert_eq!(a[0].score, 1.0);
    assert_eq!(b[0].score, 1.0);
    assert!(word_similarity("мовчите", "мовчать", 0.5) > word_similarity("мовчите", "мовчать", 8.0));
}

#[test]
fn test_repeated_query_words_count_each_time() {
    let results = rank("тюрми тюрми", quotes(), &RankConfig::default()).unwrap();
    assert_eq!(ids(&results)[0], 4);
    assert_eq!(results[0].score, 2.0);
}
