//! Empty inputs, missing text, and bad configuration.

use super::common::{permissive, quotes};
use phrasefind::{rank, rank_with_stats, Candidate, Error, RankConfig};

#[test]
fn test_empty_corpus() {
    let corpus: Vec<(u32, &str)> = Vec::new();
    let results = rank("anything", corpus, &RankConfig::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_empty_query_matches_nothing() {
    let results = rank("", quotes(), &RankConfig::default()).unwrap();
    assert!(results.is_empty());

    let results = rank("   \t\n ", quotes(), &RankConfig::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_missing_text_scores_zero_and_does_not_abort() {
    let corpus = vec![
        Candidate::missing(1),
        Candidate::new(2, "тюрми"),
        Candidate::missing(3),
    ];
    let ranking = rank_with_stats("тюрми", corpus, &permissive(5)).unwrap();

    assert_eq!(ranking.results[0].id, 2);
    for r in &ranking.results[1..] {
        assert_eq!(r.score, 0.0);
    }
}

#[test]
fn test_whitespace_only_phrase_is_empty() {
    let corpus = vec![(1, "  \t "), (2, "село")];
    let results = rank("село", corpus, &RankConfig::default()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_nothing_meets_cutoff() {
    let config = RankConfig::default().with_score_cutoff(100.0);
    let results = rank("тюрми", quotes(), &config).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_invalid_config_fails_fast() {
    let zero_rate = RankConfig::default().with_decay_rate(0.0);
    assert!(matches!(
        rank("тюрми", quotes(), &zero_rate),
        Err(Error::InvalidDecayRate(_))
    ));

    let nan_rate = RankConfig::default().with_decay_rate(f64::NAN);
    assert!(matches!(
        rank("тюрми", quotes(), &nan_rate),
        Err(Error::InvalidDecayRate(_))
    ));

    let no_results = RankConfig::default().with_max_results(0);
    assert!(matches!(
        rank("тюрми", quotes(), &no_results),
        Err(Error::InvalidMaxResults(0))
    ));

    let negative_cutoff = RankConfig::default().with_score_cutoff(-0.1);
    assert!(matches!(
        rank("тюрми", quotes(), &negative_cutoff),
        Err(Error::InvalidScoreCutoff(_))
    ));
}

#[test]
fn test_invalid_config_rejected_even_for_empty_corpus() {
    let corpus: Vec<(u32, &str)> = Vec::new();
    let config = RankConfig::default().with_decay_rate(-1.0);
    assert!(rank("тюрми", corpus, &config).is_err());
}
