//! Result order: score descending, ties in corpus order.

use super::common::{assert_ranking_contract, ids, permissive, quotes};
use phrasefind::{rank, rank_with_stats, PhraseCorpus, RankConfig};

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = vec![(30, "same words"), (10, "same words"), (20, "same words")];
    let results = rank("same words", corpus, &RankConfig::default()).unwrap();
    assert_eq!(ids(&results), vec![30, 10, 20]);
}

#[test]
fn test_ties_keep_corpus_order_after_higher_score() {
    let corpus = vec![(1, "alpha"), (2, "alpha beta"), (3, "alpha")];
    let results = rank("alpha beta", corpus, &permissive(10)).unwrap();
    // 2 matches both words, 1 and 3 tie on "alpha" plus the same partial
    assert_eq!(ids(&results), vec![2, 1, 3]);
}

#[test]
fn test_ties_cut_at_max_results_keep_earliest() {
    let corpus: Vec<(u32, &str)> = (0..10).map(|i| (i, "repeat")).collect();
    let config = RankConfig::default().with_max_results(3);
    let results = rank("repeat", corpus, &config).unwrap();
    assert_eq!(ids(&results), vec![0, 1, 2]);
}

#[test]
fn test_cutoff_applies_before_truncation() {
    // The two good matches sit after a run of poor ones
    let corpus = vec![
        (1, "zzzzzzzz"),
        (2, "qqqqqqqq"),
        (3, "xxxxxxxx"),
        (4, "needle"),
        (5, "needles"),
    ];
    let config = RankConfig::default()
        .with_max_results(2)
        .with_score_cutoff(0.5);
    let ranking = rank_with_stats("needle", corpus, &config).unwrap();

    assert_eq!(ids(&ranking.results), vec![4, 5]);
    assert_eq!(ranking.total_matches, 2);
}

#[test]
fn test_exactly_max_results_when_more_qualify() {
    let config = permissive(3);
    let results = rank("не", quotes(), &config).unwrap();
    assert_eq!(results.len(), 3);
    assert_ranking_contract(&results, &config);
}

#[test]
fn test_repeated_calls_identical() {
    let config = permissive(6);
    let first = rank("кишки не село", quotes(), &config).unwrap();
    for _ in 0..5 {
        assert_eq!(rank("кишки не село", quotes(), &config).unwrap(), first);
    }
}

#[test]
fn test_reused_corpus_matches_one_shot_rank() {
    let corpus = PhraseCorpus::from_candidates(quotes());
    let config = RankConfig::default();
    for query in ["тюрми", "кишки шваркнули", "люблю село", "мовчите"] {
        let reused = corpus.rank(query, &config).unwrap().results;
        let one_shot = rank(query, quotes(), &config).unwrap();
        assert_eq!(reused, one_shot, "query {:?}", query);
    }
}
