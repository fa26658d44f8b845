//! Non-Latin text: edits count code points, case folds across scripts.

use phrasefind::{edit_distance, rank, word_similarity, RankConfig};

#[test]
fn test_single_cyrillic_letters_differ_by_one() {
    // Two bytes each in UTF-8
    assert_eq!(edit_distance("я", "ю"), 1);
    assert_eq!(edit_distance("ї", "і"), 1);
}

#[test]
fn test_multibyte_distance_counts_characters() {
    assert_eq!(edit_distance("тюрми", "тюрма"), 1);
    assert_eq!(edit_distance("хвата", "хватає"), 1);
    assert_eq!(edit_distance("", "село"), 4);
}

#[test]
fn test_cyrillic_case_folding() {
    assert_eq!(edit_distance("СЕЛО", "село"), 0);
    assert_eq!(edit_distance("Їжак", "їжак"), 0);
    assert_eq!(word_similarity("ЙОБАНЕ", "йобане", 2.0), 1.0);
}

#[test]
fn test_similarity_scale_uses_characters() {
    // One substitution over five characters, whatever the byte length
    let cyrillic = word_similarity("тюрми", "тюрма", 1.0);
    let latin = word_similarity("abcde", "abcdx", 1.0);
    assert!((cyrillic - latin).abs() < 1e-12);
}

#[test]
fn test_mixed_script_typo_still_ranks() {
    // Latin "o" typed inside a Cyrillic word
    let corpus = vec![(1, "Йобане село!"), (2, "Я етого не люблю")];
    let results = rank("люблю етoго", corpus, &RankConfig::default()).unwrap();
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_cjk_and_emoji() {
    assert_eq!(edit_distance("東京", "京都"), 2);
    assert_eq!(edit_distance("🎬", "🎥"), 1);
}
