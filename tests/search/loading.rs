//! Ranking a corpus and config read from JSON files.

use std::fs;

use phrasefind::source::{index_by_id, load_corpus};
use phrasefind::{Error, PhraseCorpus, RankConfig};
use tempfile::TempDir;

const CORPUS: &str = r#"[
    {"id": 10, "phrase": "Шо мовчите, скуштували?", "title": "Хайтарма", "speaker": "Мати"},
    {"id": 11, "tokens": "Так би усє кишки і шваркнули"},
    {"id": 12, "phrase": null, "title": "Без тексту"},
    {"id": 13, "phrase": "Я етого не люблю", "url": "https://example.org/13"}
]"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_rank_loaded_corpus() {
    let dir = TempDir::new().unwrap();
    let corpus_path = write(&dir, "quotes.json", CORPUS);
    let config_path = write(&dir, "rank.json", r#"{"max_results": 2, "decay_rate": 1.5}"#);

    let records = load_corpus(&corpus_path).unwrap();
    let config = RankConfig::load(&config_path).unwrap();
    assert_eq!(config.max_results, 2);
    assert_eq!(config.decay_rate, 1.5);

    let corpus = PhraseCorpus::from_candidates(records.iter().map(|r| r.candidate()));
    assert_eq!(corpus.len(), 4);

    let ranking = corpus.rank("кишки шваркнули", &config).unwrap();
    assert_eq!(ranking.results[0].id, 11);
    assert!(ranking.results.len() <= 2);

    let by_id = index_by_id(&records);
    assert!(by_id[&ranking.results[0].id].title.is_none());
}

#[test]
fn test_record_without_text_never_wins() {
    let dir = TempDir::new().unwrap();
    let records = load_corpus(&write(&dir, "quotes.json", CORPUS)).unwrap();
    let corpus = PhraseCorpus::from_candidates(records.iter().map(|r| r.candidate()));

    let ranking = corpus.rank("Без тексту", &RankConfig::default()).unwrap();
    assert!(ranking.results.iter().all(|r| r.id != 12));
}

#[test]
fn test_invalid_config_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "rank.json", r#"{"decay_rate": -2.0}"#);
    assert!(matches!(
        RankConfig::load(&path),
        Err(Error::InvalidDecayRate(_))
    ));

    let path = write(&dir, "typo.json", r#"{"max_result": 3}"#);
    assert!(matches!(RankConfig::load(&path), Err(Error::Json { .. })));
}

#[test]
fn test_corpus_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", "[{\"id\": \"one\"}]");
    let err = load_corpus(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}
