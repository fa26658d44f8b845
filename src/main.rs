// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use phrasefind::source::{index_by_id, load_corpus, CorpusRecord};
use phrasefind::{clean_query, explain_score, phrase_score, Error, Phrase, PhraseCorpus};

mod cli;
use cli::display::{self, diag};
use cli::{resolve_config, Cli, Commands, RankArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            cutoff,
            rank,
            raw,
            json,
            stats,
            verbose,
        } => run_search(
            &corpus,
            &query.join(" "),
            SearchOptions {
                limit,
                cutoff,
                rank,
                raw,
                json,
                stats,
                verbose,
            },
        ),
        Commands::Score { query, phrase, rank } => run_score(&query, &phrase, &rank),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

struct SearchOptions {
    limit: Option<usize>,
    cutoff: Option<f64>,
    rank: RankArgs,
    raw: bool,
    json: bool,
    stats: bool,
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total_matches: usize,
    results: Vec<JsonHit<'a>>,
}

#[derive(Serialize)]
struct JsonHit<'a> {
    id: u64,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a CorpusRecord>,
}

fn run_search(corpus_path: &Path, raw_query: &str, opts: SearchOptions) -> Result<(), Error> {
    let verbose = opts.verbose;
    let config = resolve_config(&opts.rank, opts.limit, opts.cutoff)?;
    diag(verbose, &format!("config: {:?}", config));
    diag(verbose, &format!("query is: '{}'", raw_query));

    let query = if opts.raw {
        raw_query.to_string()
    } else {
        clean_query(raw_query)
    };
    if query != raw_query {
        diag(verbose, &format!("stripped query is: '{}'", query));
    }

    if query.is_empty() {
        println!("no query: nothing left to search for after clean-up");
        return Ok(());
    }

    let records = load_corpus(corpus_path)?;
    diag(
        verbose,
        &format!("loaded {} phrases from {}", records.len(), corpus_path.display()),
    );

    let start = Instant::now();
    let corpus = PhraseCorpus::from_candidates(records.iter().map(|r| r.candidate()));
    let ranking = corpus.rank(&query, &config)?;
    let elapsed = start.elapsed().as_secs_f64();
    diag(
        verbose,
        &format!("ranked in {:.3}s, {} over cutoff", elapsed, ranking.total_matches),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let by_id = index_by_id(&records);

    if opts.json {
        let report = JsonReport {
            total_matches: ranking.total_matches,
            results: ranking
                .results
                .iter()
                .map(|hit| JsonHit {
                    id: hit.id,
                    score: hit.score,
                    record: by_id.get(&hit.id).copied(),
                })
                .collect(),
        };
        let _ = serde_json::to_writer_pretty(&mut out, &report);
        let _ = writeln!(out);
        return Ok(());
    }

    if opts.stats {
        let line = display::render_stats(elapsed, ranking.total_matches, corpus.len());
        let _ = writeln!(out, "{}\n", line);
    }

    if ranking.is_empty() {
        let _ = writeln!(out, "no matches");
        return Ok(());
    }

    let query_words = Phrase::from_text(&query).len();
    for hit in &ranking.results {
        let record = by_id.get(&hit.id).copied();
        let _ = writeln!(out, "{}", display::render_hit(record, hit.id, hit.score, query_words));
    }
    Ok(())
}

fn run_score(query: &str, phrase: &str, rank: &RankArgs) -> Result<(), Error> {
    let config = resolve_config(rank, None, None)?;
    let query = Phrase::from_text(query);
    let candidate = Phrase::from_text(phrase);

    let matches = explain_score(&query, &candidate, config.decay_rate);
    let total = phrase_score(&query, &candidate, config.decay_rate);
    print!("{}", display::render_breakdown(&matches, total));
    Ok(())
}
