// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the phrasefind CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Theme detection
//! tries `PHRASEFIND_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Colors switch off for `NO_COLOR` and when stdout is not a TTY, so piped
//! output stays plain.
//!
//! Diagnostics (`--verbose`) go to stderr with a `[phrasefind]` prefix and are
//! never colored; they are meant for logs.

use std::sync::OnceLock;

use phrasefind::source::CorpusRecord;
use phrasefind::TokenMatch;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via PHRASEFIND_THEME
    if let Ok(theme) = std::env::var("PHRASEFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Score color: green for near-perfect, yellow for partial, gray for weak.
///
/// `per_word` is the score divided by the number of query words, so the
/// thresholds mean the same for long and short queries.
fn score_color(per_word: f64) -> fn() -> String {
    if per_word >= 0.8 {
        GREEN
    } else if per_word >= 0.5 {
        YELLOW
    } else {
        GRAY
    }
}

/// Format a score to four decimals, colored by strength.
pub fn format_score(score: f64, query_words: usize) -> String {
    let per_word = if query_words > 0 {
        score / query_words as f64
    } else {
        0.0
    };
    themed(score_color(per_word), &[BOLD], &format!("{:.4}", score))
}

// ═══════════════════════════════════════════════════════════════════════════
// DIAGNOSTICS
// ═══════════════════════════════════════════════════════════════════════════

/// Verbose-mode diagnostic line on stderr.
pub fn diag(enabled: bool, message: &str) {
    if enabled {
        eprintln!("[phrasefind] {}", message);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Render one search hit.
///
/// ```text
/// Title
/// -----
/// Speaker: phrase text
/// 42  1.8187
/// ```
///
/// Records without a title fall back to `#id`; without a speaker the prefix
/// is dropped.
pub fn render_hit(record: Option<&CorpusRecord>, id: u64, score: f64, query_words: usize) -> String {
    let fallback_title = format!("#{}", id);
    let title = record
        .and_then(|r| r.title.as_deref())
        .unwrap_or(&fallback_title);
    let phrase = record.and_then(|r| r.phrase.as_deref()).unwrap_or("");
    let speaker = record
        .and_then(|r| r.speaker.as_deref())
        .map(|s| format!("{}: ", themed(CYAN, &[BOLD], s)))
        .unwrap_or_default();

    let mut out = String::new();
    out.push_str(&themed(BLUE, &[BOLD], title));
    out.push('\n');
    out.push_str(&themed(GRAY, &[], &"-".repeat(title.chars().count())));
    out.push('\n');
    out.push_str(&speaker);
    out.push_str(phrase);
    out.push('\n');
    if let Some(url) = record.and_then(|r| r.url.as_deref()) {
        out.push_str(&themed(GRAY, &[DIM], url));
        out.push('\n');
    }
    out.push_str(&format!("{}  {}", id, format_score(score, query_words)));
    out.push('\n');
    out
}

/// Render the `--stats` line.
pub fn render_stats(elapsed_secs: f64, total_matches: usize, corpus_len: usize) -> String {
    themed(
        GRAY,
        &[],
        &format!(
            "{:.3}s, {} matches ({} phrases searched)",
            elapsed_secs, total_matches, corpus_len
        ),
    )
}

/// Render a per-word score breakdown.
pub fn render_breakdown(matches: &[TokenMatch], total: f64) -> String {
    let mut out = String::new();
    for m in matches {
        let partner = match (&m.matched_token, m.distance) {
            (Some(token), Some(distance)) => format!("{} (distance {})", token, distance),
            _ => "(no words)".to_string(),
        };
        out.push_str(&format!(
            "  {:<20} -> {:<28} {}\n",
            m.query_token,
            partner,
            format_score(m.similarity, 1)
        ));
    }
    out.push_str(&format!(
        "  {:<20}    {:<28} {}\n",
        "total",
        "",
        format_score(total, matches.len())
    ));
    out
}
