//! Achievement Extractor — pulls headline figures (currency, percentages,
//! counts) out of a role description and labels each by its surrounding
//! context.
//!
//! Pattern families run in a fixed priority order (currency → percentage →
//! team → clients → projects → markets) and share a single budget of
//! [`MAX_STATS`] slots. A value string is never emitted twice, even when a
//! second family matches it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hard cap on stats per description, checked before every insertion.
const MAX_STATS: usize = 4;

/// Context window (chars) inspected around a currency match.
const CURRENCY_WINDOW_BEFORE: usize = 35;
const CURRENCY_WINDOW_AFTER: usize = 35;

/// Context window (chars) inspected around a percentage match.
const PERCENT_WINDOW_BEFORE: usize = 45;
const PERCENT_WINDOW_AFTER: usize = 35;

/// How far back (chars) a leadership verb may sit before a headcount figure.
const TEAM_VERB_WINDOW: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStat {
    /// The literal matched figure with its unit preserved ("35%", "£2.5M", "12").
    pub value: String,
    /// Semantic category from the fixed label vocabulary.
    pub label: String,
}

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$£€]\d+(?:[.,]\d+)*[KkMmBb]\b").unwrap());

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?%").unwrap());

static HEADCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d+)\s*\+?\s*(?:people|person|staff|employees|engineers|developers|direct reports|reports|team members|members)\b",
    )
    .unwrap()
});

static TEAM_OF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bteam of (\d+)\b").unwrap());

static LEAD_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:lead|leads|led|leading|manage|managed|managing|oversee|oversaw|overseeing|supervise|supervised|supervising)\b")
        .unwrap()
});

static CLIENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*\+?\s*(?:clients|customers|users|accounts)\b").unwrap()
});

static PROJECTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*\+?\s*(?:projects|products|initiatives|programmes|programs)\b")
        .unwrap()
});

static MARKETS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*\+?\s*(?:countries|markets|regions|offices|sites)\b").unwrap()
});

/// Ordered keyword table for classifying a currency figure. First hit wins.
const CURRENCY_LABELS: &[(&[&str], &str)] = &[
    (&["sav", "reduc", "spend"], "Savings"),
    (&["revenue", "sales", "arr", "turnover"], "Revenue"),
    (&["rais", "fund", "invest", "seed", "series"], "Funding"),
    (&["contract", "deal", "tender"], "Contracts"),
    (&["budget"], "Budget"),
];

/// Ordered keyword table for classifying a percentage figure. First hit wins,
/// so specific categories (Cost Reduction) beat the generic Reduction.
const PERCENT_LABELS: &[(&[&str], &str)] = &[
    (&["revenue", "sales", "grew", "growth"], "Revenue Growth"),
    (&["cost", "spend", "expense"], "Cost Reduction"),
    (&["efficien", "productiv", "faster", "speed", "time"], "Efficiency Gain"),
    (&["retention", "retain", "churn"], "Retention"),
    (&["conversion", "convert"], "Conversion"),
    (&["reduc", "decreas", "cut", "lower"], "Reduction"),
];

/// Extracts up to [`MAX_STATS`] achievement stats from one role description.
pub fn extract_stats(description: &str) -> Vec<AchievementStat> {
    let mut stats: Vec<AchievementStat> = Vec::new();
    if description.trim().is_empty() {
        return stats;
    }

    for m in CURRENCY_RE.find_iter(description) {
        let window = context_window(
            description,
            m.start(),
            m.end(),
            CURRENCY_WINDOW_BEFORE,
            CURRENCY_WINDOW_AFTER,
        );
        push_unique(&mut stats, normalize_currency(m.as_str()), classify(&window, CURRENCY_LABELS, "Value"));
    }
    if stats.len() >= MAX_STATS {
        return stats;
    }

    for m in PERCENT_RE.find_iter(description) {
        let window = context_window(
            description,
            m.start(),
            m.end(),
            PERCENT_WINDOW_BEFORE,
            PERCENT_WINDOW_AFTER,
        );
        push_unique(&mut stats, m.as_str().to_string(), classify(&window, PERCENT_LABELS, "Improvement"));
    }
    if stats.len() >= MAX_STATS {
        return stats;
    }

    // Both team patterns feed one family; emission order follows match
    // position in the source, not which regex found the figure.
    let mut team_figures: Vec<(usize, String)> = Vec::new();
    for caps in HEADCOUNT_RE.captures_iter(description) {
        let Some(whole) = caps.get(0) else { continue };
        if led_nearby(description, whole.start()) {
            team_figures.push((whole.start(), caps[1].to_string()));
        }
    }
    for caps in TEAM_OF_RE.captures_iter(description) {
        let Some(whole) = caps.get(0) else { continue };
        team_figures.push((whole.start(), caps[1].to_string()));
    }
    team_figures.sort_by_key(|(start, _)| *start);
    for (_, value) in team_figures {
        push_unique(&mut stats, value, "Team Size");
    }
    if stats.len() >= MAX_STATS {
        return stats;
    }

    for caps in CLIENTS_RE.captures_iter(description) {
        push_unique(&mut stats, format!("{}+", &caps[1]), "Clients");
    }
    if stats.len() >= MAX_STATS {
        return stats;
    }

    for caps in PROJECTS_RE.captures_iter(description) {
        push_unique(&mut stats, caps[1].to_string(), "Projects");
    }
    if stats.len() >= MAX_STATS {
        return stats;
    }

    for caps in MARKETS_RE.captures_iter(description) {
        push_unique(&mut stats, format!("{}+", &caps[1]), "Markets");
    }

    stats
}

/// Appends a stat unless the budget is spent or the value was already emitted.
fn push_unique(stats: &mut Vec<AchievementStat>, value: String, label: &str) {
    if stats.len() >= MAX_STATS {
        return;
    }
    if stats.iter().any(|s| s.value == value) {
        return;
    }
    stats.push(AchievementStat {
        value,
        label: label.to_string(),
    });
}

/// Lowercased text around a match: up to `before` chars preceding it and
/// `after` chars following it. Char-based so multibyte currency symbols in
/// the vicinity never split a boundary.
fn context_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> String {
    let mut prefix: Vec<char> = text[..start].chars().rev().take(before).collect();
    prefix.reverse();
    let suffix = text[end..].chars().take(after);
    prefix
        .into_iter()
        .chain(text[start..end].chars())
        .chain(suffix)
        .collect::<String>()
        .to_lowercase()
}

/// First matching row of an ordered keyword table, or the fallback label.
fn classify(
    window: &str,
    table: &[(&[&str], &'static str)],
    fallback: &'static str,
) -> &'static str {
    for (keywords, label) in table {
        if keywords.iter().any(|k| window.contains(k)) {
            return *label;
        }
    }
    fallback
}

/// Uppercases the single-letter magnitude suffix ("£2.5m" → "£2.5M").
fn normalize_currency(matched: &str) -> String {
    let mut value = matched.to_string();
    if let Some(last) = value.pop() {
        value.push(last.to_ascii_uppercase());
    }
    value
}

/// True when a leadership verb appears within [`TEAM_VERB_WINDOW`] chars
/// before the headcount figure.
fn led_nearby(text: &str, match_start: usize) -> bool {
    let preceding: String = {
        let mut chars: Vec<char> = text[..match_start].chars().rev().take(TEAM_VERB_WINDOW).collect();
        chars.reverse();
        chars.into_iter().collect()
    };
    LEAD_VERB_RE.is_match(&preceding)
}
