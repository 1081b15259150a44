// src/core/histogram.rs
use log::trace;
use std::cmp::Ordering;
use std::fmt;

use crate::config::ReportConfig;
use crate::models::{DefaultMap, ReportEntry};
use crate::utils::{normalize, percentage};

/// Per-character counts of all text added so far.
///
/// `total_letters` always equals the sum of the stored counts.
#[derive(Debug, Clone)]
pub struct Histogram {
    letter_count: DefaultMap<char, u64>,
    total_letters: u64,
    config: ReportConfig,
}

impl Histogram {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    #[inline]
    #[must_use]
    pub fn with_config(config: ReportConfig) -> Self {
        Self {
            letter_count: DefaultMap::new(0),
            total_letters: 0,
            config,
        }
    }

    /// Counts every non-whitespace character of `text`, uppercased.
    ///
    /// Chunk boundaries do not matter: adding `"ab"` then `"c"` is the same
    /// as adding `"abc"`.
    pub fn add(&mut self, text: &str) {
        for c in normalize(text) {
            let count = self.letter_count.get(&c);
            self.letter_count.set(c, count.saturating_add(1));
            self.total_letters = self.total_letters.saturating_add(1);
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self, c: char) -> u64 {
        self.letter_count.get(&c)
    }

    #[inline]
    #[must_use]
    pub const fn total_letters(&self) -> u64 {
        self.total_letters
    }

    /// Number of distinct characters seen.
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.letter_count.len()
    }

    /// Report entries, most frequent first.
    ///
    /// Equal counts are ordered by descending character (`B` before `A`).
    /// Entries below the configured threshold are dropped. Empty when
    /// nothing has been counted.
    #[must_use]
    pub fn entries(&self) -> Vec<ReportEntry> {
        let mut counted: Vec<(char, u64)> = self.letter_count.iter().map(|(c, n)| (*c, *n)).collect();
        counted.sort_unstable_by(|a, b| by_count_then_char_desc(*a, *b));

        counted
            .into_iter()
            .filter_map(|(c, n)| {
                percentage(n, self.total_letters)
                    .map(|pct| ReportEntry::new(c, pct))
            })
            .filter(|entry| entry.percentage >= self.config.threshold)
            .collect()
    }

    /// The report text: one line per entry, newline separated, no trailing
    /// newline. Empty when nothing passes the threshold.
    #[must_use]
    pub fn render(&self) -> String {
        let entries = self.entries();
        trace!(
            "rendering {} of {} characters ({} counted)",
            entries.len(),
            self.distinct(),
            self.total_letters
        );
        entries
            .iter()
            .map(|entry| entry.render(self.config.bar))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn by_count_then_char_desc(a: (char, u64), b: (char, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0))
}
