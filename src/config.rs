// src/config.rs

/// Report parameters. The binary always uses [`ReportConfig::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Entries below this percentage are left out of the report.
    pub threshold: f64,
    /// Character repeated to draw each entry's bar.
    pub bar: char,
}

impl ReportConfig {
    pub const DEFAULT_THRESHOLD: f64 = 1.0;
    pub const DEFAULT_BAR: char = '#';

    #[inline]
    #[must_use]
    pub const fn new(threshold: f64, bar: char) -> Self {
        Self { threshold, bar }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_BAR)
    }
}
