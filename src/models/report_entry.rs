// src/models/report_entry.rs

/// One line of the histogram report: a character and its share of all
/// counted characters, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportEntry {
    pub character: char,
    pub percentage: f64,
}

impl ReportEntry {
    #[inline]
    #[must_use]
    pub const fn new(character: char, percentage: f64) -> Self {
        Self {
            character,
            percentage,
        }
    }

    /// Bar length: the percentage rounded to the nearest integer.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Percentages are in 0..=100")]
    #[expect(clippy::cast_possible_truncation, reason = "Percentages are in 0..=100")]
    #[expect(clippy::cast_sign_loss, reason = "Percentages are never negative")]
    pub fn bar_len(&self) -> usize {
        self.percentage.round() as usize
    }

    /// Renders the report line, e.g. `A: ## 2.00%`, drawing the bar with `bar`.
    #[must_use]
    pub fn render(&self, bar: char) -> String {
        let bar: String = std::iter::repeat_n(bar, self.bar_len()).collect();
        format!("{}: {} {}%", self.character, bar, fixed_two(self.percentage))
    }
}

/// Formats `value` with two decimals, rounding exact half-way values up.
///
/// `{:.2}` rounds an exact tie such as `1.125` to even; report lines round it
/// to `1.13`. Values that only look like ties (`2.675` is stored as
/// `2.67499...`) are left to the standard formatter.
#[expect(clippy::as_conversions, reason = "Tie values are small integers")]
#[expect(clippy::cast_possible_truncation, reason = "Tie values are small integers")]
#[expect(clippy::cast_sign_loss, reason = "Checked non-negative")]
fn fixed_two(value: f64) -> String {
    let thousandths = value * 1000.0;
    let exact = value.mul_add(1000.0, -thousandths) == 0.0;
    if exact && thousandths.fract() == 0.0 && (0.0..1e15).contains(&thousandths) {
        let thousandths = thousandths as u64;
        if thousandths % 10 == 5 {
            let hundredths = thousandths / 10 + 1;
            return format!("{}.{:02}", hundredths / 100, hundredths % 100);
        }
    }
    format!("{value:.2}")
}
