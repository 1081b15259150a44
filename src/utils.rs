// src/utils.rs

/// Byte order mark. Not Unicode whitespace, but stripped along with it.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Drops whitespace (and the byte order mark) and uppercases what remains.
///
/// A character whose uppercase form spans several characters (`ß` -> `SS`)
/// yields each of them.
pub fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != BYTE_ORDER_MARK)
        .flat_map(char::to_uppercase)
}

/// `part` as a percentage of `total`, or `None` when `total` is zero.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn percentage(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((part as f64 / total as f64) * 100.0)
}
