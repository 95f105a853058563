/// Group digits of a non-negative integer in threes: `1234567` → `"1,234,567"`.
fn group_thousands(abs: u64) -> String {
    abs.to_string()
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a won amount with thousand separators.
/// e.g. `1234567` → `"₩1,234,567"`, `-500` → `"-₩500"`
pub(crate) fn format_won(val: i64) -> String {
    let with_commas = group_thousands(val.unsigned_abs());
    if val < 0 {
        format!("-₩{with_commas}")
    } else {
        format!("₩{with_commas}")
    }
}

/// Averages and projections, rounded to the nearest won.
pub(crate) fn format_won_f(val: f64) -> String {
    if !val.is_finite() {
        return "₩0".to_string();
    }
    format_won(val.round() as i64)
}

/// Like [`format_won_f`] but always carries a sign, for deltas.
pub(crate) fn format_delta(val: f64) -> String {
    let rounded = if val.is_finite() { val.round() as i64 } else { 0 };
    if rounded > 0 {
        format!("+{}", format_won(rounded))
    } else {
        format_won(rounded)
    }
}

/// One decimal place: `2.9126` → `"2.9%"`.
pub(crate) fn format_pct(val: f64) -> String {
    format!("{val:.1}%")
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Left-align `s` in a column of `width` characters, truncating if needed.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let cut = truncate(s, width);
    let fill = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(fill))
}

/// Horizontal bar of `#` proportional to `value / max`, at most `width` long.
pub(crate) fn bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let len = (value as f64 / max as f64 * width as f64).round() as usize;
    "#".repeat(len.clamp(1, width))
}

const SHADES: [char; 5] = ['.', '░', '▒', '▓', '█'];

/// Heatmap cell glyph: `.` for nothing, darker for larger shares of `max`.
pub(crate) fn shade(value: i64, max: i64) -> char {
    if value <= 0 || max <= 0 {
        return SHADES[0];
    }
    let level = (value as f64 / max as f64 * 4.0).ceil() as usize;
    SHADES[level.clamp(1, 4)]
}
