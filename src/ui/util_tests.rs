#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_hangul() {
    assert_eq!(truncate("배달야식카페", 4), "배달야…");
}

// ── pad ───────────────────────────────────────────────────────

#[test]
fn test_pad_fills_and_cuts() {
    assert_eq!(pad("Food", 6), "Food  ");
    assert_eq!(pad("Delivery", 5), "Deli…");
    assert_eq!(pad("", 2), "  ");
}

// ── format_won ────────────────────────────────────────────────

#[test]
fn test_format_won_basic() {
    assert_eq!(format_won(1_234), "₩1,234");
    assert_eq!(format_won(999), "₩999");
    assert_eq!(format_won(0), "₩0");
}

#[test]
fn test_format_won_large() {
    assert_eq!(format_won(515_000), "₩515,000");
    assert_eq!(format_won(10_000_000), "₩10,000,000");
}

#[test]
fn test_format_won_negative() {
    assert_eq!(format_won(-42_500), "-₩42,500");
    assert_eq!(format_won(i64::MIN), "-₩9,223,372,036,854,775,808");
}

#[test]
fn test_format_won_f_rounds() {
    assert_eq!(format_won_f(257_499.6), "₩257,500");
    assert_eq!(format_won_f(f64::NAN), "₩0");
}

#[test]
fn test_format_delta_sign() {
    assert_eq!(format_delta(300.0), "+₩300");
    assert_eq!(format_delta(-1_500.2), "-₩1,500");
    assert_eq!(format_delta(0.0), "₩0");
}

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(2.912_621), "2.9%");
    assert_eq!(format_pct(0.0), "0.0%");
}

// ── bar / shade ───────────────────────────────────────────────

#[test]
fn test_bar_scales() {
    assert_eq!(bar(100, 100, 10), "##########");
    assert_eq!(bar(50, 100, 10), "#####");
    assert_eq!(bar(1, 1_000, 10), "#");
    assert_eq!(bar(0, 100, 10), "");
    assert_eq!(bar(5, 0, 10), "");
}

#[test]
fn test_shade_levels() {
    assert_eq!(shade(0, 100), '.');
    assert_eq!(shade(1, 100), '░');
    assert_eq!(shade(50, 100), '▒');
    assert_eq!(shade(100, 100), '█');
}
