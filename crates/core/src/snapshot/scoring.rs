//! Composite quality score and star rating.
//!
//! Pure functions, no I/O. Each metric contributes independently through
//! fixed thresholds; a missing metric contributes nothing, same as a
//! metric that misses every threshold.

use stocksnap_market_data::FundamentalMetrics;

/// Score contribution for a "lower is better" metric.
fn below(value: Option<f64>, strong: f64, ok: f64, strong_pts: u32, ok_pts: u32) -> u32 {
    match value {
        Some(v) if v < strong => strong_pts,
        Some(v) if v < ok => ok_pts,
        _ => 0,
    }
}

/// Same, with inclusive thresholds.
fn at_most(value: Option<f64>, strong: f64, ok: f64, strong_pts: u32, ok_pts: u32) -> u32 {
    match value {
        Some(v) if v <= strong => strong_pts,
        Some(v) if v <= ok => ok_pts,
        _ => 0,
    }
}

/// Score contribution for a "higher is better" metric, inclusive.
fn at_least(value: Option<f64>, strong: f64, ok: f64, strong_pts: u32, ok_pts: u32) -> u32 {
    match value {
        Some(v) if v >= strong => strong_pts,
        Some(v) if v >= ok => ok_pts,
        _ => 0,
    }
}

/// Weighted-threshold composite score in [0, 100].
pub fn composite_score(m: &FundamentalMetrics) -> u8 {
    let mut score = 0u32;

    score += below(m.forward_pe, 18.0, 25.0, 20, 10);
    score += at_most(m.forward_peg, 1.0, 1.5, 20, 10);
    score += at_least(m.roic, 0.12, 0.08, 20, 10);
    score += at_least(m.operating_margin, 0.15, 0.08, 10, 5);
    score += at_least(m.revenue_growth, 0.20, 0.12, 15, 8);
    score += at_least(m.eps_growth, 0.20, 0.12, 15, 8);
    score += at_most(m.debt_to_equity, 0.5, 1.0, 10, 5);

    score.min(100) as u8
}

/// Star rating for a composite score, plus the rendered five-glyph string.
pub fn stars_from_score(score: u8) -> (u8, String) {
    let stars = match score {
        80..=u8::MAX => 5,
        60..=79 => 4,
        40..=59 => 3,
        20..=39 => 2,
        _ => 1,
    };
    let text = format!(
        "{}{}",
        "★".repeat(stars as usize),
        "☆".repeat(5 - stars as usize)
    );
    (stars, text)
}
