//! Text measurement heuristics (Plotters has no built-in text measuring).

use crate::location::VAlign;

/// Estimated advance of one character, in pixels.
pub fn char_width_px(font_px: f64) -> f64 {
    font_px * 0.60
}

/// Distance between consecutive baselines of a multi-line label, in pixels.
pub fn line_height_px(font_px: f64) -> f64 {
    font_px * 1.2
}

/// Heuristic: estimate pixel width of text.
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    (text.chars().count() as f64 * char_width_px(font_px)).ceil()
}

/// Estimated `(width, height)` of a stacked block of lines.
pub fn estimate_block_size_px<S: AsRef<str>>(lines: &[S], font_px: f64) -> (f64, f64) {
    let w = lines
        .iter()
        .map(|l| estimate_text_width_px(l.as_ref(), font_px))
        .fold(0.0, f64::max);
    (w, lines.len() as f64 * line_height_px(font_px))
}

/// Downward offsets (relative to the anchor) of each line's reference point for a block of
/// `n` lines aligned with `valign`.
pub fn line_offsets_px(n: usize, font_px: f64, valign: VAlign) -> Vec<f64> {
    let lh = line_height_px(font_px);
    let last = n.saturating_sub(1) as f64;
    (0..n)
        .map(|i| {
            let i = i as f64;
            match valign {
                VAlign::Top => i * lh,
                VAlign::Middle => (i - last / 2.0) * lh,
                VAlign::Bottom => -(last - i) * lh,
            }
        })
        .collect()
}
