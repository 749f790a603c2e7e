//! Number-to-text formatting for emitted documents.
//!
//! Every numeric attribute goes through [`num`] so identical layouts produce identical bytes.
//! Values are rounded to ten decimal places, which keeps the text short, hides last-bit noise
//! from trigonometry, and never collapses a visible feature at the 1235px output size.

const SCALE: f64 = 1e10;

/// Format a scalar: rounded to 10 decimals, trailing zeros dropped, no exponent, no `-0`.
pub fn num(v: f64) -> String {
    let r = (v * SCALE).round() / SCALE;
    if r == 0.0 || !r.is_finite() {
        return "0".to_string();
    }
    format!("{r}")
}

/// Format a pair as `"x y"`, the form used by SVG transform values.
pub fn pair(x: f64, y: f64) -> String {
    format!("{} {}", num(x), num(y))
}

/// Format a fraction of the flag as a percentage string (`0.4` -> `"40%"`).
pub fn pct(fraction: f64) -> String {
    format!("{}%", num(fraction * 100.0))
}

/// Join keyframe values with `;`.
pub fn list<I>(values: I) -> String
where
    I: IntoIterator<Item = String>,
{
    values.into_iter().collect::<Vec<_>>().join(";")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
