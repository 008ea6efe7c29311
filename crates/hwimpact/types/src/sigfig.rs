//! Significant-figure tracking.
//!
//! A derived impact never claims more precision than its least precise
//! input. Digit counts are read from the shortest decimal representation of
//! the `f64` (the same text `Display` produces).

/// Count the significant digits of `x`.
///
/// Leading zeros never count. For integral values trailing zeros are treated
/// as placeholders (`1500` has 2 significant digits). Zero counts as one
/// digit; non-finite values carry no precision and count as zero.
pub fn significant_figures(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    if x == 0.0 {
        return 1;
    }

    let text = format!("{}", x.abs());
    let digits: String = if text.contains('.') {
        text.chars()
            .filter(|c| *c != '.')
            .collect::<String>()
            .trim_start_matches('0')
            .to_string()
    } else {
        text.trim_end_matches('0').to_string()
    };

    digits.len().max(1) as u32
}

/// Minimum significant-digit count over all inputs (0 for no inputs).
pub fn min_significant_figures<I>(inputs: I) -> u32
where
    I: IntoIterator<Item = f64>,
{
    inputs
        .into_iter()
        .map(significant_figures)
        .min()
        .unwrap_or(0)
}

/// Round `x` to `digits` significant figures.
pub fn round_to_significant_figures(x: f64, digits: u32) -> f64 {
    if x == 0.0 || !x.is_finite() || digits == 0 {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (x / factor).round() * factor
    }
}
