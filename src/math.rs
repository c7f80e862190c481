//! Numeric helpers shared by the layout and statistics code.

/// Round to a fixed number of decimal places (half away from zero)
#[inline]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Signal significance `S / sqrt(B)`
///
/// Returns `None` when the background weight is not positive, which is the
/// boundary the caller has to render explicitly.
#[inline]
pub(crate) fn significance_ratio(signal: f64, background: f64) -> Option<f64> {
    if background > 0.0 {
        Some(round_to(signal / background.sqrt(), 2))
    } else {
        None
    }
}
