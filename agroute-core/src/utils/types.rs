#[cfg(test)]
#[path = "../../tests/unit/utils/types_test.rs"]
mod types_test;

/// Alias to a scalar floating type.
pub type Float = f64;

/// Rounds value to the given amount of decimal places.
///
/// Used only to present results: rounded values should never be fed back into calculations.
#[inline]
pub fn round_to(value: Float, decimals: i32) -> Float {
    let factor = (10 as Float).powi(decimals);

    (value * factor).round() / factor
}

/// Returns arithmetic mean of values or zero for empty input.
pub fn get_mean(values: &[Float]) -> Float {
    if values.is_empty() { 0. } else { values.iter().sum::<Float>() / values.len() as Float }
}
