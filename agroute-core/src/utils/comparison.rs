use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers treating `NaN` as the greatest value.
///
/// NaN can appear when input coordinates are malformed: it is not validated here, so the
/// ordering has to stay total to keep priority queues consistent.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}
