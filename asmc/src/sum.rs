/*++

Licensed under the Apache-2.0 license.

File Name:

    sum.rs

Abstract:

    File contains the range sum routine.

--*/

use gbafe_types::SlotValue;

/// Sums a contiguous range of slot values.
///
/// Elements are read once each, front to back. Addition wraps on overflow,
/// matching the host's 32-bit `int` arithmetic.
///
/// # Arguments
///
/// * `range` - Values to sum. An empty range sums to zero.
pub fn sum_range(range: &[SlotValue]) -> SlotValue {
    let mut result: SlotValue = 0;
    for value in range {
        result = result.wrapping_add(*value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(sum_range(&[]), 0);
    }

    #[test]
    fn test_single() {
        assert_eq!(sum_range(&[-7]), -7);
    }

    #[test]
    fn test_arithmetic_sum() {
        let values: [SlotValue; 100] = core::array::from_fn(|i| i as SlotValue + 1);
        for n in 0..=values.len() {
            let expected = (n * (n + 1) / 2) as SlotValue;
            assert_eq!(sum_range(&values[..n]), expected);
        }
    }

    #[test]
    fn test_mixed_signs() {
        assert_eq!(sum_range(&[5, -3, 10, -12]), 0);
    }

    #[test]
    fn test_permutation_same_sum() {
        assert_eq!(sum_range(&[1, 2, 3, 4]), sum_range(&[4, 2, 1, 3]));
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(sum_range(&[SlotValue::MAX, 1]), SlotValue::MIN);
        assert_eq!(sum_range(&[SlotValue::MIN, -1]), SlotValue::MAX);
    }
}
