// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Helper functions for common mathematical operations.

/// Get closest power of two greater than or equal to the given number.
///
/// An input of 0 results in 1. Inputs above `1 << 31` saturate to `1 << 31`.
pub fn closest_power_of_two(num: u32) -> u32 {
    num.checked_next_power_of_two().unwrap_or(1 << 31)
}

/// Get log base 2 of a number.
///
/// Note: this is the floor of the result. Also, an input of 0 results in an
/// output of 0.
pub fn log_base_two(num: u32) -> u32 {
    if num == 0 {
        0
    } else {
        31 - num.leading_zeros()
    }
}

/// Scale `value` by `numerator / denominator` in 64-bit arithmetic,
/// saturating to `u32::MAX`.
///
/// The division rounds toward zero. A `denominator` of 0 saturates.
pub fn scale_saturating(value: u64, numerator: u64, denominator: u64) -> u32 {
    match value.saturating_mul(numerator).checked_div(denominator) {
        Some(scaled) => u32::try_from(scaled).unwrap_or(u32::MAX),
        None => u32::MAX,
    }
}
