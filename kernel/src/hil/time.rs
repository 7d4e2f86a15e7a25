// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Hardware agnostic interfaces for free-running counters.

/// Trait to represent clock frequency in Hz
///
/// This trait is used as an associated type for `Time` so clients can
/// portably convert native ticks to real-time values.
pub trait Frequency {
    /// Returns frequency in Hz.
    fn frequency() -> u32;
}

/// 1KHz `Frequency`
#[derive(Debug)]
pub struct Freq1KHz;
impl Frequency for Freq1KHz {
    fn frequency() -> u32 {
        1_000
    }
}

/// 1MHz `Frequency`
#[derive(Debug)]
pub struct Freq1MHz;
impl Frequency for Freq1MHz {
    fn frequency() -> u32 {
        1_000_000
    }
}

/// A free-running counter that wraps at `u32::MAX`.
pub trait Time {
    type Frequency: Frequency;

    /// Returns the current time in hardware clock units.
    fn now(&self) -> u32;

    /// Convert a duration in milliseconds into ticks of this counter,
    /// saturating at `u32::MAX`.
    fn ticks_from_ms(&self, ms: u32) -> u32 {
        crate::utilities::math::scale_saturating(
            u64::from(ms),
            u64::from(Self::Frequency::frequency()),
            1000,
        )
    }
}

/// Whether `now` has reached or passed `reference` on a wrapping counter.
///
/// Valid as long as the two points are less than half the counter range
/// apart.
pub fn reached(now: u32, reference: u32) -> bool {
    now.wrapping_sub(reference) < (1 << 31)
}
