// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for a hardware watchdog timer.
//!
//! A watchdog resets the system unless it is refreshed with
//! [`Watchdog::reset`] before its timeout elapses. Periodic refreshing is
//! usually left to a keep-alive supervisor rather than done by hand.

use crate::ErrorCode;

pub trait Watchdog {
    /// Enable the watchdog and program it to fire `timeout_ms` milliseconds
    /// from now. The timeout is recorded for later refreshes. `flags` is
    /// reserved and ignored.
    fn start(&self, timeout_ms: u64, flags: u32) -> Result<(), ErrorCode>;

    /// Reload the recorded timeout. The watchdog keeps running.
    fn reset(&self) -> Result<(), ErrorCode>;

    /// Disable the watchdog.
    fn stop(&self) -> Result<(), ErrorCode>;

    /// Reset the system as soon as the hardware permits. `flags` is reserved
    /// and ignored.
    fn expire_now(&self, flags: u32) -> Result<(), ErrorCode>;
}
