// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for keeping a watchdog alive from the boot loop.

/// A trait for implementing a watchdog keep-alive. This trait is called from
/// the boot loop to set up and maintain the watchdog timer. How the timer is
/// armed and how often it is refreshed is left to the implementation.
pub trait WatchDog {
    /// This function must enable the watchdog timer and configure it to
    /// trigger regularly. The implementation must ensure that the timer does
    /// not fire too early (while the boot loop is still making progress) or
    /// too late to catch a hang.
    ///
    /// The watchdog is running once this function returns.
    fn setup(&self) {}

    /// This function must service the watchdog so that it does not fire.
    /// It is called on every pass through the boot loop; implementations may
    /// skip the hardware access when the last service was recent.
    fn tickle(&self) {}

    /// Suspends the watchdog timer. After calling this the timer must not
    /// fire until `resume()` is called. Used before long operations that
    /// cannot tickle, such as handing control to a loaded image that arms
    /// its own watchdog.
    fn suspend(&self) {}

    /// Resumes the watchdog timer after a `suspend()`.
    fn resume(&self) {
        self.tickle();
    }
}

/// Implement default WatchDog trait for unit, for boards without a watchdog.
impl WatchDog for () {}
