// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Keep-alive supervisor for a hardware watchdog.
//!
//! The main loop calls [`WatchDog::tickle`] on every iteration. The
//! supervisor only refreshes the hardware once per reset period, measured on
//! a free-running [`Time`] source, so tight loops do not spend their time on
//! register writes.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let supervisor = WatchdogSupervisor::new(&peripherals.wdt, &timer, 5000, 1000);
//! supervisor.setup();
//! loop {
//!     supervisor.tickle();
//!     // ...
//! }
//! ```

use core::cell::Cell;

use kernel::debug;
use kernel::hil::time::{self, Time};
use kernel::hil::watchdog::Watchdog;
use kernel::platform::watchdog::WatchDog;
use kernel::ErrorCode;

pub struct WatchdogSupervisor<'a, W: Watchdog, T: Time> {
    watchdog: &'a W,
    time: &'a T,
    timeout_ms: u64,
    reset_period_ms: u32,
    last_reset: Cell<u32>,
}

impl<'a, W: Watchdog, T: Time> WatchdogSupervisor<'a, W, T> {
    /// `timeout_ms` is the hardware deadline. `reset_period_ms` is how
    /// often it gets refreshed and must be comfortably shorter.
    pub fn new(
        watchdog: &'a W,
        time: &'a T,
        timeout_ms: u64,
        reset_period_ms: u32,
    ) -> WatchdogSupervisor<'a, W, T> {
        WatchdogSupervisor {
            watchdog,
            time,
            timeout_ms,
            reset_period_ms,
            last_reset: Cell::new(0),
        }
    }

    fn arm(&self) {
        report("start", self.watchdog.start(self.timeout_ms, 0));
        self.last_reset.set(self.time.now());
    }
}

fn report(operation: &str, result: Result<(), ErrorCode>) {
    if let Err(e) = result {
        debug!("watchdog: {} failed: {}", operation, e);
    }
}

impl<W: Watchdog, T: Time> WatchDog for WatchdogSupervisor<'_, W, T> {
    fn setup(&self) {
        self.arm();
    }

    fn tickle(&self) {
        let now = self.time.now();
        let due = self
            .last_reset
            .get()
            .wrapping_add(self.time.ticks_from_ms(self.reset_period_ms));
        if time::reached(now, due) {
            report("reset", self.watchdog.reset());
            self.last_reset.set(now);
        }
    }

    fn suspend(&self) {
        report("stop", self.watchdog.stop());
    }

    fn resume(&self) {
        self.arm();
    }
}
