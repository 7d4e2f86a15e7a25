// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripherals of the ls1c needed during boot.

use kernel::device::{self, DeviceNode};
use kernel::ErrorCode;

use crate::spi::Spi;
use crate::wdt::Wdt;

pub struct Ls1cDefaultPeripherals {
    pub spi: Spi,
    pub wdt: Wdt,
}

impl Ls1cDefaultPeripherals {
    /// Bind every peripheral to its node in `nodes`.
    ///
    /// The watchdog is left disarmed and all SPI chip selects released.
    pub fn probe(nodes: &[DeviceNode]) -> Result<Ls1cDefaultPeripherals, ErrorCode> {
        Ok(Ls1cDefaultPeripherals {
            spi: device::bind(nodes)?,
            wdt: device::bind(nodes)?,
        })
    }
}
