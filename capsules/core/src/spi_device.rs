// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! A single peripheral on a polled SPI bus.
//!
//! `SpiBusDevice` pairs a controller with the chip select, clock and mode
//! of one peripheral, so clients such as a flash driver do not have to pass
//! the child description around.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let flash = SpiBusDevice::new(&peripherals.spi, SpiDevice::new(0, 25_000_000, SpiMode::MODE_0));
//! flash.claim_bus();
//! let mut id = [0; 3];
//! flash.write_then_read(0x9F, None, Some(&mut id))?;
//! ```

use kernel::hil::spi::{SpiController, SpiDevice, XferFlags};
use kernel::ErrorCode;

/// Bit rate used for peripherals that do not state a maximum.
pub const DEFAULT_SPEED_HZ: u32 = 100_000;

pub struct SpiBusDevice<'a, S: SpiController> {
    spi: &'a S,
    device: SpiDevice,
}

impl<'a, S: SpiController> SpiBusDevice<'a, S> {
    pub fn new(spi: &'a S, device: SpiDevice) -> SpiBusDevice<'a, S> {
        SpiBusDevice { spi, device }
    }

    pub fn device(&self) -> &SpiDevice {
        &self.device
    }

    /// Record this peripheral's clock rate and mode in the controller. They
    /// take effect at the next transfer that begins a session.
    pub fn claim_bus(&self) {
        let hz = match self.device.max_hz {
            0 => DEFAULT_SPEED_HZ,
            hz => hz,
        };
        self.spi.set_speed(hz);
        self.spi.set_mode(self.device.mode);
    }

    pub fn xfer(
        &self,
        bitlen: usize,
        dout: Option<&[u8]>,
        din: Option<&mut [u8]>,
        flags: XferFlags,
    ) -> Result<(), ErrorCode> {
        self.spi.xfer(&self.device, bitlen, dout, din, flags)
    }

    /// Send `opcode`, then `tx`, then clock in `rx`, all under one chip
    /// select assertion.
    ///
    /// Empty data buffers are skipped. If a phase fails the remaining
    /// phases are not run.
    pub fn write_then_read(
        &self,
        opcode: u8,
        tx: Option<&[u8]>,
        rx: Option<&mut [u8]>,
    ) -> Result<(), ErrorCode> {
        let tx = tx.filter(|buf| !buf.is_empty());
        let rx = rx.filter(|buf| !buf.is_empty());

        let mut flags = XferFlags::BEGIN;
        if tx.is_none() && rx.is_none() {
            flags |= XferFlags::END;
        }
        self.xfer(8, Some(&[opcode][..]), None, flags)?;

        if let Some(tx) = tx {
            let flags = if rx.is_none() {
                XferFlags::END
            } else {
                XferFlags::empty()
            };
            self.xfer(tx.len() * 8, Some(tx), None, flags)?;
        }

        if let Some(rx) = rx {
            self.xfer(rx.len() * 8, None, Some(rx), XferFlags::END)?;
        }

        Ok(())
    }
}
