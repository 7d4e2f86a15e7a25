// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for blocking SPI controller (master) transfers.
//!
//! Transfers are synchronous: [`SpiController::xfer`] returns once every byte
//! has been shifted out and in. A logical transaction with a peripheral may
//! span several `xfer` calls. The first one carries [`XferFlags::BEGIN`],
//! which applies the recorded mode and speed and asserts the chip select, and
//! the last one carries [`XferFlags::END`], which releases it:
//!
//! ```rust,ignore
//! spi.set_mode(SpiMode::empty());
//! spi.set_speed(25_000_000);
//! spi.xfer(&flash, 8, Some(&[0x9f]), None, XferFlags::BEGIN)?;
//! spi.xfer(&flash, 24, None, Some(&mut id), XferFlags::END)?;
//! ```

use bitflags::bitflags;

use crate::ErrorCode;

/// Clock polarity (CPOL) defines whether the SPI clock is high or low when
/// idle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockPolarity {
    /// The clock is low when the SPI bus is not active. This is CPOL = 0.
    IdleLow,
    /// The clock is high when the SPI bus is not active. This is CPOL = 1.
    IdleHigh,
}

/// Clock phase (CPHA) defines whether to sample and send data on a leading or
/// trailing clock edge.
///
/// Consult a SPI reference on how CPHA interacts with CPOL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockPhase {
    /// Sample on the leading clock edge. This is CPHA = 0.
    SampleLeading,
    /// Sample on the trailing clock edge. This is CPHA = 1.
    SampleTrailing,
}

bitflags! {
    /// SPI mode flags requested by a client.
    ///
    /// Controllers only act on [`SpiMode::CPHA`] and [`SpiMode::CPOL`]. Any
    /// other bit is kept as passed in and ignored.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SpiMode: u32 {
        /// Clock phase: sample on the trailing edge.
        const CPHA = 1 << 0;
        /// Clock polarity: clock idles high.
        const CPOL = 1 << 1;

        const MODE_0 = 0;
        const MODE_1 = Self::CPHA.bits();
        const MODE_2 = Self::CPOL.bits();
        const MODE_3 = Self::CPOL.bits() | Self::CPHA.bits();

        const _ = !0;
    }
}

impl SpiMode {
    pub fn polarity(&self) -> ClockPolarity {
        if self.contains(SpiMode::CPOL) {
            ClockPolarity::IdleHigh
        } else {
            ClockPolarity::IdleLow
        }
    }

    pub fn phase(&self) -> ClockPhase {
        if self.contains(SpiMode::CPHA) {
            ClockPhase::SampleTrailing
        } else {
            ClockPhase::SampleLeading
        }
    }
}

bitflags! {
    /// Framing of a single [`SpiController::xfer`] call.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct XferFlags: u32 {
        /// Reconfigure the controller and assert chip select before the
        /// first byte.
        const BEGIN = 1 << 0;
        /// Release chip select after the last byte.
        const END = 1 << 1;
        /// A complete transaction in one call.
        const ONCE = Self::BEGIN.bits() | Self::END.bits();
    }
}

/// A peripheral attached to a SPI bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpiDevice {
    /// Index of the chip select line the peripheral is wired to.
    pub chip_select: u32,
    /// Fastest clock the peripheral accepts, in Hz. 0 means unspecified.
    pub max_hz: u32,
    /// Mode the peripheral expects.
    pub mode: SpiMode,
}

impl SpiDevice {
    pub const fn new(chip_select: u32, max_hz: u32, mode: SpiMode) -> SpiDevice {
        SpiDevice {
            chip_select,
            max_hz,
            mode,
        }
    }
}

/// A SPI controller operating in master mode with polled transfers.
pub trait SpiController {
    /// Record the clock mode applied at the next [`XferFlags::BEGIN`].
    fn set_mode(&self, mode: SpiMode);

    /// Return the recorded clock mode.
    fn get_mode(&self) -> SpiMode;

    /// Record the bit rate, in Hz, applied at the next [`XferFlags::BEGIN`].
    fn set_speed(&self, hz: u32);

    /// Return the recorded bit rate.
    ///
    /// After a transfer with [`XferFlags::BEGIN`] this is the rate actually
    /// programmed into the controller, which never exceeds the request.
    fn get_speed(&self) -> u32;

    /// Perform a full-duplex transfer of `bitlen / 8` bytes with `device`.
    ///
    /// A `None` `dout` transmits 0xFF for every byte; a `None` `din`
    /// discards the received bytes. The transfer blocks until every byte has
    /// been exchanged.
    ///
    /// ### Return values
    ///
    /// - `Ok(())`: the transfer completed
    /// - `Err(INVAL)`: the device's chip select is not wired on this bus
    /// - `Err(SIZE)`: `dout` or `din` is shorter than the transfer
    fn xfer(
        &self,
        device: &SpiDevice,
        bitlen: usize,
        dout: Option<&[u8]>,
        din: Option<&mut [u8]>,
        flags: XferFlags,
    ) -> Result<(), ErrorCode>;
}
