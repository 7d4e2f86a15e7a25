// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! SPI master driver for the Loongson 1C.
//!
//! The controller is a byte-wide register window with a small TX/RX FIFO
//! pair and four software-driven chip selects. Transfers are fully polled:
//! each byte written to the data register produces exactly one received
//! byte, which is read back before the next one is sent.
//!
//! Clock rate and mode are only recorded by [`SpiController::set_speed`]
//! and [`SpiController::set_mode`]. They are programmed into the controller
//! at the start of every transfer that carries [`XferFlags::BEGIN`], because
//! children on the same bus may need different settings.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let spi = kernel::device::bind::<loongson::spi::Spi>(&nodes)?;
//! let flash = SpiDevice::new(0, 25_000_000, SpiMode::MODE_0);
//! spi.set_mode(flash.mode);
//! spi.set_speed(flash.max_hz);
//! spi.xfer(&flash, 8, Some(&[0x9F][..]), None, XferFlags::BEGIN)?;
//! spi.xfer(&flash, 24, None, Some(&mut id), XferFlags::END)?;
//! ```

use core::cell::Cell;
use core::cmp;

use kernel::config::CONFIG;
use kernel::debug;
use kernel::device::{DeviceNode, Driver};
use kernel::hil::spi::{
    ClockPhase, ClockPolarity, SpiController, SpiDevice, SpiMode, XferFlags,
};
use kernel::utilities::math;
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, ReadWrite, RegisterLongName,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

pub const COMPATIBLE: &str = "loongson,loongson-spi";

/// Reference clock the bit rate is divided down from.
pub const SYS_FREQ_HZ: u32 = 120_000_000;

/// Number of chip select lines the controller drives.
pub const NUM_CS: u32 = 4;

/// Byte shifted out when the caller supplies no TX buffer.
const TX_FILLER: u8 = 0xFF;

/// Largest exponent SPCR.SPR and SPER.SPRE can encode together.
const MAX_DIVISOR_EXPONENT: u32 = 15;

/// Flash controller parameter value written at probe.
const SFC_PARAM_INIT: u8 = 0x01;

register_structs! {
    pub SpiRegisters {
        /// Control
        (0x0 => spcr: ReadWrite<u8, SPCR::Register>),
        /// Status
        (0x1 => spsr: ReadWrite<u8, SPSR::Register>),
        /// Data: writes push the TX FIFO, reads pop the RX FIFO
        (0x2 => spdr: ReadWrite<u8>),
        /// Extended control
        (0x3 => sper: ReadWrite<u8, SPER::Register>),
        /// Flash controller parameters
        (0x4 => sfc_param: ReadWrite<u8>),
        /// Software chip select
        (0x5 => sfc_softcs: ReadWrite<u8, SFC_SOFTCS::Register>),
        /// Flash controller timing
        (0x6 => _sfc_timing),
        (0x8 => @END),
    }
}

register_bitfields![u8,
    pub SPCR [
        /// Controller enable
        SPE OFFSET(6) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(3) NUMBITS(1) [
            IdleLow = 0,
            IdleHigh = 1
        ],
        /// Clock phase
        CPHA OFFSET(2) NUMBITS(1) [
            SampleLeading = 0,
            SampleTrailing = 1
        ],
        /// Low two bits of the clock divisor exponent
        SPR OFFSET(0) NUMBITS(2) []
    ],
    pub SPSR [
        /// Write collision
        WCOL OFFSET(6) NUMBITS(1) [],
        WFFULL OFFSET(3) NUMBITS(1) [],
        WFEMPTY OFFSET(2) NUMBITS(1) [],
        RFFULL OFFSET(1) NUMBITS(1) [],
        RFEMPTY OFFSET(0) NUMBITS(1) []
    ],
    pub SPER [
        /// High two bits of the clock divisor exponent
        SPRE OFFSET(0) NUMBITS(2) []
    ],
    pub SFC_SOFTCS [
        /// Chip select output levels, active low, one bit per line
        CSN OFFSET(4) NUMBITS(4) [],
        /// Software control enable, one bit per line
        CSEN OFFSET(0) NUMBITS(4) []
    ]
];

/// Access to the controller's registers.
///
/// Implemented by the memory mapped [`SpiRegisters`] block. Host tests
/// substitute a simulated bank.
pub trait SpiRegisterBank {
    type Register<R: RegisterLongName>: Readable<T = u8, R = R> + Writeable<T = u8, R = R>;

    fn spcr(&self) -> &Self::Register<SPCR::Register>;
    fn spsr(&self) -> &Self::Register<SPSR::Register>;
    fn spdr(&self) -> &Self::Register<()>;
    fn sper(&self) -> &Self::Register<SPER::Register>;
    fn sfc_param(&self) -> &Self::Register<()>;
    fn sfc_softcs(&self) -> &Self::Register<SFC_SOFTCS::Register>;
}

impl SpiRegisterBank for SpiRegisters {
    type Register<R: RegisterLongName> = ReadWrite<u8, R>;

    fn spcr(&self) -> &ReadWrite<u8, SPCR::Register> {
        &self.spcr
    }
    fn spsr(&self) -> &ReadWrite<u8, SPSR::Register> {
        &self.spsr
    }
    fn spdr(&self) -> &ReadWrite<u8> {
        &self.spdr
    }
    fn sper(&self) -> &ReadWrite<u8, SPER::Register> {
        &self.sper
    }
    fn sfc_param(&self) -> &ReadWrite<u8> {
        &self.sfc_param
    }
    fn sfc_softcs(&self) -> &ReadWrite<u8, SFC_SOFTCS::Register> {
        &self.sfc_softcs
    }
}

/// Exponent `e` of the smallest power-of-two divisor for which
/// `sys_freq >> e` does not exceed `hz`, limited to what the hardware can
/// encode. A zero request selects the slowest rate.
fn divisor_exponent(sys_freq: u32, hz: u32) -> u32 {
    if hz == 0 {
        return MAX_DIVISOR_EXPONENT;
    }
    let divisor = math::closest_power_of_two(sys_freq.div_ceil(hz));
    cmp::min(math::log_base_two(divisor), MAX_DIVISOR_EXPONENT)
}

pub struct Spi<B: SpiRegisterBank = SpiRegisters> {
    registers: StaticRef<B>,
    sys_freq: u32,
    mode: Cell<SpiMode>,
    /// Rate last asked for by a client.
    requested_speed: Cell<u32>,
    /// Rate last programmed into the controller, or the request if no
    /// transfer has begun since.
    speed: Cell<u32>,
}

impl<B: SpiRegisterBank> Spi<B> {
    pub const fn new(registers: StaticRef<B>, sys_freq: u32) -> Spi<B> {
        Spi {
            registers,
            sys_freq,
            mode: Cell::new(SpiMode::MODE_0),
            requested_speed: Cell::new(0),
            speed: Cell::new(0),
        }
    }

    /// Bring the flash controller into a known state with every chip
    /// select released.
    pub fn init(&self) {
        self.registers.sfc_param().set(SFC_PARAM_INIT);
        self.registers
            .sfc_softcs()
            .write(SFC_SOFTCS::CSN.val(0b1111) + SFC_SOFTCS::CSEN.val(0b1111));
    }

    /// Reprogram clock divisor and mode, leaving the controller enabled.
    fn setup(&self) {
        let regs = &*self.registers;
        let exponent = divisor_exponent(self.sys_freq, self.requested_speed.get());
        self.speed.set(self.sys_freq >> exponent);

        regs.spcr().modify(SPCR::SPE::CLEAR);
        regs.spsr().set(0);

        regs.spcr().modify(SPCR::SPR.val((exponent & 0b11) as u8));
        regs.sper().modify(SPER::SPRE.val((exponent >> 2) as u8));

        let mode = self.mode.get();
        let polarity = match mode.polarity() {
            ClockPolarity::IdleLow => SPCR::CPOL::IdleLow,
            ClockPolarity::IdleHigh => SPCR::CPOL::IdleHigh,
        };
        let phase = match mode.phase() {
            ClockPhase::SampleLeading => SPCR::CPHA::SampleLeading,
            ClockPhase::SampleTrailing => SPCR::CPHA::SampleTrailing,
        };
        regs.spcr().modify(polarity + phase);

        regs.spcr().modify(SPCR::SPE::SET);
    }

    fn set_chip_select(&self, cs: u32, active: bool) {
        let softcs = self.registers.sfc_softcs();
        let original = softcs.extract();
        let line = 1u8 << cs;
        let levels = original.read(SFC_SOFTCS::CSN);
        let levels = if active { levels & !line } else { levels | line };
        softcs.modify_no_read(original, SFC_SOFTCS::CSN.val(levels));
    }

    /// Shift one byte out and return the byte shifted in alongside it.
    fn exchange(&self, tx: u8) -> u8 {
        let regs = &*self.registers;
        regs.spdr().set(tx);
        while regs.spsr().is_set(SPSR::RFEMPTY) {}
        regs.spdr().get()
    }
}

impl<B: SpiRegisterBank> SpiController for Spi<B> {
    fn set_mode(&self, mode: SpiMode) {
        self.mode.set(mode);
    }

    fn get_mode(&self) -> SpiMode {
        self.mode.get()
    }

    fn set_speed(&self, hz: u32) {
        self.requested_speed.set(hz);
        self.speed.set(hz);
    }

    fn get_speed(&self) -> u32 {
        self.speed.get()
    }

    fn xfer(
        &self,
        device: &SpiDevice,
        bitlen: usize,
        dout: Option<&[u8]>,
        mut din: Option<&mut [u8]>,
        flags: XferFlags,
    ) -> Result<(), ErrorCode> {
        let cs = device.chip_select;
        if cs >= NUM_CS {
            debug!("loongson_spi: invalid chip select {}", cs);
            return Err(ErrorCode::INVAL);
        }

        let len = bitlen / 8;
        if dout.is_some_and(|tx| tx.len() < len) || din.as_ref().is_some_and(|rx| rx.len() < len)
        {
            return Err(ErrorCode::SIZE);
        }

        if CONFIG.trace_spi_xfers {
            debug!("loongson_spi: cs{} {} bytes {:?}", cs, len, flags);
        }

        if flags.contains(XferFlags::BEGIN) {
            self.setup();
            self.set_chip_select(cs, true);
        }

        for i in 0..len {
            let tx = dout.and_then(|tx| tx.get(i).copied()).unwrap_or(TX_FILLER);
            let rx = self.exchange(tx);
            if let Some(slot) = din.as_deref_mut().and_then(|rx| rx.get_mut(i)) {
                *slot = rx;
            }
        }

        if flags.contains(XferFlags::END) {
            self.set_chip_select(cs, false);
        }

        Ok(())
    }
}

impl Driver for Spi {
    const NAME: &'static str = "loongson_spi";
    const COMPATIBLE: &'static str = COMPATIBLE;

    fn probe(node: &DeviceNode) -> Result<Self, ErrorCode> {
        let spi = Spi::new(node.remap::<SpiRegisters>()?, SYS_FREQ_HZ);
        spi.init();
        Ok(spi)
    }
}
