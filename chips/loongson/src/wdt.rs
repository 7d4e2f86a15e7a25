// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Watchdog timer for the ls1c.
//!
//! The counter runs off a fixed 120 MHz reference. A deadline is loaded by
//! writing the tick count to WDT_TIMER and latching it with WDT_SET.

use core::cell::Cell;

use kernel::device::{DeviceNode, Driver};
use kernel::hil::watchdog::Watchdog;
use kernel::utilities::math;
use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, ReadWrite, RegisterLongName,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

pub const COMPATIBLE: &str = "loongson,ls1c-wdt";

/// Rate at which the watchdog counter decrements.
pub const TIMER_FREQ_HZ: u32 = 120_000_000;

/// Timeout used by [`Watchdog::expire_now`].
const EXPIRE_NOW_MS: u64 = 1;

register_structs! {
    pub WdtRegisters {
        (0x00 => wdt_en: ReadWrite<u32, WDT_EN::Register>),
        (0x04 => wdt_timer: ReadWrite<u32>),
        (0x08 => wdt_set: ReadWrite<u32, WDT_SET::Register>),
        (0x0c => @END),
    }
}

register_bitfields![u32,
    pub WDT_EN [
        ENABLE OFFSET(0) NUMBITS(1) []
    ],
    pub WDT_SET [
        /// Load WDT_TIMER into the running counter
        SET OFFSET(0) NUMBITS(1) []
    ]
];

pub trait WdtRegisterBank {
    type Register<R: RegisterLongName>: Readable<T = u32, R = R> + Writeable<T = u32, R = R>;

    fn wdt_en(&self) -> &Self::Register<WDT_EN::Register>;
    fn wdt_timer(&self) -> &Self::Register<()>;
    fn wdt_set(&self) -> &Self::Register<WDT_SET::Register>;
}

impl WdtRegisterBank for WdtRegisters {
    type Register<R: RegisterLongName> = ReadWrite<u32, R>;

    fn wdt_en(&self) -> &ReadWrite<u32, WDT_EN::Register> {
        &self.wdt_en
    }
    fn wdt_timer(&self) -> &ReadWrite<u32> {
        &self.wdt_timer
    }
    fn wdt_set(&self) -> &ReadWrite<u32, WDT_SET::Register> {
        &self.wdt_set
    }
}

/// Counter ticks for a timeout of `ms` milliseconds, saturating at the
/// widest value WDT_TIMER holds.
fn ticks_for(ms: u64) -> u32 {
    math::scale_saturating(ms, u64::from(TIMER_FREQ_HZ), 1000)
}

pub struct Wdt<B: WdtRegisterBank = WdtRegisters> {
    registers: StaticRef<B>,
    timeout_ms: Cell<u64>,
}

impl<B: WdtRegisterBank> Wdt<B> {
    pub const fn new(registers: StaticRef<B>) -> Wdt<B> {
        Wdt {
            registers,
            timeout_ms: Cell::new(0),
        }
    }

    /// Timeout, in milliseconds, that refreshes reload.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.get()
    }

    fn load_deadline(&self) {
        self.registers
            .wdt_timer()
            .set(ticks_for(self.timeout_ms.get()));
        self.registers.wdt_set().modify(WDT_SET::SET::SET);
    }
}

impl<B: WdtRegisterBank> Watchdog for Wdt<B> {
    fn start(&self, timeout_ms: u64, _flags: u32) -> Result<(), ErrorCode> {
        self.timeout_ms.set(timeout_ms);
        self.registers.wdt_en().modify(WDT_EN::ENABLE::SET);
        self.load_deadline();
        Ok(())
    }

    fn reset(&self) -> Result<(), ErrorCode> {
        self.load_deadline();
        Ok(())
    }

    fn stop(&self) -> Result<(), ErrorCode> {
        self.registers.wdt_en().modify(WDT_EN::ENABLE::CLEAR);
        Ok(())
    }

    fn expire_now(&self, flags: u32) -> Result<(), ErrorCode> {
        self.start(EXPIRE_NOW_MS, flags)
    }
}

impl Driver for Wdt {
    const NAME: &'static str = "ls1c_wdt";
    const COMPATIBLE: &'static str = COMPATIBLE;

    fn probe(node: &DeviceNode) -> Result<Self, ErrorCode> {
        let wdt = Wdt::new(node.remap::<WdtRegisters>()?);
        wdt.stop()?;
        Ok(wdt)
    }
}
