// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Simulated register banks for running the drivers on the host.
//!
//! Every register of a simulated bank forwards to a shared [`Bus`], which
//! stores register contents, records each access in order, and lets a
//! [`Device`] model override what reads return and what writes latch.

extern crate std;

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use core::mem;
use std::boxed::Box;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::{RegisterLongName, UIntLike};
use kernel::utilities::StaticRef;

use crate::spi::{SpiRegisterBank, SFC_SOFTCS, SPCR, SPER, SPSR};
use crate::wdt::{WdtRegisterBank, WDT_EN, WDT_SET};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Read { offset: usize, value: u32 },
    Write { offset: usize, value: u32 },
}

/// Peripheral behaviour behind a simulated bank.
pub(crate) trait Device<T> {
    /// Value returned by a read, given what the register currently holds.
    fn read(&self, _offset: usize, stored: T) -> T {
        stored
    }

    /// Value the register holds after `value` is written.
    fn write(&self, _offset: usize, value: T) -> T {
        value
    }
}

/// Registers that behave like plain memory.
pub(crate) struct Memory;

impl<T> Device<T> for Memory {}

pub(crate) struct Bus<T, D> {
    values: RefCell<Vec<T>>,
    log: RefCell<Vec<Access>>,
    device: D,
}

impl<T: UIntLike + Into<u32>, D: Device<T>> Bus<T, D> {
    fn new(registers: usize, device: D) -> Rc<Self> {
        Rc::new(Bus {
            values: RefCell::new(std::vec![T::zero(); registers]),
            log: RefCell::new(Vec::new()),
            device,
        })
    }

    fn index(offset: usize) -> usize {
        offset / mem::size_of::<T>()
    }

    fn read(&self, offset: usize) -> T {
        let stored = self.values.borrow()[Self::index(offset)];
        let value = self.device.read(offset, stored);
        self.log.borrow_mut().push(Access::Read {
            offset,
            value: value.into(),
        });
        value
    }

    fn write(&self, offset: usize, value: T) {
        let latched = self.device.write(offset, value);
        self.values.borrow_mut()[Self::index(offset)] = latched;
        self.log.borrow_mut().push(Access::Write {
            offset,
            value: value.into(),
        });
    }

    pub(crate) fn device(&self) -> &D {
        &self.device
    }

    /// Current register contents, without recording an access.
    pub(crate) fn peek(&self, offset: usize) -> u32 {
        self.values.borrow()[Self::index(offset)].into()
    }

    /// Overwrite register contents, without recording an access.
    pub(crate) fn poke(&self, offset: usize, value: T) {
        self.values.borrow_mut()[Self::index(offset)] = value;
    }

    pub(crate) fn log(&self) -> Vec<Access> {
        self.log.borrow().clone()
    }

    pub(crate) fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    pub(crate) fn writes_to(&self, offset: usize) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|access| match *access {
                Access::Write { offset: o, value } if o == offset => Some(value),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn reads_of(&self, offset: usize) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|access| matches!(access, Access::Read { offset: o, .. } if *o == offset))
            .count()
    }
}

pub(crate) struct SimRegister<T, D, R> {
    bus: Rc<Bus<T, D>>,
    offset: usize,
    _reg: PhantomData<R>,
}

impl<T: UIntLike + Into<u32>, D: Device<T>, R: RegisterLongName> SimRegister<T, D, R> {
    fn new(bus: &Rc<Bus<T, D>>, offset: usize) -> Self {
        SimRegister {
            bus: Rc::clone(bus),
            offset,
            _reg: PhantomData,
        }
    }
}

impl<T: UIntLike + Into<u32>, D: Device<T>, R: RegisterLongName> Readable
    for SimRegister<T, D, R>
{
    type T = T;
    type R = R;

    fn get(&self) -> T {
        self.bus.read(self.offset)
    }
}

impl<T: UIntLike + Into<u32>, D: Device<T>, R: RegisterLongName> Writeable
    for SimRegister<T, D, R>
{
    type T = T;
    type R = R;

    fn set(&self, value: T) {
        self.bus.write(self.offset, value)
    }
}

pub(crate) const SPCR_OFFSET: usize = 0;
pub(crate) const SPSR_OFFSET: usize = 1;
pub(crate) const SPDR_OFFSET: usize = 2;
pub(crate) const SPER_OFFSET: usize = 3;
pub(crate) const SFC_PARAM_OFFSET: usize = 4;
pub(crate) const SFC_SOFTCS_OFFSET: usize = 5;

const RFEMPTY: u8 = 1 << 0;

/// A SPI peripheral that answers every transmitted byte with the next
/// scripted response (0x00 once the script runs out).
pub(crate) struct SpiPeripheral {
    empty_polls: Cell<usize>,
    polls_left: Cell<usize>,
    rx_fifo: RefCell<VecDeque<u8>>,
    responses: RefCell<VecDeque<u8>>,
    shifted_out: RefCell<Vec<u8>>,
}

impl SpiPeripheral {
    /// Number of status reads reporting an empty RX FIFO before each
    /// received byte becomes visible.
    pub(crate) fn set_empty_polls(&self, polls: usize) {
        self.empty_polls.set(polls);
    }

    pub(crate) fn respond_with(&self, bytes: &[u8]) {
        self.responses.borrow_mut().extend(bytes.iter().copied());
    }

    pub(crate) fn shifted_out(&self) -> Vec<u8> {
        self.shifted_out.borrow().clone()
    }
}

impl Device<u8> for SpiPeripheral {
    fn read(&self, offset: usize, stored: u8) -> u8 {
        match offset {
            SPSR_OFFSET => {
                let waiting = self.polls_left.get();
                if waiting > 0 {
                    self.polls_left.set(waiting - 1);
                }
                if waiting > 0 || self.rx_fifo.borrow().is_empty() {
                    stored | RFEMPTY
                } else {
                    stored & !RFEMPTY
                }
            }
            SPDR_OFFSET => self.rx_fifo.borrow_mut().pop_front().unwrap_or(0),
            _ => stored,
        }
    }

    fn write(&self, offset: usize, value: u8) -> u8 {
        if offset == SPDR_OFFSET {
            self.shifted_out.borrow_mut().push(value);
            let response = self.responses.borrow_mut().pop_front().unwrap_or(0);
            self.rx_fifo.borrow_mut().push_back(response);
            self.polls_left.set(self.empty_polls.get());
        }
        value
    }
}

pub(crate) struct SimSpiRegisters {
    pub(crate) bus: Rc<Bus<u8, SpiPeripheral>>,
    spcr: SimRegister<u8, SpiPeripheral, SPCR::Register>,
    spsr: SimRegister<u8, SpiPeripheral, SPSR::Register>,
    spdr: SimRegister<u8, SpiPeripheral, ()>,
    sper: SimRegister<u8, SpiPeripheral, SPER::Register>,
    sfc_param: SimRegister<u8, SpiPeripheral, ()>,
    sfc_softcs: SimRegister<u8, SpiPeripheral, SFC_SOFTCS::Register>,
}

impl SimSpiRegisters {
    /// A leaked bank, so that drivers can hold it through a `StaticRef`.
    pub(crate) fn leak() -> &'static SimSpiRegisters {
        let bus: Rc<Bus<u8, SpiPeripheral>> = Bus::new(
            8,
            SpiPeripheral {
                empty_polls: Cell::new(0),
                polls_left: Cell::new(0),
                rx_fifo: RefCell::new(VecDeque::new()),
                responses: RefCell::new(VecDeque::new()),
                shifted_out: RefCell::new(Vec::new()),
            },
        );
        Box::leak(Box::new(SimSpiRegisters {
            spcr: SimRegister::new(&bus, SPCR_OFFSET),
            spsr: SimRegister::new(&bus, SPSR_OFFSET),
            spdr: SimRegister::new(&bus, SPDR_OFFSET),
            sper: SimRegister::new(&bus, SPER_OFFSET),
            sfc_param: SimRegister::new(&bus, SFC_PARAM_OFFSET),
            sfc_softcs: SimRegister::new(&bus, SFC_SOFTCS_OFFSET),
            bus,
        }))
    }

    pub(crate) fn as_static_ref(&'static self) -> StaticRef<SimSpiRegisters> {
        unsafe { StaticRef::new(self) }
    }
}

impl SpiRegisterBank for SimSpiRegisters {
    type Register<R: RegisterLongName> = SimRegister<u8, SpiPeripheral, R>;

    fn spcr(&self) -> &Self::Register<SPCR::Register> {
        &self.spcr
    }
    fn spsr(&self) -> &Self::Register<SPSR::Register> {
        &self.spsr
    }
    fn spdr(&self) -> &Self::Register<()> {
        &self.spdr
    }
    fn sper(&self) -> &Self::Register<SPER::Register> {
        &self.sper
    }
    fn sfc_param(&self) -> &Self::Register<()> {
        &self.sfc_param
    }
    fn sfc_softcs(&self) -> &Self::Register<SFC_SOFTCS::Register> {
        &self.sfc_softcs
    }
}

pub(crate) const WDT_EN_OFFSET: usize = 0x00;
pub(crate) const WDT_TIMER_OFFSET: usize = 0x04;
pub(crate) const WDT_SET_OFFSET: usize = 0x08;

pub(crate) struct SimWdtRegisters {
    pub(crate) bus: Rc<Bus<u32, Memory>>,
    wdt_en: SimRegister<u32, Memory, WDT_EN::Register>,
    wdt_timer: SimRegister<u32, Memory, ()>,
    wdt_set: SimRegister<u32, Memory, WDT_SET::Register>,
}

impl SimWdtRegisters {
    pub(crate) fn leak() -> &'static SimWdtRegisters {
        let bus: Rc<Bus<u32, Memory>> = Bus::new(3, Memory);
        Box::leak(Box::new(SimWdtRegisters {
            wdt_en: SimRegister::new(&bus, WDT_EN_OFFSET),
            wdt_timer: SimRegister::new(&bus, WDT_TIMER_OFFSET),
            wdt_set: SimRegister::new(&bus, WDT_SET_OFFSET),
            bus,
        }))
    }

    pub(crate) fn as_static_ref(&'static self) -> StaticRef<SimWdtRegisters> {
        unsafe { StaticRef::new(self) }
    }
}

impl WdtRegisterBank for SimWdtRegisters {
    type Register<R: RegisterLongName> = SimRegister<u32, Memory, R>;

    fn wdt_en(&self) -> &Self::Register<WDT_EN::Register> {
        &self.wdt_en
    }
    fn wdt_timer(&self) -> &Self::Register<()> {
        &self.wdt_timer
    }
    fn wdt_set(&self) -> &Self::Register<WDT_SET::Register> {
        &self.wdt_set
    }
}
