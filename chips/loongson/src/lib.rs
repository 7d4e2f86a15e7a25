// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral drivers for the Loongson 1C system-on-chip.

#![no_std]
#![crate_name = "loongson"]
#![crate_type = "rlib"]

pub mod chip;
pub mod dram;
pub mod spi;
pub mod wdt;

#[cfg(test)]
mod sim;
