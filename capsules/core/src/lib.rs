// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Hardware-independent clients of the SPI and watchdog HILs.

#![forbid(unsafe_code)]
#![no_std]

pub mod spi_device;
pub mod watchdog;
