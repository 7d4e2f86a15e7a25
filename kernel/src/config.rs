// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options.
//!
//! Configuration is a typed `const` object rather than scattered `#[cfg]`
//! blocks. Every code path stays type-checked whether or not an option is
//! enabled, and the compiler folds the constant so a disabled option costs
//! nothing in the final image.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the matching Cargo feature on the
/// `kernel` dependency from the board crate.
pub struct Config {
    /// Whether SPI controllers print a line to the debug output for every
    /// transfer, including the chip select, byte count and framing flags.
    pub trace_spi_xfers: bool,

    /// Whether drivers report the outcome of binding to a device node.
    ///
    /// If enabled, each probe prints the driver name, the node it bound to
    /// and the base of the register window, or the error it returned.
    pub debug_probe: bool,
}

/// The unique instance of [`Config`]. This is the only location in the
/// workspace where `cfg!(feature = ...)` is used to configure code.
pub const CONFIG: Config = Config {
    trace_spi_xfers: cfg!(feature = "trace_spi_xfers"),
    debug_probe: cfg!(feature = "debug_probe"),
};
