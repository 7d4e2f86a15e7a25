// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Binding drivers to hardware nodes.
//!
//! The boot environment describes each peripheral as a [`DeviceNode`]: a name,
//! the list of compatibility strings the node claims, and the physical
//! register window assigned to it. A driver declares the compatibility
//! string it handles through the [`Driver`] trait, and [`bind`] probes the
//! first node that matches.
//!
//! ```rust,ignore
//! let nodes = [unsafe {
//!     DeviceNode::new("spi@bfe80000", &["loongson,loongson-spi"],
//!                     RegisterWindow::new(0xbfe8_0000, 0x8))
//! }];
//! let spi: Spi = device::bind(&nodes)?;
//! ```

use core::mem;

use crate::utilities::StaticRef;
use crate::ErrorCode;

/// A physical register window handed to a driver at bind time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterWindow {
    base: usize,
    size: usize,
}

impl RegisterWindow {
    pub const fn new(base: usize, size: usize) -> RegisterWindow {
        RegisterWindow { base, size }
    }

    /// A window that maps nothing.
    pub const fn empty() -> RegisterWindow {
        RegisterWindow { base: 0, size: 0 }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the window cannot hold any register.
    pub fn is_empty(&self) -> bool {
        self.base == 0 || self.size == 0
    }

    /// Map the window as a register block of type `T`.
    ///
    /// Returns `None` if the window is empty or smaller than `T`.
    fn remap<T>(&self) -> Option<StaticRef<T>> {
        if self.is_empty() || self.size < mem::size_of::<T>() {
            None
        } else {
            // Safety: `DeviceNode::new` requires the window to describe valid
            // MMIO owned exclusively by the node.
            Some(unsafe { StaticRef::new(self.base as *const T) })
        }
    }
}

/// A hardware node described by the boot environment.
#[derive(Copy, Clone, Debug)]
pub struct DeviceNode<'a> {
    name: &'a str,
    compatible: &'a [&'a str],
    reg: RegisterWindow,
}

impl<'a> DeviceNode<'a> {
    /// Describe a hardware node.
    ///
    /// ## Safety
    ///
    /// `reg` must either be empty or describe memory mapped registers that
    /// stay valid for the rest of execution and that no other node or value
    /// refers to.
    pub const unsafe fn new(
        name: &'a str,
        compatible: &'a [&'a str],
        reg: RegisterWindow,
    ) -> DeviceNode<'a> {
        DeviceNode {
            name,
            compatible,
            reg,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn reg(&self) -> RegisterWindow {
        self.reg
    }

    /// Whether the node lists `compatible` among its compatibility strings.
    pub fn is_compatible(&self, compatible: &str) -> bool {
        self.compatible.iter().any(|c| *c == compatible)
    }

    /// Map the node's register window as a register block of type `T`.
    ///
    /// ### Return values
    ///
    /// - `Ok(StaticRef<T>)`: the window is usable
    /// - `Err(INVAL)`: the window is empty or too small for `T`
    pub fn remap<T>(&self) -> Result<StaticRef<T>, ErrorCode> {
        self.reg.remap().ok_or(ErrorCode::INVAL)
    }
}

/// A driver that can be bound to a [`DeviceNode`].
pub trait Driver: Sized {
    /// Human readable driver name, used in debug output.
    const NAME: &'static str;

    /// Compatibility string of the nodes this driver handles.
    const COMPATIBLE: &'static str;

    /// Bring up the driver for `node`.
    ///
    /// ### Return values
    ///
    /// - `Ok(Self)`: the driver is ready for use
    /// - `Err(INVAL)`: the register window could not be mapped
    fn probe(node: &DeviceNode) -> Result<Self, ErrorCode>;
}

/// Probe driver `D` on the first node in `nodes` it is compatible with.
///
/// ### Return values
///
/// - `Ok(D)`: a compatible node was found and probed successfully
/// - `Err(NODEVICE)`: no node is compatible with `D`
/// - any error returned by [`Driver::probe`]
pub fn bind<D: Driver>(nodes: &[DeviceNode]) -> Result<D, ErrorCode> {
    let node = nodes
        .iter()
        .find(|node| node.is_compatible(D::COMPATIBLE))
        .ok_or(ErrorCode::NODEVICE)?;

    let result = D::probe(node);
    if crate::config::CONFIG.debug_probe {
        match &result {
            Ok(_) => debug!(
                "{}: bound to {} at {:#x}",
                D::NAME,
                node.name(),
                node.reg().base()
            ),
            Err(e) => debug!("{}: probe of {} failed: {}", D::NAME, node.name(), e),
        }
    }
    result
}
