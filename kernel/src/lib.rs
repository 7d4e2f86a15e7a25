// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Core support crate for the Loongson boot-stage drivers.
//!
//! The kernel crate holds the Hardware Interface Layer (HIL) definitions that
//! chip drivers implement and capsules consume, the device binding surface
//! the boot environment uses to hand register windows to drivers, and shared
//! utilities such as [`StaticRef`](utilities::StaticRef) and the register
//! interface re-exports.
//!
//! The environment is single-threaded and cooperative: every operation runs
//! to completion before the next one is issued, so no type in this crate
//! performs locking.

#![warn(unreachable_pub)]
#![no_std]

pub mod config;
#[macro_use]
pub mod debug;
pub mod device;
pub mod errorcode;
pub mod hil;
pub mod platform;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
