// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for invoking operations.

use core::fmt;

/// Standard errors returned by drivers and HIL operations.
///
/// The numeric values are stable so that a failing operation can be reported
/// to the boot environment as a plain integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 1,
    /// An invalid parameter was passed, or a register window could not be
    /// mapped
    INVAL = 6,
    /// A buffer is too short for the requested operation
    SIZE = 7,
    /// No device node matches the driver
    NODEVICE = 11,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::FAIL => "FAIL",
            ErrorCode::INVAL => "INVAL",
            ErrorCode::SIZE => "SIZE",
            ErrorCode::NODEVICE => "NODEVICE",
        };
        f.write_str(name)
    }
}
