// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Support for in-firmware debugging.
//!
//! The boot environment has no console driver of its own. A board registers
//! whatever byte sink it has (usually a polled UART) with
//! [`set_debug_writer`], after which [`debug!`](crate::debug!) formats its
//! arguments straight into that sink:
//!
//! ```rust,ignore
//! debug!("spi: bound at {:#x}", base);
//! ```
//!
//! Until a writer is registered, debug output is silently dropped. Output is
//! synchronous: `debug!` returns once every byte has been handed to the sink.

use core::cell::Cell;
use core::fmt::{self, Arguments, Write};

/// A byte sink that debug output is written to.
pub trait IoWrite {
    /// Write as many bytes of `buf` as the sink accepts and return how many
    /// were taken. Returning 0 aborts the current message.
    fn write(&self, buf: &[u8]) -> usize;
}

struct WriterSlot(Cell<Option<&'static dyn IoWrite>>);

// The boot environment runs exactly one thread of execution.
unsafe impl Sync for WriterSlot {}

static DEBUG_WRITER: WriterSlot = WriterSlot(Cell::new(None));

/// Register the sink used by [`debug!`](crate::debug!).
///
/// # Safety
///
/// The caller must guarantee that no other thread of execution is using the
/// debug facility while the writer is replaced.
pub unsafe fn set_debug_writer(writer: &'static dyn IoWrite) {
    DEBUG_WRITER.0.set(Some(writer));
}

/// Adapts an [`IoWrite`] sink to [`core::fmt::Write`].
pub struct DebugWriter<'a> {
    sink: &'a dyn IoWrite,
}

impl<'a> DebugWriter<'a> {
    pub fn new(sink: &'a dyn IoWrite) -> Self {
        DebugWriter { sink }
    }
}

impl Write for DebugWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut remaining = s.as_bytes();
        while !remaining.is_empty() {
            let written = self.sink.write(remaining);
            if written == 0 {
                return Err(fmt::Error);
            }
            remaining = remaining.get(written..).unwrap_or(&[]);
        }
        Ok(())
    }
}

/// Format `args` followed by a line ending into `sink`.
pub fn write_line(sink: &dyn IoWrite, args: Arguments) -> fmt::Result {
    let mut writer = DebugWriter::new(sink);
    writer.write_fmt(args)?;
    writer.write_str("\r\n")
}

/// Entry point of the [`debug!`](crate::debug!) macro.
pub fn debug_fmt(args: Arguments) {
    if let Some(sink) = DEBUG_WRITER.0.get() {
        // A sink that stops accepting bytes just truncates the message.
        let _ = write_line(sink, args);
    }
}

/// In-firmware debugging, accepts the same arguments as `println!`.
#[macro_export]
macro_rules! debug {
    () => ({
        $crate::debug::debug_fmt(format_args!(""))
    });
    ($($arg:tt)+) => ({
        $crate::debug::debug_fmt(format_args!($($arg)+))
    });
}
