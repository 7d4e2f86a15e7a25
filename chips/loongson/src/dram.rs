// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System memory declaration.

/// DRAM fitted to ls1c boards, in bytes.
pub const RAM_SIZE: usize = 32 * 1024 * 1024;

/// Report the amount of system memory. The size is fixed, so this cannot
/// fail.
pub fn dram_init() -> usize {
    RAM_SIZE
}
