// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Compile-time configuration of the timer table.

/// Number of slots in a [`TimerMux`](crate::TimerMux).
///
/// The table is statically sized; arming an unarmed timer while all slots
/// are occupied fails with
/// [`ErrorCode::CapacityExceeded`](crate::ErrorCode::CapacityExceeded).
pub const MAX_TIMERS: usize = 8;

/// Largest delay, in ticks, a timer can express.
///
/// Expiry is decided by a wrapping signed-difference comparison on the
/// 32-bit tick counter, so a deadline more than half the counter range in
/// the future is indistinguishable from one already in the past.
pub const MAX_DELAY_TICKS: u32 = (1 << 31) - 1;
