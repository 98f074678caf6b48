// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Tick arithmetic and the interfaces a platform implements to drive the
//! timer table.
//!
//! The crate's only unit of time is the tick; its real-time resolution is
//! whatever rate the platform programmed into its tick peripheral. The
//! [`Frequency`] marker types let callers convert portably between
//! milliseconds and ticks without the core ever learning about wall-clock
//! time.

/// Trait to represent clock frequency in Hz.
///
/// Used as an associated type on [`TickSource`] so clients can portably
/// convert real-time values to native ticks.
pub trait Frequency {
    /// Returns frequency in Hz.
    fn frequency() -> u32;
}

/// 100Hz `Frequency` (10 ms tick).
#[derive(Debug)]
pub struct Freq100Hz;
impl Frequency for Freq100Hz {
    fn frequency() -> u32 {
        100
    }
}

/// 1KHz `Frequency` (1 ms tick).
#[derive(Debug)]
pub struct Freq1KHz;
impl Frequency for Freq1KHz {
    fn frequency() -> u32 {
        1000
    }
}

/// Converts a millisecond interval to ticks at frequency `F`.
///
/// Truncates: intervals shorter than one tick period convert to zero
/// ticks, which arms a timer that expires on the next dispatch pass.
pub fn ticks_from_ms<F: Frequency>(ms: u32) -> u32 {
    ms * F::frequency() / 1000
}

/// A periodic hardware interrupt source.
///
/// Implemented by the platform for whichever peripheral generates the
/// tick. Programming the peripheral (divider, period register, interrupt
/// priority) is entirely the implementer's business; the core only ever
/// asks it to acknowledge the interrupt it just delivered.
pub trait TickSource {
    /// Rate at which the source fires.
    type Frequency: Frequency;

    /// Acknowledge the pending interrupt at the source.
    ///
    /// Called from interrupt context once per tick, after the counter has
    /// advanced. Must complete in bounded, short time.
    fn clear_pending(&self);
}

/// A client of [`TimerMux`](crate::TimerMux), notified when its timer
/// expires.
pub trait TimeoutClient {
    /// Signaled from [`TimerMux::dispatch`](crate::TimerMux::dispatch)
    /// once the timer's deadline has been reached.
    ///
    /// Runs synchronously in task context with no critical section held.
    /// The timer has already been released, so rearming it (or any other
    /// timer) from here is legal. A slow implementation delays every
    /// later-indexed slot in the same pass; keep it short and
    /// non-blocking.
    fn fired(&self);
}

/// Whether `deadline` has been reached or passed at tick `now`.
///
/// Wrapping comparison: the deadline is expired when it lies at or behind
/// `now` in the counter's modular order. Correct for deadlines up to
/// [`MAX_DELAY_TICKS`](crate::config::MAX_DELAY_TICKS) ahead of the tick
/// they were computed from, including across counter wraparound.
pub(crate) fn has_expired(now: u32, deadline: u32) -> bool {
    now.wrapping_sub(deadline) as i32 >= 0
}
