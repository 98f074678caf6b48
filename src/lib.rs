// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Software timer multiplexing over a single periodic hardware tick.
//!
//! A platform configures one hardware timer peripheral to interrupt at a
//! fixed rate. Each interrupt advances a tick counter through
//! [`TickInterrupt::handle_interrupt`]; everything else (arming, stopping
//! and firing timers) happens in task context against a [`TimerMux`], a
//! fixed-capacity table of references to caller-owned [`Timer`] records.
//!
//! The split matters because the two sides run under very different timing
//! guarantees: the interrupt side does one atomic increment and one
//! acknowledge and returns, while the task side takes short critical
//! sections (via the `critical-section` crate) around every slot mutation
//! so that a tick arriving mid-update can never observe or produce a torn
//! state.
//!
//! Timers are one-shot. Expired timers are released before their client is
//! invoked, so a client may rearm its own timer from inside
//! [`time::TimeoutClient::fired`]; periodic behavior is built by callers
//! out of exactly that. There is no deadline ordering: dispatch scans slots
//! in index order, and same-pass expiries fire in index order.
//!
//! ```ignore
//! let mux = TimerMux::new();
//! let timer = Timer::new();
//!
//! mux.arm(&timer, &client, time::ticks_from_ms::<time::Freq100Hz>(70))?;
//! loop {
//!     mux.dispatch();
//!     if !mux.any_active() {
//!         // nothing pending; safe to sleep
//!     }
//! }
//! ```

#![no_std]

pub mod config;
pub mod time;

mod errorcode;
mod mux;
mod tick;

pub use errorcode::ErrorCode;
pub use mux::{Timer, TimerMux};
pub use tick::TickInterrupt;
