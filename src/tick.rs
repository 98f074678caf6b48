// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Interrupt-context entry point for the periodic tick.

use crate::mux::TimerMux;
use crate::time::TickSource;

/// Binds a [`TimerMux`] to the hardware source of its tick.
///
/// The platform constructs one of these next to the mux and calls
/// [`handle_interrupt`](TickInterrupt::handle_interrupt) from the source's
/// interrupt vector, once per firing. The source is assumed not to
/// re-enter before the handler returns.
pub struct TickInterrupt<'a, S: TickSource> {
    mux: &'a TimerMux<'a>,
    source: &'a S,
}

impl<'a, S: TickSource> TickInterrupt<'a, S> {
    pub const fn new(mux: &'a TimerMux<'a>, source: &'a S) -> TickInterrupt<'a, S> {
        TickInterrupt { mux, source }
    }

    /// Advances the tick counter by one and acknowledges the source.
    ///
    /// This is the counter's only writer. It runs in bounded, short time
    /// and calls nothing else in the crate, so interrupt latency stays
    /// predictable; expiry work happens later, in task context, in
    /// [`TimerMux::dispatch`].
    pub fn handle_interrupt(&self) {
        self.mux.advance();
        self.source.clear_pending();
    }
}
