// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2025.

//! Fixed-capacity table of one-shot software timers sharing one tick
//! counter.
//!
//! The table holds references to caller-owned [`Timer`] records; it never
//! allocates and never owns timer storage. A record is identified by its
//! address, so arming the same record twice restarts it in place and
//! stopping resolves by scanning for the matching reference.
//!
//! All slot and timer-field mutations happen inside
//! `critical_section::with`, which also excludes the interrupt-context
//! counter increment. Critical sections here are a bounded scan of
//! [`MAX_TIMERS`] slots plus a few cell writes; client callbacks run
//! strictly outside them.

use core::cell::Cell;
use core::ptr;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::config::{MAX_DELAY_TICKS, MAX_TIMERS};
use crate::errorcode::ErrorCode;
use crate::time::{has_expired, TimeoutClient};

/// A caller-owned one-shot timer.
///
/// The record must live at a stable address for as long as it may be
/// armed: the mux holds a reference to it, not a copy. Callers typically
/// embed one `Timer` per timeout they manage and hand the same record to
/// [`TimerMux::arm`] each time they restart it.
pub struct Timer<'a> {
    armed: Cell<bool>,
    deadline: Cell<u32>,
    client: Cell<Option<&'a dyn TimeoutClient>>,
}

impl<'a> Timer<'a> {
    pub const fn new() -> Timer<'a> {
        Timer {
            armed: Cell::new(false),
            deadline: Cell::new(0),
            client: Cell::new(None),
        }
    }

    /// Whether this timer currently occupies a slot.
    ///
    /// Advisory read from task context; a timer is armed from the moment
    /// `arm` returns until it is disarmed or its dispatch pass releases
    /// it, which happens before its client runs.
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

/// Fixed table of software timers driven by one tick counter.
///
/// The mux is an ordinary value: boards decide where it lives and hand out
/// references, and tests build independent instances. Arming, stopping and
/// dispatching are task-context operations; the counter is advanced from
/// interrupt context through
/// [`TickInterrupt`](crate::TickInterrupt).
pub struct TimerMux<'a> {
    slots: [Cell<Option<&'a Timer<'a>>>; MAX_TIMERS],
    ticks: AtomicU32,
}

impl<'a> TimerMux<'a> {
    const EMPTY_SLOT: Cell<Option<&'a Timer<'a>>> = Cell::new(None);

    pub const fn new() -> TimerMux<'a> {
        TimerMux {
            slots: [Self::EMPTY_SLOT; MAX_TIMERS],
            ticks: AtomicU32::new(0),
        }
    }

    /// Current value of the tick counter.
    pub fn now(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Advances the counter by one. Sole writer: the interrupt shim.
    pub(crate) fn advance(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// First slot occupied by `timer`, by reference identity.
    fn find(&self, timer: &Timer<'a>) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.get().map_or(false, |t| ptr::eq(t, timer)))
    }

    /// First empty slot, in index order.
    fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.get().is_none())
    }

    /// Arms `timer` to signal `client` once `delay` ticks have elapsed.
    ///
    /// If `timer` is already armed it is restarted in its existing slot
    /// with the new deadline and client; otherwise the first free slot is
    /// claimed. With no slot available the call fails without touching
    /// any state, the timer's or the table's.
    ///
    /// `delay` is in ticks and may be zero, which makes the timer expire
    /// on the next dispatch pass. Delays above [`MAX_DELAY_TICKS`] are not
    /// expressible.
    pub fn arm(
        &self,
        timer: &'a Timer<'a>,
        client: &'a dyn TimeoutClient,
        delay: u32,
    ) -> Result<(), ErrorCode> {
        debug_assert!(delay <= MAX_DELAY_TICKS);
        critical_section::with(|_| {
            let idx = if timer.armed.get() {
                self.find(timer)
            } else {
                self.find_free()
            };
            match idx {
                Some(idx) => {
                    let deadline = self.now().wrapping_add(delay);
                    self.slots[idx].set(Some(timer));
                    timer.deadline.set(deadline);
                    timer.client.set(Some(client));
                    timer.armed.set(true);
                    Ok(())
                }
                None => Err(ErrorCode::CapacityExceeded),
            }
        })
    }

    /// Stops `timer`, releasing its slot if it holds one.
    ///
    /// Unknown or already-stopped timers are a no-op; repeated calls are
    /// safe. A callback the dispatcher has already committed to cannot be
    /// recalled: if the slot was released by a dispatch pass in progress,
    /// the client still runs.
    pub fn disarm(&self, timer: &Timer<'a>) {
        critical_section::with(|_| {
            if let Some(idx) = self.find(timer) {
                timer.armed.set(false);
                self.slots[idx].set(None);
            }
        });
    }

    /// Fires every armed timer whose deadline has been reached.
    ///
    /// Snapshots the counter once, then scans slots in index order. Each
    /// expired timer is released under the critical section and its client
    /// invoked after the section ends, so the client may rearm (the same
    /// record included) without deadlocking or observing stale state. A
    /// timer rearmed mid-pass into a later slot is scanned like any other
    /// in the remainder of the pass.
    ///
    /// Same-pass firing order is slot-index order, an artifact of
    /// arm/disarm history. It is not deadline order; callers must not read
    /// priority into it.
    pub fn dispatch(&self) {
        let now = self.now();
        for slot in self.slots.iter() {
            let expired = critical_section::with(|_| match slot.get() {
                Some(timer)
                    if timer.armed.get() && has_expired(now, timer.deadline.get()) =>
                {
                    timer.armed.set(false);
                    slot.set(None);
                    timer.client.get()
                }
                _ => None,
            });
            if let Some(client) = expired {
                client.fired();
            }
        }
    }

    /// Whether any slot is occupied.
    ///
    /// Advisory task-context read, taken without a critical section;
    /// callers use it to decide, for example, whether sleeping is safe.
    pub fn any_active(&self) -> bool {
        self.slots.iter().any(|slot| slot.get().is_some())
    }
}
