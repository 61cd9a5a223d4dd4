// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # The Top-Level Pool
//!
//! [`TimerSet`] owns every currently active top-level component and is the
//! only thing a host frame loop needs to talk to. It is a container, not a
//! [`Component`](crate::Component): it has no lifecycle of its own.
//!
//! ## Deferred admission
//!
//! New components never enter the running list directly. [`TimerSet::add`]
//! and [`Spawner::add`] append to an *inbox*, which [`TimerSet::step`]
//! drains into the running list before stepping anything. A component added
//! while a step is in progress (the common case being an `on_complete`
//! callback scheduling a follow-up animation) therefore cannot corrupt the
//! in-progress iteration, cannot be stepped twice, and cannot be skipped:
//! it runs starting from the *next* step, never the current one.
//!
//! ```
//! use rhythmos_core::{Component, Timer, TimerSet};
//!
//! let mut set = TimerSet::new(16);
//! let spawner = set.spawner();
//! let ids = set.ids();
//! let followup = Timer::new(ids, 5).with_name("follow-up");
//! let mut followup = Some(followup);
//! set.add(
//!     Timer::new(ids, 3)
//!         .on_complete(move |_| spawner.add(followup.take().unwrap().boxed()))
//!         .boxed(),
//! );
//!
//! for _ in 0..8 {
//!     set.step();
//! }
//! assert!(set.is_idle());
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::component::id::IdSource;
use crate::component::Component;

type Inbox = Rc<RefCell<Vec<Box<dyn Component>>>>;

/// Pool of active top-level components, stepped once per frame by the host.
pub struct TimerSet {
    running: Vec<Box<dyn Component>>,
    inbox: Inbox,
    ids: IdSource,
}

impl TimerSet {
    /// Creates a pool. `capacity` is an advisory preallocation hint, not an
    /// enforced upper bound.
    pub fn new(capacity: usize) -> Self {
        log::debug!("TimerSet created (capacity hint {capacity})");
        Self {
            running: Vec::with_capacity(capacity),
            inbox: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
            ids: IdSource::new(),
        }
    }

    /// The ID generator owned by this pool. Components built against it get
    /// IDs unique within the pool's lifetime.
    pub fn ids(&self) -> &IdSource {
        &self.ids
    }

    /// Schedules a component. It joins the running list at the start of the
    /// next [`step`](TimerSet::step) and is first stepped there.
    pub fn add(&self, component: Box<dyn Component>) {
        log::trace!(
            "scheduling component '{}' ({})",
            component.name(),
            component.id()
        );
        self.inbox.borrow_mut().push(component);
    }

    /// Returns a clonable handle that schedules into this pool. Callbacks
    /// capture one of these to register follow-up work mid-step.
    pub fn spawner(&self) -> Spawner {
        Spawner {
            inbox: Rc::downgrade(&self.inbox),
        }
    }

    /// Runs one frame: merges the inbox into the running list, steps every
    /// running component, and evicts the completed ones.
    pub fn step(&mut self) {
        {
            let mut inbox = self.inbox.borrow_mut();
            if !inbox.is_empty() {
                log::trace!("admitting {} new component(s)", inbox.len());
                self.running.append(&mut inbox);
            }
        }
        // The inbox borrow is released above; callbacks fired inside child
        // steps are free to push into it.
        self.running.retain_mut(|component| {
            let done = component.step();
            if done {
                log::trace!(
                    "evicting completed component '{}' ({})",
                    component.name(),
                    component.id()
                );
            }
            !done
        });
    }

    /// Discards everything, running and pending, without resetting anything
    /// or firing any callback.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing pool ({} running, {} pending)",
            self.running.len(),
            self.inbox.borrow().len()
        );
        self.running.clear();
        self.inbox.borrow_mut().clear();
    }

    /// Number of components currently in the running list.
    pub fn running_len(&self) -> usize {
        self.running.len()
    }

    /// Number of components waiting in the inbox for the next step.
    pub fn pending_len(&self) -> usize {
        self.inbox.borrow().len()
    }

    /// True when nothing is running and nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty() && self.inbox.borrow().is_empty()
    }
}

/// Clonable handle that schedules components into a [`TimerSet`]'s inbox.
///
/// Holds a weak reference: if the pool has been dropped, scheduling is a
/// logged no-op rather than an error.
#[derive(Clone)]
pub struct Spawner {
    inbox: Weak<RefCell<Vec<Box<dyn Component>>>>,
}

impl Spawner {
    /// Schedules a component into the owning pool, to be first stepped on
    /// the pool's next `step()`.
    pub fn add(&self, component: Box<dyn Component>) {
        match self.inbox.upgrade() {
            Some(inbox) => {
                log::trace!(
                    "scheduling component '{}' ({}) via spawner",
                    component.name(),
                    component.id()
                );
                inbox.borrow_mut().push(component);
            }
            None => {
                log::warn!(
                    "spawner target dropped; discarding component '{}' ({})",
                    component.name(),
                    component.id()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::timer::Timer;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn added_components_wait_for_the_next_step() {
        let mut set = TimerSet::new(4);
        set.add(Timer::new(set.ids(), 2).boxed());
        assert_eq!(set.pending_len(), 1);
        assert_eq!(set.running_len(), 0);

        set.step();
        assert_eq!(set.pending_len(), 0);
        assert_eq!(set.running_len(), 1);
    }

    #[test]
    fn completed_components_are_evicted() {
        let mut set = TimerSet::new(4);
        set.add(Timer::new(set.ids(), 1).boxed());
        set.step();
        assert!(set.is_idle());
    }

    #[test]
    fn clear_discards_without_firing_callbacks() {
        let mut set = TimerSet::new(4);
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        set.add(
            Timer::new(set.ids(), 3)
                .on_complete(move |_| flag.set(true))
                .boxed(),
        );
        set.step();
        set.add(Timer::new(set.ids(), 3).boxed());

        set.clear();
        assert!(set.is_idle());
        for _ in 0..10 {
            set.step();
        }
        assert!(!fired.get());
    }

    #[test]
    fn spawner_outliving_the_pool_is_a_noop() {
        let set = TimerSet::new(1);
        let orphan = Timer::new(set.ids(), 1).boxed();
        let spawner = set.spawner();
        drop(set);
        spawner.add(orphan); // must not panic
    }

    #[test]
    fn capacity_is_advisory_only() {
        let mut set = TimerSet::new(1);
        for _ in 0..8 {
            set.add(Timer::new(set.ids(), 2).boxed());
        }
        set.step();
        assert_eq!(set.running_len(), 8);
    }
}
