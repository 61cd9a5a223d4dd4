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

//! # Component Abstraction
//!
//! The unified contract for every steppable unit of scheduled work.
//!
//! A **Component** is driven one frame at a time by an external caller: each
//! [`step`](Component::step) performs one unit of work and reports whether
//! the component has completed. Completion is sticky (further steps are
//! no-ops that keep returning `true` without re-firing callbacks), and
//! [`reset`](Component::reset) re-arms the component for another run while
//! preserving its configuration (duration, children, cycle count).
//!
//! Four variants implement the contract:
//!
//! 1. [`Timer`](crate::Timer) — terminal component governed by a frame-count
//!    duration.
//! 2. [`Chain`](crate::Chain) — sequential composite.
//! 3. [`Parallel`](crate::Parallel) — concurrent composite.
//! 4. [`Repeat`](crate::Repeat) — repetition combinator.
//!
//! Composites own their children as `Box<dyn Component>`; a child belongs to
//! exactly one parent, and there is no API for re-parenting or for mutating
//! a child list after construction. That exclusivity is what makes the
//! recursive stepping sound without any runtime checks.

use std::fmt;

pub mod chain;
pub mod id;
pub mod parallel;
pub mod progress;
pub mod repeat;
pub mod timer;

use id::ComponentId;

/// Callback invoked on a lifecycle transition, receiving the id of the
/// component that transitioned.
pub type LifecycleCallback = Box<dyn FnMut(ComponentId)>;

/// The default debug label of a freshly constructed component.
pub const DEFAULT_NAME: &str = "no name";

/// A steppable, resettable unit of scheduled work.
pub trait Component {
    /// Performs one frame of work and returns the component's completion
    /// state afterwards.
    ///
    /// Once a component has completed, further calls are no-ops that keep
    /// returning `true`; no callback is ever fired twice for the same
    /// start/complete cycle.
    fn step(&mut self) -> bool;

    /// Re-arms the component for reuse: clears started/completed state and
    /// any variant-specific progress, recursively resetting children.
    /// Configuration is preserved.
    fn reset(&mut self);

    /// Marks the component completed **without** firing its `on_complete`
    /// callbacks. The next `step()` returns `true` and an owning pool or
    /// composite treats it as finished.
    fn cancel(&mut self);

    /// The identity assigned at construction.
    fn id(&self) -> ComponentId;

    /// The debug label.
    fn name(&self) -> &str;

    /// Replaces the debug label.
    fn set_name(&mut self, name: &str);

    /// Whether the component has started (fired its `on_start` callbacks).
    fn is_started(&self) -> bool;

    /// Whether the component has completed. Implies [`is_started`](Component::is_started).
    fn is_completed(&self) -> bool;

    /// Moves the component onto the heap as a trait object, ready to be
    /// handed to a composite or a [`TimerSet`](crate::TimerSet).
    fn boxed(self) -> Box<dyn Component>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("started", &self.is_started())
            .field("completed", &self.is_completed())
            .finish()
    }
}

/// State shared by every component variant: identity, label, lifecycle
/// flags, and the start/complete callback lists.
///
/// Variants embed one of these instead of inheriting; the trait methods
/// delegate to it.
pub(crate) struct ComponentCore {
    id: ComponentId,
    name: String,
    started: bool,
    completed: bool,
    on_start: Vec<LifecycleCallback>,
    on_complete: Vec<LifecycleCallback>,
}

impl ComponentCore {
    pub(crate) fn new(id: ComponentId) -> Self {
        Self {
            id,
            name: DEFAULT_NAME.to_string(),
            started: false,
            completed: false,
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    pub(crate) fn id(&self) -> ComponentId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn push_on_start(&mut self, callback: LifecycleCallback) {
        self.on_start.push(callback);
    }

    pub(crate) fn push_on_complete(&mut self, callback: LifecycleCallback) {
        self.on_complete.push(callback);
    }

    /// Fires the `on_start` callbacks exactly once per cycle.
    pub(crate) fn try_start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        log::trace!("component '{}' ({}) started", self.name, self.id);
        for callback in &mut self.on_start {
            callback(self.id);
        }
    }

    /// Fires the `on_complete` callbacks and marks the component completed.
    pub(crate) fn complete(&mut self) {
        log::trace!("component '{}' ({}) completed", self.name, self.id);
        for callback in &mut self.on_complete {
            callback(self.id);
        }
        self.completed = true;
    }

    /// Completion without callbacks; keeps the `completed ⇒ started` invariant.
    pub(crate) fn cancel(&mut self) {
        self.started = true;
        self.completed = true;
    }

    pub(crate) fn reset(&mut self) {
        self.started = false;
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::id::IdSource;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn try_start_fires_once_per_cycle() {
        let ids = IdSource::new();
        let mut core = ComponentCore::new(ids.next_id());
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        core.push_on_start(Box::new(move |_| counter.set(counter.get() + 1)));

        core.try_start();
        core.try_start();
        assert_eq!(fired.get(), 1);

        core.reset();
        core.try_start();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn callbacks_receive_the_component_id() {
        let ids = IdSource::new();
        let id = ids.next_id();
        let mut core = ComponentCore::new(id);
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        core.push_on_complete(Box::new(move |fired_id| sink.set(Some(fired_id))));

        core.try_start();
        core.complete();
        assert_eq!(seen.get(), Some(id));
    }

    #[test]
    fn cancel_completes_without_callbacks() {
        let ids = IdSource::new();
        let mut core = ComponentCore::new(ids.next_id());
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        core.push_on_complete(Box::new(move |_| flag.set(true)));

        core.cancel();
        assert!(core.is_started());
        assert!(core.is_completed());
        assert!(!fired.get());
    }

    #[test]
    fn default_name_matches_contract() {
        let ids = IdSource::new();
        let mut core = ComponentCore::new(ids.next_id());
        assert_eq!(core.name(), "no name");
        core.set_name("fade-in");
        assert_eq!(core.name(), "fade-in");
    }
}
