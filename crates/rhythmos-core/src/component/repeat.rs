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

//! The repetition combinator.

use super::id::{ComponentId, IdSource};
use super::{Component, ComponentCore};

/// How many full child cycles a [`Repeat`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycles {
    /// Run the child this many times. `Finite(0)` completes immediately
    /// without ever stepping the child.
    Finite(u32),
    /// Run the child forever; the combinator never completes on its own.
    Infinite,
}

/// Repeats one owned child, resetting it between cycles.
///
/// Each time the child completes, the remaining cycle count is decremented
/// and the child is reset (only the child; the combinator keeps running).
/// With [`Cycles::Infinite`] the child is reset unconditionally and the
/// combinator never completes.
pub struct Repeat {
    core: ComponentCore,
    child: Box<dyn Component>,
    cycles: Cycles,
    remaining: Cycles,
}

impl Repeat {
    /// Creates a combinator running `child` for the given number of cycles.
    pub fn new(ids: &IdSource, child: Box<dyn Component>, cycles: Cycles) -> Self {
        Self {
            core: ComponentCore::new(ids.next_id()),
            child,
            cycles,
            remaining: cycles,
        }
    }

    /// Creates a combinator running `child` forever.
    pub fn forever(ids: &IdSource, child: Box<dyn Component>) -> Self {
        Self::new(ids, child, Cycles::Infinite)
    }

    /// Sets the debug label.
    pub fn with_name(mut self, name: &str) -> Self {
        self.core.set_name(name);
        self
    }

    /// Registers a callback fired when the combinator starts.
    pub fn on_start(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_start(Box::new(callback));
        self
    }

    /// Registers a callback fired when the combinator completes.
    pub fn on_complete(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_complete(Box::new(callback));
        self
    }

    /// Cycles left to run, counting the one in progress.
    pub fn remaining(&self) -> Cycles {
        self.remaining
    }
}

impl Component for Repeat {
    fn step(&mut self) -> bool {
        if self.core.is_completed() {
            return true;
        }
        self.core.try_start();
        if self.remaining == Cycles::Finite(0) {
            self.core.complete();
            return true;
        }
        if !self.child.step() {
            return false;
        }
        match &mut self.remaining {
            Cycles::Infinite => {
                self.child.reset();
                false
            }
            Cycles::Finite(n) => {
                *n -= 1;
                if *n > 0 {
                    self.child.reset();
                    false
                } else {
                    self.core.complete();
                    true
                }
            }
        }
    }

    fn reset(&mut self) {
        self.remaining = self.cycles;
        self.child.reset();
        self.core.reset();
    }

    fn cancel(&mut self) {
        self.core.cancel();
    }

    fn id(&self) -> ComponentId {
        self.core.id()
    }

    fn name(&self) -> &str {
        self.core.name()
    }

    fn set_name(&mut self, name: &str) {
        self.core.set_name(name);
    }

    fn is_started(&self) -> bool {
        self.core.is_started()
    }

    fn is_completed(&self) -> bool {
        self.core.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::timer::Timer;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn finite_repeat_multiplies_the_child_duration() {
        let ids = IdSource::new();
        let starts = Rc::new(Cell::new(0u32));
        let completions = Rc::new(Cell::new(0u32));
        let (s, c) = (Rc::clone(&starts), Rc::clone(&completions));
        let child = Timer::new(&ids, 3)
            .on_start(move |_| s.set(s.get() + 1))
            .on_complete(move |_| c.set(c.get() + 1));
        let mut repeat = Repeat::new(&ids, child.boxed(), Cycles::Finite(4));

        let mut frames = 0;
        loop {
            frames += 1;
            if repeat.step() {
                break;
            }
            assert!(frames < 100, "runaway repeat");
        }
        assert_eq!(frames, 12);
        assert_eq!(starts.get(), 4);
        assert_eq!(completions.get(), 4);
    }

    #[test]
    fn infinite_repeat_never_completes() {
        let ids = IdSource::new();
        let mut repeat = Repeat::forever(&ids, Timer::new(&ids, 1).boxed());
        for _ in 0..10_000 {
            assert!(!repeat.step());
        }
        assert!(!repeat.is_completed());
    }

    #[test]
    fn zero_cycles_completes_without_stepping_the_child() {
        let ids = IdSource::new();
        let child_started = Rc::new(Cell::new(false));
        let flag = Rc::clone(&child_started);
        let child = Timer::new(&ids, 5).on_start(move |_| flag.set(true));
        let own_complete = Rc::new(Cell::new(false));
        let own = Rc::clone(&own_complete);
        let mut repeat = Repeat::new(&ids, child.boxed(), Cycles::Finite(0))
            .on_complete(move |_| own.set(true));

        assert!(repeat.step());
        assert!(!child_started.get());
        assert!(own_complete.get());
    }

    #[test]
    fn reset_restores_the_remaining_cycles() {
        let ids = IdSource::new();
        let mut repeat = Repeat::new(&ids, Timer::new(&ids, 2).boxed(), Cycles::Finite(2));

        // Burn one full cycle and part of the next.
        repeat.step();
        repeat.step();
        repeat.step();
        assert_eq!(repeat.remaining(), Cycles::Finite(1));

        repeat.reset();
        assert_eq!(repeat.remaining(), Cycles::Finite(2));

        let mut frames = 0;
        while !repeat.step() {
            frames += 1;
        }
        assert_eq!(frames + 1, 4);
    }

    #[test]
    fn stays_complete_after_the_final_cycle() {
        let ids = IdSource::new();
        let mut repeat = Repeat::new(&ids, Timer::new(&ids, 1).boxed(), Cycles::Finite(1));
        assert!(repeat.step());
        assert!(repeat.step());
        assert!(repeat.is_completed());
    }
}
