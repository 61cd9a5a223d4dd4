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

//! The concurrent composite.

use super::id::{ComponentId, IdSource};
use super::{Component, ComponentCore};

/// Concurrent composite: steps all of its children every frame, dropping
/// each one as it finishes, and completes once none remain.
///
/// The original children are kept for [`reset`](Component::reset); the set
/// of still-running children is tracked separately as indices into that
/// list, so a reset refills it without reconstructing anything. Siblings
/// carry no ordering guarantee among themselves; removal may reorder.
///
/// A parallel group over zero children is valid and completes on its first
/// step.
pub struct Parallel {
    core: ComponentCore,
    children: Vec<Box<dyn Component>>,
    running: Vec<usize>,
}

impl Parallel {
    /// Creates a parallel group over `children`.
    pub fn new(ids: &IdSource, children: Vec<Box<dyn Component>>) -> Self {
        let running = (0..children.len()).collect();
        Self {
            core: ComponentCore::new(ids.next_id()),
            children,
            running,
        }
    }

    /// Sets the debug label.
    pub fn with_name(mut self, name: &str) -> Self {
        self.core.set_name(name);
        self
    }

    /// Registers a callback fired when the group starts.
    pub fn on_start(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_start(Box::new(callback));
        self
    }

    /// Registers a callback fired when the group completes.
    pub fn on_complete(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_complete(Box::new(callback));
        self
    }

    /// Number of children still running.
    pub fn running_len(&self) -> usize {
        self.running.len()
    }
}

impl Component for Parallel {
    fn step(&mut self) -> bool {
        if self.core.is_completed() {
            return true;
        }
        self.core.try_start();
        let children = &mut self.children;
        self.running.retain(|&index| !children[index].step());
        if self.running.is_empty() {
            self.core.complete();
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.running.clear();
        self.running.extend(0..self.children.len());
        for child in &mut self.children {
            child.reset();
        }
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
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn completes_with_the_slowest_child() {
        let ids = IdSource::new();
        let mut group = Parallel::new(
            &ids,
            vec![Timer::new(&ids, 2).boxed(), Timer::new(&ids, 5).boxed()],
        );
        for frame in 1..5 {
            assert!(!group.step(), "frame {frame} should still be running");
        }
        assert!(group.step());
    }

    #[test]
    fn fast_children_finish_while_the_group_runs() {
        let ids = IdSource::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut group = Parallel::new(
            &ids,
            vec![
                Timer::new(&ids, 2)
                    .on_complete(move |_| sink.borrow_mut().push("fast"))
                    .boxed(),
                Timer::new(&ids, 5).boxed(),
            ],
        );

        group.step();
        group.step();
        assert_eq!(*log.borrow(), vec!["fast"]);
        assert!(!group.is_completed());
        assert_eq!(group.running_len(), 1);
    }

    #[test]
    fn zero_children_completes_immediately() {
        let ids = IdSource::new();
        let mut group = Parallel::new(&ids, Vec::new());
        assert!(group.step());
        assert!(group.is_started());
        assert!(group.is_completed());
    }

    #[test]
    fn reset_refills_the_running_set() {
        let ids = IdSource::new();
        let mut group = Parallel::new(
            &ids,
            vec![Timer::new(&ids, 1).boxed(), Timer::new(&ids, 3).boxed()],
        );
        group.step();
        assert_eq!(group.running_len(), 1);

        group.reset();
        assert_eq!(group.running_len(), 2);

        let mut frames = 0;
        while !group.step() {
            frames += 1;
        }
        assert_eq!(frames + 1, 3);
    }

    #[test]
    fn stepping_after_completion_stays_complete() {
        let ids = IdSource::new();
        let mut group = Parallel::new(&ids, vec![Timer::new(&ids, 1).boxed()]);
        assert!(group.step());
        assert!(group.step());
        assert_eq!(group.running_len(), 0);
    }
}
