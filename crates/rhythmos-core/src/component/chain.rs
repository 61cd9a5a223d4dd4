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

//! The sequential composite.

use super::id::{ComponentId, IdSource};
use super::{Component, ComponentCore};
use crate::error::ConfigError;

/// Sequential composite: runs its children one at a time, in list order.
///
/// On the step where the current child completes, the cursor advances; the
/// next child is first stepped on the following frame. The chain itself
/// completes on the same step its last child does. Children are moved in at
/// construction and the list is fixed thereafter.
pub struct Chain {
    core: ComponentCore,
    children: Vec<Box<dyn Component>>,
    index: usize,
}

impl Chain {
    /// Creates a chain over `children`, which must be non-empty.
    ///
    /// ## Errors
    /// [`ConfigError::EmptyChain`] if `children` is empty.
    pub fn new(ids: &IdSource, children: Vec<Box<dyn Component>>) -> Result<Self, ConfigError> {
        if children.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(Self {
            core: ComponentCore::new(ids.next_id()),
            children,
            index: 0,
        })
    }

    /// Sets the debug label.
    pub fn with_name(mut self, name: &str) -> Self {
        self.core.set_name(name);
        self
    }

    /// Registers a callback fired when the chain starts.
    pub fn on_start(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_start(Box::new(callback));
        self
    }

    /// Registers a callback fired when the chain completes.
    pub fn on_complete(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_complete(Box::new(callback));
        self
    }

    /// Index of the currently active child.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of children in the chain.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; an empty chain is unconstructible.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Component for Chain {
    fn step(&mut self) -> bool {
        if self.core.is_completed() {
            return true;
        }
        self.core.try_start();
        if !self.children[self.index].step() {
            return false;
        }
        if self.index + 1 < self.children.len() {
            self.index += 1;
            false
        } else {
            self.core.complete();
            true
        }
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
        self.index = 0;
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
