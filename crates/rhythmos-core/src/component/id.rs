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

//! Component identity and the ID generator.
//!
//! Identity exists for debugging and for callbacks that want to know which
//! component fired them. IDs are handed out by an explicit [`IdSource`]
//! rather than hidden module-level state, so tests and embedders control the
//! generator's lifecycle; uniqueness holds per source.

use std::cell::Cell;
use std::fmt;

/// Unique identifier for a component, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Returns the raw counter value behind this ID.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out [`ComponentId`]s from a monotonically increasing counter.
///
/// A [`TimerSet`](crate::TimerSet) owns one and exposes it via
/// [`ids()`](crate::TimerSet::ids); standalone sources are handy in tests.
/// The counter starts at zero when the source is created and is never
/// reused within that source.
#[derive(Debug, Default)]
pub struct IdSource {
    next: Cell<u64>,
}

impl IdSource {
    /// Creates a fresh source whose first ID is `#0`.
    pub fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Reserves and returns the next ID.
    pub fn next_id(&self) -> ComponentId {
        let id = self.next.get();
        self.next.set(id + 1);
        ComponentId(id)
    }
}
