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

//! The leaf timer component.

use super::id::{ComponentId, IdSource};
use super::progress::Progress;
use super::{Component, ComponentCore};

/// Callback invoked once per running step with the timer's current progress.
pub type ProgressCallback = Box<dyn FnMut(&Progress)>;

/// Terminal component whose completion is governed by a frame-count duration.
///
/// A `Timer` with duration `d >= 1` returns `false` from its first `d - 1`
/// steps and `true` on the `d`-th. Progress callbacks fire on every step;
/// they observe a ratio of exactly `1.0` only on the completing step. A
/// zero-duration timer starts and completes within its very first step,
/// firing `on_start`, `on_progress` and `on_complete` in that single call.
///
/// Configuration is chained at construction:
///
/// ```
/// use rhythmos_core::{Component, IdSource, Timer};
///
/// let ids = IdSource::new();
/// let mut flash = Timer::new(&ids, 12)
///     .with_name("flash")
///     .on_progress(|p| println!("{:.0}%", p.ratio * 100.0));
/// while !flash.step() {}
/// ```
pub struct Timer {
    core: ComponentCore,
    progress: Progress,
    on_progress: Vec<ProgressCallback>,
}

impl Timer {
    /// Creates a timer that completes after `duration` frames.
    pub fn new(ids: &IdSource, duration: u32) -> Self {
        Self {
            core: ComponentCore::new(ids.next_id()),
            progress: Progress::new(duration),
            on_progress: Vec::new(),
        }
    }

    /// Sets the debug label.
    pub fn with_name(mut self, name: &str) -> Self {
        self.core.set_name(name);
        self
    }

    /// Registers a callback fired when the timer starts.
    pub fn on_start(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_start(Box::new(callback));
        self
    }

    /// Registers a callback fired once per step with the current [`Progress`].
    pub fn on_progress(mut self, callback: impl FnMut(&Progress) + 'static) -> Self {
        self.on_progress.push(Box::new(callback));
        self
    }

    /// Registers a callback fired when the timer completes.
    pub fn on_complete(mut self, callback: impl FnMut(ComponentId) + 'static) -> Self {
        self.core.push_on_complete(Box::new(callback));
        self
    }

    /// The timer's current progress record.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    fn fire_progress(&mut self) {
        for callback in &mut self.on_progress {
            callback(&self.progress);
        }
    }
}

impl Component for Timer {
    fn step(&mut self) -> bool {
        if self.core.is_completed() {
            return true;
        }
        self.core.try_start();
        if self.progress.on_final_frame() {
            self.progress.finish();
            self.fire_progress();
            self.core.complete();
            true
        } else {
            self.fire_progress();
            self.progress.advance();
            false
        }
    }

    fn reset(&mut self) {
        self.progress.reset();
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
