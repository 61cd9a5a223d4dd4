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

//! Frame-count progress for leaf timers.

/// Frame counter and normalized ratio of a running [`Timer`](crate::Timer).
///
/// Progress callbacks receive this record once per step. On running steps
/// `ratio` accumulates in increments of `ratio_change_rate`, starting at
/// `0.0`; on the completing step it is exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Total duration in frames. Zero is valid: such a timer completes on
    /// its first step.
    pub duration: u32,
    /// Frames consumed so far, in `0..=duration`.
    pub count: u32,
    /// Normalized progress in `0.0..=1.0`.
    pub ratio: f32,
    /// Per-frame ratio increment, `1 / max(1, duration)`.
    pub ratio_change_rate: f32,
}

impl Progress {
    pub(crate) fn new(duration: u32) -> Self {
        Self {
            duration,
            count: 0,
            ratio: 0.0,
            ratio_change_rate: 1.0 / duration.max(1) as f32,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.count = 0;
        self.ratio = 0.0;
    }

    /// True when the upcoming step consumes the last remaining frame.
    pub(crate) fn on_final_frame(&self) -> bool {
        self.count + 1 >= self.duration
    }

    pub(crate) fn advance(&mut self) {
        self.count += 1;
        self.ratio += self.ratio_change_rate;
    }

    pub(crate) fn finish(&mut self) {
        self.count = self.duration;
        self.ratio = 1.0;
    }
}
