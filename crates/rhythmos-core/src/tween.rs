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

//! Value interpolation over a [`Timer`].
//!
//! A tween is not a new component variant: it is a leaf timer whose
//! progress callback eases the ratio and lerps a value into a sink closure.
//! Because it *is* a timer, a tween can sit in a chain, run in a parallel
//! group, or loop forever like any other component.

use crate::component::id::IdSource;
use crate::component::timer::Timer;
use crate::math::easing::EasingFn;
use crate::math::lerp;

/// Builds a timer that drives `sink` from `from` to `to` over `duration`
/// frames, shaping the motion with `easing`.
///
/// The sink receives exactly `to` on the completing frame (easing curves
/// map a ratio of `1.0` to `1.0`).
///
/// # Examples
///
/// ```
/// use rhythmos_core::{tween, Component, IdSource};
/// use rhythmos_core::math::easing;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ids = IdSource::new();
/// let opacity = Rc::new(Cell::new(1.0f32));
/// let sink = Rc::clone(&opacity);
/// let mut fade_out = tween(&ids, 24, 1.0, 0.0, easing::ease_in_quad, move |v| sink.set(v));
/// while !fade_out.step() {}
/// assert_eq!(opacity.get(), 0.0);
/// ```
pub fn tween<F>(
    ids: &IdSource,
    duration: u32,
    from: f32,
    to: f32,
    easing: EasingFn,
    mut sink: F,
) -> Timer
where
    F: FnMut(f32) + 'static,
{
    Timer::new(ids, duration).on_progress(move |progress| {
        sink(lerp(from, to, easing(progress.ratio)));
    })
}
