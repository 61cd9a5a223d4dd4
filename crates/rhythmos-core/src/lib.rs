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

//! # Rhythmos Core
//!
//! Frame-stepped, composable animation sequencing.
//!
//! The crate is organized around a single contract: a [`Component`] is any
//! unit of scheduled work that can be driven one frame at a time with
//! [`Component::step`] and re-armed with [`Component::reset`]. Four variants
//! cover the sequencing vocabulary:
//!
//! - [`Timer`] — leaf component that completes after a fixed number of frames,
//!   reporting [`Progress`] to its callbacks each step.
//! - [`Chain`] — runs its children one at a time, in order.
//! - [`Parallel`] — steps all of its children every frame, dropping each as it
//!   finishes.
//! - [`Repeat`] — runs one child for a finite or infinite number of cycles,
//!   resetting it between cycles.
//!
//! A [`TimerSet`] owns the currently active top-level components and is the
//! piece a host frame loop talks to:
//!
//! ```text
//!   frame loop ──► TimerSet::step()
//!                      │  merge inbox ──► running
//!                      ▼
//!                  step every running component (composites recurse)
//!                      │
//!                      ▼
//!                  evict the completed ones
//! ```
//!
//! Components added while a step is in progress (typically from an
//! `on_complete` callback scheduling follow-up work through a [`Spawner`])
//! land in the set's inbox and are first stepped on the *next* call, never
//! the current one.
//!
//! There is no wall clock anywhere: a "frame" is whatever one call to
//! [`TimerSet::step`] means to the caller. Everything is single-threaded and
//! cooperative; the only suspension point is the return from `step()`.
//!
//! ## Example
//!
//! ```
//! use rhythmos_core::{tween, Chain, Component, TimerSet};
//! use rhythmos_core::math::easing;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut set = TimerSet::new(8);
//! let x = Rc::new(Cell::new(0.0f32));
//!
//! let sink = Rc::clone(&x);
//! let slide = tween(set.ids(), 30, 0.0, 100.0, easing::ease_out_quad, move |v| {
//!     sink.set(v)
//! });
//! let hold = rhythmos_core::Timer::new(set.ids(), 10);
//! let chain = Chain::new(set.ids(), vec![slide.boxed(), hold.boxed()]).unwrap();
//! set.add(chain.boxed());
//!
//! for _ in 0..40 {
//!     set.step();
//! }
//! assert!(set.is_idle());
//! assert_eq!(x.get(), 100.0);
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod math;
pub mod schedule;
pub mod tween;

pub use component::chain::Chain;
pub use component::id::{ComponentId, IdSource};
pub use component::parallel::Parallel;
pub use component::progress::Progress;
pub use component::repeat::{Cycles, Repeat};
pub use component::timer::Timer;
pub use component::Component;
pub use error::ConfigError;
pub use schedule::{Spawner, TimerSet};
pub use tween::tween;
