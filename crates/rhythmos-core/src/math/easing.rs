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

//! Easing curves mapping a linear ratio to a shaped one.
//!
//! Every curve maps `0.0` to `0.0` and `1.0` to `1.0`; what happens in
//! between is the curve's character. [`ease_out_back`] additionally
//! overshoots past `1.0` before settling, which paired with an unclamped
//! [`lerp`](crate::math::lerp) gives the classic snap-past-then-settle feel.

/// Signature shared by every easing curve.
pub type EasingFn = fn(f32) -> f32;

/// The identity curve.
#[inline]
pub fn linear(ratio: f32) -> f32 {
    ratio
}

/// Accelerates from standstill.
#[inline]
pub fn ease_in_quad(ratio: f32) -> f32 {
    ratio * ratio
}

/// Decelerates into the target.
#[inline]
pub fn ease_out_quad(ratio: f32) -> f32 {
    -ratio * (ratio - 2.0)
}

/// Accelerates, then decelerates.
#[inline]
pub fn ease_in_out_quad(ratio: f32) -> f32 {
    if ratio < 0.5 {
        2.0 * ratio * ratio
    } else {
        let r = ratio - 1.0;
        1.0 - 2.0 * r * r
    }
}

/// Stronger acceleration from standstill.
#[inline]
pub fn ease_in_cubic(ratio: f32) -> f32 {
    ratio * ratio * ratio
}

/// Stronger deceleration into the target.
#[inline]
pub fn ease_out_cubic(ratio: f32) -> f32 {
    let r = ratio - 1.0;
    r * r * r + 1.0
}

/// Cubic acceleration and deceleration.
#[inline]
pub fn ease_in_out_cubic(ratio: f32) -> f32 {
    if ratio < 0.5 {
        4.0 * ratio * ratio * ratio
    } else {
        let r = ratio - 1.0;
        4.0 * r * r * r + 1.0
    }
}

/// Overshoots the target, then settles back onto it.
#[inline]
pub fn ease_out_back(ratio: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let r = ratio - 1.0;
    1.0 + C3 * r * r * r + C1 * r * r
}
