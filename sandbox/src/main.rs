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

// Rhythmos Sandbox
// Main binary for testing and demos: drives a small animation program
// through a bounded frame loop and logs the animated values.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use rhythmos_core::math::easing;
use rhythmos_core::{tween, Chain, Component, Cycles, Parallel, Repeat, Timer, TimerSet};

const MAX_FRAMES: u32 = 240;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut set = TimerSet::new(16);

    // Animated state the callbacks write into and the loop below reads.
    let x = Rc::new(Cell::new(0.0f32));
    let opacity = Rc::new(Cell::new(0.0f32));

    // Entrance: snap past the resting position and settle, hold, then leave.
    let entrance = {
        let ids = set.ids();
        let (slide, exit) = (Rc::clone(&x), Rc::clone(&x));
        Chain::new(
            ids,
            vec![
                tween(ids, 45, -120.0, 0.0, easing::ease_out_back, move |v| {
                    slide.set(v)
                })
                .with_name("slide-in")
                .boxed(),
                Timer::new(ids, 30).with_name("hold").boxed(),
                tween(ids, 30, 0.0, 160.0, easing::ease_in_cubic, move |v| exit.set(v))
                    .with_name("slide-out")
                    .boxed(),
            ],
        )?
        .with_name("entrance")
    };

    // Fade in while pulsing twice; both run under one parallel group.
    let fade_and_pulse = {
        let ids = set.ids();
        let fade = Rc::clone(&opacity);
        let pulse_target = Rc::clone(&opacity);
        let pulse = Repeat::new(
            ids,
            tween(ids, 20, 1.0, 0.6, easing::ease_in_out_quad, move |v| {
                // The pulse only bites once the fade has passed it.
                pulse_target.set(pulse_target.get().min(v));
            })
            .boxed(),
            Cycles::Finite(2),
        )
        .with_name("pulse");
        Parallel::new(
            ids,
            vec![
                tween(ids, 40, 0.0, 1.0, easing::ease_out_quad, move |v| fade.set(v))
                    .with_name("fade-in")
                    .boxed(),
                pulse.boxed(),
            ],
        )
        .with_name("fade+pulse")
    };

    // When the entrance finishes, schedule an encore from inside the
    // completion callback; the pool admits it on the following frame.
    let spawner = set.spawner();
    let encore_value = Rc::clone(&x);
    let mut encore = Some(
        tween(set.ids(), 20, 160.0, 80.0, easing::ease_out_quad, move |v| {
            encore_value.set(v)
        })
        .with_name("encore")
        .boxed(),
    );
    let entrance = entrance.on_complete(move |id| {
        log::info!("entrance {id} complete, scheduling encore");
        if let Some(encore) = encore.take() {
            spawner.add(encore);
        }
    });

    set.add(entrance.boxed());
    set.add(fade_and_pulse.boxed());

    let mut frame = 0u32;
    while !set.is_idle() {
        frame += 1;
        anyhow::ensure!(frame <= MAX_FRAMES, "animation program stalled");
        set.step();
        if frame % 15 == 0 {
            log::info!(
                "frame {frame:3}: x = {:7.2}, opacity = {:.2}",
                x.get(),
                opacity.get()
            );
        }
    }

    log::info!(
        "program drained after {frame} frames (x = {:.2}, opacity = {:.2})",
        x.get(),
        opacity.get()
    );
    Ok(())
}
