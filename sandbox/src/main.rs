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

// Lumen Sandbox
// Wires an event source, its listeners and some geometry data together.

use std::rc::Rc;

use anyhow::Result;
use lumen_core::prelude::*;

pub struct StartData {
    message: &'static str,
}

pub struct SpeedData {
    km_h: f32,
}

lumen_core::event_kinds! {
    /// The car's engine started.
    pub struct Start(StartData) = "start";
    /// The car changed speed.
    pub struct SpeedChanged(SpeedData) = "speedchanged";
}

lumen_core::event_map! {
    /// Everything a car announces.
    pub struct CarEvents { Start, SpeedChanged, Dispose }
}

#[derive(Default)]
struct Car {
    events: EventDispatcher<Car, CarEvents>,
}

impl Car {
    fn start(&self) {
        self.dispatch_event::<Start>(StartData {
            message: "vroom vroom!",
        });
    }

    fn accelerate(&self, km_h: f32) {
        self.dispatch_event::<SpeedChanged>(SpeedData { km_h });
    }
}

impl EventTarget for Car {
    type Events = CarEvents;

    fn dispatcher(&self) -> &EventDispatcher<Self, CarEvents> {
        &self.events
    }
}

impl Disposable for Car {
    fn dispose(&self) {
        self.dispatch_event::<Dispose>(());
    }
}

fn run_car() {
    let car = Car::default();

    let on_start = Listener::new(|event: &Event<'_, Car, StartData>| {
        log::info!("{}: {}", event.kind(), event.message);
    });
    let on_speed = Listener::new(|event: &Event<'_, Car, SpeedData>| {
        log::info!("{}: {:.1} km/h", event.kind(), event.km_h);
    });
    let on_honk = Listener::new(|event: &Event<'_, Car>| {
        log::info!("Unplanned event '{}' heard.", event.kind());
    });

    car.add_event_listener::<Start>(&on_start);
    car.add_event_listener::<SpeedChanged>(&on_speed);
    car.add_event_listener_for("honk", &on_honk);

    car.start();
    car.accelerate(42.0);
    car.dispatch_event_for("honk");

    car.remove_event_listener::<SpeedChanged>(&on_speed);
    car.accelerate(90.0);
    car.dispose();
}

fn run_geometry() -> Result<()> {
    // position (3) + uv (2) per vertex.
    let data = InterleavedBuffer::new(
        vec![
            0.0f32, 0.5, 0.0, 0.5, 1.0, //
            -0.5, -0.5, 0.0, 0.0, 0.0, //
            0.5, -0.5, 0.0, 1.0, 0.0,
        ],
        5,
    )?
    .into_shared();
    let position = InterleavedBufferAttribute::new(Rc::clone(&data), 3, 0, false)?;
    let uv = InterleavedBufferAttribute::new(Rc::clone(&data), 2, 3, false)?;

    position.set_y(0, 0.75)?;
    position.set_needs_update(true);
    log::info!(
        "Triangle: {} vertices, buffer version {}, {} bytes.",
        position.count(),
        data.borrow().version(),
        data.borrow().as_bytes().len()
    );

    let flat_uv = uv.to_buffer_attribute()?;
    log::info!("De-interleaved uv: {:?}", flat_uv.array());

    let mut colors = Float32BufferAttribute::zeroed(9, 3, false)?;
    colors.set_usage(Usage::DynamicDraw);
    colors.on_upload(|| log::debug!("Colors uploaded."));
    colors.set_xyz(0, 1.0, 0.0, 0.0)?;
    colors.set_needs_update(true);
    colors.notify_uploaded();
    log::info!("{colors:?}");

    Ok(())
}

fn run_uniforms() {
    let mut lights = UniformsGroup::new();
    let intensity = Uniform::shared(UniformValue::Float(1.0));
    lights
        .set_name("Lights")
        .set_usage(Usage::DynamicDraw)
        .add(Rc::clone(&intensity))
        .add(Uniform::shared(UniformValue::Vec3([1.0, 1.0, 1.0])));

    let on_dispose = Listener::new(|event: &Event<'_, UniformsGroup>| {
        log::info!(
            "Uniforms group '{}' released {} uniform(s).",
            event.target().name(),
            event.target().uniforms().len()
        );
    });
    lights.add_event_listener::<Dispose>(&on_dispose);

    intensity.set_value(UniformValue::Float(0.25));
    lights.dispose();
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_car();
    run_geometry()?;
    run_uniforms();

    Ok(())
}
