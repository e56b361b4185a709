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

//! Integration tests building geometry data the way a loader would.

use anyhow::Result;
use approx::assert_relative_eq;
use lumen_core::buffer::{
    BufferAttribute, Float32BufferAttribute, InstancedBufferAttribute, InterleavedBuffer,
    InterleavedBufferAttribute, InterleavedCloneCache, Uint16BufferAttribute, UpdateRange, Usage,
};
use lumen_core::disposable::Dispose;
use lumen_core::uniforms::{Uniform, UniformValue, UniformsGroup};
use lumen_core::{Disposable, Event, EventTarget, Listener};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn quad_with_indices() -> Result<()> {
    let mut position = Float32BufferAttribute::zeroed(12, 3, false)?;
    position
        .set_xyz(0, -1.0, -1.0, 0.0)?
        .set_xyz(1, 1.0, -1.0, 0.0)?
        .set_xyz(2, 1.0, 1.0, 0.0)?
        .set_xyz(3, -1.0, 1.0, 0.0)?;
    let index = Uint16BufferAttribute::new(vec![0u16, 1, 2, 2, 3, 0], 1, false)?;

    assert_eq!(position.count(), 4);
    assert_eq!(index.count(), 6);
    assert_relative_eq!(position.get_x(3).unwrap_or_default(), -1.0);
    assert_eq!(position.as_bytes().len(), 12 * 4);
    Ok(())
}

#[test]
fn partial_update_of_a_dynamic_attribute() -> Result<()> {
    let mut color = BufferAttribute::new(vec![0u8; 16], 4, true)?;
    color.set_usage(Usage::DynamicDraw);

    color.set_xyzw(2, 255, 128, 0, 255)?;
    color.update_range = UpdateRange {
        offset: 8,
        count: Some(4),
    };
    color.set_needs_update(true);

    let range = color.update_range.resolve(color.array().len());
    assert_eq!(&color.array()[range], &[255, 128, 0, 255]);
    assert_eq!(color.version(), 1);
    assert_eq!(color.usage().code(), 35048);
    Ok(())
}

#[test]
fn interleaved_geometry_round_trip_through_clones() -> Result<()> {
    // Vertex layout: position (3) + normal (3).
    let data = InterleavedBuffer::new(
        vec![
            0.0f32, 0.0, 0.0, 0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
        ],
        6,
    )?
    .into_shared();
    let position = InterleavedBufferAttribute::new(Rc::clone(&data), 3, 0, false)?;
    let normal = InterleavedBufferAttribute::new(Rc::clone(&data), 3, 3, false)?;

    let mut cache = InterleavedCloneCache::new();
    let position_copy = position.clone_with(&mut cache);
    let normal_copy = normal.clone_with(&mut cache);
    normal_copy.set_z(1, -1.0)?;

    assert_eq!(cache.len(), 1);
    assert_eq!(normal.get_z(1), Some(1.0));
    assert_eq!(normal_copy.get_z(1), Some(-1.0));
    assert_eq!(position_copy.get_x(1), Some(1.0));

    let flat = position.to_buffer_attribute()?;
    assert_eq!(flat.array(), &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    Ok(())
}

#[test]
fn instanced_offsets() -> Result<()> {
    let mut offsets = InstancedBufferAttribute::new(vec![0.0f32; 6], 2, false, 1)?;
    offsets.set_xy(0, 1.0, 2.0)?.set_xy(2, 5.0, 6.0)?;
    offsets.set_needs_update(true);

    assert_eq!(offsets.array(), &[1.0, 2.0, 0.0, 0.0, 5.0, 6.0]);
    assert_eq!(offsets.version(), 1);
    Ok(())
}

#[test]
fn disposing_a_uniforms_group_notifies_its_owner() {
    let mut group = UniformsGroup::new();
    group
        .set_name("Material")
        .add(Uniform::shared(UniformValue::Vec4([1.0, 1.0, 1.0, 1.0])))
        .add(Uniform::shared(UniformValue::Float(0.5)));

    let released = Rc::new(Cell::new(0usize));
    let on_dispose = {
        let released = Rc::clone(&released);
        Listener::new(move |event: &Event<'_, UniformsGroup>| {
            released.set(released.get() + event.target().uniforms().len());
        })
    };
    group.add_event_listener::<Dispose>(&on_dispose);

    group.dispose();
    group.remove_event_listener::<Dispose>(&on_dispose);
    group.dispose();

    assert_eq!(released.get(), 2);
}
