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

//! Groups of uniforms uploaded together as one uniform buffer.

use crate::buffer::Usage;
use crate::disposable::{Disposable, DisposableEvents, Dispose};
use crate::event::{EventDispatcher, EventTarget};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GROUP_ID: AtomicU32 = AtomicU32::new(0);

/// The value held by a [`Uniform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// A single float.
    Float(f32),
    /// A signed integer.
    Int(i32),
    /// An unsigned integer.
    UInt(u32),
    /// A 2-component float vector.
    Vec2([f32; 2]),
    /// A 3-component float vector.
    Vec3([f32; 3]),
    /// A 4-component float vector.
    Vec4([f32; 4]),
    /// A 3x3 float matrix, column-major.
    Mat3([f32; 9]),
    /// A 4x4 float matrix, column-major.
    Mat4([f32; 16]),
}

/// A single shader uniform.
///
/// Uniforms are shared between groups and their owners as `Rc<Uniform>`; the
/// value can be updated through a shared reference.
#[derive(Debug, Clone)]
pub struct Uniform {
    value: Cell<UniformValue>,
}

impl Uniform {
    /// Creates a uniform holding `value`.
    pub fn new(value: UniformValue) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Creates a uniform ready to be added to a [`UniformsGroup`].
    pub fn shared(value: UniformValue) -> Rc<Self> {
        Rc::new(Self::new(value))
    }

    /// The current value.
    pub fn value(&self) -> UniformValue {
        self.value.get()
    }

    /// Replaces the value.
    pub fn set_value(&self, value: UniformValue) {
        self.value.set(value);
    }
}

/// An ordered set of uniforms backed by a single uniform buffer.
///
/// A group is an event target declaring [`DisposableEvents`]: disposing it
/// dispatches [`Dispose`] so the renderer can release the GPU buffer.
#[derive(Debug)]
pub struct UniformsGroup {
    id: u32,
    name: String,
    usage: Usage,
    uniforms: Vec<Rc<Uniform>>,
    events: EventDispatcher<UniformsGroup, DisposableEvents>,
}

impl UniformsGroup {
    /// Creates an empty group with a fresh id.
    pub fn new() -> Self {
        Self {
            id: NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed),
            name: String::new(),
            usage: Usage::default(),
            uniforms: Vec::new(),
            events: EventDispatcher::new(),
        }
    }

    /// The process-wide unique id of this group.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The name of the group, matching the uniform block name in shaders.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of the group.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// The usage hint of the backing buffer.
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Sets the usage hint of the backing buffer.
    pub fn set_usage(&mut self, usage: Usage) -> &mut Self {
        self.usage = usage;
        self
    }

    /// The uniforms of the group, in buffer order.
    pub fn uniforms(&self) -> &[Rc<Uniform>] {
        &self.uniforms
    }

    /// Appends `uniform` to the group.
    pub fn add(&mut self, uniform: Rc<Uniform>) -> &mut Self {
        self.uniforms.push(uniform);
        self
    }

    /// Removes `uniform` from the group, if present.
    pub fn remove(&mut self, uniform: &Rc<Uniform>) -> &mut Self {
        if let Some(index) = self.uniforms.iter().position(|u| Rc::ptr_eq(u, uniform)) {
            self.uniforms.remove(index);
        }
        self
    }

    /// Copies the name, usage and uniforms of `source`.
    ///
    /// The uniforms are copied by value, so the two groups can be updated
    /// independently afterwards.
    pub fn copy(&mut self, source: &Self) -> &mut Self {
        self.name.clone_from(&source.name);
        self.usage = source.usage;
        self.uniforms = source
            .uniforms
            .iter()
            .map(|uniform| Rc::new(Uniform::clone(uniform)))
            .collect();
        self
    }
}

impl Default for UniformsGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for UniformsGroup {
    /// Copies the group under a fresh id and without its listeners.
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        clone.copy(self);
        clone
    }
}

impl EventTarget for UniformsGroup {
    type Events = DisposableEvents;

    fn dispatcher(&self) -> &EventDispatcher<Self, DisposableEvents> {
        &self.events
    }
}

impl Disposable for UniformsGroup {
    fn dispose(&self) {
        log::debug!("Disposing uniforms group {} ('{}').", self.id, self.name);
        self.dispatch_event::<Dispose>(());
    }
}
