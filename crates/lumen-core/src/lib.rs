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

//! # Lumen Core
//!
//! Foundational crate of the Lumen 3D library: strongly-typed event dispatch
//! for scene objects and the CPU-side buffer attributes they carry.

#![warn(missing_docs)]

pub mod buffer;
pub mod disposable;
pub mod event;
pub mod uniforms;

pub use disposable::Disposable;
pub use event::{Event, EventDispatcher, EventTarget, Listener};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::buffer::{
        BufferAttribute, BufferElement, BufferError, Float32BufferAttribute,
        InstancedBufferAttribute, InterleavedBuffer, InterleavedBufferAttribute, Usage,
    };
    pub use crate::disposable::{Disposable, DisposableEvents, Dispose};
    pub use crate::event::{
        Declares, Event, EventDispatcher, EventKind, EventMap, EventTarget, KindListener, Listener,
    };
    pub use crate::uniforms::{Uniform, UniformValue, UniformsGroup};
}
