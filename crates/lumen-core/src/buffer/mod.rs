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

//! CPU-side storage for vertex and instance data.
//!
//! These containers hold the data of a geometry before it reaches the GPU:
//! flat per-vertex [`BufferAttribute`]s, per-instance
//! [`InstancedBufferAttribute`]s, and [`InterleavedBuffer`]s read through
//! [`InterleavedBufferAttribute`]s. They track what changed (a version and an
//! update range) so that whatever uploads them knows when and what to send.

mod attribute;
mod element;
mod error;
mod instanced;
mod interleaved;
mod usage;

pub use self::attribute::{
    BufferAttribute, Float32BufferAttribute, Float64BufferAttribute, Int16BufferAttribute,
    Int32BufferAttribute, Int8BufferAttribute, Uint16BufferAttribute, Uint32BufferAttribute,
    Uint8BufferAttribute,
};
pub use self::element::BufferElement;
pub use self::error::BufferError;
pub use self::instanced::InstancedBufferAttribute;
pub use self::interleaved::{
    InterleavedBuffer, InterleavedBufferAttribute, InterleavedCloneCache, SharedInterleavedBuffer,
};
pub use self::usage::{UpdateRange, Usage};
