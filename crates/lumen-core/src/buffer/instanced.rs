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

//! Per-instance attributes for instanced drawing.

use super::{BufferAttribute, BufferElement, BufferError};
use std::ops::{Deref, DerefMut};

/// A [`BufferAttribute`] whose items advance once per instance rather than
/// once per vertex.
#[derive(Debug, Clone)]
pub struct InstancedBufferAttribute<T: BufferElement> {
    attribute: BufferAttribute<T>,
    /// How many consecutive instances share one item of this attribute.
    pub mesh_per_attribute: u32,
}

impl<T: BufferElement> InstancedBufferAttribute<T> {
    /// Creates an instanced attribute over `array`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidItemSize`] if `item_size` is zero.
    pub fn new(
        array: impl Into<Vec<T>>,
        item_size: usize,
        normalized: bool,
        mesh_per_attribute: u32,
    ) -> Result<Self, BufferError> {
        Ok(Self {
            attribute: BufferAttribute::new(array, item_size, normalized)?,
            mesh_per_attribute,
        })
    }

    /// Copies `source`, including its instancing divisor.
    pub fn copy(&mut self, source: &Self) -> &mut Self {
        self.attribute.copy(&source.attribute);
        self.mesh_per_attribute = source.mesh_per_attribute;
        self
    }

    /// Unwraps the per-vertex attribute.
    pub fn into_inner(self) -> BufferAttribute<T> {
        self.attribute
    }
}

impl<T: BufferElement> From<BufferAttribute<T>> for InstancedBufferAttribute<T> {
    /// Advances once per instance.
    fn from(attribute: BufferAttribute<T>) -> Self {
        Self {
            attribute,
            mesh_per_attribute: 1,
        }
    }
}

impl<T: BufferElement> Deref for InstancedBufferAttribute<T> {
    type Target = BufferAttribute<T>;

    fn deref(&self) -> &Self::Target {
        &self.attribute
    }
}

impl<T: BufferElement> DerefMut for InstancedBufferAttribute<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.attribute
    }
}
