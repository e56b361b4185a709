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

//! Several attributes packed into one array, vertex after vertex.

use super::attribute::{item_slot, write_range};
use super::{BufferAttribute, BufferElement, BufferError, UpdateRange, Usage};
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// A single array holding several vertex attributes (e.g. position, normal,
/// uv) interleaved: all values of vertex 0, then all values of vertex 1, etc.
///
/// The individual attributes are described by [`InterleavedBufferAttribute`]s
/// sharing the buffer through a [`SharedInterleavedBuffer`].
pub struct InterleavedBuffer<T: BufferElement> {
    array: Vec<T>,
    stride: usize,
    usage: Usage,
    /// The part of the array to upload on the next update.
    pub update_range: UpdateRange,
    version: u32,
    uuid: Uuid,
}

/// An interleaved buffer shared by the attributes reading from it.
pub type SharedInterleavedBuffer<T> = Rc<RefCell<InterleavedBuffer<T>>>;

impl<T: BufferElement> InterleavedBuffer<T> {
    /// Creates a buffer over `array` with `stride` values per vertex.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidStride`] if `stride` is zero.
    pub fn new(array: impl Into<Vec<T>>, stride: usize) -> Result<Self, BufferError> {
        if stride == 0 {
            return Err(BufferError::InvalidStride);
        }
        Ok(Self {
            array: array.into(),
            stride,
            usage: Usage::default(),
            update_range: UpdateRange::default(),
            version: 0,
            uuid: Uuid::new_v4(),
        })
    }

    /// Wraps the buffer so attributes can share it.
    pub fn into_shared(self) -> SharedInterleavedBuffer<T> {
        Rc::new(RefCell::new(self))
    }

    /// The interleaved values.
    pub fn array(&self) -> &[T] {
        &self.array
    }

    /// Mutable access to the interleaved values.
    pub fn array_mut(&mut self) -> &mut [T] {
        &mut self.array
    }

    /// The number of values per vertex.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The number of whole vertices stored.
    pub fn count(&self) -> usize {
        self.array.len() / self.stride
    }

    /// The usage hint of this buffer.
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Incremented each time the buffer is flagged for re-upload.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The unique identifier of this buffer instance.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Flags the buffer for re-upload by bumping its version when `value` is `true`.
    pub fn set_needs_update(&mut self, value: bool) {
        if value {
            self.version = self.version.wrapping_add(1);
        }
    }

    /// Sets the usage hint.
    pub fn set_usage(&mut self, usage: Usage) -> &mut Self {
        self.usage = usage;
        self
    }

    /// Copies the data, stride and usage of `source`.
    pub fn copy(&mut self, source: &Self) -> &mut Self {
        self.array.clone_from(&source.array);
        self.stride = source.stride;
        self.usage = source.usage;
        self
    }

    /// Copies vertex `index2` of `source` into vertex `index1` of this buffer.
    ///
    /// # Errors
    ///
    /// Fails if the strides differ or either index is out of bounds.
    pub fn copy_at(
        &mut self,
        index1: usize,
        source: &Self,
        index2: usize,
    ) -> Result<&mut Self, BufferError> {
        if source.stride != self.stride {
            return Err(BufferError::StrideMismatch {
                expected: self.stride,
                found: source.stride,
            });
        }
        let from = item_slot(index2, 0, source.stride, source.stride, source.count())?;
        let to = item_slot(index1, 0, self.stride, self.stride, self.count())?;
        let len = self.stride;
        self.array[to..to + len].copy_from_slice(&source.array[from..from + len]);
        Ok(self)
    }

    /// Writes `values` into the array starting at element `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOverflow`] if the values do not fit.
    pub fn set(&mut self, values: &[T], offset: usize) -> Result<&mut Self, BufferError> {
        write_range(&mut self.array, values, offset)?;
        Ok(self)
    }

    /// The interleaved values as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.array)
    }
}

impl<T: BufferElement> Clone for InterleavedBuffer<T> {
    /// Clones the data, stride and usage under a fresh identifier.
    fn clone(&self) -> Self {
        Self {
            array: self.array.clone(),
            stride: self.stride,
            usage: self.usage,
            update_range: UpdateRange::default(),
            version: 0,
            uuid: Uuid::new_v4(),
        }
    }
}

impl<T: BufferElement> fmt::Debug for InterleavedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterleavedBuffer")
            .field("uuid", &self.uuid)
            .field("array", &T::ARRAY_NAME)
            .field("len", &self.array.len())
            .field("stride", &self.stride)
            .field("usage", &self.usage)
            .field("version", &self.version)
            .finish()
    }
}

/// One attribute read out of an [`InterleavedBuffer`]: `item_size` values
/// starting `offset` values into every vertex.
///
/// Reads and writes go straight to the shared buffer. Cloning the attribute
/// shares the same buffer; use [`clone_with`](Self::clone_with) to clone the
/// data as well.
pub struct InterleavedBufferAttribute<T: BufferElement> {
    /// A label for debugging.
    pub name: String,
    data: SharedInterleavedBuffer<T>,
    item_size: usize,
    offset: usize,
    /// For integer data, whether values are normalized in shaders.
    pub normalized: bool,
}

impl<T: BufferElement> InterleavedBufferAttribute<T> {
    /// Describes the attribute of `item_size` values at `offset` within each
    /// vertex of `data`.
    ///
    /// # Errors
    ///
    /// Fails if `item_size` is zero or the attribute does not fit in the
    /// buffer's stride.
    pub fn new(
        data: SharedInterleavedBuffer<T>,
        item_size: usize,
        offset: usize,
        normalized: bool,
    ) -> Result<Self, BufferError> {
        if item_size == 0 {
            return Err(BufferError::InvalidItemSize);
        }
        check_fit(offset, item_size, data.borrow().stride())?;
        Ok(Self {
            name: String::new(),
            data,
            item_size,
            offset,
            normalized,
        })
    }

    /// The buffer this attribute reads from.
    pub fn data(&self) -> &SharedInterleavedBuffer<T> {
        &self.data
    }

    /// The number of values per item.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// The position of the first value within a vertex.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of vertices in the shared buffer.
    pub fn count(&self) -> usize {
        self.data.borrow().count()
    }

    /// The whole interleaved array of the shared buffer.
    pub fn array(&self) -> Ref<'_, [T]> {
        Ref::map(self.data.borrow(), |data| data.array())
    }

    /// Flags the shared buffer for re-upload.
    pub fn set_needs_update(&self, value: bool) {
        self.data.borrow_mut().set_needs_update(value);
    }

    /// Returns component `component` of item `index`, or `None` if out of range.
    pub fn get_component(&self, index: usize, component: usize) -> Option<T> {
        let data = self.data.borrow();
        check_fit(self.offset, self.item_size, data.stride()).ok()?;
        let slot = item_slot(index, component, self.item_size, data.stride(), data.count()).ok()?;
        data.array().get(slot + self.offset).copied()
    }

    /// Returns the x component of item `index`.
    pub fn get_x(&self, index: usize) -> Option<T> {
        self.get_component(index, 0)
    }

    /// Returns the y component of item `index`.
    pub fn get_y(&self, index: usize) -> Option<T> {
        self.get_component(index, 1)
    }

    /// Returns the z component of item `index`.
    pub fn get_z(&self, index: usize) -> Option<T> {
        self.get_component(index, 2)
    }

    /// Returns the w component of item `index`.
    pub fn get_w(&self, index: usize) -> Option<T> {
        self.get_component(index, 3)
    }

    /// Sets the x component of item `index`.
    pub fn set_x(&self, index: usize, x: T) -> Result<&Self, BufferError> {
        self.write_item(index, 0, &[x])
    }

    /// Sets the y component of item `index`.
    pub fn set_y(&self, index: usize, y: T) -> Result<&Self, BufferError> {
        self.write_item(index, 1, &[y])
    }

    /// Sets the z component of item `index`.
    pub fn set_z(&self, index: usize, z: T) -> Result<&Self, BufferError> {
        self.write_item(index, 2, &[z])
    }

    /// Sets the w component of item `index`.
    pub fn set_w(&self, index: usize, w: T) -> Result<&Self, BufferError> {
        self.write_item(index, 3, &[w])
    }

    /// Sets the x and y components of item `index`.
    pub fn set_xy(&self, index: usize, x: T, y: T) -> Result<&Self, BufferError> {
        self.write_item(index, 0, &[x, y])
    }

    /// Sets the x, y and z components of item `index`.
    pub fn set_xyz(&self, index: usize, x: T, y: T, z: T) -> Result<&Self, BufferError> {
        self.write_item(index, 0, &[x, y, z])
    }

    /// Sets the x, y, z and w components of item `index`.
    pub fn set_xyzw(&self, index: usize, x: T, y: T, z: T, w: T) -> Result<&Self, BufferError> {
        self.write_item(index, 0, &[x, y, z, w])
    }

    /// Copies this attribute's values out of the shared buffer into a
    /// standalone, non-interleaved [`BufferAttribute`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AttributeOutsideStride`] if the shared buffer
    /// was given a stride the attribute no longer fits in.
    pub fn to_buffer_attribute(&self) -> Result<BufferAttribute<T>, BufferError> {
        log::info!("Cloning an interleaved buffer attribute de-interleaves its data.");
        let data = self.data.borrow();
        check_fit(self.offset, self.item_size, data.stride())?;
        let array: Vec<T> = data
            .array()
            .chunks_exact(data.stride())
            .flat_map(|vertex| &vertex[self.offset..self.offset + self.item_size])
            .copied()
            .collect();
        let mut attribute = BufferAttribute::from_parts(array, self.item_size, self.normalized);
        attribute.name.clone_from(&self.name);
        Ok(attribute)
    }

    /// Clones this attribute together with its buffer.
    ///
    /// Attributes cloned through the same `cache` that read from the same
    /// buffer keep sharing a single cloned buffer.
    pub fn clone_with(&self, cache: &mut InterleavedCloneCache<T>) -> Self {
        let uuid = self.data.borrow().uuid();
        let data = cache
            .buffers
            .entry(uuid)
            .or_insert_with(|| self.data.borrow().clone().into_shared());
        Self {
            name: self.name.clone(),
            data: Rc::clone(data),
            item_size: self.item_size,
            offset: self.offset,
            normalized: self.normalized,
        }
    }

    fn write_item(&self, index: usize, first: usize, values: &[T]) -> Result<&Self, BufferError> {
        let mut data = self.data.borrow_mut();
        check_fit(self.offset, self.item_size, data.stride())?;
        let last_component = first + values.len() - 1;
        let last = item_slot(
            index,
            last_component,
            self.item_size,
            data.stride(),
            data.count(),
        )? + self.offset;
        let start = last + 1 - values.len();
        data.array_mut()[start..=last].copy_from_slice(values);
        Ok(self)
    }
}

/// Checks that `item_size` values at `offset` fit within one vertex of
/// `stride` values. The stride of a shared buffer can change under its
/// attributes through [`InterleavedBuffer::copy`], so every access re-checks.
fn check_fit(offset: usize, item_size: usize, stride: usize) -> Result<(), BufferError> {
    if !offset.checked_add(item_size).is_some_and(|end| end <= stride) {
        return Err(BufferError::AttributeOutsideStride {
            offset,
            item_size,
            stride,
        });
    }
    Ok(())
}

impl<T: BufferElement> Clone for InterleavedBufferAttribute<T> {
    /// Clones the description; the clone reads from the same buffer.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            data: Rc::clone(&self.data),
            item_size: self.item_size,
            offset: self.offset,
            normalized: self.normalized,
        }
    }
}

impl<T: BufferElement> fmt::Debug for InterleavedBufferAttribute<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterleavedBufferAttribute")
            .field("name", &self.name)
            .field("data", &self.data.borrow().uuid())
            .field("item_size", &self.item_size)
            .field("offset", &self.offset)
            .field("normalized", &self.normalized)
            .finish()
    }
}

/// Remembers the buffers cloned during one cloning pass, keyed by the
/// identifier of the original buffer.
pub struct InterleavedCloneCache<T: BufferElement> {
    buffers: HashMap<Uuid, SharedInterleavedBuffer<T>>,
}

impl<T: BufferElement> InterleavedCloneCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            buffers: HashMap::new(),
        }
    }

    /// The number of buffers cloned so far.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns `true` if no buffer was cloned yet.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

impl<T: BufferElement> Default for InterleavedCloneCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
