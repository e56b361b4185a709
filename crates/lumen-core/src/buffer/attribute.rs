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

//! Per-vertex data stored in a single typed array.

use super::{BufferElement, BufferError, UpdateRange, Usage};
use std::fmt;

/// Per-vertex data (positions, normals, colors, indices...) stored as a flat
/// array of `T`, `item_size` values per vertex.
///
/// Changing the data does not reach the GPU by itself: after editing, call
/// [`set_needs_update(true)`](Self::set_needs_update) so the renderer sees a
/// new [`version`](Self::version).
pub struct BufferAttribute<T: BufferElement> {
    /// A label for debugging.
    pub name: String,
    array: Vec<T>,
    item_size: usize,
    /// For integer data, whether values map to the `[0, 1]` (or `[-1, 1]`)
    /// range in shaders instead of being converted to floats unchanged.
    pub normalized: bool,
    usage: Usage,
    /// The part of the array to upload on the next update.
    pub update_range: UpdateRange,
    version: u32,
    on_upload: Option<Box<dyn FnMut()>>,
}

/// An attribute backed by `i8` values.
pub type Int8BufferAttribute = BufferAttribute<i8>;
/// An attribute backed by `u8` values.
pub type Uint8BufferAttribute = BufferAttribute<u8>;
/// An attribute backed by `i16` values.
pub type Int16BufferAttribute = BufferAttribute<i16>;
/// An attribute backed by `u16` values.
pub type Uint16BufferAttribute = BufferAttribute<u16>;
/// An attribute backed by `i32` values.
pub type Int32BufferAttribute = BufferAttribute<i32>;
/// An attribute backed by `u32` values.
pub type Uint32BufferAttribute = BufferAttribute<u32>;
/// An attribute backed by `f32` values.
pub type Float32BufferAttribute = BufferAttribute<f32>;
/// An attribute backed by `f64` values.
pub type Float64BufferAttribute = BufferAttribute<f64>;

impl<T: BufferElement> BufferAttribute<T> {
    /// Creates an attribute over `array`, grouping its values by `item_size`.
    ///
    /// The array should hold `item_size * vertex_count` values; trailing
    /// values that do not fill a whole item are kept but not counted.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidItemSize`] if `item_size` is zero.
    pub fn new(
        array: impl Into<Vec<T>>,
        item_size: usize,
        normalized: bool,
    ) -> Result<Self, BufferError> {
        if item_size == 0 {
            return Err(BufferError::InvalidItemSize);
        }
        Ok(Self::from_parts(array.into(), item_size, normalized))
    }

    /// Creates an attribute of `len` zeroed values.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidItemSize`] if `item_size` is zero.
    pub fn zeroed(len: usize, item_size: usize, normalized: bool) -> Result<Self, BufferError> {
        Self::new(vec![T::zeroed(); len], item_size, normalized)
    }

    pub(super) fn from_parts(array: Vec<T>, item_size: usize, normalized: bool) -> Self {
        Self {
            name: String::new(),
            array,
            item_size,
            normalized,
            usage: Usage::default(),
            update_range: UpdateRange::default(),
            version: 0,
            on_upload: None,
        }
    }

    /// The backing values.
    pub fn array(&self) -> &[T] {
        &self.array
    }

    /// Mutable access to the backing values.
    ///
    /// Remember to call [`set_needs_update`](Self::set_needs_update) afterwards.
    pub fn array_mut(&mut self) -> &mut [T] {
        &mut self.array
    }

    /// The number of values per item.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// The number of whole items stored.
    pub fn count(&self) -> usize {
        self.array.len() / self.item_size
    }

    /// The usage hint of this attribute.
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Incremented each time the attribute is flagged for re-upload.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Flags the attribute for re-upload by bumping its version when `value` is `true`.
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

    /// Sets the callback run once the data has been uploaded.
    ///
    /// Typically used to free the CPU-side copy of data that is never read back.
    pub fn on_upload(&mut self, callback: impl FnMut() + 'static) -> &mut Self {
        self.on_upload = Some(Box::new(callback));
        self
    }

    /// Runs the upload callback, if any. Called by whatever uploads the data.
    pub fn notify_uploaded(&mut self) {
        if let Some(callback) = self.on_upload.as_mut() {
            callback();
        }
    }

    /// Copies the name, data, item size, normalization and usage of `source`.
    pub fn copy(&mut self, source: &Self) -> &mut Self {
        self.name.clone_from(&source.name);
        self.array.clone_from(&source.array);
        self.item_size = source.item_size;
        self.normalized = source.normalized;
        self.usage = source.usage;
        self
    }

    /// Copies item `index2` of `source` into item `index1` of this attribute.
    ///
    /// # Errors
    ///
    /// Fails if the item sizes differ or either index is out of bounds.
    pub fn copy_at(
        &mut self,
        index1: usize,
        source: &Self,
        index2: usize,
    ) -> Result<&mut Self, BufferError> {
        if source.item_size != self.item_size {
            return Err(BufferError::ItemSizeMismatch {
                expected: self.item_size,
                found: source.item_size,
            });
        }
        let from = source.slot(index2, 0)?;
        let to = self.slot(index1, 0)?;
        let len = self.item_size;
        self.array[to..to + len].copy_from_slice(&source.array[from..from + len]);
        Ok(self)
    }

    /// Overwrites the start of the array with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RangeOverflow`] if `values` is longer than the array.
    pub fn copy_array(&mut self, values: &[T]) -> Result<&mut Self, BufferError> {
        self.set(values, 0)
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

    /// Returns component `component` of item `index`, or `None` if out of range.
    pub fn get_component(&self, index: usize, component: usize) -> Option<T> {
        self.slot(index, component)
            .ok()
            .and_then(|slot| self.array.get(slot).copied())
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
    pub fn set_x(&mut self, index: usize, x: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 0, &[x])
    }

    /// Sets the y component of item `index`.
    pub fn set_y(&mut self, index: usize, y: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 1, &[y])
    }

    /// Sets the z component of item `index`.
    pub fn set_z(&mut self, index: usize, z: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 2, &[z])
    }

    /// Sets the w component of item `index`.
    pub fn set_w(&mut self, index: usize, w: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 3, &[w])
    }

    /// Sets the x and y components of item `index`.
    pub fn set_xy(&mut self, index: usize, x: T, y: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 0, &[x, y])
    }

    /// Sets the x, y and z components of item `index`.
    pub fn set_xyz(&mut self, index: usize, x: T, y: T, z: T) -> Result<&mut Self, BufferError> {
        self.write_item(index, 0, &[x, y, z])
    }

    /// Sets the x, y, z and w components of item `index`.
    pub fn set_xyzw(
        &mut self,
        index: usize,
        x: T,
        y: T,
        z: T,
        w: T,
    ) -> Result<&mut Self, BufferError> {
        self.write_item(index, 0, &[x, y, z, w])
    }

    /// The backing values as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.array)
    }

    fn slot(&self, index: usize, component: usize) -> Result<usize, BufferError> {
        item_slot(index, component, self.item_size, self.item_size, self.count())
    }

    fn write_item(
        &mut self,
        index: usize,
        first: usize,
        values: &[T],
    ) -> Result<&mut Self, BufferError> {
        // Validating the last component checks both the index and the item size.
        let last = self.slot(index, first + values.len() - 1)?;
        let start = last + 1 - values.len();
        self.array[start..=last].copy_from_slice(values);
        Ok(self)
    }
}

/// Resolves component `component` of item `index` to an array position for
/// items of `item_size` values laid out every `stride` values.
pub(super) fn item_slot(
    index: usize,
    component: usize,
    item_size: usize,
    stride: usize,
    count: usize,
) -> Result<usize, BufferError> {
    if component >= item_size {
        return Err(BufferError::ComponentOutOfRange {
            component,
            item_size,
        });
    }
    if index >= count {
        return Err(BufferError::IndexOutOfBounds { index, count });
    }
    Ok(index * stride + component)
}

/// Copies `values` into `array` at `offset`, refusing partial writes.
pub(super) fn write_range<T: Copy>(
    array: &mut [T],
    values: &[T],
    offset: usize,
) -> Result<(), BufferError> {
    let overflow = BufferError::RangeOverflow {
        offset,
        len: values.len(),
        capacity: array.len(),
    };
    let end = offset.checked_add(values.len()).ok_or(overflow.clone())?;
    array
        .get_mut(offset..end)
        .ok_or(overflow)?
        .copy_from_slice(values);
    Ok(())
}

impl<T: BufferElement> Clone for BufferAttribute<T> {
    /// Clones the data and settings; the clone starts at version 0 with the
    /// default update range and no upload callback.
    fn clone(&self) -> Self {
        let mut clone = Self::from_parts(Vec::new(), self.item_size, self.normalized);
        clone.copy(self);
        clone
    }
}

impl<T: BufferElement> fmt::Debug for BufferAttribute<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferAttribute")
            .field("name", &self.name)
            .field("array", &T::ARRAY_NAME)
            .field("len", &self.array.len())
            .field("item_size", &self.item_size)
            .field("normalized", &self.normalized)
            .field("usage", &self.usage)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
