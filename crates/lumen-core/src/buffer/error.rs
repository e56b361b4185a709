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

//! Defines the errors raised by buffer attribute operations.

use std::fmt;

/// An error raised when a buffer or attribute is built or addressed with
/// values that do not fit its layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An attribute was created with an item size of zero.
    InvalidItemSize,
    /// An interleaved buffer was created with a stride of zero.
    InvalidStride,
    /// An item index is past the last item of the attribute or buffer.
    IndexOutOfBounds {
        /// The requested item index.
        index: usize,
        /// The number of items available.
        count: usize,
    },
    /// A component (x, y, z, w) beyond the attribute's item size was addressed.
    ComponentOutOfRange {
        /// The requested component, `0` being x.
        component: usize,
        /// The number of components per item.
        item_size: usize,
    },
    /// Writing `len` values at `offset` would run past the end of the array.
    RangeOverflow {
        /// The first element written.
        offset: usize,
        /// The number of values written.
        len: usize,
        /// The length of the destination array.
        capacity: usize,
    },
    /// Two attributes with different item sizes were copied into each other.
    ItemSizeMismatch {
        /// The item size of the destination.
        expected: usize,
        /// The item size of the source.
        found: usize,
    },
    /// Two interleaved buffers with different strides were copied into each other.
    StrideMismatch {
        /// The stride of the destination.
        expected: usize,
        /// The stride of the source.
        found: usize,
    },
    /// An interleaved attribute does not fit within the stride of its buffer.
    AttributeOutsideStride {
        /// The offset of the attribute within a vertex.
        offset: usize,
        /// The number of components of the attribute.
        item_size: usize,
        /// The stride of the interleaved buffer.
        stride: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidItemSize => write!(f, "Item size must be at least 1."),
            BufferError::InvalidStride => write!(f, "Stride must be at least 1."),
            BufferError::IndexOutOfBounds { index, count } => {
                write!(f, "Item index {index} is out of bounds for {count} items.")
            }
            BufferError::ComponentOutOfRange {
                component,
                item_size,
            } => write!(
                f,
                "Component {component} is out of range for an item size of {item_size}."
            ),
            BufferError::RangeOverflow {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "Writing {len} values at offset {offset} overflows an array of length {capacity}."
            ),
            BufferError::ItemSizeMismatch { expected, found } => {
                write!(f, "Item size mismatch: expected {expected}, found {found}.")
            }
            BufferError::StrideMismatch { expected, found } => {
                write!(f, "Stride mismatch: expected {expected}, found {found}.")
            }
            BufferError::AttributeOutsideStride {
                offset,
                item_size,
                stride,
            } => write!(
                f,
                "Attribute of {item_size} components at offset {offset} does not fit in a stride of {stride}."
            ),
        }
    }
}

impl std::error::Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_bounds_display() {
        let err = BufferError::IndexOutOfBounds { index: 4, count: 3 };
        assert_eq!(
            format!("{err}"),
            "Item index 4 is out of bounds for 3 items."
        );
    }

    #[test]
    fn range_overflow_display() {
        let err = BufferError::RangeOverflow {
            offset: 2,
            len: 4,
            capacity: 5,
        };
        assert_eq!(
            format!("{err}"),
            "Writing 4 values at offset 2 overflows an array of length 5."
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(BufferError::InvalidStride);
        assert_eq!(err.to_string(), "Stride must be at least 1.");
    }
}
