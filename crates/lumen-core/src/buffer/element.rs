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

//! The scalar types a buffer attribute can store.

use std::fmt;

/// A scalar that can back a buffer attribute, mirroring the typed arrays a
/// GPU vertex buffer accepts.
///
/// Elements are plain old data so an attribute's storage can be viewed as raw
/// bytes for upload.
pub trait BufferElement: bytemuck::Pod + PartialEq + fmt::Debug {
    /// The name of the matching typed array, used in diagnostics.
    const ARRAY_NAME: &'static str;
}

macro_rules! impl_buffer_element {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl BufferElement for $ty {
                const ARRAY_NAME: &'static str = $name;
            }
        )*
    };
}

impl_buffer_element! {
    i8 => "Int8Array",
    u8 => "Uint8Array",
    i16 => "Int16Array",
    u16 => "Uint16Array",
    i32 => "Int32Array",
    u32 => "Uint32Array",
    f32 => "Float32Array",
    f64 => "Float64Array",
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of<T: BufferElement>() -> &'static str {
        T::ARRAY_NAME
    }

    #[test]
    fn array_names_follow_the_element_type() {
        assert_eq!(name_of::<i8>(), "Int8Array");
        assert_eq!(name_of::<u16>(), "Uint16Array");
        assert_eq!(name_of::<f32>(), "Float32Array");
        assert_eq!(name_of::<f64>(), "Float64Array");
    }
}
