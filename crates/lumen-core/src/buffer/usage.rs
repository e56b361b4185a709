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

//! Usage hints and update ranges shared by buffer attributes.

/// The intended usage pattern of a buffer's data store.
///
/// Backends use it as an optimization hint when allocating GPU memory. After
/// the first upload the usage of a buffer can no longer change; create a new
/// buffer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Usage {
    /// Written once, drawn many times.
    #[default]
    StaticDraw,
    /// Rewritten often, drawn many times.
    DynamicDraw,
    /// Written once, drawn a few times.
    StreamDraw,
    /// Filled once by the GPU, read many times by the application.
    StaticRead,
    /// Refilled often by the GPU, read many times by the application.
    DynamicRead,
    /// Filled once by the GPU, read a few times by the application.
    StreamRead,
    /// Filled once by the GPU, used many times as a draw source.
    StaticCopy,
    /// Refilled often by the GPU, used many times as a draw source.
    DynamicCopy,
    /// Filled once by the GPU, used a few times as a draw source.
    StreamCopy,
}

impl Usage {
    /// Returns the numeric constant identifying this usage in GL-style APIs.
    pub const fn code(self) -> u32 {
        match self {
            Usage::StaticDraw => 35044,
            Usage::DynamicDraw => 35048,
            Usage::StreamDraw => 35040,
            Usage::StaticRead => 35045,
            Usage::DynamicRead => 35049,
            Usage::StreamRead => 35041,
            Usage::StaticCopy => 35046,
            Usage::DynamicCopy => 35050,
            Usage::StreamCopy => 35042,
        }
    }
}

/// The part of a buffer that changed since its last upload, in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UpdateRange {
    /// The first element to upload.
    pub offset: usize,
    /// The number of elements to upload, or `None` to upload up to the end.
    pub count: Option<usize>,
}

impl UpdateRange {
    /// Returns the element range this update covers within an array of `len`
    /// elements, clamped to the array.
    pub fn resolve(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = match self.count {
            Some(count) => start.saturating_add(count).min(len),
            None => len,
        };
        start..end
    }
}
