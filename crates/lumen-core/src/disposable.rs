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

//! The `dispose` event and the contract of objects owning releasable resources.

crate::event_kinds! {
    /// Dispatched by a [`Disposable`] source when it releases its resources.
    pub struct Dispose(()) = "dispose";
}

crate::event_map! {
    /// The event map of objects whose only event is [`Dispose`].
    pub struct DisposableEvents { Dispose }
}

/// An object holding resources that must be released explicitly.
pub trait Disposable {
    /// Frees the resources allocated by this instance.
    ///
    /// Call this whenever the instance is no longer used. Implementors that
    /// are event targets dispatch [`Dispose`] so dependants can release what
    /// they derived from it.
    fn dispose(&self);
}
