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

use std::fmt;
use std::ops::Deref;

/// An event as delivered to a listener.
///
/// It pairs the dispatched `kind` and payload with the `target`, the source
/// object that dispatched it. The payload's fields are reachable directly
/// through [`Deref`], so a listener for a `{ foo: u32 }` payload can read
/// `event.foo`.
///
/// Events delivered through the open, string-keyed API carry a `()` payload.
pub struct Event<'a, S: ?Sized, P = ()> {
    kind: &'a str,
    target: &'a S,
    payload: &'a P,
}

impl<'a, S: ?Sized, P> Event<'a, S, P> {
    pub(crate) fn new(kind: &'a str, target: &'a S, payload: &'a P) -> Self {
        Self {
            kind,
            target,
            payload,
        }
    }

    /// The tag this event was dispatched under.
    pub fn kind(&self) -> &'a str {
        self.kind
    }

    /// The source object that dispatched this event.
    pub fn target(&self) -> &'a S {
        self.target
    }

    /// The kind-specific data of this event.
    pub fn payload(&self) -> &'a P {
        self.payload
    }
}

impl<S: ?Sized, P> Clone for Event<'_, S, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, P> Copy for Event<'_, S, P> {}

impl<S: ?Sized, P> Deref for Event<'_, S, P> {
    type Target = P;

    fn deref(&self) -> &Self::Target {
        self.payload
    }
}

impl<S: ?Sized, P: fmt::Debug> fmt::Debug for Event<'_, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("payload", self.payload)
            .finish_non_exhaustive()
    }
}
