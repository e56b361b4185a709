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

//! The event-kind vocabulary of an event source.
//!
//! A *kind* is a zero-sized marker type that names an event (its string tag)
//! and fixes the payload it carries. An *event map* is the closed set of kinds
//! a source declares. Declared kinds get statically checked listeners and
//! dispatches; every other string tag stays usable through the open API of
//! [`EventDispatcher`](super::EventDispatcher).

/// A statically known event kind.
///
/// Implementations are usually generated with [`event_kinds!`](crate::event_kinds).
pub trait EventKind: 'static {
    /// The string tag the kind is registered and dispatched under.
    const TYPE: &'static str;

    /// The data delivered alongside `kind` and `target`.
    type Payload: 'static;
}

/// A closed mapping from event kinds to their payloads.
///
/// The unit type is the empty map: a source typed with `()` only exposes the
/// open, string-keyed API.
pub trait EventMap: 'static {
    /// The tags of every kind this map declares.
    const KINDS: &'static [&'static str];

    /// Returns `true` if `kind` is the tag of a declared kind.
    fn declares(kind: &str) -> bool {
        Self::KINDS.contains(&kind)
    }
}

impl EventMap for () {
    const KINDS: &'static [&'static str] = &[];
}

/// Marks `K` as a member of this event map.
pub trait Declares<K: EventKind>: EventMap {}

/// Declares one or more event kinds.
///
/// Each entry produces a unit struct implementing [`EventKind`].
///
/// ```
/// use lumen_core::event::EventKind;
///
/// pub struct StartData {
///     pub message: &'static str,
/// }
///
/// lumen_core::event_kinds! {
///     /// The engine started.
///     pub struct Start(StartData) = "start";
///     pub struct Stop(()) = "stop";
/// }
///
/// assert_eq!(Start::TYPE, "start");
/// assert_eq!(Stop::TYPE, "stop");
/// ```
#[macro_export]
macro_rules! event_kinds {
    ($(
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($payload:ty) = $tag:literal;
    )*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::event::EventKind for $name {
                const TYPE: &'static str = $tag;
                type Payload = $payload;
            }
        )*
    };
}

/// Declares an event map listing previously declared kinds.
///
/// A map extends another simply by listing its kinds again next to new ones.
///
/// ```
/// use lumen_core::event::EventMap;
///
/// lumen_core::event_kinds! {
///     pub struct Added(()) = "added";
///     pub struct Removed(()) = "removed";
///     pub struct Click(u32) = "click";
/// }
///
/// lumen_core::event_map! {
///     pub struct NodeEvents { Added, Removed }
/// }
///
/// lumen_core::event_map! {
///     pub struct InteractiveNodeEvents { Added, Removed, Click }
/// }
///
/// assert!(NodeEvents::declares("added"));
/// assert!(!NodeEvents::declares("click"));
/// assert!(InteractiveNodeEvents::declares("click"));
/// ```
#[macro_export]
macro_rules! event_map {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident { $($kind:ty),* $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::event::EventMap for $name {
            const KINDS: &'static [&'static str] =
                &[$(<$kind as $crate::event::EventKind>::TYPE),*];
        }

        $(impl $crate::event::Declares<$kind> for $name {})*
    };
}
