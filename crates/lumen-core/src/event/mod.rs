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

//! Synchronous, strongly-typed event dispatch for mutable objects.
//!
//! An object that emits events embeds an [`EventDispatcher`] and implements
//! [`EventTarget`] to expose the dispatcher's operations as its own. The
//! object declares, once, the closed [`EventMap`] of the kinds it knows
//! about; for those kinds listeners and dispatches are checked at compile
//! time against the declared payload. Any other string tag remains usable,
//! with listeners that only see the event's `kind` and `target`.
//!
//! Dispatching a declared kind with the wrong payload does not compile:
//!
//! ```compile_fail
//! use lumen_core::event::{EventDispatcher, EventTarget};
//!
//! pub struct FooData { pub foo: u32 }
//!
//! lumen_core::event_kinds! { pub struct Foo(FooData) = "foo"; }
//! lumen_core::event_map! { pub struct TestEvents { Foo } }
//!
//! pub struct Source { events: EventDispatcher<Source, TestEvents> }
//!
//! impl EventTarget for Source {
//!     type Events = TestEvents;
//!     fn dispatcher(&self) -> &EventDispatcher<Self, TestEvents> { &self.events }
//! }
//!
//! let source = Source { events: EventDispatcher::new() };
//! source.dispatch_event::<Foo>("42");
//! ```
//!
//! Nor does using a kind the object never declared through the typed API:
//!
//! ```compile_fail
//! use lumen_core::event::{EventDispatcher, EventTarget};
//!
//! lumen_core::event_kinds! {
//!     pub struct Foo(()) = "foo";
//!     pub struct Baz(()) = "baz";
//! }
//! lumen_core::event_map! { pub struct TestEvents { Foo } }
//!
//! pub struct Source { events: EventDispatcher<Source, TestEvents> }
//!
//! impl EventTarget for Source {
//!     type Events = TestEvents;
//!     fn dispatcher(&self) -> &EventDispatcher<Self, TestEvents> { &self.events }
//! }
//!
//! let source = Source { events: EventDispatcher::new() };
//! source.dispatch_event::<Baz>(());
//! ```
//!
//! The open API accepts the same kind as a plain string:
//!
//! ```
//! use lumen_core::event::{EventDispatcher, EventTarget};
//!
//! lumen_core::event_kinds! { pub struct Foo(()) = "foo"; }
//! lumen_core::event_map! { pub struct TestEvents { Foo } }
//!
//! pub struct Source { events: EventDispatcher<Source, TestEvents> }
//!
//! impl EventTarget for Source {
//!     type Events = TestEvents;
//!     fn dispatcher(&self) -> &EventDispatcher<Self, TestEvents> { &self.events }
//! }
//!
//! let source = Source { events: EventDispatcher::new() };
//! source.dispatch_event_for("baz");
//! ```

mod delivery;
mod dispatcher;
mod kind;
mod listener;
mod target;

pub use self::delivery::Event;
pub use self::dispatcher::EventDispatcher;
pub use self::kind::{Declares, EventKind, EventMap};
pub use self::listener::{KindListener, Listener, ListenerId};
pub use self::target::EventTarget;
