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

use super::{Declares, EventDispatcher, EventKind, EventMap, Listener};

/// An object that embeds an [`EventDispatcher`] and exposes it as its own
/// event API.
///
/// Implementors only provide the dispatcher; every event operation is
/// forwarded to it with `self` as the event target.
///
/// ```
/// use lumen_core::event::{Event, EventDispatcher, EventTarget, Listener};
///
/// pub struct StartData {
///     pub message: &'static str,
/// }
///
/// lumen_core::event_kinds! {
///     pub struct Start(StartData) = "start";
/// }
///
/// lumen_core::event_map! {
///     pub struct CarEvents { Start }
/// }
///
/// #[derive(Default)]
/// pub struct Car {
///     events: EventDispatcher<Car, CarEvents>,
/// }
///
/// impl Car {
///     pub fn start(&self) {
///         self.dispatch_event::<Start>(StartData { message: "vroom vroom!" });
///     }
/// }
///
/// impl EventTarget for Car {
///     type Events = CarEvents;
///
///     fn dispatcher(&self) -> &EventDispatcher<Self, CarEvents> {
///         &self.events
///     }
/// }
///
/// let car = Car::default();
/// let on_start = Listener::new(|event: &Event<'_, Car, StartData>| {
///     assert_eq!(event.message, "vroom vroom!");
/// });
/// car.add_event_listener::<Start>(&on_start);
/// car.start();
/// ```
pub trait EventTarget: 'static {
    /// The closed set of event kinds this object declares.
    type Events: EventMap;

    /// Returns the embedded dispatcher.
    fn dispatcher(&self) -> &EventDispatcher<Self, Self::Events>;

    /// Registers `listener` for the declared kind `K`.
    fn add_event_listener<K>(&self, listener: &Listener<Self, K::Payload>)
    where
        K: EventKind,
        Self::Events: Declares<K>,
    {
        self.dispatcher().add_listener::<K>(listener);
    }

    /// Registers `listener` for an arbitrary `kind`.
    fn add_event_listener_for(&self, kind: &str, listener: &Listener<Self>) {
        self.dispatcher().add_listener_for(kind, listener);
    }

    /// Returns `true` if `listener` is registered for the declared kind `K`.
    fn has_event_listener<K>(&self, listener: &Listener<Self, K::Payload>) -> bool
    where
        K: EventKind,
        Self::Events: Declares<K>,
    {
        self.dispatcher().has_listener::<K>(listener)
    }

    /// Returns `true` if `listener` is registered for `kind`.
    fn has_event_listener_for(&self, kind: &str, listener: &Listener<Self>) -> bool {
        self.dispatcher().has_listener_for(kind, listener)
    }

    /// Removes one registration of `listener` for the declared kind `K`.
    fn remove_event_listener<K>(&self, listener: &Listener<Self, K::Payload>)
    where
        K: EventKind,
        Self::Events: Declares<K>,
    {
        self.dispatcher().remove_listener::<K>(listener);
    }

    /// Removes one registration of `listener` for `kind`.
    fn remove_event_listener_for(&self, kind: &str, listener: &Listener<Self>) {
        self.dispatcher().remove_listener_for(kind, listener);
    }

    /// Dispatches a declared `K` event with `self` as target.
    fn dispatch_event<K>(&self, payload: K::Payload)
    where
        K: EventKind,
        Self::Events: Declares<K>,
    {
        self.dispatcher().dispatch::<K>(self, &payload);
    }

    /// Dispatches a payload-less event of an arbitrary `kind` with `self` as target.
    ///
    /// Listeners registered through [`add_event_listener_for`](Self::add_event_listener_for)
    /// are always reached. If `kind` is declared by [`Self::Events`](EventTarget::Events)
    /// with a payload other than `()`, its typed listeners are skipped, since
    /// there is no payload to hand them; a warning is logged. Use
    /// [`dispatch_event`](Self::dispatch_event) to reach them.
    fn dispatch_event_for(&self, kind: &str) {
        self.dispatcher().dispatch_for(self, kind);
    }
}
