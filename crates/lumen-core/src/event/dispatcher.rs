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

use super::{Declares, Event, EventKind, EventMap, Listener, ListenerId};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// A listener with its payload type erased, as stored in the registration table.
type ErasedListener<S> = dyn Fn(&S, &str, &(dyn Any + 'static));

struct Registration<S: ?Sized> {
    id: ListenerId,
    invoke: Rc<ErasedListener<S>>,
}

/// Delivers events of one source object to the listeners registered on it.
///
/// The dispatcher keeps, per event kind, the listeners in registration order.
/// It is meant to be embedded as a field of its source `S` (see
/// [`EventTarget`](super::EventTarget)); the source passes itself as the
/// `target` of every dispatch.
///
/// `M` is the source's closed [`EventMap`]. Kinds declared by `M` get the
/// statically checked API (`add_listener::<K>`, `dispatch::<K>`, ...), while
/// any string tag can go through the open `*_for` API, whose listeners see
/// only `kind` and `target`.
///
/// The dispatcher is single-threaded and reentrant: listeners may add,
/// remove or dispatch on the same dispatcher while being called. Each
/// dispatch works on a snapshot of the listeners registered when it started,
/// so changes made during a dispatch only affect later dispatches.
pub struct EventDispatcher<S: ?Sized, M = ()> {
    listeners: RefCell<HashMap<String, Vec<Registration<S>>>>,
    _map: PhantomData<M>,
}

impl<S: ?Sized + 'static, M: EventMap> EventDispatcher<S, M> {
    /// Creates a dispatcher with no registrations.
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(HashMap::new()),
            _map: PhantomData,
        }
    }

    /// Registers `listener` for the declared kind `K`.
    ///
    /// Registering the same listener twice yields two deliveries per dispatch.
    pub fn add_listener<K>(&self, listener: &Listener<S, K::Payload>)
    where
        K: EventKind,
        M: Declares<K>,
    {
        let callback = listener.clone();
        let invoke = move |target: &S, kind: &str, payload: &(dyn Any + 'static)| {
            match payload.downcast_ref::<K::Payload>() {
                Some(payload) => callback.call(&Event::new(kind, target, payload)),
                None => log::debug!(
                    "Skipping typed listener for '{kind}': the dispatched payload has another type."
                ),
            }
        };
        self.register(K::TYPE, listener.id(), Rc::new(invoke));
    }

    /// Registers `listener` for an arbitrary `kind`.
    ///
    /// The listener receives every dispatch of `kind`, declared or not, but
    /// only sees the event's `kind` and `target`.
    pub fn add_listener_for(&self, kind: &str, listener: &Listener<S>) {
        let callback = listener.clone();
        let invoke = move |target: &S, kind: &str, _payload: &(dyn Any + 'static)| {
            callback.call(&Event::new(kind, target, &()));
        };
        self.register(kind, listener.id(), Rc::new(invoke));
    }

    /// Returns `true` if `listener` is registered for the declared kind `K`.
    pub fn has_listener<K>(&self, listener: &Listener<S, K::Payload>) -> bool
    where
        K: EventKind,
        M: Declares<K>,
    {
        self.contains(K::TYPE, listener.id())
    }

    /// Returns `true` if `listener` is registered for `kind`.
    pub fn has_listener_for(&self, kind: &str, listener: &Listener<S>) -> bool {
        self.contains(kind, listener.id())
    }

    /// Removes one registration of `listener` for the declared kind `K`.
    ///
    /// Only the earliest matching registration is removed; nothing happens if
    /// there is none.
    pub fn remove_listener<K>(&self, listener: &Listener<S, K::Payload>)
    where
        K: EventKind,
        M: Declares<K>,
    {
        self.unregister(K::TYPE, listener.id());
    }

    /// Removes one registration of `listener` for `kind`.
    pub fn remove_listener_for(&self, kind: &str, listener: &Listener<S>) {
        self.unregister(kind, listener.id());
    }

    /// Delivers a declared `K` event carrying `payload` to its listeners.
    pub fn dispatch<K>(&self, target: &S, payload: &K::Payload)
    where
        K: EventKind,
        M: Declares<K>,
    {
        self.deliver(target, K::TYPE, payload);
    }

    /// Delivers a payload-less event of an arbitrary `kind` to its listeners.
    ///
    /// Typed listeners of a declared kind are only reached when that kind's
    /// payload is `()`.
    pub fn dispatch_for(&self, target: &S, kind: &str) {
        if M::declares(kind) {
            log::warn!("Dispatching declared event '{kind}' without its payload.");
        }
        self.deliver(target, kind, &());
    }

    /// Returns the number of registrations for `kind`.
    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.borrow().get(kind).map_or(0, Vec::len)
    }

    fn register(&self, kind: &str, id: ListenerId, invoke: Rc<ErasedListener<S>>) {
        log::trace!("Adding listener {id:?} for '{kind}'.");
        self.listeners
            .borrow_mut()
            .entry(kind.to_owned())
            .or_default()
            .push(Registration { id, invoke });
    }

    fn contains(&self, kind: &str, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .get(kind)
            .is_some_and(|registrations| registrations.iter().any(|r| r.id == id))
    }

    fn unregister(&self, kind: &str, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(registrations) = listeners.get_mut(kind) else {
            return;
        };
        if let Some(index) = registrations.iter().position(|r| r.id == id) {
            registrations.remove(index);
            log::trace!("Removed listener {id:?} from '{kind}'.");
        }
        if registrations.is_empty() {
            listeners.remove(kind);
        }
    }

    fn deliver(&self, target: &S, kind: &str, payload: &(dyn Any + 'static)) {
        // The borrow must end before any listener runs so listeners can
        // register, unregister or dispatch again.
        let snapshot: Vec<Rc<ErasedListener<S>>> = match self.listeners.borrow().get(kind) {
            Some(registrations) => registrations
                .iter()
                .map(|r| Rc::clone(&r.invoke))
                .collect(),
            None => {
                log::trace!("No listeners for '{kind}'.");
                return;
            }
        };

        log::trace!("Dispatching '{kind}' to {} listener(s).", snapshot.len());
        for invoke in snapshot {
            invoke(target, kind, payload);
        }
    }
}

impl<S: ?Sized + 'static, M: EventMap> Default for EventDispatcher<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, M> fmt::Debug for EventDispatcher<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        let mut counts: Vec<(&str, usize)> = listeners
            .iter()
            .map(|(kind, registrations)| (kind.as_str(), registrations.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("EventDispatcher")
            .field("listeners", &counts)
            .finish()
    }
}
