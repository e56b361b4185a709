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

use super::{Event, EventKind};
use std::fmt;
use std::rc::Rc;

/// The identity of a [`Listener`], used to find its registrations again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// A shared, reference-counted event callback.
///
/// Listeners are compared by identity, not by behavior: two listeners built
/// from identical closures are different listeners, while every clone of a
/// listener is the same one. Keep a clone around to later check for or remove
/// a registration.
pub struct Listener<S: ?Sized, P = ()> {
    callback: Rc<dyn Fn(&Event<'_, S, P>)>,
}

/// A listener for the declared event kind `K`.
pub type KindListener<S, K> = Listener<S, <K as EventKind>::Payload>;

impl<S: ?Sized + 'static, P: 'static> Listener<S, P> {
    /// Wraps `callback` into a new listener with its own identity.
    pub fn new(callback: impl Fn(&Event<'_, S, P>) + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }
}

impl<S: ?Sized, P> Listener<S, P> {
    /// Returns the identity of this listener.
    pub fn id(&self) -> ListenerId {
        ListenerId(Rc::as_ptr(&self.callback) as *const () as usize)
    }

    /// Calls the listener with `event`.
    pub fn call(&self, event: &Event<'_, S, P>) {
        (self.callback)(event)
    }
}

impl<S: ?Sized, P> Clone for Listener<S, P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<S: ?Sized, P> PartialEq for Listener<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<S: ?Sized, P> Eq for Listener<S, P> {}

impl<S: ?Sized, P> fmt::Debug for Listener<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.id()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Source;

    #[test]
    fn clones_share_identity() {
        let listener = Listener::<Source>::new(|_| {});
        let clone = listener.clone();

        assert_eq!(listener.id(), clone.id());
        assert_eq!(listener, clone);
    }

    #[test]
    fn identical_closures_are_distinct_listeners() {
        let first = Listener::<Source>::new(|_| {});
        let second = Listener::<Source>::new(|_| {});

        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn call_forwards_the_event() {
        let seen = Rc::new(Cell::new(0));
        let listener = {
            let seen = Rc::clone(&seen);
            Listener::<Source, u32>::new(move |event| seen.set(*event.payload()))
        };

        listener.call(&Event::new("count", &Source, &7));

        assert_eq!(seen.get(), 7);
    }
}
