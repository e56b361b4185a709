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

//! Integration tests for objects embedding an event dispatcher.

use lumen_core::disposable::Dispose;
use lumen_core::event::{Event, EventDispatcher, EventMap, EventTarget, KindListener, Listener};
use lumen_core::{event_kinds, event_map};
use std::cell::RefCell;
use std::rc::Rc;

// --- Test Setup: an open-vocabulary source and a typed one ---

#[derive(Default)]
struct AnyEventSource {
    events: EventDispatcher<AnyEventSource>,
}

impl EventTarget for AnyEventSource {
    type Events = ();

    fn dispatcher(&self) -> &EventDispatcher<Self> {
        &self.events
    }
}

struct FooData {
    foo: u32,
}

struct BarData {
    bar: String,
}

event_kinds! {
    struct Foo(FooData) = "foo";
    struct Bar(BarData) = "bar";
}

event_map! {
    struct TestEvents { Foo, Bar }
}

#[derive(Default)]
struct TypedSource {
    label: &'static str,
    events: EventDispatcher<TypedSource, TestEvents>,
}

impl EventTarget for TypedSource {
    type Events = TestEvents;

    fn dispatcher(&self) -> &EventDispatcher<Self, TestEvents> {
        &self.events
    }
}

type Journal = Rc<RefCell<Vec<String>>>;

fn open_recorder<S: 'static>(journal: &Journal, label: &'static str) -> Listener<S> {
    let journal = Rc::clone(journal);
    Listener::new(move |event: &Event<'_, S>| {
        journal
            .borrow_mut()
            .push(format!("{label}:{}", event.kind()));
    })
}
// ---

#[test]
fn open_source_accepts_any_kind() {
    let source = AnyEventSource::default();
    let journal = Journal::default();
    let listener = open_recorder(&journal, "a");

    source.add_event_listener_for("eventA", &listener);
    source.dispatch_event_for("eventA");
    source.dispatch_event_for("eventB");

    assert_eq!(*journal.borrow(), ["a:eventA"]);
    assert!(source.has_event_listener_for("eventA", &listener));
}

#[test]
fn open_listener_target_is_the_source() {
    let source = AnyEventSource::default();
    let hits = Rc::new(RefCell::new(0));
    let listener = {
        let hits = Rc::clone(&hits);
        let expected = &source as *const AnyEventSource as usize;
        Listener::new(move |event: &Event<'_, AnyEventSource>| {
            assert_eq!(event.target() as *const AnyEventSource as usize, expected);
            *hits.borrow_mut() += 1;
        })
    };

    source.add_event_listener_for("eventA", &listener);
    source.dispatch_event_for("eventA");

    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn typed_source_delivers_declared_payloads() {
    let source = TypedSource {
        label: "typed",
        ..TypedSource::default()
    };
    let journal = Journal::default();
    let on_foo: KindListener<TypedSource, Foo> = {
        let journal = Rc::clone(&journal);
        Listener::new(move |event: &Event<'_, TypedSource, FooData>| {
            journal
                .borrow_mut()
                .push(format!("{}:{}:{}", event.target().label, event.kind(), event.foo));
        })
    };
    let on_bar: KindListener<TypedSource, Bar> = {
        let journal = Rc::clone(&journal);
        Listener::new(move |event: &Event<'_, TypedSource, BarData>| {
            journal.borrow_mut().push(format!("bar:{}", event.bar));
        })
    };

    source.add_event_listener::<Foo>(&on_foo);
    source.add_event_listener::<Bar>(&on_bar);
    source.dispatch_event::<Foo>(FooData { foo: 42 });
    source.dispatch_event::<Bar>(BarData { bar: "42".into() });

    assert_eq!(*journal.borrow(), ["typed:foo:42", "bar:42"]);
}

#[test]
fn typed_source_keeps_an_open_fallback() {
    let source = TypedSource::default();
    let journal = Journal::default();

    source.add_event_listener_for("baz", &open_recorder(&journal, "baz"));
    source.add_event_listener_for("foo", &open_recorder(&journal, "any-foo"));

    source.dispatch_event_for("zzzz");
    source.dispatch_event_for("baz");
    source.dispatch_event::<Foo>(FooData { foo: 1 });

    assert_eq!(*journal.borrow(), ["baz:baz", "any-foo:foo"]);
    assert!(TestEvents::declares("foo"));
    assert!(!TestEvents::declares("baz"));
}

#[test]
fn open_dispatch_of_a_declared_kind_skips_typed_listeners() {
    let source = TypedSource::default();
    let journal = Journal::default();
    let on_foo: KindListener<TypedSource, Foo> = {
        let journal = Rc::clone(&journal);
        Listener::new(move |event: &Event<'_, TypedSource, FooData>| {
            journal.borrow_mut().push(format!("typed:{}", event.foo));
        })
    };

    source.add_event_listener::<Foo>(&on_foo);
    source.add_event_listener_for("foo", &open_recorder(&journal, "open"));
    source.dispatch_event_for("foo");

    assert_eq!(*journal.borrow(), ["open:foo"]);

    source.dispatch_event::<Foo>(FooData { foo: 7 });
    assert_eq!(*journal.borrow(), ["open:foo", "typed:7", "open:foo"]);
}

#[test]
fn typed_remove_and_has() {
    let source = TypedSource::default();
    let on_bar = Listener::new(|_: &Event<'_, TypedSource, BarData>| {});

    source.add_event_listener::<Bar>(&on_bar);
    assert!(source.has_event_listener::<Bar>(&on_bar));

    source.remove_event_listener::<Bar>(&on_bar);
    assert!(!source.has_event_listener::<Bar>(&on_bar));
}

// --- Map extension: an interactive node adds pointer events to a node's map ---

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerData {
    data: [f32; 2],
}

event_kinds! {
    struct Added(()) = "added";
    struct Removed(()) = "removed";
    struct PointerDown(PointerData) = "pointerdown";
    struct Click(PointerData) = "click";
}

event_map! {
    struct NodeEvents { Added, Removed }
}

event_map! {
    struct InteractiveNodeEvents { Added, Removed, PointerDown, Click }
}

#[derive(Default)]
struct InteractiveNode {
    events: EventDispatcher<InteractiveNode, InteractiveNodeEvents>,
}

impl EventTarget for InteractiveNode {
    type Events = InteractiveNodeEvents;

    fn dispatcher(&self) -> &EventDispatcher<Self, InteractiveNodeEvents> {
        &self.events
    }
}

#[test]
fn extended_map_keeps_base_kinds_and_adds_new_ones() {
    let node = InteractiveNode::default();
    let journal = Journal::default();
    let on_added = {
        let journal = Rc::clone(&journal);
        Listener::new(move |event: &Event<'_, InteractiveNode>| {
            journal.borrow_mut().push(event.kind().to_owned());
        })
    };
    let on_click = {
        let journal = Rc::clone(&journal);
        Listener::new(move |event: &Event<'_, InteractiveNode, PointerData>| {
            journal
                .borrow_mut()
                .push(format!("{}@{:?}", event.kind(), event.data));
        })
    };

    node.add_event_listener::<Added>(&on_added);
    node.add_event_listener::<Click>(&on_click);
    node.dispatch_event::<Added>(());
    node.dispatch_event::<PointerDown>(PointerData { data: [0.0, 0.0] });
    node.dispatch_event::<Click>(PointerData { data: [0.5, -0.5] });

    assert_eq!(*journal.borrow(), ["added", "click@[0.5, -0.5]"]);
    assert_eq!(NodeEvents::KINDS, &["added", "removed"]);
    assert_eq!(InteractiveNodeEvents::KINDS.len(), 4);
}

// --- Reentrancy through the facade ---

#[test]
fn listener_can_unregister_itself_through_the_target() {
    let source = AnyEventSource::default();
    let calls = Rc::new(RefCell::new(0));
    let slot: Rc<RefCell<Option<Listener<AnyEventSource>>>> = Rc::default();
    let once = {
        let calls = Rc::clone(&calls);
        let slot = Rc::clone(&slot);
        Listener::new(move |event: &Event<'_, AnyEventSource>| {
            *calls.borrow_mut() += 1;
            if let Some(me) = slot.borrow().as_ref() {
                event.target().remove_event_listener_for(event.kind(), me);
            }
        })
    };
    *slot.borrow_mut() = Some(once.clone());

    source.add_event_listener_for("load", &once);
    source.dispatch_event_for("load");
    source.dispatch_event_for("load");

    assert_eq!(*calls.borrow(), 1);
    assert!(!source.has_event_listener_for("load", &once));

    // Break the cycle between the listener and its own handle.
    slot.borrow_mut().take();
}

#[test]
fn dispose_kind_is_usable_by_any_map() {
    event_map! {
        struct Resource { Dispose }
    }

    struct Texture {
        events: EventDispatcher<Texture, Resource>,
    }

    impl EventTarget for Texture {
        type Events = Resource;

        fn dispatcher(&self) -> &EventDispatcher<Self, Resource> {
            &self.events
        }
    }

    let texture = Texture {
        events: EventDispatcher::new(),
    };
    let journal = Journal::default();
    texture.add_event_listener::<Dispose>(&open_recorder(&journal, "texture"));
    texture.dispatch_event::<Dispose>(());

    assert_eq!(*journal.borrow(), ["texture:dispose"]);
}
