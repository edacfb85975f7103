// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Utilities for handling DOM events

use std::marker::PhantomData;
use std::ops::Deref;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    type EventWithTarget;

    #[wasm_bindgen(method, getter)]
    fn target(this: &EventWithTarget) -> HtmlElement;
}

macro_rules! event {
    ($(#[doc = $doc:literal] $event:ident,)*) => {
        $(
            #[doc = concat!("Smart wrapper around a ", $doc, " which includes the type information of the event target")]
            #[repr(transparent)]
            pub struct $event<T> {
                event: web_sys::$event,
                _target: PhantomData<T>,
            }

            impl<T> EventCast for $event<T> {
                fn cast_from(e: &web_sys::Event) -> &Self {
                    unsafe { &*(e as *const _ as *const Self) }
                }
            }

            impl<T> Deref for $event<T> {
                type Target = web_sys::$event;

                fn deref(&self) -> &Self::Target {
                    &self.event
                }
            }

            impl<T> $event<T> {
                /// Return a reference to the target element.
                ///
                /// This method shadows over the [`Event::target`](web_sys::Event::target)
                /// method provided by `web-sys` and makes it infallible.
                pub fn target(&self) -> HtmlElement {
                    self.event.unchecked_ref::<EventWithTarget>().target()
                }
            }
        )*
    };
}

mod sealed {
    pub trait EventCast {
        fn cast_from(e: &web_sys::Event) -> &Self;
    }

    impl EventCast for web_sys::Event {
        fn cast_from(e: &web_sys::Event) -> &Self {
            e
        }
    }
}

pub(crate) use sealed::EventCast;

event! {
    /// [`web_sys::Event`](web_sys::Event)
    Event,
    /// [`web_sys::MouseEvent`](web_sys::MouseEvent)
    MouseEvent,
}

/// Types capable of describing a DOM event listener for events `E`.
pub trait Listener<E>
where
    E: EventCast,
    Self: Sized + 'static,
{
    /// Build the JavaScript callback for this listener. The returned
    /// [`ListenerHandle`] owns the closure backing the callback and must be
    /// kept alive in the product for as long as the listener can fire.
    fn build(self) -> ListenerHandle;
}

/// A built listener: owns the [`Closure`] backing the JavaScript callback.
pub struct ListenerHandle {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerHandle {
    pub(crate) fn new<F>(mut handler: F) -> Self
    where
        F: FnMut(&web_sys::Event) + 'static,
    {
        ListenerHandle {
            closure: Closure::new(move |event: web_sys::Event| handler(&event)),
        }
    }

    /// The JavaScript value of the callback, in the shape `addEventListener`
    /// expects.
    pub fn js(&self) -> &JsValue {
        self.closure.as_ref()
    }
}
