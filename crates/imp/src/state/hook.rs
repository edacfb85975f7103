// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::UnsafeCell;
use std::ops::Deref;
use std::rc::Weak;

use crate::event::{EventCast, Listener, ListenerHandle};
use crate::runtime::{Runtime, ShouldRender};

/// A write handle to the state of a stateful view, for use outside of the
/// render function.
pub struct Signal<S> {
    runtime: Weak<dyn Runtime<S>>,
}

impl<S> Signal<S> {
    pub(crate) fn new(runtime: Weak<dyn Runtime<S>>) -> Self {
        Signal { runtime }
    }

    /// Update the state behind this `Signal`.
    ///
    /// ```
    /// # use imp::prelude::*;
    /// fn example(count: Signal<u32>) {
    ///     // increment count and trigger a render
    ///     count.update(|count| *count += 1);
    ///
    ///     // increment count if less than 10, only render on change
    ///     count.update(|count| {
    ///         if *count < 10 {
    ///             *count += 1;
    ///             Then::Render
    ///         } else {
    ///             Then::Stop
    ///         }
    ///     })
    /// }
    /// ```
    pub fn update<F, O>(&self, mutator: F)
    where
        F: FnOnce(&mut S) -> O,
        O: ShouldRender,
    {
        let Some(runtime) = self.runtime.upgrade() else {
            return;
        };

        let should_render = {
            // ⚠️ Safety:
            // ==========
            //
            // Borrows of the state never outlive a single handler call or
            // render, and neither of those can interrupt this call on the
            // single-threaded Wasm target.
            let state = unsafe { &mut *runtime.hook().as_ptr() };

            mutator(state).should_render()
        };

        if should_render {
            runtime.rerender();
        }
    }

    /// Same as [`update`](Signal::update), but it never renders updates.
    pub fn update_silent<F>(&self, mutator: F)
    where
        F: FnOnce(&mut S),
    {
        if let Some(runtime) = self.runtime.upgrade() {
            mutator(unsafe { &mut *runtime.hook().as_ptr() });
        }
    }

    /// Replace the entire state with a new value and trigger an update.
    pub fn set(&self, val: S) {
        self.update(move |s| *s = val);
    }
}

/// A read handle to the state of a stateful view, passed to its render
/// function.
pub struct Hook<S> {
    inner: UnsafeCell<S>,
    runtime: Weak<dyn Runtime<S>>,
}

impl<S> Deref for Hook<S> {
    type Target = S;

    fn deref(&self) -> &S {
        unsafe { &*self.inner.get() }
    }
}

impl<S> Hook<S> {
    pub(crate) fn new(inner: S, runtime: Weak<dyn Runtime<S>>) -> Self {
        Hook {
            inner: UnsafeCell::new(inner),
            runtime,
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut S {
        self.inner.get()
    }

    /// Binds a closure to a mutable reference of the state, producing an
    /// event listener.
    pub fn bind<E, F, O>(&self, callback: F) -> Bound<S, F>
    where
        S: 'static,
        E: EventCast,
        F: Fn(&mut S, &E) -> O + 'static,
        O: ShouldRender,
    {
        Bound {
            runtime: self.runtime.clone(),
            callback,
        }
    }

    /// Get the value of state if state implements `Copy`. This is equivalent
    /// to writing `**hook` but conveys intent better.
    pub fn get(&self) -> S
    where
        S: Copy,
    {
        **self
    }
}

/// An event listener with mutable access to the state of the stateful view
/// it was bound to. Created by [`Hook::bind`].
pub struct Bound<S, F> {
    runtime: Weak<dyn Runtime<S>>,
    callback: F,
}

impl<E, S, F, O> Listener<E> for Bound<S, F>
where
    E: EventCast,
    S: 'static,
    F: Fn(&mut S, &E) -> O + 'static,
    O: ShouldRender,
{
    fn build(self) -> ListenerHandle {
        let Bound { runtime, callback } = self;

        ListenerHandle::new(move |event| {
            let Some(runtime) = runtime.upgrade() else {
                return;
            };

            let should_render = {
                // ⚠️ Safety:
                // ==========
                //
                // This is fired only as an event listener from the DOM,
                // which guarantees that state is not currently borrowed, as
                // events cannot interrupt normal control flow.
                let state = unsafe { &mut *runtime.hook().as_ptr() };

                callback(state, E::cast_from(event)).should_render()
            };

            if should_render {
                runtime.rerender();
            }
        })
    }
}
