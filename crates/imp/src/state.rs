// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Utilities for building stateful views
//!
//! Simple views can only ever render themselves once: they own no state, so
//! there is nothing that could change. To get around this the [`stateful`]
//! function can be used to create views that have ownership over some
//! arbitrary mutable state, and that re-render themselves in place whenever
//! that state changes.

use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;

use crate::dom::Mountable;
use crate::runtime::{Runtime, RuntimeData};
use crate::View;

mod hook;
mod into_state;

pub use hook::{Bound, Hook, Signal};
pub use into_state::IntoState;

/// Create a stateful [`View`] over some mutable state. The state
/// needs to be created using the [`IntoState`] trait.
///
/// ```no_run
/// # use imp::prelude::*;
/// // `IntoState` is implemented for primitive values
/// let view = stateful(0_u32, |count: &Hook<u32>| count.get());
/// ```
pub fn stateful<'a, S, F, V>(
    state: S,
    render: F,
) -> Stateful<S, impl Fn(*const Hook<S::State>) -> V>
where
    S: IntoState,
    F: Fn(&'a Hook<S::State>) -> V + 'static,
    V: View + 'a,
{
    // There is no safe way to represent a generic closure with generic return type
    // that borrows from that closure's arguments, without also slapping a lifetime.
    //
    // The `stateful` function ensures that correct lifetimes are used before we
    // erase them for the use in the `Stateful` struct.
    let render = move |hook: *const Hook<S::State>| render(unsafe { &*hook });

    Stateful { state, render }
}

pub struct Stateful<S, F> {
    state: S,
    render: F,
}

pub struct StatefulProduct<S> {
    runtime: Rc<dyn Runtime<S>>,
}

impl<S, F, V> View for Stateful<S, F>
where
    S: IntoState,
    F: Fn(*const Hook<S::State>) -> V + 'static,
    V: View,
{
    type Product = StatefulProduct<S::State>;

    fn build(self) -> Self::Product {
        let Stateful { state, render } = self;

        let runtime = Rc::new_cyclic(|weak: &Weak<RuntimeData<S::State, F, V::Product>>| {
            let weak: Weak<dyn Runtime<S::State>> = weak.clone();

            let hook = Hook::new(state.init(), weak);
            let product = render(&hook).build();

            RuntimeData::new(hook, render, product)
        });

        StatefulProduct { runtime }
    }

    fn update(self, p: &mut Self::Product) {
        // The product retains its state; a parent update just renders this
        // view again over that state.
        p.runtime.rerender();
    }
}

impl<S> Mountable for StatefulProduct<S>
where
    S: 'static,
{
    fn js(&self) -> &JsValue {
        self.runtime.js()
    }

    fn unmount(&self) {
        self.runtime.unmount()
    }
}

impl<S, R> Stateful<S, R>
where
    S: IntoState,
{
    /// Run `handler` once, at build time, with a [`Signal`] to this view's
    /// state. Whatever the handler returns is kept alive alongside the
    /// product.
    pub fn once<F, D>(self, handler: F) -> Once<S, R, F>
    where
        F: FnOnce(Signal<S::State>) -> D,
    {
        Once {
            with_state: self,
            handler,
        }
    }
}

pub struct Once<S, R, F> {
    with_state: Stateful<S, R>,
    handler: F,
}

pub struct OnceProduct<S, D> {
    inner: StatefulProduct<S>,
    _no_drop: D,
}

impl<S, R, F, V, D> View for Once<S, R, F>
where
    S: IntoState,
    R: Fn(*const Hook<S::State>) -> V + 'static,
    F: FnOnce(Signal<S::State>) -> D,
    V: View,
    D: 'static,
{
    type Product = OnceProduct<S::State, D>;

    fn build(self) -> Self::Product {
        let inner = self.with_state.build();
        let _no_drop = (self.handler)(Signal::new(Rc::downgrade(&inner.runtime)));

        OnceProduct { inner, _no_drop }
    }

    fn update(self, p: &mut Self::Product) {
        self.with_state.update(&mut p.inner)
    }
}

impl<S, D> Mountable for OnceProduct<S, D>
where
    S: 'static,
    D: 'static,
{
    fn js(&self) -> &JsValue {
        self.inner.js()
    }

    fn unmount(&self) {
        self.inner.unmount()
    }
}
