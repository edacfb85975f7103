// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ownership of built views and scheduling of their updates.

use std::cell::{Cell, UnsafeCell};

use wasm_bindgen::JsValue;

use crate::dom::{self, Mountable};
use crate::state::Hook;
use crate::View;

/// Everything a stateful view needs to re-render itself in place: the state
/// hook, the render function, and the product of the last render.
pub(crate) struct RuntimeData<S, F, P> {
    hook: Hook<S>,
    render: F,
    product: UnsafeCell<P>,
    updating: Cell<bool>,
}

impl<S, F, P> RuntimeData<S, F, P> {
    pub(crate) fn new(hook: Hook<S>, render: F, product: P) -> Self {
        RuntimeData {
            hook,
            render,
            product: UnsafeCell::new(product),
            updating: Cell::new(false),
        }
    }
}

pub(crate) trait Runtime<S> {
    fn hook(&self) -> &Hook<S>;

    fn rerender(&self);

    fn js(&self) -> &JsValue;

    fn unmount(&self);
}

impl<S, F, P, V> Runtime<S> for RuntimeData<S, F, P>
where
    S: 'static,
    F: Fn(*const Hook<S>) -> V,
    V: View<Product = P>,
    P: Mountable,
{
    fn hook(&self) -> &Hook<S> {
        &self.hook
    }

    fn rerender(&self) {
        debug_assert!(!self.updating.get(), "Cyclical update detected");

        if self.updating.replace(true) {
            return;
        }

        let view = (self.render)(&self.hook);

        // ⚠️ Safety:
        // ==========
        //
        // The `updating` flag guarantees the product is not borrowed by
        // another render: renders are never re-entrant on the
        // single-threaded Wasm target.
        view.update(unsafe { &mut *self.product.get() });

        self.updating.set(false);
    }

    fn js(&self) -> &JsValue {
        // ⚠️ Safety:
        // ==========
        //
        // Updates replace values inside the product but never the product
        // itself, so a shared borrow of its root node stays valid.
        unsafe { &*self.product.get() }.js()
    }

    fn unmount(&self) {
        unsafe { &*self.product.get() }.unmount();
    }
}

/// Describes whether or not a stateful view should re-render after a state
/// change. For uses see:
///
/// * [`Hook::bind`](crate::state::Hook::bind)
/// * [`Signal::update`](crate::state::Signal::update)
pub trait ShouldRender: 'static {
    fn should_render(self) -> bool;
}

/// Closures without return type always update their view.
impl ShouldRender for () {
    fn should_render(self) -> bool {
        true
    }
}

/// An enum that implements the [`ShouldRender`] trait. See:
///
/// * [`Hook::bind`](crate::state::Hook::bind)
/// * [`Signal::update`](crate::state::Signal::update)
pub enum Then {
    /// This is a silent update
    Stop,
    /// Render the view after this update
    Render,
}

impl ShouldRender for Then {
    fn should_render(self) -> bool {
        match self {
            Then::Stop => false,
            Then::Render => true,
        }
    }
}

thread_local! {
    static INIT: Cell<bool> = const { Cell::new(false) };
}

/// Start an app by mounting given [`View`] in the document `body`.
///
/// The view is leaked and lives for as long as the page does. Calling
/// `start` a second time is a no-op.
pub fn start<V>(view: V)
where
    V: View,
{
    if INIT.get() {
        return;
    }
    INIT.set(true);

    init_panic_hook();

    let product = view.build();

    dom::append_body(product.js());

    std::mem::forget(product);
}

fn init_panic_hook() {
    // Only enable console hook on debug builds
    #[cfg(debug_assertions)]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_always_renders() {
        assert!(().should_render());
    }

    #[test]
    fn then_controls_rendering() {
        assert!(Then::Render.should_render());
        assert!(!Then::Stop.should_render());
    }
}
