// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction of DOM nodes and mounting of built views.

use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::{Document, Element, Text};

use crate::event::ListenerHandle;
use crate::internal;

thread_local! {
    static DOCUMENT: Document = web_sys::window()
        .unwrap_throw()
        .document()
        .unwrap_throw();
}

fn document() -> Document {
    DOCUMENT.with(Clone::clone)
}

/// Create a new element. Tag names used by views are static and known
/// valid, so creation cannot fail.
pub fn element(tag: &str) -> Element {
    document().create_element(tag).unwrap_throw()
}

/// Create a new text node.
pub fn text(content: &str) -> Text {
    document().create_text_node(content)
}

/// Append `child` at the end of `parent`.
pub fn append(parent: &impl AsRef<JsValue>, child: &impl AsRef<JsValue>) {
    internal::obj(parent.as_ref()).append(child.as_ref());
}

/// Set an attribute on `node`.
pub fn set_attr(node: &impl AsRef<JsValue>, attr: &str, value: &str) {
    internal::obj(node.as_ref()).set_attr(attr, value);
}

pub(crate) fn set_text(node: &impl AsRef<JsValue>, text: &str) {
    internal::obj(node.as_ref()).set_text(text);
}

/// Attach a built event listener to `node`.
pub fn listen(node: &impl AsRef<JsValue>, event: &str, handler: &ListenerHandle) {
    internal::obj(node.as_ref()).add_listener(event, handler.js());
}

/// Append a product's root node to the document `body`.
pub fn append_body(node: &JsValue) {
    let body = document().body().unwrap_throw();

    internal::obj(body.as_ref()).append(node);
}

/// Trait for the products of built [`View`](crate::View)s: a live fragment
/// of the DOM plus whatever data the view needs to update itself.
pub trait Mountable: 'static {
    /// Reference to the root JavaScript node of this product.
    fn js(&self) -> &JsValue;

    /// Remove this product's DOM fragment from the document.
    fn unmount(&self);
}

/// Simpler interface for [`Mountable`] products anchored to a single root
/// node.
pub trait Anchor {
    type Target: AsRef<JsValue>;

    fn anchor(&self) -> &Self::Target;
}

impl<A> Mountable for A
where
    A: Anchor + 'static,
{
    fn js(&self) -> &JsValue {
        self.anchor().as_ref()
    }

    fn unmount(&self) {
        internal::obj(self.js()).unmount();
    }
}
