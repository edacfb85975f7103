// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Duck-typed bindings for the DOM operations that cannot fail.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    pub(crate) type UnsafeNode;

    // dom manipulation ----------------

    #[wasm_bindgen(method, js_name = "append")]
    pub(crate) fn append(this: &UnsafeNode, child: &JsValue);
    #[wasm_bindgen(method, js_name = "remove")]
    pub(crate) fn unmount(this: &UnsafeNode);

    // `set_text` ----------------

    #[wasm_bindgen(method, setter, js_name = "textContent")]
    pub(crate) fn set_text(this: &UnsafeNode, t: &str);

    // attributes and listeners ----------------

    #[wasm_bindgen(method, js_name = "setAttribute")]
    pub(crate) fn set_attr(this: &UnsafeNode, a: &str, v: &str);
    #[wasm_bindgen(method, js_name = "addEventListener")]
    pub(crate) fn add_listener(this: &UnsafeNode, event: &str, callback: &JsValue);
}

pub(crate) fn obj(value: &JsValue) -> &UnsafeNode {
    value.unchecked_ref()
}
