#![cfg(target_arch = "wasm32")]

//! Browser-component tests for the counter widget: initial value, node
//! identities, increments, and render stability.

use std::cell::RefCell;
use std::rc::Rc;

use imp::dom::Mountable;
use imp::prelude::*;
use tally::{app, counter};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a view inside a fresh container appended to the test document's
/// body. The container scopes every query, so leftovers of a failed test
/// cannot leak into another.
fn mount<V: View>(view: V) -> (Element, V::Product) {
    let product = view.build();

    let container = document().create_element("div").unwrap();
    document()
        .body()
        .unwrap()
        .append_child(container.as_ref())
        .unwrap();
    container
        .append_child(product.js().unchecked_ref())
        .unwrap();

    (container, product)
}

fn find(scope: &Element, test_id: &str) -> Vec<Element> {
    let found = scope
        .query_selector_all(&format!("[data-test='{test_id}']"))
        .unwrap();

    (0..found.length())
        .map(|i| found.get(i).unwrap().unchecked_into())
        .collect()
}

fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

fn click(el: &Element) {
    el.unchecked_ref::<HtmlElement>().click();
}

#[wasm_bindgen_test]
fn renders_the_widget_tree_once() {
    let (scope, _product) = mount(app());

    assert_eq!(find(&scope, "component-app").len(), 1);
    assert_eq!(find(&scope, "counter-display").len(), 1);
    assert_eq!(find(&scope, "increment-button").len(), 1);

    scope.remove();
}

#[wasm_bindgen_test]
fn labels_the_activation_control() {
    let (scope, _product) = mount(app());

    assert_eq!(
        text_of(&find(&scope, "increment-button")[0]),
        "Increment counter",
    );

    scope.remove();
}

#[wasm_bindgen_test]
fn counter_starts_at_zero() {
    let (scope, _product) = mount(app());

    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 0");

    scope.remove();
}

#[wasm_bindgen_test]
fn one_activation_increments_any_initial_value() {
    for n in [0_u32, 7, 41] {
        let (scope, _product) = mount(stateful(n, counter));

        click(&find(&scope, "increment-button")[0]);

        assert_eq!(
            text_of(&find(&scope, "counter-display")[0]),
            format!("Counter is: {}", n + 1),
        );

        scope.remove();
    }
}

#[wasm_bindgen_test]
fn repeated_activations_accumulate() {
    let (scope, _product) = mount(app());

    let button = find(&scope, "increment-button")[0].clone();
    for _ in 0..3 {
        click(&button);
    }

    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 3");

    scope.remove();
}

/// Capture a [`Signal`] to the counter state at build time.
fn counter_with_signal() -> (impl View, Rc<RefCell<Option<Signal<u32>>>>) {
    let slot = Rc::new(RefCell::new(None));
    let view = stateful(0_u32, counter).once({
        let slot = Rc::clone(&slot);
        move |signal| *slot.borrow_mut() = Some(signal)
    });

    (view, slot)
}

#[wasm_bindgen_test]
fn rerender_without_activation_is_identical() {
    let (view, slot) = counter_with_signal();
    let (scope, _product) = mount(view);

    let before = scope.inner_html();

    let signal = slot.borrow_mut().take().unwrap();
    signal.update(|_| Then::Render);

    assert_eq!(scope.inner_html(), before);

    scope.remove();
}

#[wasm_bindgen_test]
fn silent_updates_defer_rendering() {
    let (view, slot) = counter_with_signal();
    let (scope, _product) = mount(view);

    let signal = slot.borrow_mut().take().unwrap();

    signal.update_silent(|count| *count = 7);
    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 0");

    signal.update(|_| Then::Render);
    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 7");

    scope.remove();
}

#[wasm_bindgen_test]
fn set_value_then_activate() {
    let (view, slot) = counter_with_signal();
    let (scope, _product) = mount(view);

    let signal = slot.borrow_mut().take().unwrap();

    signal.set(7);
    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 7");

    click(&find(&scope, "increment-button")[0]);
    assert_eq!(text_of(&find(&scope, "counter-display")[0]), "Counter is: 8");

    scope.remove();
}

#[wasm_bindgen_test]
fn unmount_removes_the_widget() {
    let (scope, product) = mount(app());

    assert_eq!(find(&scope, "component-app").len(), 1);

    product.unmount();

    assert_eq!(find(&scope, "component-app").len(), 0);
    assert_eq!(scope.child_element_count(), 0);

    scope.remove();
}
