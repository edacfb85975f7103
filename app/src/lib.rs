//! A single-page counter: a heading showing the current count and a button
//! that increments it by one.

use imp::dom::{self, Anchor, Mountable};
use imp::event::{Listener, ListenerHandle, MouseEvent};
use imp::prelude::*;
use imp::ValueProduct;
use web_sys::{Element, HtmlElement};

/// The app root: a counter starting at zero.
pub fn app() -> impl View {
    stateful(0_u32, counter)
}

/// Render the counter widget over the current count.
pub fn counter(count: &Hook<u32>) -> impl View {
    CounterView {
        count: count.get(),
        onclick: count.bind(|count, _: &MouseEvent<HtmlElement>| *count += 1),
    }
}

struct CounterView<L> {
    count: u32,
    onclick: L,
}

pub struct CounterProduct {
    root: Element,
    count: ValueProduct<u32>,
    _onclick: ListenerHandle,
}

impl<L> View for CounterView<L>
where
    L: Listener<MouseEvent<HtmlElement>>,
{
    type Product = CounterProduct;

    fn build(self) -> CounterProduct {
        let root = dom::element("div");
        dom::set_attr(&root, "class", "counter");
        dom::set_attr(&root, "data-test", "component-app");

        let label = dom::element("h1");
        dom::set_attr(&label, "data-test", "counter-display");
        dom::append(&label, &dom::text("Counter is: "));

        let count = self.count.build();
        dom::append(&label, count.js());

        let button = dom::element("button");
        dom::set_attr(&button, "data-test", "increment-button");
        dom::append(&button, &dom::text("Increment counter"));

        let onclick = self.onclick.build();
        dom::listen(&button, "click", &onclick);

        dom::append(&root, &label);
        dom::append(&root, &button);

        CounterProduct {
            root,
            count,
            _onclick: onclick,
        }
    }

    fn update(self, p: &mut CounterProduct) {
        self.count.update(&mut p.count);
    }
}

impl Anchor for CounterProduct {
    type Target = Element;

    fn anchor(&self) -> &Element {
        &self.root
    }
}
