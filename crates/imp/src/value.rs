// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`View`] implementations for values that render as text.

use web_sys::Text;

use crate::dom::{self, Anchor};
use crate::View;

/// Product of a value rendered into a [`Text`] node. Keeps the last value
/// written so that updates skip the DOM entirely when nothing changed.
pub struct ValueProduct<T> {
    value: T,
    node: Text,
}

impl<T> Anchor for ValueProduct<T>
where
    T: 'static,
{
    type Target = Text;

    fn anchor(&self) -> &Text {
        &self.node
    }
}

macro_rules! impl_int_view {
    ($($ty:ty),*) => {
        $(
            impl View for $ty {
                type Product = ValueProduct<$ty>;

                fn build(self) -> Self::Product {
                    let node = dom::text(itoa::Buffer::new().format(self));

                    ValueProduct { value: self, node }
                }

                fn update(self, p: &mut Self::Product) {
                    if p.value != self {
                        p.value = self;

                        dom::set_text(&p.node, itoa::Buffer::new().format(self));
                    }
                }
            }
        )*
    };
}

impl_int_view!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
