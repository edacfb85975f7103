// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Imp
//!
//! _Tiny declarative web views._
//!
//! **Imp** renders interfaces out of transient [`View`] values: building a
//! view produces a long-lived *product* that holds the DOM nodes the view
//! created, along with whatever data it needs to update itself. Subsequent
//! renders construct fresh, short-lived views that diff themselves against
//! the product, touching only the DOM nodes whose values actually changed.
//!
//! Views with mutable state are created with [`stateful`](state::stateful):
//! the render function receives a [`Hook`](state::Hook) to read the state,
//! and event handlers created with [`Hook::bind`](state::Hook::bind) get
//! mutable access to it. When a handler reports a change, the view
//! re-renders in place.
//!
//! ```no_run
//! use imp::prelude::*;
//!
//! let view = stateful(0_u32, |count: &Hook<u32>| count.get());
//!
//! imp::runtime::start(view);
//! ```

#[cfg(all(
    target_arch = "wasm32",
    feature = "rlsf",
    not(target_feature = "atomics")
))]
#[global_allocator]
static A: rlsf::SmallGlobalTlsf = rlsf::SmallGlobalTlsf::new();

pub mod dom;
pub mod event;
pub mod runtime;
pub mod state;

mod internal;
mod value;

pub use value::ValueProduct;

/// The prelude module with most commonly used types.
///
/// Intended use is:
/// ```
/// use imp::prelude::*;
/// ```
pub mod prelude {
    pub use crate::event::{Event, MouseEvent};
    pub use crate::runtime::Then;
    pub use crate::state::{stateful, Hook, IntoState, Signal};
    pub use crate::View;
}

use dom::Mountable;

/// Trait that describes types that can be rendered in the DOM.
pub trait View {
    /// The product should contain a DOM reference to this View and
    /// any data it needs to update itself.
    type Product: Mountable;

    /// Build a product that can be mounted in the DOM from this type.
    fn build(self) -> Self::Product;

    /// Update the product and apply changes to the DOM if necessary.
    fn update(self, p: &mut Self::Product);
}
