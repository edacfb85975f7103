// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Trait for values that can become the initial state of a stateful view.
/// See [`stateful`](crate::state::stateful).
pub trait IntoState: Sized {
    type State: 'static;

    fn init(self) -> Self::State;
}

macro_rules! impl_into_state {
    ($($ty:ty),*) => {
        $(
            impl IntoState for $ty {
                type State = Self;

                fn init(self) -> Self {
                    self
                }
            }
        )*
    };
}

impl_into_state!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    &'static str
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_their_own_state() {
        assert_eq!(7_u32.init(), 7);
        assert_eq!(true.init(), true);
        assert_eq!("tally".init(), "tally");
    }
}
