use std::any::{type_name, TypeId};
use std::marker::PhantomData;

use crate::list::Cons;

/// The head slot stores the user type directly.
pub struct Here;

/// The head slot is a `&mut` binding of the user type.
pub struct RefHere;

/// The head slot is the `Option`-wrapped form of the user type.
pub struct SomeHere;

/// The head slot is a `&mut` binding of the `Option`-wrapped form.
pub struct RefSomeHere;

/// The matching slot lives somewhere in the tail.
pub struct There<I>(PhantomData<I>);

/// Locates the single slot matching user type `U` and overwrites it.
///
/// The index `I` is inferred. A duplicated slot list leaves it ambiguous
/// and an unrecognized user type leaves it without a candidate, so both
/// mistakes fail to compile at the call site.
pub trait Dispatch<U, I> {
    fn dispatch(&mut self, user: U);
}

impl<U, T> Dispatch<U, Here> for Cons<U, T> {
    fn dispatch(&mut self, user: U) {
        self.0 = user;
    }
}

impl<'a, U, T> Dispatch<U, RefHere> for Cons<&'a mut U, T> {
    fn dispatch(&mut self, user: U) {
        *self.0 = user;
    }
}

impl<U, T> Dispatch<U, SomeHere> for Cons<Option<U>, T> {
    fn dispatch(&mut self, user: U) {
        self.0 = Some(user);
    }
}

impl<'a, U, T> Dispatch<U, RefSomeHere> for Cons<&'a mut Option<U>, T> {
    fn dispatch(&mut self, user: U) {
        *self.0 = Some(user);
    }
}

impl<U, I, H, T> Dispatch<U, There<I>> for Cons<H, T>
where
    T: Dispatch<U, I>,
{
    fn dispatch(&mut self, user: U) {
        <T as Dispatch<U, I>>::dispatch(&mut self.1, user);
    }
}

/// A tuple of user options, applied to a slot list in caller order.
pub trait Arguments<L, Is> {
    /// Type identity and name of every element, in order.
    fn type_ids(ids: &mut Vec<(TypeId, &'static str)>);

    fn apply_to(self, slots: &mut L);
}

impl<L> Arguments<L, ()> for () {
    fn type_ids(_ids: &mut Vec<(TypeId, &'static str)>) {}

    fn apply_to(self, _slots: &mut L) {}
}

macro_rules! impl_arguments {
    ($(($user:ident, $index:ident, $field:tt)),+) => {
        impl<L, $($user: 'static, $index),+> Arguments<L, ($($index,)+)> for ($($user,)+)
        where
            L: Sized $(+ Dispatch<$user, $index>)+,
        {
            fn type_ids(ids: &mut Vec<(TypeId, &'static str)>) {
                $( ids.push((TypeId::of::<$user>(), type_name::<$user>())); )+
            }

            fn apply_to(self, slots: &mut L) {
                $( <L as Dispatch<$user, $index>>::dispatch(slots, self.$field); )+
            }
        }
    };
}

impl_arguments!((U0, I0, 0));
impl_arguments!((U0, I0, 0), (U1, I1, 1));
impl_arguments!((U0, I0, 0), (U1, I1, 1), (U2, I2, 2));
impl_arguments!((U0, I0, 0), (U1, I1, 1), (U2, I2, 2), (U3, I3, 3));
impl_arguments!((U0, I0, 0), (U1, I1, 1), (U2, I2, 2), (U3, I3, 3), (U4, I4, 4));
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6),
    (U7, I7, 7)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6),
    (U7, I7, 7),
    (U8, I8, 8)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6),
    (U7, I7, 7),
    (U8, I8, 8),
    (U9, I9, 9)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6),
    (U7, I7, 7),
    (U8, I8, 8),
    (U9, I9, 9),
    (U10, I10, 10)
);
impl_arguments!(
    (U0, I0, 0),
    (U1, I1, 1),
    (U2, I2, 2),
    (U3, I3, 3),
    (U4, I4, 4),
    (U5, I5, 5),
    (U6, I6, 6),
    (U7, I7, 7),
    (U8, I8, 8),
    (U9, I9, 9),
    (U10, I10, 10),
    (U11, I11, 11)
);
