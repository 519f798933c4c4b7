use std::fmt;

use crate::dispatch::{Arguments, Here, RefHere, There};
use crate::error::Error;
use crate::list::{Cons, Nil, SlotList};
use crate::slot::DisplaySlot;
use crate::typeset::first_duplicate;

/// The declared options of one call, validated to be duplicate-free.
///
/// An `OptionSet` lives on the stack of the call that declares it. Slots
/// written as `&mut local` alias the caller's storage; dispatch through the
/// set updates those locals in place.
pub struct OptionSet<L: SlotList> {
    slots: L,
}

impl<L: SlotList> OptionSet<L> {
    /// Wraps a slot list, rejecting duplicate underlying option types.
    ///
    /// A bare slot and its `Option`-wrapped form count as the same type:
    /// a list holding both is rejected before any dispatch can run.
    pub fn new(slots: L) -> Result<Self, Error> {
        let mut types = Vec::with_capacity(L::LEN);
        L::value_types(&mut types);
        if let Some(type_name) = first_duplicate(&types) {
            return Err(Error::DuplicateSlot { type_name });
        }
        Ok(Self { slots })
    }

    /// Applies user options in caller order.
    ///
    /// The tuple must be free of duplicate types; this is checked before
    /// any slot is written. Each value is moved into its slot; slots the
    /// tuple does not name are left untouched.
    pub fn apply<A, Is>(&mut self, args: A) -> Result<(), Error>
    where
        A: Arguments<L, Is>,
    {
        let mut types = Vec::new();
        A::type_ids(&mut types);
        if let Some(type_name) = first_duplicate(&types) {
            return Err(Error::DuplicateArgument { type_name });
        }
        args.apply_to(&mut self.slots);
        Ok(())
    }

    /// Borrows the slot stored as `S`.
    pub fn get<S, I>(&self) -> &S
    where
        L: Select<S, I>,
    {
        self.slots.select()
    }

    /// Mutably borrows the slot stored as `S`.
    pub fn get_mut<S, I>(&mut self) -> &mut S
    where
        L: Select<S, I>,
    {
        self.slots.select_mut()
    }

    /// Releases the slot list; by-value slots keep their resolved values.
    pub fn into_inner(self) -> L {
        self.slots
    }
}

impl<L: SlotList + fmt::Debug> fmt::Debug for OptionSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionSet").field(&self.slots).finish()
    }
}

/// Type-directed slot lookup inside a slot list.
pub trait Select<S, I> {
    fn select(&self) -> &S;
    fn select_mut(&mut self) -> &mut S;
}

impl<S, T> Select<S, Here> for Cons<S, T> {
    fn select(&self) -> &S {
        &self.0
    }

    fn select_mut(&mut self) -> &mut S {
        &mut self.0
    }
}

impl<'a, S, T> Select<S, RefHere> for Cons<&'a mut S, T> {
    fn select(&self) -> &S {
        &*self.0
    }

    fn select_mut(&mut self) -> &mut S {
        &mut *self.0
    }
}

impl<S, I, H, T> Select<S, There<I>> for Cons<H, T>
where
    T: Select<S, I>,
{
    fn select(&self) -> &S {
        <T as Select<S, I>>::select(&self.1)
    }

    fn select_mut(&mut self) -> &mut S {
        <T as Select<S, I>>::select_mut(&mut self.1)
    }
}

/// Declaration-order rendering of every present slot.
pub trait DisplayList {
    fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DisplayList for Nil {
    fn fmt_list(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<H: DisplaySlot, T: DisplayList> DisplayList for Cons<H, T> {
    fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_slot(f)?;
        self.1.fmt_list(f)
    }
}

impl<L: SlotList + DisplayList> fmt::Display for OptionSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slots.fmt_list(f)
    }
}

/// Builds an [`OptionSet`] from slot expressions, in declaration order.
///
/// Write `&mut local` for a by-reference binding. Evaluates to
/// `Result<OptionSet<_>, Error>`; the error case is a duplicated slot type.
#[macro_export]
macro_rules! slots {
    (@list) => { $crate::Nil };
    (@list $head:expr $(, $rest:expr)*) => {
        $crate::Cons($head, $crate::slots!(@list $($rest),*))
    };
    ($($slot:expr),* $(,)?) => {
        $crate::OptionSet::new($crate::slots!(@list $($slot),*))
    };
}
